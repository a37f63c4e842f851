//! Single-segment data encoding: mode selection, payload, header and
//! terminator.

use tracing::debug;

use super::bit_buffer::BitBuffer;
use super::modes::Mode;
use super::modes::alphanumeric::AlphanumericEncoder;
use super::modes::byte::ByteEncoder;
use super::modes::numeric::NumericEncoder;
use super::tables::data_bits;
use crate::error::{QrError, Result};
use crate::models::{ECLevel, Version};

/// Maximum terminator length in bits
const TERMINATOR_BITS: usize = 4;

/// One encoded segment, independent of the target version.
///
/// The character-count field width depends on the version, so the header
/// is only produced by [`Segment::to_bits`] once the version is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    mode: Mode,
    char_count: usize,
    payload: BitBuffer,
}

impl Segment {
    /// Select the mode for `text` and encode its payload.
    pub fn new(text: &str) -> Result<Self> {
        let mode = Mode::select(text)?;
        let char_count = text.chars().count();
        let mut payload = BitBuffer::new();
        match mode {
            Mode::Numeric => NumericEncoder::encode(text, &mut payload),
            Mode::Alphanumeric => AlphanumericEncoder::encode(text, &mut payload),
            Mode::Byte => ByteEncoder::encode(text, &mut payload),
        }
        debug!(?mode, char_count, payload_bits = payload.bit_count(), "segment encoded");
        Ok(Self {
            mode,
            char_count,
            payload,
        })
    }

    /// Selected mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Number of input characters
    pub fn char_count(&self) -> usize {
        self.char_count
    }

    /// Payload bits without header
    pub fn payload(&self) -> &BitBuffer {
        &self.payload
    }

    /// Header plus payload length at `version`
    pub fn bit_length(&self, version: Version) -> usize {
        4 + self.mode.char_count_bits(version) + self.payload.bit_count()
    }

    /// Whether the count field at `version` can hold the character count
    fn count_fits(&self, version: Version) -> bool {
        self.char_count < 1 << self.mode.char_count_bits(version)
    }

    /// Smallest version whose capacity holds the whole segment.
    pub fn min_version(&self, ec_level: ECLevel) -> Result<Version> {
        Version::all()
            .find(|&v| self.count_fits(v) && self.bit_length(v) <= data_bits(v, ec_level))
            .ok_or(QrError::CapacityExceeded {
                bits: self.bit_length(Version::MAX),
                ec_level,
            })
    }

    /// Mode indicator, count field, payload and terminator for `version`.
    ///
    /// The terminator is up to four zero bits, cut short when the symbol
    /// capacity is reached.
    pub fn to_bits(&self, version: Version, ec_level: ECLevel) -> BitBuffer {
        let capacity = data_bits(version, ec_level);
        let mut bits = BitBuffer::with_capacity(capacity);
        bits.append_bits(4, self.mode.indicator());
        bits.append_bits(self.mode.char_count_bits(version), self.char_count as u32);
        bits.append(&self.payload);
        let terminator = TERMINATOR_BITS.min(capacity.saturating_sub(bits.bit_count()));
        bits.append_zeros(terminator);
        bits
    }
}
