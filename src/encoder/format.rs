/// Format information: EC level and mask id protected by BCH(15,5)
use crate::encoder::bch::BchEncoder;
use crate::error::Result;
use crate::models::{ECLevel, MaskPattern};

/// XOR pattern applied so that no valid format word is all zeros
const FORMAT_MASK: u16 = 0b101_0100_0001_0010;

/// Format info is 15 bits (5 data + 10 ECC)
/// Written twice, around the top-left finder and split between the other two
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatInfo {
    /// Error correction level
    pub ec_level: ECLevel,
    /// Mask applied to the data region
    pub mask_pattern: MaskPattern,
}

impl FormatInfo {
    /// Pair an EC level with a mask
    pub fn new(ec_level: ECLevel, mask_pattern: MaskPattern) -> Self {
        Self {
            ec_level,
            mask_pattern,
        }
    }

    /// Masked 15-bit format word
    pub fn bits(&self) -> Result<u16> {
        let data = ((self.ec_level.format_bits() << 3) | self.mask_pattern.id()) as u32;
        let code = BchEncoder::encode(data, BchEncoder::FORMAT_GENERATOR)?;
        Ok(code as u16 ^ FORMAT_MASK)
    }

    /// Module coordinates (x, y) of both copies of each bit, bit 0 first.
    pub fn positions(size: usize) -> [[(usize, usize); 2]; 15] {
        let mut pos = [[(0, 0); 2]; 15];
        for (i, slot) in pos.iter_mut().enumerate() {
            let first = match i {
                0..=5 => (8, i),
                6 => (8, 7),
                7 => (8, 8),
                8 => (7, 8),
                _ => (14 - i, 8),
            };
            let second = match i {
                0..=7 => (size - 1 - i, 8),
                _ => (8, size - 15 + i),
            };
            *slot = [first, second];
        }
        pos
    }
}
