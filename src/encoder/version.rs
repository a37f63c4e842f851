/// Version information for QR codes v7+
use crate::encoder::bch::BchEncoder;
use crate::error::Result;
use crate::models::Version;

/// Version info is 18 bits (6 data + 12 ECC) for versions 7-40
pub struct VersionInfo;

impl VersionInfo {
    /// 18-bit version word, `None` below version 7
    pub fn bits(version: Version) -> Result<Option<u32>> {
        if !version.has_version_info() {
            return Ok(None);
        }
        BchEncoder::encode(version.number() as u32, BchEncoder::VERSION_GENERATOR).map(Some)
    }

    /// Coordinates (x, y) of both copies of bit `i` (0..18).
    ///
    /// The bottom-left block is 6 wide and 3 tall; the top-right block is
    /// its transpose.
    pub fn positions(size: usize, i: usize) -> [(usize, usize); 2] {
        let a = i / 3;
        let b = size - 11 + i % 3;
        [(a, b), (b, a)]
    }
}
