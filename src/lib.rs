//! qr_gen - QR Code symbol encoder
//!
//! A pure Rust implementation of the ISO/IEC 18004 QR Code encoder:
//! mode selection, Reed-Solomon error correction, function pattern
//! layout and automatic mask selection.
//!
//! ```no_run
//! use qr_gen::{ECLevel, encode};
//!
//! let symbol = encode("HELLO WORLD", ECLevel::Q, 0, None).unwrap_or_default();
//! for y in 0..symbol.size() as i32 {
//!     let row: String = (0..symbol.size() as i32)
//!         .map(|x| if symbol.pixel(x, y) { '#' } else { ' ' })
//!         .collect();
//!     println!("{row}");
//! }
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Encoder options and environment defaults
pub mod config;
/// QR code encoding modules (field arithmetic, error correction, layout, masking)
pub mod encoder;
/// Error type shared by every encoding stage
pub mod error;
/// Core data structures (Symbol, BitMatrix, Version, etc.)
pub mod models;
/// Image and text output for encoded symbols
pub mod render;

pub use config::EncodeOptions;
pub use encoder::qr_encoder::QrEncoder;
pub use error::QrError;
pub use models::{BitMatrix, ECLevel, MaskPattern, ModuleRole, Symbol, Version};

/// Encode `text` into a QR symbol
///
/// # Arguments
/// * `text` - Input text; every character must be in ISO-8859-1
/// * `ec_level` - Error correction level
/// * `version_hint` - Minimum version (1-40), or 0 for the smallest that fits
/// * `mask_hint` - Mask id (0-7), or `None` to pick the lowest-penalty mask
///
/// # Returns
/// The finished symbol, or an error. `unwrap_or_default()` maps failures
/// to the empty (size 0) symbol.
pub fn encode(
    text: &str,
    ec_level: ECLevel,
    version_hint: u8,
    mask_hint: Option<u8>,
) -> error::Result<Symbol> {
    let options = EncodeOptions::new(ec_level)
        .with_version_hint(version_hint)
        .with_mask_hint(mask_hint);
    QrEncoder::new(options).encode(text)
}
