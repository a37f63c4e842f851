//! Error type shared by every encoding stage.

use thiserror::Error;

use crate::models::ECLevel;

/// Errors produced while building a QR symbol.
#[derive(Debug, Error)]
pub enum QrError {
    /// The input text was empty
    #[error("cannot encode empty input")]
    EmptyInput,

    /// A character is outside every supported mode (ISO-8859-1 at most)
    #[error("unsupported character {ch:?} at position {position}")]
    UnsupportedCharacter {
        /// Offending character
        ch: char,
        /// Character index within the input
        position: usize,
    },

    /// The encoded segment does not fit in a version 40 symbol
    #[error("{bits} bits exceed the capacity of version 40 at level {ec_level:?}")]
    CapacityExceeded {
        /// Bits required by mode header, count field and payload
        bits: usize,
        /// Requested error correction level
        ec_level: ECLevel,
    },

    /// Version outside 1..=40 (or a hint outside 0..=40)
    #[error("invalid version {0}, expected 1..=40")]
    InvalidVersion(u8),

    /// Mask id outside 0..=7
    #[error("invalid mask pattern {0}, expected 0..=7")]
    InvalidMask(u8),

    /// Binary polynomial reduced modulo zero
    #[error("binary polynomial division by zero")]
    ZeroDivisor,

    /// GF(256) element divided by zero
    #[error("finite field division by zero")]
    FieldDivisionByZero,

    /// Reducing polynomial without a known primitive element
    #[error("unsupported reducing polynomial {0:#05x}")]
    UnsupportedReducingPolynomial(u16),

    /// Writing a rendered image failed
    #[error("image output failed: {0}")]
    Image(#[from] image::ImageError),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, QrError>;
