//! QR code encoding modules
//!
//! This module contains the full encoding pipeline:
//! - Finite field and polynomial arithmetic (GF(256), BCH)
//! - Data mode encoding and segment assembly
//! - Reed-Solomon error correction and block interleaving
//! - Function pattern layout, masking and penalty scoring

/// BCH codes for format and version info
pub mod bch;
/// MSB-first bit accumulator
pub mod bit_buffer;
/// Padding, block split and interleaving
pub mod blocks;
/// Format information (EC level and mask)
pub mod format;
/// GF(256) arithmetic over a chosen reducing polynomial
pub mod gf256;
/// Function patterns and the codeword placement path
pub mod layout;
/// Data masking
pub mod mask;
/// Data mode encoders (numeric, alphanumeric, byte)
pub mod modes;
pub mod penalty;
/// Main QR encoder that orchestrates the encoding pipeline
pub mod qr_encoder;
/// Reed-Solomon error correction
pub mod reed_solomon;
pub mod segment;
/// QR specification tables (capacity, EC blocks, alignment)
pub mod tables;
/// Version information (versions 7-40)
pub mod version;
