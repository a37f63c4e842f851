//! Encoder options and process-wide defaults read from the environment.
//!
//! Environment variables are read once, on first use:
//! - `QR_EC_LEVEL`: default error correction level (L, M, Q or H; default M)
//! - `QR_PARALLEL_MASKS`: evaluate the eight masks in parallel (0 or 1; default 1)
//! - `QR_MIN_VERSION`: default version hint (0..=40; default 0)
//!
//! Unparseable values fall back to the defaults.

use std::sync::OnceLock;

use crate::models::ECLevel;

fn parse_env_u8(name: &str, default: u8) -> u8 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .unwrap_or(default)
}

fn parse_env_bool_u8(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .map(|v| v != 0)
        .unwrap_or(default)
}

fn parse_env_ec_level(name: &str, default: ECLevel) -> ECLevel {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<ECLevel>().ok())
        .unwrap_or(default)
}

static DEFAULT_EC_LEVEL: OnceLock<ECLevel> = OnceLock::new();

pub(crate) fn default_ec_level() -> ECLevel {
    *DEFAULT_EC_LEVEL.get_or_init(|| parse_env_ec_level("QR_EC_LEVEL", ECLevel::M))
}

static PARALLEL_MASKS: OnceLock<bool> = OnceLock::new();

pub(crate) fn parallel_masks() -> bool {
    *PARALLEL_MASKS.get_or_init(|| parse_env_bool_u8("QR_PARALLEL_MASKS", true))
}

static MIN_VERSION: OnceLock<u8> = OnceLock::new();

pub(crate) fn min_version() -> u8 {
    *MIN_VERSION.get_or_init(|| {
        let v = parse_env_u8("QR_MIN_VERSION", 0);
        if v > 40 { 0 } else { v }
    })
}

/// Parameters of one encode call.
///
/// `version_hint` 0 means "smallest fitting version"; a larger hint raises
/// the version, a smaller one is ignored. `mask_hint` `None` selects the
/// mask with the lowest penalty. Both hints are validated when encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Error correction level
    pub ec_level: ECLevel,
    /// Minimum version, 0 for automatic
    pub version_hint: u8,
    /// Forced mask id (0..=7)
    pub mask_hint: Option<u8>,
    /// Run mask trials on the rayon thread pool
    pub parallel_masks: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            ec_level: default_ec_level(),
            version_hint: min_version(),
            mask_hint: None,
            parallel_masks: parallel_masks(),
        }
    }
}

impl EncodeOptions {
    /// Defaults with the given EC level
    pub fn new(ec_level: ECLevel) -> Self {
        Self {
            ec_level,
            ..Self::default()
        }
    }

    /// Set the error correction level
    pub fn with_ec_level(mut self, ec_level: ECLevel) -> Self {
        self.ec_level = ec_level;
        self
    }

    /// Set the minimum version (0 for automatic)
    pub fn with_version_hint(mut self, version: u8) -> Self {
        self.version_hint = version;
        self
    }

    /// Force a mask id, or `None` for automatic selection
    pub fn with_mask_hint(mut self, mask: Option<u8>) -> Self {
        self.mask_hint = mask;
        self
    }

    /// Enable or disable parallel mask evaluation
    pub fn with_parallel_masks(mut self, parallel: bool) -> Self {
        self.parallel_masks = parallel;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let options = EncodeOptions::new(ECLevel::H)
            .with_version_hint(7)
            .with_mask_hint(Some(3))
            .with_parallel_masks(false);
        assert_eq!(options.ec_level, ECLevel::H);
        assert_eq!(options.version_hint, 7);
        assert_eq!(options.mask_hint, Some(3));
        assert!(!options.parallel_masks);
        assert_eq!(options.with_ec_level(ECLevel::L).ec_level, ECLevel::L);
    }

    #[test]
    fn test_env_parsers_fall_back() {
        assert_eq!(parse_env_u8("QR_GEN_TEST_UNSET_VARIABLE", 9), 9);
        assert!(parse_env_bool_u8("QR_GEN_TEST_UNSET_VARIABLE", true));
        assert_eq!(
            parse_env_ec_level("QR_GEN_TEST_UNSET_VARIABLE", ECLevel::Q),
            ECLevel::Q
        );
    }

    #[test]
    fn test_min_version_in_range() {
        assert!(min_version() <= 40);
    }
}
