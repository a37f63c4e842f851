//! Orchestration: segment, version choice, codewords, mask selection.

use rayon::prelude::*;
use tracing::{debug, debug_span, trace};

use super::blocks::{interleave, pad_to_capacity};
use super::format::FormatInfo;
use super::layout::SymbolLayout;
use super::mask::apply_mask;
use super::penalty::{self, Penalty};
use super::reed_solomon::GeneratorCache;
use super::segment::Segment;
use super::tables::{data_bits, ec_blocks};
use crate::config::EncodeOptions;
use crate::error::{QrError, Result};
use crate::models::{ECLevel, MaskPattern, Symbol, Version};

/// Final symbol for `codewords` under one mask.
///
/// Pure with respect to `layout`: every call starts from a fresh copy of
/// the pristine symbol.
pub fn render(
    layout: &SymbolLayout,
    codewords: &[u8],
    ec_level: ECLevel,
    mask: MaskPattern,
) -> Result<Symbol> {
    let mut symbol = layout.with_format(&FormatInfo::new(ec_level, mask))?;
    layout.place_codewords(&mut symbol, codewords);
    apply_mask(&mut symbol, mask);
    Ok(symbol)
}

/// QR encoder bound to a set of options and a generator cache.
#[derive(Debug, Clone, Copy)]
pub struct QrEncoder<'c> {
    options: EncodeOptions,
    cache: &'c GeneratorCache,
}

impl QrEncoder<'static> {
    /// Encoder using the process-wide generator cache
    pub fn new(options: EncodeOptions) -> Self {
        Self::with_cache(options, GeneratorCache::global())
    }
}

impl Default for QrEncoder<'static> {
    fn default() -> Self {
        Self::new(EncodeOptions::default())
    }
}

impl<'c> QrEncoder<'c> {
    /// Encoder drawing Reed-Solomon generators from `cache`
    pub fn with_cache(options: EncodeOptions, cache: &'c GeneratorCache) -> Self {
        Self { options, cache }
    }

    /// Options in effect
    pub fn options(&self) -> &EncodeOptions {
        &self.options
    }

    /// Encode `text` into a complete, masked symbol.
    pub fn encode(&self, text: &str) -> Result<Symbol> {
        let _span = debug_span!("encode", chars = text.chars().count()).entered();
        let ec_level = self.options.ec_level;
        if self.options.version_hint > Version::MAX.number() {
            return Err(QrError::InvalidVersion(self.options.version_hint));
        }
        let mask_hint = self
            .options
            .mask_hint
            .map(MaskPattern::try_from)
            .transpose()?;

        let segment = Segment::new(text)?;
        let min = segment.min_version(ec_level)?;
        let version = match Version::new(self.options.version_hint) {
            Ok(hint) if hint > min => hint,
            _ => min,
        };
        let blocks = ec_blocks(version, ec_level);
        debug!(
            mode = ?segment.mode(),
            min_version = min.number(),
            version = version.number(),
            blocks = blocks.num_blocks(),
            ec_per_block = blocks.ec_per_block(),
            "version selected"
        );

        let bits = segment.to_bits(version, ec_level);
        let data = pad_to_capacity(bits, data_bits(version, ec_level));
        let codewords = interleave(&data, &blocks, self.cache);
        let layout = SymbolLayout::new(version);

        match mask_hint {
            Some(mask) => render(&layout, &codewords, ec_level, mask),
            None => self.best_mask(&layout, &codewords, ec_level),
        }
    }

    /// Render all eight masks and keep the lowest penalty; ties go to the
    /// lower mask id.
    fn best_mask(&self, layout: &SymbolLayout, codewords: &[u8], ec_level: ECLevel) -> Result<Symbol> {
        let trial = |mask: MaskPattern| -> Result<(MaskPattern, Penalty, Symbol)> {
            let symbol = render(layout, codewords, ec_level, mask)?;
            let penalty = penalty::evaluate(symbol.modules());
            trace!(
                mask = mask.id(),
                n1 = penalty.n1,
                n2 = penalty.n2,
                n3 = penalty.n3,
                n4 = penalty.n4,
                total = penalty.total(),
                "mask trial"
            );
            Ok((mask, penalty, symbol))
        };

        let trials: Vec<_> = if self.options.parallel_masks {
            MaskPattern::ALL
                .par_iter()
                .map(|&mask| trial(mask))
                .collect::<Result<_>>()?
        } else {
            MaskPattern::ALL
                .iter()
                .map(|&mask| trial(mask))
                .collect::<Result<_>>()?
        };

        let best = trials
            .into_iter()
            .min_by_key(|(mask, penalty, _)| (penalty.total(), mask.id()));
        // MaskPattern::ALL is never empty
        let Some((mask, penalty, symbol)) = best else {
            return Ok(Symbol::default());
        };
        debug!(mask = mask.id(), penalty = penalty.total(), "mask selected");
        Ok(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(ec_level: ECLevel) -> EncodeOptions {
        EncodeOptions::new(ec_level)
            .with_version_hint(0)
            .with_mask_hint(None)
            .with_parallel_masks(false)
    }

    fn penalties(text: &str, ec_level: ECLevel) -> Vec<u32> {
        MaskPattern::ALL
            .iter()
            .map(|&m| {
                let opts = options(ec_level).with_mask_hint(Some(m.id()));
                let symbol = QrEncoder::new(opts).encode(text).unwrap();
                assert_eq!(symbol.mask(), Some(m));
                penalty::evaluate(symbol.modules()).total()
            })
            .collect()
    }

    #[test]
    fn test_hello_world_mask_selection() {
        assert_eq!(
            penalties("HELLO WORLD", ECLevel::Q),
            vec![307, 430, 466, 441, 539, 516, 314, 518]
        );
        let symbol = QrEncoder::new(options(ECLevel::Q)).encode("HELLO WORLD").unwrap();
        assert_eq!(symbol.version().map(|v| v.number()), Some(1));
        assert_eq!(symbol.mask(), Some(MaskPattern::Pattern0));
        assert_eq!(symbol.ec_level(), Some(ECLevel::Q));
        assert_eq!(symbol.dark_module_count(), 218);
    }

    #[test]
    fn test_known_mask_choices() {
        let long = "A".repeat(200);
        let cases: [(&str, ECLevel, u8, u8, usize); 4] = [
            ("01234567", ECLevel::M, 1, 0, 220),
            ("Hello, world!", ECLevel::L, 1, 2, 234),
            ("https://example.com", ECLevel::M, 2, 2, 324),
            (long.as_str(), ECLevel::H, 11, 2, 1902),
        ];
        for (text, ec_level, version, mask, dark) in cases {
            let symbol = QrEncoder::new(options(ec_level)).encode(text).unwrap();
            assert_eq!(symbol.version().map(|v| v.number()), Some(version), "{text}");
            assert_eq!(symbol.mask().map(|m| m.id()), Some(mask), "{text}");
            assert_eq!(symbol.dark_module_count(), dark, "{text}");
        }
        assert_eq!(
            penalties("Hello, world!", ECLevel::L),
            vec![474, 511, 265, 291, 394, 350, 410, 362]
        );
    }

    #[test]
    fn test_parallel_matches_sequential() {
        for text in ["HELLO WORLD", "https://example.com", "0123456789012345678901234567890"] {
            let seq = QrEncoder::new(options(ECLevel::M)).encode(text).unwrap();
            let par = QrEncoder::new(options(ECLevel::M).with_parallel_masks(true))
                .encode(text)
                .unwrap();
            assert_eq!(seq, par);
        }
    }

    #[test]
    fn test_version_hint() {
        let bumped = QrEncoder::new(options(ECLevel::L).with_version_hint(5))
            .encode("HI")
            .unwrap();
        assert_eq!(bumped.size(), 37);
        // Smaller than required: ignored
        let text = "a".repeat(100);
        let kept = QrEncoder::new(options(ECLevel::L).with_version_hint(1))
            .encode(&text)
            .unwrap();
        assert_eq!(kept.version().map(|v| v.number()), Some(5));
        assert!(matches!(
            QrEncoder::new(options(ECLevel::L).with_version_hint(41)).encode("HI"),
            Err(QrError::InvalidVersion(41))
        ));
    }

    #[test]
    fn test_invalid_mask_hint() {
        assert!(matches!(
            QrEncoder::new(options(ECLevel::L).with_mask_hint(Some(8))).encode("HI"),
            Err(QrError::InvalidMask(8))
        ));
    }

    #[test]
    fn test_render_is_pure() {
        let layout = SymbolLayout::new(Version::new(1).unwrap());
        let pristine = layout.symbol().clone();
        let codewords = [0xA5u8; 26];
        let a = render(&layout, &codewords, ECLevel::L, MaskPattern::Pattern3).unwrap();
        let b = render(&layout, &codewords, ECLevel::L, MaskPattern::Pattern3).unwrap();
        assert_eq!(a, b);
        assert_eq!(layout.symbol(), &pristine);
    }

    #[test]
    fn test_private_cache() {
        let cache = GeneratorCache::new();
        let encoder = QrEncoder::with_cache(options(ECLevel::H), &cache);
        let symbol = encoder.encode("CACHE").unwrap();
        assert_eq!(symbol.size(), 21);
        assert_eq!(cache.len(), 1);
    }
}
