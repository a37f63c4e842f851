/// Data masking: XOR a mask pattern over data and remainder modules
use crate::models::{MaskPattern, Symbol};

/// Invert every data/blank module selected by `mask_pattern`.
///
/// Function patterns, format and version information are left untouched.
pub fn apply_mask(symbol: &mut Symbol, mask_pattern: MaskPattern) {
    let size = symbol.size();
    for y in 0..size {
        for x in 0..size {
            if symbol.role(x, y).is_maskable() && mask_pattern.is_masked(y, x) {
                symbol.toggle(x, y);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::layout::SymbolLayout;
    use crate::models::{ModuleRole, Version};

    #[test]
    fn test_apply_mask_only_touches_data() {
        let layout = SymbolLayout::new(Version::new(2).unwrap());
        let mut symbol = layout.symbol().clone();
        layout.place_codewords(&mut symbol, &[0u8; 4]);
        let before = symbol.clone();

        apply_mask(&mut symbol, MaskPattern::Pattern0);
        for y in 0..symbol.size() {
            for x in 0..symbol.size() {
                let role = symbol.role(x, y);
                let flipped = symbol.pixel(x as i32, y as i32) != before.pixel(x as i32, y as i32);
                if role.is_maskable() {
                    assert_eq!(flipped, (x + y) % 2 == 0, "({x}, {y})");
                } else {
                    assert!(!flipped, "function module ({x}, {y}) changed");
                }
            }
        }
    }

    #[test]
    fn test_mask_is_an_involution() {
        let layout = SymbolLayout::new(Version::new(1).unwrap());
        let mut symbol = layout.symbol().clone();
        layout.place_codewords(&mut symbol, &[0x5A, 0xC3, 0x0F]);
        let original = symbol.clone();
        for mask in MaskPattern::ALL {
            apply_mask(&mut symbol, mask);
            apply_mask(&mut symbol, mask);
            assert_eq!(symbol, original);
        }
        assert_eq!(symbol.role(20, 20), ModuleRole::Data);
    }
}
