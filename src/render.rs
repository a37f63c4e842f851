//! Output helpers: grayscale images and terminal text.
//!
//! Every output surrounds the symbol with a light quiet zone of
//! `quiet_zone` modules (4 is the minimum the standard asks for).

use std::path::Path;

use image::{GrayImage, ImageFormat, Luma};

use crate::error::Result;
use crate::models::Symbol;

const DARK: Luma<u8> = Luma([0]);
const LIGHT: Luma<u8> = Luma([255]);

/// Recommended quiet zone width in modules
pub const DEFAULT_QUIET_ZONE: u32 = 4;

/// Rasterize `symbol` with `scale` pixels per module.
///
/// The empty symbol renders as a quiet-zone-only square.
pub fn to_luma_image(symbol: &Symbol, scale: u32, quiet_zone: u32) -> GrayImage {
    let scale = scale.max(1);
    let modules = symbol.size() as u32 + 2 * quiet_zone;
    let side = modules * scale;
    GrayImage::from_fn(side, side, |px, py| {
        let x = (px / scale) as i32 - quiet_zone as i32;
        let y = (py / scale) as i32 - quiet_zone as i32;
        if symbol.pixel(x, y) { DARK } else { LIGHT }
    })
}

/// Write `symbol` as a PNG file, whatever the extension of `path`.
pub fn save_png(symbol: &Symbol, path: impl AsRef<Path>, scale: u32, quiet_zone: u32) -> Result<()> {
    to_luma_image(symbol, scale, quiet_zone).save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Two characters per module, one line per row; dark modules are full
/// blocks.
pub fn to_text(symbol: &Symbol, quiet_zone: u32) -> String {
    let q = quiet_zone as i32;
    let size = symbol.size() as i32;
    let mut out = String::new();
    for y in -q..size + q {
        for x in -q..size + q {
            out.push_str(if symbol.pixel(x, y) { "\u{2588}\u{2588}" } else { "  " });
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode;
    use crate::models::ECLevel;

    #[test]
    fn test_image_dimensions() {
        let symbol = encode("HELLO WORLD", ECLevel::Q, 0, None).unwrap();
        let img = to_luma_image(&symbol, 3, 4);
        assert_eq!(img.dimensions(), ((21 + 8) * 3, (21 + 8) * 3));
        // Quiet zone corner, then the finder's top-left module
        assert_eq!(img.get_pixel(0, 0), &LIGHT);
        assert_eq!(img.get_pixel(12, 12), &DARK);
        assert_eq!(img.get_pixel(14, 14), &DARK);
        // Finder ring is light one module in
        assert_eq!(img.get_pixel(15, 15), &LIGHT);
    }

    #[test]
    fn test_image_matches_pixels() {
        let symbol = encode("https://example.com", ECLevel::M, 0, None).unwrap();
        let img = to_luma_image(&symbol, 1, 0);
        let n = symbol.size() as u32;
        assert_eq!(img.dimensions(), (n, n));
        for y in 0..n {
            for x in 0..n {
                let dark = img.get_pixel(x, y)[0] == 0;
                assert_eq!(dark, symbol.pixel(x as i32, y as i32));
            }
        }
    }

    #[test]
    fn test_text_rendering() {
        let symbol = Symbol::pristine(1);
        let text = to_text(&symbol, 1);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 23);
        assert!(lines.iter().all(|l| l.chars().count() == 46));
        assert!(lines[0].chars().all(|c| c == ' '));
        assert!(lines[1].starts_with("  \u{2588}\u{2588}"));
    }

    #[test]
    fn test_empty_symbol_renders_blank() {
        let img = to_luma_image(&Symbol::default(), 2, 4);
        assert_eq!(img.dimensions(), (16, 16));
        assert!(img.pixels().all(|p| *p == LIGHT));
        assert_eq!(to_text(&Symbol::default(), 0), "");
    }

    #[test]
    fn test_save_png() {
        let symbol = encode("01234567", ECLevel::M, 0, None).unwrap();
        let path = std::env::temp_dir().join("qr_gen_render_test.png");
        save_png(&symbol, &path, 2, 4).unwrap();
        let loaded = image::open(&path).unwrap().to_luma8();
        assert_eq!(loaded, to_luma_image(&symbol, 2, 4));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_save_png_ignores_extension() {
        let symbol = encode("01234567", ECLevel::M, 0, None).unwrap();
        let path = std::env::temp_dir().join("qr_gen_render_test.jpg");
        save_png(&symbol, &path, 1, 0).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
        let loaded = image::load_from_memory(&bytes).unwrap().to_luma8();
        assert_eq!(loaded, to_luma_image(&symbol, 1, 0));
    }
}
