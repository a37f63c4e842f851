//! Function-pattern layout and data path for one QR version.
//!
//! A [`SymbolLayout`] is built once per version. It holds the pristine
//! symbol (finder, separator, timing, alignment, version information, the
//! dark module and a light, reserved format area) and the ordered list of
//! modules left over for codewords.

use crate::encoder::format::FormatInfo;
use crate::encoder::tables::alignment_positions;
use crate::encoder::version::VersionInfo;
use crate::error::Result;
use crate::models::{ModuleRole, Symbol, Version};

/// Static structure of a symbol plus its codeword placement order.
#[derive(Debug, Clone)]
pub struct SymbolLayout {
    symbol: Symbol,
    path: Vec<(usize, usize)>,
}

impl SymbolLayout {
    /// Draw every function pattern for `version` and trace the data path.
    pub fn new(version: Version) -> Self {
        let size = version.size();
        let mut symbol = Symbol::blank(version);

        let far = size as i32 - 7;
        for (x, y) in [(0, 0), (far, 0), (0, far)] {
            draw_finder(&mut symbol, x, y);
        }

        for t in 8..size - 8 {
            let dark = t % 2 == 0;
            symbol.put(t, 6, dark, ModuleRole::TimingPattern);
            symbol.put(6, t, dark, ModuleRole::TimingPattern);
        }

        draw_alignment_patterns(&mut symbol, version);

        // Cannot fail: the generator is a nonzero constant
        if let Ok(Some(bits)) = VersionInfo::bits(version) {
            for i in 0..18 {
                let dark = (bits >> i) & 1 == 1;
                for (x, y) in VersionInfo::positions(size, i) {
                    symbol.put(x, y, dark, ModuleRole::VersionInformation);
                }
            }
        }

        for pair in FormatInfo::positions(size) {
            for (x, y) in pair {
                symbol.put(x, y, false, ModuleRole::FormatInformation);
            }
        }
        symbol.put(8, size - 8, true, ModuleRole::FormatInformation);

        let path = zigzag_path(size, |x, y| symbol.role(x, y) == ModuleRole::Unset);
        Self { symbol, path }
    }

    /// Version this layout was built for
    pub fn version(&self) -> Version {
        // Built from a validated version, so always present
        self.symbol.version().unwrap_or(Version::MIN)
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.symbol.size()
    }

    /// Modules available for codeword bits, in placement order
    pub fn data_path(&self) -> &[(usize, usize)] {
        &self.path
    }

    /// Number of data modules (codeword bits plus remainder bits)
    pub fn capacity_bits(&self) -> usize {
        self.path.len()
    }

    /// Pristine symbol with no data written
    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Consume the layout, keeping the pristine symbol
    pub fn into_symbol(self) -> Symbol {
        self.symbol
    }

    /// Copy of the pristine symbol with the format information for
    /// `info` written into both reserved strips.
    pub(crate) fn with_format(&self, info: &FormatInfo) -> Result<Symbol> {
        let bits = info.bits()?;
        let mut symbol = self.symbol.clone();
        for (i, pair) in FormatInfo::positions(self.size()).into_iter().enumerate() {
            let dark = (bits >> i) & 1 == 1;
            for (x, y) in pair {
                symbol.put(x, y, dark, ModuleRole::FormatInformation);
            }
        }
        symbol.set_format(info.ec_level, info.mask_pattern);
        Ok(symbol)
    }

    /// Write `codewords` MSB first along the data path (unmasked).
    ///
    /// Path positions past the last codeword become light `Blank` modules.
    pub(crate) fn place_codewords(&self, symbol: &mut Symbol, codewords: &[u8]) {
        let bit_count = codewords.len() * 8;
        for (i, &(x, y)) in self.path.iter().enumerate() {
            if i < bit_count {
                let dark = (codewords[i / 8] >> (7 - i % 8)) & 1 == 1;
                symbol.put(x, y, dark, ModuleRole::Data);
            } else {
                symbol.put(x, y, false, ModuleRole::Blank);
            }
        }
    }
}

/// Outline of a `w` x `h` rectangle; parts outside the symbol are dropped.
fn draw_rect(symbol: &mut Symbol, x: i32, y: i32, w: i32, h: i32, dark: bool, role: ModuleRole) {
    let mut put = |px: i32, py: i32| {
        if px >= 0 && py >= 0 {
            symbol.put(px as usize, py as usize, dark, role);
        }
    };
    for i in 0..w {
        put(x + i, y);
        put(x + i, y + h - 1);
    }
    for i in 1..h - 1 {
        put(x, y + i);
        put(x + w - 1, y + i);
    }
}

/// Finder with top-left corner (x, y) and its one-module separator.
fn draw_finder(symbol: &mut Symbol, x: i32, y: i32) {
    draw_rect(symbol, x - 1, y - 1, 9, 9, false, ModuleRole::Separator);
    draw_rect(symbol, x, y, 7, 7, true, ModuleRole::FinderPattern);
    draw_rect(symbol, x + 1, y + 1, 5, 5, false, ModuleRole::FinderPattern);
    draw_rect(symbol, x + 2, y + 2, 3, 3, true, ModuleRole::FinderPattern);
    symbol.put(x as usize + 3, y as usize + 3, true, ModuleRole::FinderPattern);
}

fn draw_alignment_patterns(symbol: &mut Symbol, version: Version) {
    let centers = alignment_positions(version);
    let last = centers.len().saturating_sub(1);
    for (yi, &cy) in centers.iter().enumerate() {
        for (xi, &cx) in centers.iter().enumerate() {
            // These three would land on the finder patterns
            let on_finder = (xi == 0 && yi == 0) || (xi == 0 && yi == last) || (xi == last && yi == 0);
            if on_finder {
                continue;
            }
            let (x, y) = (cx as i32, cy as i32);
            draw_rect(symbol, x - 2, y - 2, 5, 5, true, ModuleRole::AlignmentPattern);
            draw_rect(symbol, x - 1, y - 1, 3, 3, false, ModuleRole::AlignmentPattern);
            symbol.put(cx as usize, cy as usize, true, ModuleRole::AlignmentPattern);
        }
    }
}

/// Codeword placement order over the modules where `is_free(x, y)` holds.
///
/// Two-column strips are walked right to left, alternating upward and
/// downward, right column before left; column 6 (vertical timing) is skipped.
pub fn zigzag_path(size: usize, is_free: impl Fn(usize, usize) -> bool) -> Vec<(usize, usize)> {
    let mut path = Vec::new();
    let mut upward = true;
    let mut col = size as i32 - 1;

    while col > 0 {
        if col == 6 {
            col -= 1;
            continue;
        }
        let right = col as usize;
        let left = right - 1;

        let mut visit = |row: usize| {
            for x in [right, left] {
                if is_free(x, row) {
                    path.push((x, row));
                }
            }
        };
        if upward {
            (0..size).rev().for_each(&mut visit);
        } else {
            (0..size).for_each(&mut visit);
        }

        upward = !upward;
        col -= 2;
    }

    path
}
