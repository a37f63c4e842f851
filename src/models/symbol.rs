use super::{BitMatrix, ECLevel, MaskPattern, Version};
use crate::encoder::layout::{SymbolLayout, zigzag_path};

/// What a module of the symbol is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModuleRole {
    /// Not yet assigned (only seen while a layout is being built)
    #[default]
    Unset,
    /// Carries a data or EC codeword bit
    Data,
    /// On the data path but past the last codeword (remainder bits)
    Blank,
    /// 7x7 finder pattern
    FinderPattern,
    /// Light border around a finder pattern
    Separator,
    /// Alternating row/column 6
    TimingPattern,
    /// 5x5 alignment pattern
    AlignmentPattern,
    /// Format information, including the always-dark module
    FormatInformation,
    /// Version information (v7+)
    VersionInformation,
}

impl ModuleRole {
    /// Modules the mask is applied to
    pub fn is_maskable(&self) -> bool {
        matches!(self, ModuleRole::Data | ModuleRole::Blank)
    }

    /// Modules reserved for fixed patterns or metadata
    pub fn is_function(&self) -> bool {
        !matches!(self, ModuleRole::Unset | ModuleRole::Data | ModuleRole::Blank)
    }
}

/// An encoded QR symbol: module colors plus the role of every module.
///
/// `Symbol::default()` is the empty symbol (size 0) that stands for a
/// failed encode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Symbol {
    modules: BitMatrix,
    roles: Vec<ModuleRole>,
    version: Option<Version>,
    ec_level: Option<ECLevel>,
    mask: Option<MaskPattern>,
}

impl Symbol {
    pub(crate) fn blank(version: Version) -> Self {
        let size = version.size();
        Self {
            modules: BitMatrix::square(size),
            roles: vec![ModuleRole::Unset; size * size],
            version: Some(version),
            ec_level: None,
            mask: None,
        }
    }

    /// Static patterns only (format area reserved and light, no data).
    ///
    /// Returns the empty symbol when `version` is outside 1..=40.
    pub fn pristine(version: u8) -> Self {
        match Version::new(version) {
            Ok(v) => SymbolLayout::new(v).into_symbol(),
            Err(_) => Self::default(),
        }
    }

    /// Side length in modules; 0 for the empty symbol
    pub fn size(&self) -> usize {
        self.modules.width()
    }

    /// True for the failure sentinel
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Module color at column `x`, row `y`; false (light) outside the symbol
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        self.modules.get(x as usize, y as usize)
    }

    /// Row-major module colors, `true` = dark
    pub fn pixels(&self) -> Vec<bool> {
        self.modules.to_bools()
    }

    /// Role of the module at (x, y); `Unset` outside the symbol
    pub fn role(&self, x: usize, y: usize) -> ModuleRole {
        let size = self.size();
        if x >= size || y >= size {
            return ModuleRole::Unset;
        }
        self.roles[y * size + x]
    }

    /// Underlying module matrix
    pub fn modules(&self) -> &BitMatrix {
        &self.modules
    }

    /// Version, `None` for the empty symbol
    pub fn version(&self) -> Option<Version> {
        self.version
    }

    /// Error correction level once format information is written
    pub fn ec_level(&self) -> Option<ECLevel> {
        self.ec_level
    }

    /// Mask applied to the data region
    pub fn mask(&self) -> Option<MaskPattern> {
        self.mask
    }

    /// Number of dark modules
    pub fn dark_module_count(&self) -> usize {
        self.modules.count_ones()
    }

    /// Coordinates of the eight modules holding codeword `index`, MSB first.
    ///
    /// Empty when the codeword does not exist.
    pub fn codeword_modules(&self, index: usize) -> Vec<(usize, usize)> {
        let path = zigzag_path(self.size(), |x, y| self.role(x, y) == ModuleRole::Data);
        path.into_iter().skip(index * 8).take(8).collect()
    }

    pub(crate) fn put(&mut self, x: usize, y: usize, dark: bool, role: ModuleRole) {
        let size = self.size();
        if x < size && y < size {
            self.modules.set(x, y, dark);
            self.roles[y * size + x] = role;
        }
    }

    pub(crate) fn toggle(&mut self, x: usize, y: usize) {
        self.modules.toggle(x, y);
    }

    pub(crate) fn set_format(&mut self, ec_level: ECLevel, mask: MaskPattern) {
        self.ec_level = Some(ec_level);
        self.mask = Some(mask);
    }
}
