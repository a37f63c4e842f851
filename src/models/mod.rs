pub mod matrix;
pub mod qr_code;
pub mod symbol;

pub use matrix::BitMatrix;
pub use qr_code::{ECLevel, MaskPattern, Version};
pub use symbol::{ModuleRole, Symbol};
