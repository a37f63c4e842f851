//! QR data mode encoders
//!
//! Each mode has a character-set predicate and a payload encoder:
//! - Numeric: digits 0-9, 10 bits per 3 digits
//! - Alphanumeric: the 45-character QR set, 11 bits per pair
//! - Byte: ISO-8859-1 (Latin-1), 8 bits per character

pub mod alphanumeric;
pub mod byte;
pub mod numeric;

use crate::error::{QrError, Result};
use crate::models::Version;

/// Data encoding mode of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Mode 0001
    Numeric,
    /// Mode 0010
    Alphanumeric,
    /// Mode 0100
    Byte,
}

impl Mode {
    /// Modes from most to least compact
    pub const PRIORITY: [Mode; 3] = [Mode::Numeric, Mode::Alphanumeric, Mode::Byte];

    /// 4-bit mode indicator
    pub fn indicator(&self) -> u32 {
        match self {
            Mode::Numeric => 0b0001,
            Mode::Alphanumeric => 0b0010,
            Mode::Byte => 0b0100,
        }
    }

    /// Width of the character count field for `version`
    pub fn char_count_bits(&self, version: Version) -> usize {
        let range = match version.number() {
            1..=9 => 0,
            10..=26 => 1,
            _ => 2,
        };
        match self {
            Mode::Numeric => [10, 12, 14][range],
            Mode::Alphanumeric => [9, 11, 13][range],
            Mode::Byte => [8, 16, 16][range],
        }
    }

    /// Whether this mode can represent `ch`
    pub fn accepts(&self, ch: char) -> bool {
        match self {
            Mode::Numeric => numeric::is_numeric(ch),
            Mode::Alphanumeric => alphanumeric::is_alphanumeric(ch),
            Mode::Byte => byte::is_latin1(ch),
        }
    }

    /// First mode in priority order that accepts every character of `text`.
    ///
    /// Fails on empty input, and on text with characters above U+00FF,
    /// reporting the first such character.
    pub fn select(text: &str) -> Result<Mode> {
        if text.is_empty() {
            return Err(QrError::EmptyInput);
        }
        if let Some(mode) = Self::PRIORITY
            .into_iter()
            .find(|mode| text.chars().all(|c| mode.accepts(c)))
        {
            return Ok(mode);
        }
        let (position, ch) = text
            .chars()
            .enumerate()
            .find(|&(_, c)| !byte::is_latin1(c))
            .unwrap_or((0, '\0'));
        Err(QrError::UnsupportedCharacter { ch, position })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_selection() {
        assert_eq!(Mode::select("0123456789").unwrap(), Mode::Numeric);
        assert_eq!(Mode::select("HELLO WORLD").unwrap(), Mode::Alphanumeric);
        assert_eq!(Mode::select("123 ABC $%*+-./:").unwrap(), Mode::Alphanumeric);
        assert_eq!(Mode::select("Hello").unwrap(), Mode::Byte);
        assert_eq!(Mode::select("caf\u{e9} & co").unwrap(), Mode::Byte);
        assert_eq!(Mode::select("tab\there").unwrap(), Mode::Byte);
    }

    #[test]
    fn test_mode_selection_failures() {
        assert!(matches!(Mode::select(""), Err(QrError::EmptyInput)));
        match Mode::select("ab\u{3042}c") {
            Err(QrError::UnsupportedCharacter { ch, position }) => {
                assert_eq!(ch, '\u{3042}');
                assert_eq!(position, 2);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(Mode::select("\u{20ac}").is_err());
    }

    #[test]
    fn test_char_count_bits() {
        let v = |n| Version::new(n).unwrap();
        assert_eq!(Mode::Numeric.char_count_bits(v(1)), 10);
        assert_eq!(Mode::Numeric.char_count_bits(v(10)), 12);
        assert_eq!(Mode::Numeric.char_count_bits(v(27)), 14);
        assert_eq!(Mode::Alphanumeric.char_count_bits(v(9)), 9);
        assert_eq!(Mode::Alphanumeric.char_count_bits(v(26)), 11);
        assert_eq!(Mode::Alphanumeric.char_count_bits(v(40)), 13);
        assert_eq!(Mode::Byte.char_count_bits(v(9)), 8);
        assert_eq!(Mode::Byte.char_count_bits(v(10)), 16);
        assert_eq!(Mode::Byte.char_count_bits(v(40)), 16);
    }
}
