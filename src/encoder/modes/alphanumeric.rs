/// Alphanumeric mode encoder (Mode 0010)
/// Alphanumeric character set: 0-9, A-Z, space, $%*+-./:
use crate::encoder::bit_buffer::BitBuffer;

const ALPHANUMERIC_TABLE: [char; 45] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I',
    'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', ' ', '$',
    '%', '*', '+', '-', '.', '/', ':',
];

/// Index of `ch` in the alphanumeric table
pub fn alphanumeric_value(ch: char) -> Option<u32> {
    ALPHANUMERIC_TABLE
        .iter()
        .position(|&c| c == ch)
        .map(|i| i as u32)
}

/// Member of the 45-character set
pub fn is_alphanumeric(ch: char) -> bool {
    alphanumeric_value(ch).is_some()
}

/// Pairs = 11 bits (45 * first + second), single = 6 bits
pub struct AlphanumericEncoder;

impl AlphanumericEncoder {
    /// Append the payload bits for `text`
    pub fn encode(text: &str, out: &mut BitBuffer) {
        let values: Vec<u32> = text.chars().filter_map(alphanumeric_value).collect();
        for pair in values.chunks(2) {
            match *pair {
                [first, second] => out.append_bits(11, first * 45 + second),
                [single] => out.append_bits(6, single),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphanumeric_encode() {
        // "AC-42": (10, 12) -> 462, (41, 4) -> 1849, 2 -> 2
        let mut buf = BitBuffer::new();
        AlphanumericEncoder::encode("AC-42", &mut buf);
        let mut expected = BitBuffer::new();
        expected.append_bits(11, 462);
        expected.append_bits(11, 1849);
        expected.append_bits(6, 2);
        assert_eq!(buf, expected);
        assert_eq!(buf.bit_count(), 28);
    }

    #[test]
    fn test_table() {
        assert_eq!(alphanumeric_value('0'), Some(0));
        assert_eq!(alphanumeric_value('A'), Some(10));
        assert_eq!(alphanumeric_value(' '), Some(36));
        assert_eq!(alphanumeric_value(':'), Some(44));
        assert_eq!(alphanumeric_value('a'), None);
        assert!(!is_alphanumeric('&'));
    }
}
