/// Numeric mode encoder (Mode 0001)
/// Groups of 3 digits = 10 bits, 2 digits = 7 bits, 1 digit = 4 bits
use crate::encoder::bit_buffer::BitBuffer;

/// ASCII digits only
pub fn is_numeric(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Encoder for all-digit text
pub struct NumericEncoder;

impl NumericEncoder {
    /// Append the payload bits for an all-digit `text`
    pub fn encode(text: &str, out: &mut BitBuffer) {
        let digits: Vec<u32> = text.chars().filter_map(|c| c.to_digit(10)).collect();
        for group in digits.chunks(3) {
            let value = group.iter().fold(0, |acc, &d| acc * 10 + d);
            let bits = match group.len() {
                3 => 10,
                2 => 7,
                _ => 4,
            };
            out.append_bits(bits, value);
        }
    }
}
