/// Byte mode encoder (Mode 0100) for ISO-8859-1 text
use crate::encoder::bit_buffer::BitBuffer;

/// Characters with a single-byte ISO-8859-1 code point
pub fn is_latin1(ch: char) -> bool {
    (ch as u32) <= 0xFF
}

/// 8 bits per character, the Latin-1 code point
pub struct ByteEncoder;

impl ByteEncoder {
    /// Append one byte per character
    pub fn encode(text: &str, out: &mut BitBuffer) {
        for ch in text.chars().filter(|&c| is_latin1(c)) {
            out.append_bits(8, ch as u32);
        }
    }
}
