/// Append-only bit accumulator with byte-wise access
///
/// Bits are packed most-significant-first into whole bytes; any bits past
/// `bit_count` in the last byte are always zero.
#[derive(Debug, Clone, Default, Eq)]
pub struct BitBuffer {
    bytes: Vec<u8>,
    bit_count: usize,
}

impl BitBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer with room for `bits` bits
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            bit_count: 0,
        }
    }

    /// Number of bits appended so far
    pub fn bit_count(&self) -> usize {
        self.bit_count
    }

    /// True when no bits were appended
    pub fn is_empty(&self) -> bool {
        self.bit_count == 0
    }

    /// Backing bytes; the last one may be partially used
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Byte at `index`, `None` past the end
    pub fn byte(&self, index: usize) -> Option<u8> {
        self.bytes.get(index).copied()
    }

    /// Bit at `index` (0 = first appended)
    pub fn bit(&self, index: usize) -> bool {
        if index >= self.bit_count {
            return false;
        }
        (self.bytes[index / 8] >> (7 - index % 8)) & 1 == 1
    }

    fn push_bit(&mut self, bit: bool) {
        if self.bit_count % 8 == 0 {
            self.bytes.push(0);
        }
        if bit {
            let last = self.bytes.len() - 1;
            self.bytes[last] |= 0x80 >> (self.bit_count % 8);
        }
        self.bit_count += 1;
    }

    /// Append the `width` low bits of `value`, MSB first.
    ///
    /// Widths above 32 zero-extend `value` on the left.
    pub fn append_bits(&mut self, width: usize, value: u32) {
        self.bytes.reserve((self.bit_count + width).div_ceil(8) - self.bytes.len());
        for i in (0..width).rev() {
            let bit = i < 32 && (value >> i) & 1 == 1;
            self.push_bit(bit);
        }
    }

    /// Append `count` zero bits
    pub fn append_zeros(&mut self, count: usize) {
        self.append_bits(count, 0);
    }

    /// Append every bit of `other`
    pub fn append(&mut self, other: &BitBuffer) {
        for i in 0..other.bit_count {
            self.push_bit(other.bit(i));
        }
    }

    /// Append a copy of the buffer's own contents
    pub fn append_self(&mut self) {
        // Length is fixed before any bit is written
        let count = self.bit_count;
        for i in 0..count {
            let bit = self.bit(i);
            self.push_bit(bit);
        }
    }

    /// Append zero bits up to the next multiple of 8
    pub fn pad_to_byte_boundary(&mut self) {
        let rem = self.bit_count % 8;
        if rem != 0 {
            self.append_zeros(8 - rem);
        }
    }

    /// Reset to an empty buffer
    pub fn clear(&mut self) {
        self.bytes.clear();
        self.bit_count = 0;
    }

    /// Consume the buffer, returning its bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl PartialEq for BitBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.bit_count == other.bit_count && self.bytes == other.bytes
    }
}
