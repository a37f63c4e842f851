/// Compact bit matrix for storing module colors (true = dark)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitMatrix {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl BitMatrix {
    /// Create a new all-light matrix with given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width * height).div_ceil(8)],
        }
    }

    /// Create a `size` x `size` matrix
    pub fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    /// Get matrix width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get matrix height
    pub fn height(&self) -> usize {
        self.height
    }

    fn locate(&self, x: usize, y: usize) -> Option<(usize, u8)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = y * self.width + x;
        Some((index / 8, 0x80 >> (index % 8)))
    }

    /// Get bit at (x, y); out-of-range reads are light
    pub fn get(&self, x: usize, y: usize) -> bool {
        match self.locate(x, y) {
            Some((byte, bit)) => self.data[byte] & bit != 0,
            None => false,
        }
    }

    /// Set bit at (x, y); out-of-range writes are ignored
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        if let Some((byte, bit)) = self.locate(x, y) {
            if value {
                self.data[byte] |= bit;
            } else {
                self.data[byte] &= !bit;
            }
        }
    }

    /// Toggle bit at (x, y)
    pub fn toggle(&mut self, x: usize, y: usize) {
        if let Some((byte, bit)) = self.locate(x, y) {
            self.data[byte] ^= bit;
        }
    }

    /// Clear all bits to 0
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Number of set (dark) bits
    pub fn count_ones(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Row-major copy as booleans
    pub fn to_bools(&self) -> Vec<bool> {
        (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| self.get(x, y))
            .collect()
    }

    /// Get raw data as bytes (row-major, MSB first)
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl Default for BitMatrix {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_matrix() {
        let mut matrix = BitMatrix::new(8, 8);
        assert_eq!(matrix.width(), 8);
        assert_eq!(matrix.height(), 8);

        matrix.set(3, 4, true);
        assert!(matrix.get(3, 4));
        assert!(!matrix.get(3, 3));
        assert_eq!(matrix.count_ones(), 1);

        matrix.toggle(3, 4);
        assert!(!matrix.get(3, 4));

        matrix.set(0, 0, true);
        matrix.clear();
        assert_eq!(matrix.count_ones(), 0);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut matrix = BitMatrix::square(5);
        matrix.set(10, 10, true);
        matrix.toggle(5, 0);
        assert!(!matrix.get(10, 10));
        assert_eq!(matrix.count_ones(), 0);
    }

    #[test]
    fn test_row_major_layout() {
        let mut matrix = BitMatrix::new(3, 2);
        matrix.set(0, 0, true);
        matrix.set(2, 1, true);
        assert_eq!(matrix.as_bytes(), &[0b1000_0100]);
        assert_eq!(
            matrix.to_bools(),
            vec![true, false, false, false, false, true]
        );
    }
}
