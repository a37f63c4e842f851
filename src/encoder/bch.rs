/// Polynomials over GF(2) and the BCH codes used for format and version info
use std::ops::{Add, Mul, Sub};

use crate::error::{QrError, Result};

/// Polynomial over GF(2); bit i is the coefficient of x^i.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BinaryPolynomial(pub u32);

impl BinaryPolynomial {
    /// Degree of the polynomial, `None` for the zero polynomial.
    pub fn order(&self) -> Option<u32> {
        if self.0 == 0 {
            None
        } else {
            Some(31 - self.0.leading_zeros())
        }
    }

    /// Remainder of binary long division by `divisor`.
    pub fn modulo(self, divisor: BinaryPolynomial) -> Result<BinaryPolynomial> {
        let high = divisor.order().ok_or(QrError::ZeroDivisor)?;
        let mut rem = self.0;
        for i in (high..32).rev() {
            if rem & (1 << i) != 0 {
                rem ^= divisor.0 << (i - high);
            }
        }
        Ok(BinaryPolynomial(rem))
    }
}

impl Add for BinaryPolynomial {
    type Output = BinaryPolynomial;

    fn add(self, rhs: Self) -> Self::Output {
        BinaryPolynomial(self.0 ^ rhs.0)
    }
}

impl Sub for BinaryPolynomial {
    type Output = BinaryPolynomial;

    fn sub(self, rhs: Self) -> Self::Output {
        BinaryPolynomial(self.0 ^ rhs.0)
    }
}

impl Mul for BinaryPolynomial {
    type Output = BinaryPolynomial;

    /// Carry-less product, truncated to 32 bits.
    fn mul(self, rhs: Self) -> Self::Output {
        let mut product = 0u32;
        let mut b = rhs.0;
        let mut shift = 0;
        while b != 0 && shift < 32 {
            if b & 1 != 0 {
                product ^= self.0 << shift;
            }
            b >>= 1;
            shift += 1;
        }
        BinaryPolynomial(product)
    }
}

/// Systematic BCH encoder: data bits followed by the remainder bits.
pub struct BchEncoder;

impl BchEncoder {
    /// Generator of the (15,5) format information code
    pub const FORMAT_GENERATOR: BinaryPolynomial = BinaryPolynomial(0b101_0011_0111);
    /// Generator of the (18,6) version information code
    pub const VERSION_GENERATOR: BinaryPolynomial = BinaryPolynomial(0b1_1111_0010_0101);

    /// Shift `data` above the generator degree and append the remainder.
    pub fn encode(data: u32, generator: BinaryPolynomial) -> Result<u32> {
        let degree = generator.order().ok_or(QrError::ZeroDivisor)?;
        let shifted = BinaryPolynomial(data << degree);
        Ok(shifted.0 | shifted.modulo(generator)?.0)
    }
}
