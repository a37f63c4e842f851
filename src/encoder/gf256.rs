//! GF(256) arithmetic over a selectable reducing polynomial.
//!
//! Elements are plain `u8` values. A field instance owns its power and
//! logarithm tables, which are bootstrapped with carry-less "peasant"
//! multiplication by the polynomial's primitive element. QR codes use
//! `x^8 + x^4 + x^3 + x^2 + 1` (0x11D) with primitive element 2.

use std::sync::OnceLock;

use crate::error::{QrError, Result};

/// Degree-8 reducing polynomial, stored with its implicit x^8 term (0x1xx).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReducingPolynomial(u16);

/// Low bytes of the supported reducing polynomials and their primitive elements.
const PRIMITIVE_ELEMENTS: [(u8, u8); 30] = [
    (0x1B, 3),
    (0x1D, 2),
    (0x2B, 2),
    (0x2D, 2),
    (0x39, 3),
    (0x3F, 3),
    (0x4D, 2),
    (0x5F, 2),
    (0x63, 2),
    (0x65, 2),
    (0x69, 2),
    (0x71, 2),
    (0x77, 3),
    (0x7B, 9),
    (0x87, 2),
    (0x8B, 6),
    (0x8D, 2),
    (0x9F, 3),
    (0xA3, 3),
    (0xA9, 2),
    (0xB1, 6),
    (0xBD, 7),
    (0xC3, 2),
    (0xCF, 2),
    (0xD7, 7),
    (0xDD, 6),
    (0xE7, 2),
    (0xF3, 6),
    (0xF5, 2),
    (0xF9, 3),
];

impl ReducingPolynomial {
    /// x^8 + x^4 + x^3 + x^2 + 1, used by QR Reed-Solomon codes
    pub const QR: Self = Self(0x11D);
    /// x^8 + x^4 + x^3 + x + 1, the AES field
    pub const RIJNDAEL: Self = Self(0x11B);

    /// Accept a polynomial given either as 0x1xx or by its low byte.
    pub fn new(poly: u16) -> Result<Self> {
        if poly > 0x1FF || (poly > 0xFF && poly & 0x100 == 0) {
            return Err(QrError::UnsupportedReducingPolynomial(poly));
        }
        let rp = Self(0x100 | (poly & 0xFF));
        match rp.primitive_element() {
            Some(_) => Ok(rp),
            None => Err(QrError::UnsupportedReducingPolynomial(poly)),
        }
    }

    /// Every polynomial with a known primitive element.
    pub fn all() -> impl Iterator<Item = Self> {
        PRIMITIVE_ELEMENTS
            .iter()
            .map(|&(low, _)| Self(0x100 | low as u16))
    }

    /// Full polynomial value including the x^8 term.
    pub fn value(&self) -> u16 {
        self.0
    }

    /// Generator of the multiplicative group for this polynomial.
    pub fn primitive_element(&self) -> Option<u8> {
        let low = (self.0 & 0xFF) as u8;
        PRIMITIVE_ELEMENTS
            .iter()
            .find(|&&(p, _)| p == low)
            .map(|&(_, alpha)| alpha)
    }

    fn low_byte(&self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

/// GF(256) field with precomputed power and logarithm tables.
#[derive(Debug, Clone)]
pub struct Gf256 {
    polynomial: ReducingPolynomial,
    exp: [u8; 256],
    log: [u8; 256],
}

static QR_FIELD: OnceLock<Gf256> = OnceLock::new();

impl Gf256 {
    /// Build the tables for `polynomial`.
    pub fn new(polynomial: ReducingPolynomial) -> Result<Self> {
        let alpha = polynomial
            .primitive_element()
            .ok_or(QrError::UnsupportedReducingPolynomial(polynomial.value()))?;
        Ok(Self::build(polynomial, alpha))
    }

    /// The shared QR field (0x11D).
    pub fn qr() -> &'static Gf256 {
        QR_FIELD.get_or_init(|| Self::build(ReducingPolynomial::QR, 2))
    }

    fn build(polynomial: ReducingPolynomial, alpha: u8) -> Self {
        let low = polynomial.low_byte();
        let mut exp = [0u8; 256];
        let mut log = [0u8; 256];
        exp[0] = 1;
        for i in 1..256 {
            exp[i] = mul_peasant(exp[i - 1], alpha, low);
            log[exp[i] as usize] = i as u8;
        }
        // exp[255] wrapped back to 1 and overwrote its logarithm
        log[1] = 0;

        Self {
            polynomial,
            exp,
            log,
        }
    }

    /// Reducing polynomial of this field.
    pub fn polynomial(&self) -> ReducingPolynomial {
        self.polynomial
    }

    /// Additive identity.
    pub const fn zero(&self) -> u8 {
        0
    }

    /// Multiplicative identity.
    pub const fn one(&self) -> u8 {
        1
    }

    /// alpha^n, with `n` reduced modulo 255 (negative exponents allowed).
    pub fn alpha(&self, n: i32) -> u8 {
        self.exp[n.rem_euclid(255) as usize]
    }

    /// Discrete logarithm of a nonzero element; 0 for zero by convention.
    pub fn log_alpha(&self, e: u8) -> u8 {
        self.log[e as usize]
    }

    /// Addition is XOR.
    pub fn add(&self, a: u8, b: u8) -> u8 {
        a ^ b
    }

    /// Subtraction is XOR as well.
    pub fn sub(&self, a: u8, b: u8) -> u8 {
        a ^ b
    }

    /// Table multiplication; zero absorbs.
    pub fn mul(&self, a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let sum = self.log[a as usize] as usize + self.log[b as usize] as usize;
        self.exp[sum % 255]
    }

    /// a / b, rejecting b == 0.
    pub fn div(&self, a: u8, b: u8) -> Result<u8> {
        if b == 0 {
            return Err(QrError::FieldDivisionByZero);
        }
        Ok(self.mul(a, self.alpha(-(self.log[b as usize] as i32))))
    }
}

/// Shift-and-add multiplication that does not depend on the tables.
fn mul_peasant(mut a: u8, mut b: u8, reducing_low: u8) -> u8 {
    let mut result = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            result ^= a;
        }
        let carry = a & 0x80 != 0;
        a <<= 1;
        if carry {
            a ^= reducing_low;
        }
        b >>= 1;
    }
    result
}
