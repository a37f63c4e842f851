/// Reed-Solomon error correction codeword generation for QR codes
/// Generator polynomial: (x - a^0)(x - a^1)...(x - a^(k-1)) over GF(256)/0x11D
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use crate::encoder::gf256::Gf256;

/// Build the degree-`degree` generator polynomial.
///
/// Coefficients are returned highest power first with the leading 1 omitted,
/// so `g[j]` multiplies x^(degree-1-j).
pub fn generator_polynomial(field: &Gf256, degree: usize) -> Vec<u8> {
    let mut poly = Vec::with_capacity(degree + 1);
    poly.push(field.one());
    for i in 0..degree {
        let root = field.alpha(i as i32);
        poly.push(0);
        // Multiply by (x + root), walking down so each term is read before it is replaced
        for j in (1..poly.len()).rev() {
            poly[j] = field.add(poly[j], field.mul(poly[j - 1], root));
        }
    }
    poly.remove(0);
    poly
}

/// Generator polynomials memoized by degree.
///
/// Shared across threads; readers get an `Arc` so the lock is only held
/// while looking up or inserting.
#[derive(Debug, Default)]
pub struct GeneratorCache {
    polys: Mutex<HashMap<usize, Arc<[u8]>>>,
}

static GLOBAL_CACHE: OnceLock<GeneratorCache> = OnceLock::new();

impl GeneratorCache {
    /// Empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide cache used by the default encoder
    pub fn global() -> &'static GeneratorCache {
        GLOBAL_CACHE.get_or_init(GeneratorCache::new)
    }

    /// Generator of the given degree, computed on first use
    pub fn get(&self, degree: usize) -> Arc<[u8]> {
        let mut polys = self.polys.lock().unwrap_or_else(|e| e.into_inner());
        polys
            .entry(degree)
            .or_insert_with(|| Arc::from(generator_polynomial(Gf256::qr(), degree)))
            .clone()
    }

    /// Number of cached degrees
    pub fn len(&self) -> usize {
        self.polys.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// True when nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// LFSR encoder producing the EC codewords of one block.
#[derive(Debug, Clone)]
pub struct ReedSolomonEncoder {
    generator: Arc<[u8]>,
    register: Vec<u8>,
}

impl ReedSolomonEncoder {
    /// Encoder for `ec_codewords` redundancy bytes, using the global cache
    pub fn new(ec_codewords: usize) -> Self {
        Self::with_cache(GeneratorCache::global(), ec_codewords)
    }

    /// Encoder drawing its generator from `cache`
    pub fn with_cache(cache: &GeneratorCache, ec_codewords: usize) -> Self {
        Self {
            generator: cache.get(ec_codewords),
            register: vec![0; ec_codewords],
        }
    }

    /// Number of EC codewords produced
    pub fn degree(&self) -> usize {
        self.register.len()
    }

    /// Shift one data byte through the register.
    pub fn feed(&mut self, value: u8) {
        let field = Gf256::qr();
        let n = self.register.len();
        if n == 0 {
            return;
        }
        let feedback = field.add(self.register[0], value);
        for j in 0..n {
            let next = if j + 1 < n { self.register[j + 1] } else { 0 };
            self.register[j] = field.add(field.mul(feedback, self.generator[j]), next);
        }
    }

    /// Feed every byte of `data`
    pub fn feed_all(&mut self, data: &[u8]) {
        for &byte in data {
            self.feed(byte);
        }
    }

    /// Zero the register, keeping the generator
    pub fn reset(&mut self) {
        self.register.fill(0);
    }

    /// EC codewords for everything fed since the last reset
    pub fn ec_codewords(&self) -> &[u8] {
        &self.register
    }
}

/// EC codewords for one data block.
pub fn encode_block(data: &[u8], ec_codewords: usize) -> Vec<u8> {
    let mut encoder = ReedSolomonEncoder::new(ec_codewords);
    encoder.feed_all(data);
    encoder.ec_codewords().to_vec()
}
