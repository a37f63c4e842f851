//! Codeword sequence assembly: padding, block split, Reed-Solomon and
//! interleaving (ISO/IEC 18004 sections 7.4.10, 7.5 and 7.6).

use super::bit_buffer::BitBuffer;
use super::reed_solomon::{GeneratorCache, ReedSolomonEncoder};
use super::tables::EcBlockLayout;

/// Pad codewords, alternating until capacity is reached
const PAD_BYTES: [u8; 2] = [0b1110_1100, 0b0001_0001];

/// Fill `bits` to exactly `capacity_bits`: zero bits up to a byte boundary,
/// then alternating pad codewords.
pub fn pad_to_capacity(mut bits: BitBuffer, capacity_bits: usize) -> Vec<u8> {
    bits.pad_to_byte_boundary();
    for &pad in PAD_BYTES.iter().cycle() {
        if bits.bit_count() + 8 > capacity_bits {
            break;
        }
        bits.append_bits(8, pad as u32);
    }
    bits.into_bytes()
}

/// Split `data` into blocks, append EC codewords and interleave.
///
/// Data codewords are taken column-wise across blocks (shorter blocks drop
/// out once exhausted), then EC codewords the same way.
pub fn interleave(data: &[u8], layout: &EcBlockLayout, cache: &GeneratorCache) -> Vec<u8> {
    let ec_len = layout.ec_per_block();
    let mut encoder = ReedSolomonEncoder::with_cache(cache, ec_len);

    let mut data_blocks = Vec::with_capacity(layout.num_blocks());
    let mut ec_blocks = Vec::with_capacity(layout.num_blocks());
    let mut offset = 0;
    for len in layout.block_sizes() {
        let end = (offset + len).min(data.len());
        let block = &data[offset.min(end)..end];
        encoder.reset();
        encoder.feed_all(block);
        ec_blocks.push(encoder.ec_codewords().to_vec());
        data_blocks.push(block);
        offset += len;
    }

    let mut out = Vec::with_capacity(layout.total_codewords());
    let longest = data_blocks.iter().map(|b| b.len()).max().unwrap_or(0);
    for i in 0..longest {
        out.extend(data_blocks.iter().filter_map(|b| b.get(i)));
    }
    for i in 0..ec_len {
        out.extend(ec_blocks.iter().filter_map(|b| b.get(i)));
    }
    out
}
