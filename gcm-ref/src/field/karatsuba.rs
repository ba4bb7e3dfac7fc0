//! Fused multiply-accumulate over ordinary (non-reflected) polynomials.
//!
//! Operands are bit-reversed so that bit `i` of the integer is the
//! coefficient of `x^i`, multiplied with a one-level Karatsuba split into
//! 64-bit carry-less products, reduced, and reversed back.

use super::GfMulAccumulate;
use crate::block::Block;

/// Karatsuba carry-less multiplier with fused accumulator XOR.
#[derive(Clone, Copy, Debug, Default)]
pub struct KaratsubaMultiplier;

impl GfMulAccumulate for KaratsubaMultiplier {
    #[inline]
    fn multiply_accumulate(&self, y: Block, x: Block, h: Block) -> Block {
        let a = (y.to_u128() ^ x.to_u128()).reverse_bits();
        let b = h.to_u128().reverse_bits();
        let (hi, lo) = karatsuba(a, b);
        Block::from_u128(reduce(hi, lo).reverse_bits())
    }
}

/// Carry-less 64x64 -> 128 bit product.
#[inline]
fn clmul64(a: u64, b: u64) -> u128 {
    let a = u128::from(a);
    let mut r = 0u128;
    for i in 0..64 {
        let bit = u128::from((b >> i) & 1);
        r ^= (a << i) & bit.wrapping_neg();
    }
    r
}

/// Full 256-bit carry-less product, returned as `(high, low)` halves.
#[inline]
fn karatsuba(a: u128, b: u128) -> (u128, u128) {
    let (a1, a0) = ((a >> 64) as u64, a as u64);
    let (b1, b0) = ((b >> 64) as u64, b as u64);

    let z0 = clmul64(a0, b0);
    let z2 = clmul64(a1, b1);
    let z1 = clmul64(a0 ^ a1, b0 ^ b1) ^ z0 ^ z2;

    (z2 ^ (z1 >> 64), z0 ^ (z1 << 64))
}

/// Reduce `hi · x^128 + lo` modulo `x^128 + x^7 + x^2 + x + 1`.
#[inline]
fn reduce(hi: u128, lo: u128) -> u128 {
    // x^128 = x^7 + x^2 + x + 1; the first fold spills at most 7 bits.
    let spill = (hi >> 127) ^ (hi >> 126) ^ (hi >> 121);
    let folded = hi ^ (hi << 1) ^ (hi << 2) ^ (hi << 7);
    let spill = spill ^ (spill << 1) ^ (spill << 2) ^ (spill << 7);
    lo ^ folded ^ spill
}
