//! Bit-serial multiplier following Algorithm 1 of NIST SP 800-38D §6.3.

use super::GfMultiply;
use crate::block::Block;

/// Reduction constant `R = 11100001 || 0^120`.
const R: u128 = 0xe1 << 120;

/// Right-shift multiplier: walks the bits of `a` from `x^0` upwards while
/// repeatedly multiplying `b` by `x`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShiftMultiplier;

impl GfMultiply for ShiftMultiplier {
    #[inline]
    fn multiply(&self, a: Block, b: Block) -> Block {
        let x = a.to_u128();
        let mut v = b.to_u128();
        let mut z = 0u128;

        for i in 0..128 {
            let bit = (x >> (127 - i)) & 1;
            z ^= v & bit.wrapping_neg();

            let carry = v & 1;
            v >>= 1;
            v ^= R & carry.wrapping_neg();
        }

        Block::from_u128(z)
    }
}
