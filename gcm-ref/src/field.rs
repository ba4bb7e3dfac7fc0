//! GF(2^128) multiplication in the GCM field, modulo
//! `x^128 + x^7 + x^2 + x + 1`, using the bit-reflected element
//! representation of NIST SP 800-38D (bit 0 of byte 0 is the coefficient
//! of `x^0`).
//!
//! Two independently derived portable primitives are provided so the GHASH
//! strategies built on top of them cross-check the field arithmetic as well
//! as the mode logic.

mod karatsuba;
mod shift;

pub use karatsuba::KaratsubaMultiplier;
pub use shift::ShiftMultiplier;

use crate::block::Block;

/// Two-operand field multiply: `a · b`.
pub trait GfMultiply {
    /// Multiply two field elements.
    fn multiply(&self, a: Block, b: Block) -> Block;
}

/// Fused accumulate-multiply: `(y ⊕ x) · h`.
pub trait GfMulAccumulate {
    /// Fold block `x` into accumulator `y` and multiply by `h`.
    fn multiply_accumulate(&self, y: Block, x: Block, h: Block) -> Block;
}

/// Multiplicative identity in the GCM bit order.
pub const ONE: Block = Block::from_u128(1 << 127);

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    const H: Block = Block::from_bytes(hex!("66e94bd4ef8a2c3b884cfa59ca342b2e"));
    const C: Block = Block::from_bytes(hex!("0388dace60b6a392f328c2b971b2fe78"));

    fn samples() -> impl Iterator<Item = Block> {
        let mut state = 0x9e37_79b9_7f4a_7c15_f39c_c060_5ced_c834_u128;
        (0..64).map(move |_| {
            // xorshift128 over the full width
            state ^= state << 35;
            state ^= state >> 61;
            state ^= state << 23;
            Block::from_u128(state)
        })
    }

    #[test]
    fn one_is_identity() {
        for x in samples() {
            assert_eq!(ShiftMultiplier.multiply(x, ONE), x);
            assert_eq!(ShiftMultiplier.multiply(ONE, x), x);
            assert_eq!(KaratsubaMultiplier.multiply_accumulate(Block::ZERO, x, ONE), x);
        }
    }

    #[test]
    fn zero_annihilates() {
        for x in samples() {
            assert_eq!(ShiftMultiplier.multiply(x, Block::ZERO), Block::ZERO);
            assert_eq!(
                KaratsubaMultiplier.multiply_accumulate(x, x, H),
                Block::ZERO
            );
        }
    }

    #[test]
    fn primitives_agree() {
        let xs: alloc::vec::Vec<Block> = samples().collect();
        for pair in xs.windows(3) {
            let (y, x, h) = (pair[0], pair[1], pair[2]);
            let composed = ShiftMultiplier.multiply(y ^ x, h);
            let fused = KaratsubaMultiplier.multiply_accumulate(y, x, h);
            assert_eq!(composed, fused);
            assert_eq!(ShiftMultiplier.multiply(x, h), ShiftMultiplier.multiply(h, x));
        }
    }

    // McGrew & Viega test case 2: GHASH(H, {}, C) folds C and then the lengths block.
    #[test]
    fn test_case_2_ghash_intermediates() {
        let lengths = Block::lengths(0, 128);
        let x1 = ShiftMultiplier.multiply(C, H);
        assert_eq!(x1, Block::from_bytes(hex!("5e2ec746917062882c85b0685353deb7")));
        let x2 = ShiftMultiplier.multiply(x1 ^ lengths, H);
        assert_eq!(x2, Block::from_bytes(hex!("f38cbb1ad69223dcc3457ae5b6b0f885")));

        let y1 = KaratsubaMultiplier.multiply_accumulate(Block::ZERO, C, H);
        let y2 = KaratsubaMultiplier.multiply_accumulate(y1, lengths, H);
        assert_eq!(y1, x1);
        assert_eq!(y2, x2);
    }
}
