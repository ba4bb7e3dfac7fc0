//! GHASH accumulator and the two interchangeable folding strategies.

use crate::block::{BLOCK_SIZE, Block, bit_len};
use crate::field::{GfMulAccumulate, GfMultiply, KaratsubaMultiplier, ShiftMultiplier};
use core::fmt;

/// One step of the GHASH recurrence: `Y' = (Y ⊕ X) · H`.
pub trait GhashBackend {
    /// Fold block `x` into accumulator `y` under subkey `h`.
    fn fold(&self, y: Block, x: &Block, h: &Block) -> Block;
}

/// Compose-then-multiply: the XOR and the field multiply are separate steps.
#[derive(Clone, Copy, Debug, Default)]
pub struct Composed<M = ShiftMultiplier>(pub M);

impl<M: GfMultiply> GhashBackend for Composed<M> {
    #[inline]
    fn fold(&self, y: Block, x: &Block, h: &Block) -> Block {
        let sum = y ^ *x;
        self.0.multiply(sum, *h)
    }
}

/// Fused multiply-accumulate: a single three-operand primitive call.
#[derive(Clone, Copy, Debug, Default)]
pub struct Fused<F = KaratsubaMultiplier>(pub F);

impl<F: GfMulAccumulate> GhashBackend for Fused<F> {
    #[inline]
    fn fold(&self, y: Block, x: &Block, h: &Block) -> Block {
        self.0.multiply_accumulate(y, *x, *h)
    }
}

static COMPOSED: Composed = Composed(ShiftMultiplier);
static FUSED: Fused = Fused(KaratsubaMultiplier);

/// Selectable GHASH strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// [`Composed`] over [`ShiftMultiplier`].
    Composed,
    /// [`Fused`] over [`KaratsubaMultiplier`].
    Fused,
}

impl Strategy {
    /// Every strategy, in the order a conformance run exercises them.
    pub const ALL: [Self; 2] = [Self::Composed, Self::Fused];

    /// The backend implementing this strategy.
    #[must_use]
    pub fn backend(self) -> &'static dyn GhashBackend {
        match self {
            Self::Composed => &COMPOSED,
            Self::Fused => &FUSED,
        }
    }

    /// Short lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Composed => "composed",
            Self::Fused => "fused",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Running GHASH state: the accumulator `Y` and the fixed subkey `H`.
pub struct Ghash<'a, B: ?Sized> {
    backend: &'a B,
    h: Block,
    y: Block,
}

impl<'a, B: GhashBackend + ?Sized> Ghash<'a, B> {
    /// Start a new hash under subkey `h` with `Y = 0`.
    pub fn new(backend: &'a B, h: Block) -> Self {
        Self {
            backend,
            h,
            y: Block::ZERO,
        }
    }

    /// Fold a single full block.
    #[inline]
    pub fn update_block(&mut self, x: &Block) {
        self.y = self.backend.fold(self.y, x, &self.h);
        tracing::trace!(x = %x, y = %self.y, "ghash fold");
    }

    /// Fold a byte string as 16-byte blocks, zero-padding the final partial
    /// block. An empty string folds nothing.
    pub fn update_padded(&mut self, data: &[u8]) {
        for chunk in data.chunks(BLOCK_SIZE) {
            self.update_block(&Block::from_partial(chunk));
        }
    }

    /// Current accumulator value.
    #[must_use]
    pub fn state(&self) -> Block {
        self.y
    }

    /// Fold the lengths block for `aad_len` and `text_len` bytes and return
    /// the final hash.
    ///
    /// The lengths block is folded even when both lengths are zero; with
    /// `Y = 0` that fold yields zero, so the result matches an
    /// implementation which skips it.
    #[must_use]
    pub fn finalize(mut self, aad_len: usize, text_len: usize) -> Block {
        let lengths = Block::lengths(bit_len(aad_len), bit_len(text_len));
        tracing::trace!(lengths = %lengths, "ghash lengths block");
        self.update_block(&lengths);
        self.y
    }
}

impl<B: ?Sized> fmt::Debug for Ghash<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ghash").field("y", &self.y).finish_non_exhaustive()
    }
}

/// `GHASH_H(A, C)` in one call: AAD blocks, ciphertext blocks, lengths block.
#[must_use]
pub fn ghash<B: GhashBackend + ?Sized>(backend: &B, h: Block, aad: &[u8], text: &[u8]) -> Block {
    let mut ghash = Ghash::new(backend, h);
    ghash.update_padded(aad);
    ghash.update_padded(text);
    ghash.finalize(aad.len(), text.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use hex_literal::hex;

    const H: Block = Block::from_bytes(hex!("66e94bd4ef8a2c3b884cfa59ca342b2e"));

    #[test]
    fn empty_input_hashes_to_zero() {
        for strategy in Strategy::ALL {
            assert_eq!(ghash(strategy.backend(), H, &[], &[]), Block::ZERO);
        }
    }

    #[test]
    fn lengths_block_is_always_folded() {
        // Skipping the lengths block is only invisible when everything is empty.
        let backend = Strategy::Composed.backend();
        let mut partial = Ghash::new(backend, H);
        partial.update_padded(&[0u8; 16]);
        assert_eq!(partial.state(), Block::ZERO);
        let full = partial.finalize(0, 16);
        assert_ne!(full, Block::ZERO);
    }

    #[test]
    fn strategies_report_names() {
        assert_eq!(Strategy::Composed.to_string(), "composed");
        assert_eq!(Strategy::Fused.name(), "fused");
    }
}
