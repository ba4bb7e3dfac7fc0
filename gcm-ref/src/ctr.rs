//! Counter mode with a 32-bit big-endian counter in the low word of the
//! block (the GCM `inc32` function).

use crate::block::{BLOCK_SIZE, Block};
use crate::cipher::{BlockEncrypt, PAR_BLOCKS};
use core::fmt;

/// A counter block: 96 fixed high bits and a 32-bit counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(transparent)]
pub struct CounterBlock(Block);

impl CounterBlock {
    /// Wrap an existing block.
    #[inline]
    #[must_use]
    pub const fn new(block: Block) -> Self {
        Self(block)
    }

    /// The low 32 bits, read big-endian.
    #[inline]
    #[must_use]
    pub fn counter(&self) -> u32 {
        self.0.words()[3]
    }

    /// Increment the low 32 bits modulo 2^32, leaving the high 96 bits alone.
    #[inline]
    pub fn increment(&mut self) {
        let next = self.counter().wrapping_add(1);
        self.0.as_mut_bytes()[12..].copy_from_slice(&next.to_be_bytes());
    }

    /// The current block.
    #[inline]
    #[must_use]
    pub const fn block(&self) -> Block {
        self.0
    }
}

/// CTR keystream generator.
///
/// Starts from `inc32(J0)`; `J0` itself is reserved for the tag mask.
pub struct Ctr<'a, C: ?Sized> {
    cipher: &'a C,
    counter: CounterBlock,
}

impl<'a, C: BlockEncrypt + ?Sized> Ctr<'a, C> {
    /// Create a generator whose first keystream block is `E(inc32(icb))`.
    pub fn new(cipher: &'a C, icb: &Block) -> Self {
        let mut counter = CounterBlock::new(*icb);
        counter.increment();
        Self { cipher, counter }
    }

    /// The counter block that will produce the next keystream block.
    #[must_use]
    pub fn counter(&self) -> CounterBlock {
        self.counter
    }

    /// Fill `blocks` with consecutive keystream blocks.
    pub fn keystream_batch(&mut self, blocks: &mut [Block]) {
        for block in blocks.iter_mut() {
            *block = self.counter.block();
            self.counter.increment();
        }
        self.cipher.encrypt_blocks(blocks);
    }

    /// XOR the keystream with `input`, writing to `output`.
    ///
    /// # Panics
    /// If `input` and `output` differ in length.
    pub fn apply_keystream_b2b(&mut self, input: &[u8], output: &mut [u8]) {
        assert_eq!(
            input.len(),
            output.len(),
            "input and output buffers must have equal length"
        );
        let mut keystream = [Block::ZERO; PAR_BLOCKS];
        let chunk_len = PAR_BLOCKS * BLOCK_SIZE;
        for (src, dst) in input.chunks(chunk_len).zip(output.chunks_mut(chunk_len)) {
            let n = src.len().div_ceil(BLOCK_SIZE);
            self.keystream_batch(&mut keystream[..n]);
            let stream = keystream[..n].iter().copied().flat_map(Block::to_bytes);
            for ((d, s), k) in dst.iter_mut().zip(src).zip(stream) {
                *d = s ^ k;
            }
        }
    }
}

impl<C: ?Sized> fmt::Debug for Ctr<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ctr")
            .field("counter", &self.counter)
            .finish_non_exhaustive()
    }
}
