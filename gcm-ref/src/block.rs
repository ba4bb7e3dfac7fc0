//! 128-bit block type shared by the cipher, counter and GHASH layers.

use core::fmt;
use core::ops::{BitXor, BitXorAssign};

/// Size of a block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// A 128-bit value: a cipher input/output, a counter block, the hash subkey
/// `H`, the GHASH accumulator or an authentication tag.
///
/// Byte 0 is the most significant byte when the block is read as big-endian
/// words, which matches the bit ordering used throughout NIST SP 800-38D.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Block([u8; BLOCK_SIZE]);

impl Block {
    /// The all-zero block.
    pub const ZERO: Self = Self([0; BLOCK_SIZE]);

    /// Wrap 16 raw bytes.
    #[inline]
    #[must_use]
    pub const fn from_bytes(bytes: [u8; BLOCK_SIZE]) -> Self {
        Self(bytes)
    }

    /// Build a block from at most 16 bytes, padding the tail with zeros.
    ///
    /// # Panics
    /// If `bytes` is longer than [`BLOCK_SIZE`].
    #[inline]
    #[must_use]
    pub fn from_partial(bytes: &[u8]) -> Self {
        assert!(
            bytes.len() <= BLOCK_SIZE,
            "{} bytes do not fit in a block",
            bytes.len()
        );
        let mut block = [0u8; BLOCK_SIZE];
        block[..bytes.len()].copy_from_slice(bytes);
        Self(block)
    }

    /// Read the block as a big-endian 128-bit integer.
    #[inline]
    #[must_use]
    pub const fn from_u128(v: u128) -> Self {
        Self(v.to_be_bytes())
    }

    /// Interpret the block as a big-endian 128-bit integer.
    #[inline]
    #[must_use]
    pub const fn to_u128(self) -> u128 {
        u128::from_be_bytes(self.0)
    }

    /// Build a block from two big-endian 64-bit words, high word first.
    #[inline]
    #[must_use]
    pub fn from_dwords(dwords: [u64; 2]) -> Self {
        let mut block = [0u8; BLOCK_SIZE];
        block[..8].copy_from_slice(&dwords[0].to_be_bytes());
        block[8..].copy_from_slice(&dwords[1].to_be_bytes());
        Self(block)
    }

    /// The block as two big-endian 64-bit words, high word first.
    #[inline]
    #[must_use]
    pub fn dwords(&self) -> [u64; 2] {
        let mut hi = [0u8; 8];
        let mut lo = [0u8; 8];
        hi.copy_from_slice(&self.0[..8]);
        lo.copy_from_slice(&self.0[8..]);
        [u64::from_be_bytes(hi), u64::from_be_bytes(lo)]
    }

    /// The block as four big-endian 32-bit words.
    #[inline]
    #[must_use]
    pub fn words(&self) -> [u32; 4] {
        let mut words = [0u32; 4];
        for (word, chunk) in words.iter_mut().zip(self.0.chunks_exact(4)) {
            *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        words
    }

    /// The GHASH lengths block `len(A)_64 || len(C)_64`, both given in bits.
    #[inline]
    #[must_use]
    pub fn lengths(aad_bits: u64, text_bits: u64) -> Self {
        Self::from_dwords([aad_bits, text_bits])
    }

    /// Borrow the raw bytes.
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; BLOCK_SIZE] {
        &self.0
    }

    /// Mutably borrow the raw bytes.
    #[inline]
    pub fn as_mut_bytes(&mut self) -> &mut [u8; BLOCK_SIZE] {
        &mut self.0
    }

    /// Copy out the raw bytes.
    #[inline]
    #[must_use]
    pub const fn to_bytes(self) -> [u8; BLOCK_SIZE] {
        self.0
    }
}

/// Length of `len` bytes expressed in bits, as GHASH encodes it.
///
/// # Panics
/// If the bit length does not fit in 64 bits.
#[inline]
#[must_use]
pub fn bit_len(len: usize) -> u64 {
    match u64::try_from(len).ok().and_then(|len| len.checked_mul(8)) {
        Some(bits) => bits,
        None => panic!("{len} bytes overflow a 64-bit length field"),
    }
}

impl From<[u8; BLOCK_SIZE]> for Block {
    #[inline]
    fn from(bytes: [u8; BLOCK_SIZE]) -> Self {
        Self(bytes)
    }
}

impl From<Block> for [u8; BLOCK_SIZE] {
    #[inline]
    fn from(block: Block) -> Self {
        block.0
    }
}

impl AsRef<[u8]> for Block {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl BitXor for Block {
    type Output = Self;

    #[inline]
    fn bitxor(mut self, rhs: Self) -> Self {
        self ^= rhs;
        self
    }
}

impl BitXorAssign for Block {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        for (a, b) in self.0.iter_mut().zip(rhs.0.iter()) {
            *a ^= *b;
        }
    }
}

impl fmt::LowerHex for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Block({self:x})")
    }
}
