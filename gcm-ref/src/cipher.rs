//! Block cipher adapter: AES key schedules behind a single encrypt-only
//! interface, dispatched on the key size recorded at expansion time.

use crate::block::Block;
use aes::{Aes128, Aes256};
use cipher::{BlockCipherEncrypt, KeyInit};
use core::fmt;

/// Number of blocks handed to the AES backend per batch.
pub const PAR_BLOCKS: usize = 8;

/// Encrypt-only view of a 128-bit block cipher.
pub trait BlockEncrypt {
    /// Encrypt a single block.
    fn encrypt_block(&self, block: &Block) -> Block;

    /// Encrypt a batch of independent blocks in place.
    fn encrypt_blocks(&self, blocks: &mut [Block]) {
        for block in blocks {
            *block = self.encrypt_block(block);
        }
    }
}

/// Supported AES key sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeySize {
    /// AES-128
    Aes128,
    /// AES-256
    Aes256,
}

impl KeySize {
    /// Map a key length in bits to a supported size.
    #[must_use]
    pub const fn from_bits(bits: usize) -> Option<Self> {
        match bits {
            128 => Some(Self::Aes128),
            256 => Some(Self::Aes256),
            _ => None,
        }
    }

    /// Key length in bits.
    #[must_use]
    pub const fn bits(self) -> usize {
        match self {
            Self::Aes128 => 128,
            Self::Aes256 => 256,
        }
    }

    /// Key length in bytes.
    #[must_use]
    pub const fn key_len(self) -> usize {
        self.bits() / 8
    }
}

enum Schedule {
    Aes128(Aes128),
    Aes256(Aes256),
}

/// An expanded AES key schedule.
///
/// Created once per message key and immutable afterwards. With the `zeroize`
/// feature enabled the round keys are wiped when this value is dropped.
pub struct ExpandedKey {
    schedule: Schedule,
}

impl ExpandedKey {
    /// Expand `key` into a `key_bits` AES schedule.
    ///
    /// # Panics
    /// If `key_bits` is neither 128 nor 256, or `key` is not exactly
    /// `key_bits / 8` bytes long. Both indicate a malformed caller setup.
    #[must_use]
    pub fn expand(key: &[u8], key_bits: usize) -> Self {
        let Some(size) = KeySize::from_bits(key_bits) else {
            panic!("invalid key length: {key_bits} bits");
        };
        assert!(
            key.len() == size.key_len(),
            "{} key bytes supplied for a {key_bits}-bit schedule",
            key.len()
        );
        let schedule = match size {
            KeySize::Aes128 => Aes128::new_from_slice(key).map(Schedule::Aes128),
            KeySize::Aes256 => Aes256::new_from_slice(key).map(Schedule::Aes256),
        };
        match schedule {
            Ok(schedule) => Self { schedule },
            Err(_) => unreachable!("key length checked against {size:?}"),
        }
    }

    /// Size of the key this schedule was expanded from.
    #[must_use]
    pub fn key_size(&self) -> KeySize {
        match self.schedule {
            Schedule::Aes128(_) => KeySize::Aes128,
            Schedule::Aes256(_) => KeySize::Aes256,
        }
    }
}

impl BlockEncrypt for ExpandedKey {
    fn encrypt_block(&self, block: &Block) -> Block {
        let mut buf = aes::Block::default();
        buf.copy_from_slice(block.as_bytes());
        match &self.schedule {
            Schedule::Aes128(c) => c.encrypt_block(&mut buf),
            Schedule::Aes256(c) => c.encrypt_block(&mut buf),
        }
        Block::from_partial(&buf)
    }

    fn encrypt_blocks(&self, blocks: &mut [Block]) {
        for chunk in blocks.chunks_mut(PAR_BLOCKS) {
            let mut buf: [aes::Block; PAR_BLOCKS] = Default::default();
            let buf = &mut buf[..chunk.len()];
            for (dst, src) in buf.iter_mut().zip(chunk.iter()) {
                dst.copy_from_slice(src.as_bytes());
            }
            match &self.schedule {
                Schedule::Aes128(c) => c.encrypt_blocks(buf),
                Schedule::Aes256(c) => c.encrypt_blocks(buf),
            }
            for (dst, src) in chunk.iter_mut().zip(buf.iter()) {
                *dst = Block::from_partial(src);
            }
        }
    }
}

impl fmt::Debug for ExpandedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpandedKey")
            .field("key_size", &self.key_size())
            .finish_non_exhaustive()
    }
}
