//! Per-message GCM engine.

use crate::Error;
use crate::block::Block;
use crate::cipher::{BlockEncrypt, ExpandedKey};
use crate::ctr::Ctr;
use crate::ghash::{Ghash, GhashBackend};
use crate::{icb, tag};
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

/// Direction of a GCM operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Plaintext in, ciphertext out.
    Encrypt,
    /// Ciphertext in, plaintext out.
    Decrypt,
}

/// Everything one message produces, including the intermediates a
/// conformance dump wants to show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GcmOutput {
    /// Ciphertext when encrypting, plaintext when decrypting.
    pub text: Vec<u8>,
    /// Full 128-bit tag; callers truncate as needed.
    pub tag: Block,
    /// Initial counter block `J0`.
    pub icb: Block,
    /// `GHASH_H(A, C)` before masking.
    pub ghash: Block,
}

/// GCM over an expanded key and a GHASH strategy.
///
/// The hash subkey is computed once at construction; each call to
/// [`Gcm::process`] handles one message with fresh per-message state.
pub struct Gcm<'a, B: ?Sized, C: ?Sized = ExpandedKey> {
    cipher: &'a C,
    backend: &'a B,
    h: Block,
}

impl<'a, B, C> Gcm<'a, B, C>
where
    B: GhashBackend + ?Sized,
    C: BlockEncrypt + ?Sized,
{
    /// Bind a cipher to a GHASH backend, computing `H = E(0^128)`.
    pub fn new(cipher: &'a C, backend: &'a B) -> Self {
        let h = cipher.encrypt_block(&Block::ZERO);
        tracing::trace!(h = %h, "hash subkey");
        Self { cipher, backend, h }
    }

    /// The hash subkey `H`.
    #[must_use]
    pub fn hash_subkey(&self) -> Block {
        self.h
    }

    /// Derive `J0` for `nonce`.
    ///
    /// # Panics
    /// If `nonce` is empty.
    #[must_use]
    pub fn initial_counter_block(&self, nonce: &[u8]) -> Block {
        icb::derive(self.backend, &self.h, nonce)
    }

    /// Run one message in `direction`.
    ///
    /// GHASH always covers the ciphertext: the output when encrypting, the
    /// input when decrypting.
    ///
    /// # Panics
    /// If `nonce` is empty.
    #[must_use]
    pub fn process(
        &self,
        direction: Direction,
        nonce: &[u8],
        aad: &[u8],
        input: &[u8],
    ) -> GcmOutput {
        let icb = self.initial_counter_block(nonce);
        tracing::trace!(icb = %icb, ?direction, "initial counter block");

        let mut text = vec![0u8; input.len()];
        Ctr::new(self.cipher, &icb).apply_keystream_b2b(input, &mut text);

        let ciphertext = match direction {
            Direction::Encrypt => &text[..],
            Direction::Decrypt => input,
        };
        let mut ghash = Ghash::new(self.backend, self.h);
        ghash.update_padded(aad);
        ghash.update_padded(ciphertext);
        let ghash = ghash.finalize(aad.len(), ciphertext.len());

        let tag = tag::synthesize(self.cipher, &icb, &ghash);
        GcmOutput {
            text,
            tag,
            icb,
            ghash,
        }
    }

    /// Encrypt `plaintext`, returning the ciphertext and full-length tag.
    #[must_use]
    pub fn encrypt(&self, nonce: &[u8], aad: &[u8], plaintext: &[u8]) -> (Vec<u8>, Block) {
        let out = self.process(Direction::Encrypt, nonce, aad, plaintext);
        (out.text, out.tag)
    }

    /// Decrypt `ciphertext` and check it against `tag`, which may be
    /// truncated to as little as one byte.
    ///
    /// # Errors
    /// [`Error::TagMismatch`] if authentication fails; no plaintext is
    /// released in that case.
    ///
    /// # Panics
    /// If `nonce` is empty or `tag` is not 1 to 16 bytes long.
    pub fn decrypt(
        &self,
        nonce: &[u8],
        aad: &[u8],
        ciphertext: &[u8],
        tag: &[u8],
    ) -> Result<Vec<u8>, Error> {
        let out = self.process(Direction::Decrypt, nonce, aad, ciphertext);
        if tag::verify(&out.tag, tag) {
            Ok(out.text)
        } else {
            Err(Error::TagMismatch)
        }
    }
}

impl<B: ?Sized, C: ?Sized> fmt::Debug for Gcm<'_, B, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gcm").finish_non_exhaustive()
    }
}
