//! Reference implementation of the Galois/Counter Mode ([GCM]) of operation
//! over AES-128 and AES-256, built to validate GHASH strategies against each
//! other and against known-answer vectors.
//!
//! The engine is assembled from small pieces that can each be inspected:
//! an AES block cipher adapter, a 32-bit counter mode keystream, initial
//! counter block derivation and a GHASH accumulator. GHASH comes in two
//! [`Strategy`] flavors sharing one interface:
//!
//! - [`Composed`]: XOR the block into the accumulator, then call a
//!   two-operand field multiply ([`ShiftMultiplier`], the bit-serial
//!   algorithm of NIST SP 800-38D).
//! - [`Fused`]: a single multiply-accumulate primitive
//!   ([`KaratsubaMultiplier`], carry-less Karatsuba with polynomial
//!   reduction).
//!
//! Both must produce identical output bit for bit.
//!
//! # ⚠️ Security Warning: Hazmat!
//!
//! This crate favors observability over speed and side-channel hardening.
//! The field multipliers are written for clarity and are not audited for
//! constant-time behavior. Do not use it to protect real data.
//!
//! # Example
//! ```
//! use gcm_ref::{ExpandedKey, Gcm, Strategy};
//! use hex_literal::hex;
//!
//! let key = ExpandedKey::expand(&[0u8; 16], 128);
//! let nonce = [0u8; 12];
//! let plaintext = [0u8; 16];
//!
//! for strategy in Strategy::ALL {
//!     let gcm = Gcm::new(&key, strategy.backend());
//!
//!     let (ciphertext, tag) = gcm.encrypt(&nonce, b"", &plaintext);
//!     assert_eq!(ciphertext, hex!("0388dace60b6a392f328c2b971b2fe78"));
//!     assert_eq!(tag.to_bytes(), hex!("ab6e47d42cec13bdf53a67b21257bddf"));
//!
//!     let decrypted = gcm.decrypt(&nonce, b"", &ciphertext, tag.as_bytes()).unwrap();
//!     assert_eq!(decrypted, plaintext);
//! }
//! ```
//!
//! [GCM]: https://csrc.nist.gov/publications/detail/sp/800-38d/final

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg"
)]

extern crate alloc;

pub mod block;
pub mod cipher;
pub mod ctr;
pub mod field;
pub mod gcm;
pub mod ghash;
pub mod icb;
pub mod tag;

pub use block::{BLOCK_SIZE, Block};
pub use crate::cipher::{BlockEncrypt, ExpandedKey, KeySize};
pub use field::{GfMulAccumulate, GfMultiply, KaratsubaMultiplier, ShiftMultiplier};
pub use gcm::{Direction, Gcm, GcmOutput};
pub use ghash::{Composed, Fused, Ghash, GhashBackend, Strategy};
pub use tag::TAG_SIZE;

/// Error returned when a GCM operation fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The computed tag does not match the expected one.
    #[error("authentication tag mismatch")]
    TagMismatch,
}
