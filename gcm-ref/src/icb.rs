//! Initial counter block (`J0`) derivation.

use crate::block::{Block, bit_len};
use crate::ghash::{Ghash, GhashBackend};

/// Nonce length which takes the direct `IV || 0^31 || 1` path.
pub const FAST_PATH_NONCE_SIZE: usize = 12;

/// Derive `J0` from `nonce` under hash subkey `h`.
///
/// A 96-bit nonce is used directly with the 32-bit counter set to one. Any
/// other length is hashed: the zero-padded nonce blocks followed by
/// `0_64 || len(IV)_64`.
///
/// # Panics
/// If `nonce` is empty.
#[must_use]
pub fn derive<B: GhashBackend + ?Sized>(backend: &B, h: &Block, nonce: &[u8]) -> Block {
    if nonce.len() == FAST_PATH_NONCE_SIZE {
        let mut icb = Block::from_partial(nonce);
        icb.as_mut_bytes()[FAST_PATH_NONCE_SIZE..].copy_from_slice(&1u32.to_be_bytes());
        return icb;
    }

    assert!(!nonce.is_empty(), "nonce must not be empty");
    let mut ghash = Ghash::new(backend, *h);
    ghash.update_padded(nonce);
    ghash.update_block(&Block::lengths(0, bit_len(nonce.len())));
    let icb = ghash.state();
    tracing::trace!(nonce_len = nonce.len(), icb = %icb, "hashed nonce");
    icb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ghash::Strategy;
    use hex_literal::hex;

    // AES-128 encryption of zero under feffe9928665731c6d6a8f9467308308
    const H: Block = Block::from_bytes(hex!("b83b533708bf535d0aa6e52980d53b78"));

    #[test]
    fn twelve_byte_nonce_is_used_directly() {
        let nonce = hex!("cafebabefacedbaddecaf888");
        for strategy in Strategy::ALL {
            assert_eq!(
                derive(strategy.backend(), &H, &nonce),
                Block::from_bytes(hex!("cafebabefacedbaddecaf88800000001"))
            );
        }
    }

    #[test]
    fn short_nonce_is_hashed() {
        let nonce = hex!("cafebabefacedbad");
        for strategy in Strategy::ALL {
            assert_eq!(
                derive(strategy.backend(), &H, &nonce),
                Block::from_bytes(hex!("c43a83c4c4badec4354ca984db252f7d"))
            );
        }
    }

    #[test]
    fn long_nonce_is_hashed() {
        let nonce = hex!(
            "9313225df88406e555909c5aff5269aa"
            "6a7a9538534f7da1e4c303d2a318a728"
            "c3c0c95156809539fcf0e2429a6b5254"
            "16aedbf5a0de6a57a637b39b"
        );
        for strategy in Strategy::ALL {
            assert_eq!(
                derive(strategy.backend(), &H, &nonce),
                Block::from_bytes(hex!("3bab75780a31c059f83d2a44752f9864"))
            );
        }
    }

    #[test]
    #[should_panic(expected = "nonce must not be empty")]
    fn empty_nonce() {
        let _ = derive(Strategy::Fused.backend(), &H, &[]);
    }
}
