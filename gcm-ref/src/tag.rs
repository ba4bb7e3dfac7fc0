//! Tag synthesis and constant-time verification.

use crate::block::{BLOCK_SIZE, Block};
use crate::cipher::BlockEncrypt;
use subtle::ConstantTimeEq;

/// Size of a full GCM tag in bytes.
pub const TAG_SIZE: usize = BLOCK_SIZE;

/// `T = E(J0) ⊕ S`.
#[must_use]
pub fn synthesize<C: BlockEncrypt + ?Sized>(cipher: &C, icb: &Block, ghash: &Block) -> Block {
    cipher.encrypt_block(icb) ^ *ghash
}

/// Compare the leading `expected.len()` bytes of `computed` with `expected`
/// in constant time.
///
/// # Panics
/// If `expected` is empty or longer than [`TAG_SIZE`].
#[must_use]
pub fn verify(computed: &Block, expected: &[u8]) -> bool {
    assert!(
        (1..=TAG_SIZE).contains(&expected.len()),
        "tag length {} outside 1..={TAG_SIZE}",
        expected.len()
    );
    computed.as_bytes()[..expected.len()].ct_eq(expected).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    const TAG: Block = Block::from_bytes(hex!("5bc94fbc3221a5db94fae95ae7121a47"));

    #[test]
    fn full_and_truncated_tags() {
        assert!(verify(&TAG, &hex!("5bc94fbc3221a5db94fae95ae7121a47")));
        assert!(verify(&TAG, &hex!("5bc94fbc3221a5db94fae95a")));
        assert!(verify(&TAG, &[0x5b]));
        assert!(!verify(&TAG, &hex!("5bc94fbc3221a5db94fae95ae7121a46")));
        assert!(!verify(&TAG, &hex!("5bc94fbc3221a5db94fae95b")));
    }

    #[test]
    #[should_panic]
    fn empty_tag() {
        let _ = verify(&TAG, &[]);
    }

    #[test]
    #[should_panic]
    fn oversized_tag() {
        let _ = verify(&TAG, &[0u8; 17]);
    }
}
