//! Compiled-in suites from "The Galois/Counter Mode of Operation (GCM)",
//! McGrew & Viega, Appendix B, plus negative vectors derived from them.

use crate::vector::{TestSuite, TestVector};
use gcm_ref::Direction;
use hex_literal::hex;
use std::borrow::Cow;

const ZERO_KEY_128: [u8; 16] = [0; 16];
const ZERO_KEY_192: [u8; 24] = [0; 24];
const ZERO_KEY_256: [u8; 32] = [0; 32];
const ZERO_NONCE: [u8; 12] = [0; 12];
const ZERO_BLOCK: [u8; 16] = [0; 16];

const K1: [u8; 16] = hex!("feffe9928665731c6d6a8f9467308308");
const K1_256: [u8; 32] = hex!(
    "feffe9928665731c6d6a8f9467308308"
    "feffe9928665731c6d6a8f9467308308"
);

const P: [u8; 64] = hex!(
    "d9313225f88406e5a55909c5aff5269a"
    "86a7a9531534f7da2e4c303d8a318a72"
    "1c3c0c95956809532fcf0e2449a6b525"
    "b16aedf5aa0de657ba637b391aafd255"
);
const P60: [u8; 60] = hex!(
    "d9313225f88406e5a55909c5aff5269a"
    "86a7a9531534f7da2e4c303d8a318a72"
    "1c3c0c95956809532fcf0e2449a6b525"
    "b16aedf5aa0de657ba637b39"
);
const A: [u8; 20] = hex!("feedfacedeadbeeffeedfacedeadbeefabaddad2");
const A_TAMPERED: [u8; 20] = hex!("feedfacedeadbeeffeedfacedeadbeefabaddad3");

const IV96: [u8; 12] = hex!("cafebabefacedbaddecaf888");
const IV64: [u8; 8] = hex!("cafebabefacedbad");
const IV480: [u8; 60] = hex!(
    "9313225df88406e555909c5aff5269aa"
    "6a7a9538534f7da1e4c303d2a318a728"
    "c3c0c95156809539fcf0e2429a6b5254"
    "16aedbf5a0de6a57a637b39b"
);

const C2: [u8; 16] = hex!("0388dace60b6a392f328c2b971b2fe78");
const C3: [u8; 64] = hex!(
    "42831ec2217774244b7221b784d0d49c"
    "e3aa212f2c02a4e035c17e2329aca12e"
    "21d514b25466931c7d8f6a5aac84aa05"
    "1ba30b396a0aac973d58e091473f5985"
);
const C4: [u8; 60] = hex!(
    "42831ec2217774244b7221b784d0d49c"
    "e3aa212f2c02a4e035c17e2329aca12e"
    "21d514b25466931c7d8f6a5aac84aa05"
    "1ba30b396a0aac973d58e091"
);
const C4_TAMPERED: [u8; 60] = hex!(
    "43831ec2217774244b7221b784d0d49c"
    "e3aa212f2c02a4e035c17e2329aca12e"
    "21d514b25466931c7d8f6a5aac84aa05"
    "1ba30b396a0aac973d58e091"
);
const C5: [u8; 60] = hex!(
    "61353b4c2806934a777ff51fa22a4755"
    "699b2a714fcdc6f83766e5f97b6c7423"
    "73806900e49f24b22b097544d4896b42"
    "4989b5e1ebac0f07c23f4598"
);
const C6: [u8; 60] = hex!(
    "8ce24998625615b603a033aca13fb894"
    "be9112a5c3a211a8ba262a3cca7e2ca7"
    "01e4a9a4fba43c90ccdcb281d48c7c6f"
    "d62875d2aca417034c34aee5"
);
const C14: [u8; 16] = hex!("cea7403d4d606b6e074ec5d3baf39d18");
const C15: [u8; 64] = hex!(
    "522dc1f099567d07f47f37a32a84427d"
    "643a8cdcbfe5c0c97598a2bd2555d1aa"
    "8cb08e48590dbb3da7b08b1056828838"
    "c5f61e6393ba7a0abcc9f662898015ad"
);
const C16: [u8; 60] = hex!(
    "522dc1f099567d07f47f37a32a84427d"
    "643a8cdcbfe5c0c97598a2bd2555d1aa"
    "8cb08e48590dbb3da7b08b1056828838"
    "c5f61e6393ba7a0abcc9f662"
);
const C17: [u8; 60] = hex!(
    "c3762df1ca787d32ae47c13bf19844cb"
    "af1ae14d0b976afac52ff7d79bba9de0"
    "feb582d33934a4f0954cc2363bc73f78"
    "62ac430e64abe499f47c9b1f"
);
const C18: [u8; 60] = hex!(
    "5a8def2f0c9e53f1f75d7853659e2a20"
    "eeb2b22aafde6419a058ab4f6f746bf4"
    "0fc0c3b780f244452da3ebf1c5d82cde"
    "a2418997200ef82e44ae7e3f"
);

const T1: [u8; 16] = hex!("58e2fccefa7e3061367f1d57a4e7455a");
const T2: [u8; 16] = hex!("ab6e47d42cec13bdf53a67b21257bddf");
const T3: [u8; 16] = hex!("4d5c2af327cd64a62cf35abd2ba6fab4");
const T4: [u8; 16] = hex!("5bc94fbc3221a5db94fae95ae7121a47");
const T4_TAMPERED: [u8; 16] = hex!("5bc94fbc3221a5db94fae95ae7121a46");
const T4_TRUNCATED: [u8; 12] = hex!("5bc94fbc3221a5db94fae95a");
const T5: [u8; 16] = hex!("3612d2e79e3b0785561be14aaca2fccb");
const T6: [u8; 16] = hex!("619cc5aefffe0bfa462af43c1699d050");
const T7: [u8; 16] = hex!("cd33b28ac773f74ba00ed1f312572435");
const T13: [u8; 16] = hex!("530f8afbc74536b9a963b4f1c4cb738b");
const T14: [u8; 16] = hex!("d0d1c8a799996bf0265b98b5d48ab919");
const T15: [u8; 16] = hex!("b094dac5d93471bdec1a502270e3cc6c");
const T16: [u8; 16] = hex!("76fc6ece0f4e1768cddf8853bb2d551b");
const T17: [u8; 16] = hex!("3a337dbf46a792c45e454913fe2ea8f2");
const T18: [u8; 16] = hex!("a44a8266ee1c8eb0c8b5d4cf5ae9f19a");

/// Positive encrypt-direction vector.
fn encrypt(
    key: &'static [u8],
    nonce: &'static [u8],
    aad: &'static [u8],
    pt: &'static [u8],
    ct: &'static [u8],
    tag: &'static [u8],
) -> TestVector {
    TestVector {
        key: Cow::Borrowed(key),
        nonce: Cow::Borrowed(nonce),
        plaintext: Some(Cow::Borrowed(pt)),
        ciphertext: Some(Cow::Borrowed(ct)),
        aad: Cow::Borrowed(aad),
        tag: Cow::Borrowed(tag),
        direction: Direction::Encrypt,
        expect_fail: false,
    }
}

/// Tag-only decrypt vector which must fail authentication.
fn reject(
    key: &'static [u8],
    nonce: &'static [u8],
    aad: &'static [u8],
    ct: &'static [u8],
    tag: &'static [u8],
) -> TestVector {
    TestVector {
        key: Cow::Borrowed(key),
        nonce: Cow::Borrowed(nonce),
        plaintext: None,
        ciphertext: Some(Cow::Borrowed(ct)),
        aad: Cow::Borrowed(aad),
        tag: Cow::Borrowed(tag),
        direction: Direction::Decrypt,
        expect_fail: true,
    }
}

/// AES-128 test cases 1 to 6.
#[must_use]
pub fn gcm_spec_aes128() -> TestSuite {
    TestSuite {
        name: Cow::Borrowed("gcm-spec-aes128"),
        key_bits: 128,
        vectors: vec![
            encrypt(&ZERO_KEY_128, &ZERO_NONCE, &[], &[], &[], &T1),
            encrypt(&ZERO_KEY_128, &ZERO_NONCE, &[], &ZERO_BLOCK, &C2, &T2),
            encrypt(&K1, &IV96, &[], &P, &C3, &T3),
            encrypt(&K1, &IV96, &A, &P60, &C4, &T4),
            encrypt(&K1, &IV64, &A, &P60, &C5, &T5),
            encrypt(&K1, &IV480, &A, &P60, &C6, &T6),
        ],
    }
}

/// AES-256 test cases 13 to 18.
#[must_use]
pub fn gcm_spec_aes256() -> TestSuite {
    TestSuite {
        name: Cow::Borrowed("gcm-spec-aes256"),
        key_bits: 256,
        vectors: vec![
            encrypt(&ZERO_KEY_256, &ZERO_NONCE, &[], &[], &[], &T13),
            encrypt(&ZERO_KEY_256, &ZERO_NONCE, &[], &ZERO_BLOCK, &C14, &T14),
            encrypt(&K1_256, &IV96, &[], &P, &C15, &T15),
            encrypt(&K1_256, &IV96, &A, &P60, &C16, &T16),
            encrypt(&K1_256, &IV64, &A, &P60, &C17, &T17),
            encrypt(&K1_256, &IV480, &A, &P60, &C18, &T18),
        ],
    }
}

/// Test case 4 with the tag, ciphertext, AAD or nonce tampered, plus a
/// positive decrypt against a truncated tag.
#[must_use]
pub fn gcm_negative() -> TestSuite {
    TestSuite {
        name: Cow::Borrowed("gcm-negative"),
        key_bits: 128,
        vectors: vec![
            reject(&K1, &IV96, &A, &C4, &T4_TAMPERED),
            reject(&K1, &IV96, &A, &C4_TAMPERED, &T4),
            reject(&K1, &IV96, &A_TAMPERED, &C4, &T4),
            reject(&K1, &IV64, &A, &C4, &T4),
            TestVector {
                direction: Direction::Decrypt,
                tag: Cow::Borrowed(&T4_TRUNCATED),
                ..encrypt(&K1, &IV96, &A, &P60, &C4, &T4)
            },
        ],
    }
}

/// AES-192 test case 7. The engine has no 192-bit schedule, so the harness
/// skips this suite.
#[must_use]
pub fn gcm_spec_aes192() -> TestSuite {
    TestSuite {
        name: Cow::Borrowed("gcm-spec-aes192"),
        key_bits: 192,
        vectors: vec![encrypt(&ZERO_KEY_192, &ZERO_NONCE, &[], &[], &[], &T7)],
    }
}

/// Every compiled-in suite, in run order.
#[must_use]
pub fn builtin_suites() -> Vec<TestSuite> {
    vec![
        gcm_spec_aes128(),
        gcm_spec_aes256(),
        gcm_negative(),
        gcm_spec_aes192(),
    ]
}
