//! Fixture data model: individual vectors and the suites that group them.

use gcm_ref::{Direction, TAG_SIZE};
use std::borrow::Cow;

/// Fixture bytes: borrowed for compiled-in suites, owned when loaded from disk.
pub type Bytes = Cow<'static, [u8]>;

/// A single GCM known-answer vector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestVector {
    /// Raw key bytes.
    pub key: Bytes,
    /// Nonce (IV) of any non-zero length.
    pub nonce: Bytes,
    /// Plaintext; absent for tag-only vectors.
    pub plaintext: Option<Bytes>,
    /// Ciphertext; absent only for encrypt vectors with no expected text.
    pub ciphertext: Option<Bytes>,
    /// Associated data, possibly empty.
    pub aad: Bytes,
    /// Expected tag, 1 to 16 bytes.
    pub tag: Bytes,
    /// Which way the engine is driven.
    pub direction: Direction,
    /// A tag mismatch is the passing outcome.
    pub expect_fail: bool,
}

impl TestVector {
    /// Bytes fed to the engine: plaintext when encrypting, ciphertext when
    /// decrypting. Missing data is an empty message.
    #[must_use]
    pub fn input(&self) -> &[u8] {
        let input = match self.direction {
            Direction::Encrypt => &self.plaintext,
            Direction::Decrypt => &self.ciphertext,
        };
        input.as_deref().unwrap_or_default()
    }

    /// Bytes the engine must produce, if the vector pins them.
    ///
    /// Tag-only vectors have no plaintext and never get a text comparison,
    /// even when they carry a ciphertext.
    #[must_use]
    pub fn expected_output(&self) -> Option<&[u8]> {
        self.plaintext.as_ref()?;
        let output = match self.direction {
            Direction::Encrypt => &self.ciphertext,
            Direction::Decrypt => &self.plaintext,
        };
        Some(output.as_deref().unwrap_or_default())
    }

    /// Assert the vector is internally consistent.
    ///
    /// # Panics
    /// On an empty nonce, a tag outside 1..=16 bytes, an encrypt vector
    /// with a ciphertext but no plaintext, or plaintext and ciphertext of
    /// different lengths.
    pub fn check_integrity(&self) {
        assert!(!self.nonce.is_empty(), "vector has an empty nonce");
        assert!(
            (1..=TAG_SIZE).contains(&self.tag.len()),
            "vector tag length {} outside 1..={TAG_SIZE}",
            self.tag.len()
        );
        if self.direction == Direction::Encrypt {
            assert!(
                self.plaintext.is_some() || self.ciphertext.is_none(),
                "encrypt vector carries a ciphertext but no plaintext"
            );
        }
        if let (Some(pt), Some(ct)) = (&self.plaintext, &self.ciphertext) {
            assert_eq!(
                pt.len(),
                ct.len(),
                "plaintext and ciphertext lengths differ"
            );
        }
    }
}

/// A named, ordered group of vectors sharing one key length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestSuite {
    /// Suite name used in diagnostics and `--suite` filtering.
    pub name: Cow<'static, str>,
    /// Key length in bits; suites other than 128 and 256 are skipped.
    pub key_bits: usize,
    /// Vectors in run order.
    pub vectors: Vec<TestVector>,
}

impl TestSuite {
    /// Number of vectors in the suite.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Whether the suite has no vectors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}
