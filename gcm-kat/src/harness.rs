//! Fail-fast runner: every vector of every suite against every selected
//! GHASH strategy.

use crate::vector::{TestSuite, TestVector};
use gcm_ref::{ExpandedKey, Gcm, GhashBackend, KeySize, Strategy, tag};

/// How a single run disagreed with its vector.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Mismatch {
    /// The computed tag differs from the expected one.
    #[error(
        "Tag mismatch\noutput:   0x{}\nexpected: 0x{}",
        hex::encode(.computed),
        hex::encode(.expected)
    )]
    Tag {
        /// Computed tag, truncated to the expected length.
        computed: Vec<u8>,
        /// Tag from the vector.
        expected: Vec<u8>,
    },
    /// The tag matched on a vector that must fail authentication.
    #[error(
        "Tag unexpectedly matched\noutput:   0x{}\nexpected: 0x{}",
        hex::encode(.computed),
        hex::encode(.expected)
    )]
    UnexpectedMatch {
        /// Computed tag, truncated to the expected length.
        computed: Vec<u8>,
        /// Tag from the vector, which was expected not to verify.
        expected: Vec<u8>,
    },
    /// The output text differs from the expected one.
    #[error(
        "Text mismatch\ninput:    0x{}\noutput:   0x{}\nexpected: 0x{}",
        hex::encode(.input),
        hex::encode(.output),
        hex::encode(.expected)
    )]
    Text {
        /// Engine input.
        input: Vec<u8>,
        /// Engine output.
        output: Vec<u8>,
        /// Output from the vector.
        expected: Vec<u8>,
    },
}

/// The first failing run, which ends the whole harness run.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Test '{suite}' (#{index}) failed against {strategy}\n{mismatch}")]
pub struct Failure {
    /// Suite name.
    pub suite: String,
    /// Index of the vector within its suite.
    pub index: usize,
    /// Strategy that produced the mismatch.
    pub strategy: Strategy,
    /// What went wrong.
    pub mismatch: Mismatch,
}

/// Totals of a successful run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Suites whose vectors were run.
    pub suites_run: usize,
    /// Suites skipped for an unsupported key length.
    pub suites_skipped: usize,
    /// Vectors run, each counted once regardless of strategy count.
    pub vectors_run: usize,
}

/// Run one vector against one GHASH backend.
///
/// The tag check honours `expect_fail`; the text is compared only when the
/// vector carries a plaintext.
///
/// # Errors
/// The first [`Mismatch`] found.
///
/// # Panics
/// If the vector fails its integrity checks or `key_bits` is not a
/// supported key length.
pub fn run_vector(
    backend: &dyn GhashBackend,
    vector: &TestVector,
    key_bits: usize,
) -> Result<(), Mismatch> {
    vector.check_integrity();
    let key = ExpandedKey::expand(&vector.key, key_bits);
    let gcm = Gcm::new(&key, backend);
    let input = vector.input();
    let out = gcm.process(vector.direction, &vector.nonce, &vector.aad, input);

    let computed = &out.tag.as_bytes()[..vector.tag.len()];
    let matched = tag::verify(&out.tag, &vector.tag);
    match (matched, vector.expect_fail) {
        (false, false) => {
            return Err(Mismatch::Tag {
                computed: computed.to_vec(),
                expected: vector.tag.to_vec(),
            });
        }
        (true, true) => {
            return Err(Mismatch::UnexpectedMatch {
                computed: computed.to_vec(),
                expected: vector.tag.to_vec(),
            });
        }
        _ => {}
    }

    if let Some(expected) = vector.expected_output()
        && out.text != expected
    {
        return Err(Mismatch::Text {
            input: input.to_vec(),
            output: out.text,
            expected: expected.to_vec(),
        });
    }
    Ok(())
}

/// Runs suites against a fixed set of strategies.
#[derive(Clone, Debug)]
pub struct Harness {
    strategies: Vec<Strategy>,
}

impl Default for Harness {
    fn default() -> Self {
        Self::new(Strategy::ALL)
    }
}

impl Harness {
    /// Harness running each vector against every strategy in `strategies`,
    /// in order.
    pub fn new(strategies: impl IntoIterator<Item = Strategy>) -> Self {
        Self {
            strategies: strategies.into_iter().collect(),
        }
    }

    /// Strategies each vector is run against.
    #[must_use]
    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    /// Run `suites` in order, stopping at the first failure.
    ///
    /// Suites with a key length other than 128 or 256 bits are skipped.
    ///
    /// # Errors
    /// The first [`Failure`].
    pub fn run(&self, suites: &[TestSuite]) -> Result<Summary, Failure> {
        let mut summary = Summary::default();
        for suite in suites {
            if KeySize::from_bits(suite.key_bits).is_none() {
                tracing::warn!(
                    suite = %suite.name,
                    key_bits = suite.key_bits,
                    "skipping suite with unsupported key length"
                );
                summary.suites_skipped += 1;
                continue;
            }

            tracing::info!(suite = %suite.name, vectors = suite.len(), "running suite");
            for (index, vector) in suite.vectors.iter().enumerate() {
                for &strategy in &self.strategies {
                    tracing::debug!(suite = %suite.name, index, %strategy, "running vector");
                    run_vector(strategy.backend(), vector, suite.key_bits).map_err(|mismatch| {
                        Failure {
                            suite: suite.name.to_string(),
                            index,
                            strategy,
                            mismatch,
                        }
                    })?;
                }
                summary.vectors_run += 1;
            }
            summary.suites_run += 1;
            tracing::info!(suite = %suite.name, "suite passed");
        }
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dumps_match_reference_layout() {
        let tag = Mismatch::Tag {
            computed: vec![0xab, 0xcd],
            expected: vec![0xab, 0xce],
        };
        assert_eq!(
            tag.to_string(),
            "Tag mismatch\noutput:   0xabcd\nexpected: 0xabce"
        );

        let unexpected = Mismatch::UnexpectedMatch {
            computed: vec![0x5b, 0xc9],
            expected: vec![0x5b, 0xc9],
        };
        assert_eq!(
            unexpected.to_string(),
            "Tag unexpectedly matched\noutput:   0x5bc9\nexpected: 0x5bc9"
        );

        let failure = Failure {
            suite: "demo".into(),
            index: 3,
            strategy: Strategy::Fused,
            mismatch: Mismatch::Text {
                input: vec![0x00],
                output: vec![0x01],
                expected: vec![0x02],
            },
        };
        assert_eq!(
            failure.to_string(),
            "Test 'demo' (#3) failed against fused\n\
             Text mismatch\ninput:    0x00\noutput:   0x01\nexpected: 0x02"
        );
    }
}
