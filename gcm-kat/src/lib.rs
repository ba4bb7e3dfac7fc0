//! Conformance harness for [`gcm_ref`].
//!
//! Suites come from the compiled-in [`fixtures`] or from NIST CAVP response
//! files loaded by [`rsp`]. The [`Harness`] runs every vector against every
//! selected GHASH strategy and stops at the first mismatch.
//!
//! ```
//! use gcm_kat::{Harness, fixtures};
//!
//! let summary = Harness::default()
//!     .run(&fixtures::builtin_suites())
//!     .expect("built-in vectors pass");
//! assert_eq!(summary.suites_skipped, 1);
//! ```

pub mod fixtures;
pub mod harness;
pub mod rsp;
pub mod vector;

pub use harness::{Failure, Harness, Mismatch, Summary, run_vector};
pub use rsp::RspError;
pub use vector::{Bytes, TestSuite, TestVector};
