//! omen-core — deterministic daily reading engine.
//!
//! RULE: Nothing in this crate may read ambient system time or call any
//! platform RNG. Every reading is a pure function of its inputs plus an
//! explicitly passed calendar date. All pseudo-randomness flows through
//! fixed-offset slices of one MD5 digest of the canonical key.
//!
//! Pipeline, every reading, every time:
//!   1. Validate inputs (caller-facing errors happen here, nowhere later).
//!   2. Canonicalize the input tuple + date into one key string.
//!   3. Digest the key (MD5, 32 lowercase hex chars).
//!   4. Map disjoint digest slices into bounded outcomes.
//!
//! Same inputs + same day = same reading. Tomorrow = new reading.

pub mod canonical;
pub mod digest;
pub mod error;
pub mod finance;
pub mod luck;
pub mod outcome;
pub mod performance;
pub mod types;

pub use digest::Digest;
pub use error::{OmenError, OmenResult};
pub use luck::LuckReading;
pub use performance::PerformanceReading;
