//! Shared primitive types used across the entire crate.

/// A percentage-style score, always within 0..=100.
pub type Percent = u8;

/// Predicted runs. May exceed 100; never negative after the final clamp.
pub type Runs = i32;

/// Predicted strike rate, in whole runs-per-100-balls.
pub type StrikeRate = i32;
