//! Outcome mapping — digest slices become bounded outcomes.
//!
//! RULE: Every slice a single reading draws from its digest must use a
//! range of hex characters disjoint from every other slice of that
//! reading, so independent outcomes never correlate through shared bits.
//! Each reading module documents its slice map next to its specs.

use crate::digest::Digest;
use crate::types::Percent;

/// How a parsed slice is reduced into an outcome.
#[derive(Debug, Clone, Copy)]
pub enum Reduction {
    /// `slice % modulus + base` — percentage-like scores and stat draws.
    Bounded { modulus: u64, base: i64 },
    /// `slice % len` — an index into a fixed outcome table.
    Index { len: usize },
}

/// One outcome's slice of the digest: where to read and how to reduce.
#[derive(Debug, Clone, Copy)]
pub struct OutcomeSpec {
    pub offset: usize,
    pub width: usize,
    pub reduction: Reduction,
}

impl OutcomeSpec {
    pub const fn bounded(offset: usize, width: usize, modulus: u64, base: i64) -> Self {
        Self {
            offset,
            width,
            reduction: Reduction::Bounded { modulus, base },
        }
    }

    pub const fn index(offset: usize, width: usize, len: usize) -> Self {
        Self {
            offset,
            width,
            reduction: Reduction::Index { len },
        }
    }

    pub fn apply(&self, digest: &Digest) -> i64 {
        let raw = digest.slice(self.offset, self.width);
        match self.reduction {
            Reduction::Bounded { modulus, base } => (raw % modulus) as i64 + base,
            Reduction::Index { len } => (raw % len as u64) as i64,
        }
    }

    /// Pick from a fixed table. Only valid for `Reduction::Index` specs
    /// whose `len` matches the table.
    pub fn pick<'t, T: ?Sized>(&self, digest: &Digest, table: &'t [&'t T]) -> &'t T {
        debug_assert!(matches!(
            self.reduction,
            Reduction::Index { len } if len == table.len()
        ));
        table[self.apply(digest) as usize]
    }
}

/// Clamp a stat to a 0..=100 progress meter. Presentation only: the
/// clamped value must never feed back into further arithmetic.
pub fn meter(value: i64) -> Percent {
    value.clamp(0, 100) as Percent
}
