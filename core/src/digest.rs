//! Digest stage — a canonical key becomes 128 well-spread bits.
//!
//! MD5 is used purely as a cheap, universally reproducible bit source;
//! no cryptographic property is relied on. The 32-char lowercase hex
//! rendering is the reference width every slice offset below assumes.

use md5::{Digest as _, Md5};
use std::fmt;

/// Number of hex characters in a rendered digest.
pub const HEX_WIDTH: usize = 32;

/// A fixed-width lowercase hex digest of one canonical key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digest(String);

impl Digest {
    /// Hash a canonical key. Same input bytes, same digest — on any
    /// machine, any run, forever.
    pub fn of(key: &str) -> Self {
        use fmt::Write;
        let hash = Md5::digest(key.as_bytes());
        let mut hex = String::with_capacity(HEX_WIDTH);
        for byte in hash {
            // write! to a String cannot fail
            let _ = write!(hex, "{byte:02x}");
        }
        log::debug!("key={key:?} digest={hex}");
        Digest(hex)
    }

    /// Parse the hex slice `[offset, offset + width)` as a base-16
    /// integer. Panics on out-of-range offsets or width > 8 — slice maps
    /// are compile-time constants, so a bad one is a programming error,
    /// not an input error.
    pub fn slice(&self, offset: usize, width: usize) -> u64 {
        assert!(width >= 1 && width <= 8, "slice width must be 1..=8");
        assert!(
            offset + width <= HEX_WIDTH,
            "slice [{offset}, {}) out of digest range",
            offset + width
        );
        let hex = &self.0[offset..offset + width];
        // The digest is always lowercase hex, so this cannot fail.
        u64::from_str_radix(hex, 16).unwrap_or(0)
    }

    pub fn as_hex(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
