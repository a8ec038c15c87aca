//! Canonical key construction — the first stage of every reading.
//!
//! RULE: Field order is fixed per reading kind and must never change once
//! shipped. Reordering fields changes every digest and therefore every
//! historical outcome.
//!
//! The separator is a single `-` with no escaping, kept for byte parity
//! with the historical key format (`rahul-5-2024-01-01`). Uniqueness
//! still holds: every key shape in this crate ends in a fixed-width
//! suffix (a single-digit number and/or a 10-char ISO date), so the one
//! free-text field is always recoverable from the full string and two
//! distinct input tuples cannot collapse to the same key.

use chrono::NaiveDate;

pub const SEPARATOR: char = '-';

/// One typed field of a canonical key, in reading order.
#[derive(Debug, Clone, Copy)]
pub enum KeyField<'a> {
    /// Free text. Trimmed and lower-cased so outcomes are case-insensitive.
    Text(&'a str),
    /// A fixed-vocabulary label, rendered verbatim.
    Label(&'a str),
    /// A small integer selection, rendered in decimal.
    Number(u32),
    /// A calendar date, rendered as ISO `YYYY-MM-DD` (never a timestamp,
    /// so a reading is stable for the whole day).
    Date(NaiveDate),
}

impl KeyField<'_> {
    fn render_into(&self, out: &mut String) {
        match self {
            KeyField::Text(s) => {
                for c in s.trim().chars() {
                    out.extend(c.to_lowercase());
                }
            }
            KeyField::Label(s) => out.push_str(s),
            KeyField::Number(n) => out.push_str(&n.to_string()),
            KeyField::Date(d) => out.push_str(&d.format("%Y-%m-%d").to_string()),
        }
    }
}

/// Join the rendered fields with the separator. Callers validate required
/// fields (non-empty text) before building a key — this stage has no
/// degenerate-input behavior of its own.
pub fn canonical_key(fields: &[KeyField<'_>]) -> String {
    let mut key = String::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            key.push(SEPARATOR);
        }
        field.render_into(&mut key);
    }
    key
}
