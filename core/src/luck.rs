//! Daily luck reading — name + chosen number + date in, four outcomes out.
//!
//! Slice map (32-char digest, all ranges disjoint):
//!   [0,2)  score   % 101        → luck percentage 0..=100
//!   [2,4)  color   % 5          → LUCKY_COLORS index
//!   [4,6)  time    % 4          → LUCKY_TIMES index
//!   [6,8)  advice  % 5          → LUCKY_ADVICE index
//!
//! Outcome tables are reproduced verbatim from the reference
//! implementation; reorder or reword an entry and every historical
//! reading changes.

use crate::{
    canonical::{canonical_key, KeyField},
    digest::Digest,
    error::{OmenError, OmenResult},
    outcome::OutcomeSpec,
    types::Percent,
};
use chrono::NaiveDate;
use serde::Serialize;

// ── Fixed reference tables ───────────────────────────────────────────────────

pub const LUCKY_COLORS: [&str; 5] = [
    "Red ❤️",
    "Blue 💙",
    "Green 💚",
    "Yellow 💛",
    "Purple 💜",
];

pub const LUCKY_TIMES: [&str; 4] = [
    "🌅 Morning (6–10 AM)",
    "☀️ Afternoon (12–4 PM)",
    "🌆 Evening (6–9 PM)",
    "🌙 Night (10 PM)",
];

pub const LUCKY_ADVICE: [&str; 5] = [
    "💰 Paiso ka risk aaj avoid karo",
    "📚 Aaj learning ke liye best day",
    "❤️ Communication pe dhyaan do",
    "🚀 Aaj action lene ka sahi time hai",
    "😌 Calm raho, sab theek hoga",
];

// ── Slice map ────────────────────────────────────────────────────────────────

const SCORE: OutcomeSpec = OutcomeSpec::bounded(0, 2, 101, 0);
const COLOR: OutcomeSpec = OutcomeSpec::index(2, 2, LUCKY_COLORS.len());
const TIME: OutcomeSpec = OutcomeSpec::index(4, 2, LUCKY_TIMES.len());
const ADVICE: OutcomeSpec = OutcomeSpec::index(6, 2, LUCKY_ADVICE.len());

// ── Public types ─────────────────────────────────────────────────────────────

/// Verdict tier derived from the luck score by fixed thresholds.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LuckTier {
    VeryBad,  // 0..=25
    Average,  // 26..=50
    Good,     // 51..=75
    VeryLucky, // 76..=100
}

impl LuckTier {
    pub fn from_score(score: Percent) -> Self {
        match score {
            0..=25 => Self::VeryBad,
            26..=50 => Self::Average,
            51..=75 => Self::Good,
            _ => Self::VeryLucky,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryBad => "😭 Very Bad Luck",
            Self::Average => "😐 Average Luck",
            Self::Good => "🙂 Good Luck",
            Self::VeryLucky => "😎 Very Lucky Day",
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LuckReading {
    pub date:   NaiveDate,
    pub score:  Percent,
    pub tier:   LuckTier,
    pub color:  &'static str,
    pub time:   &'static str,
    pub advice: &'static str,
}

impl LuckReading {
    pub fn to_json(&self) -> OmenResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ── Derivation ───────────────────────────────────────────────────────────────

/// Derive today's luck reading for a name and a chosen number (1..=9).
///
/// The name is the one free-text input and the one error source: blank or
/// whitespace-only names are rejected before any key or digest work.
/// The number is caller-constrained to the fixed 1..=9 vocabulary.
pub fn read_luck(name: &str, number: u32, date: NaiveDate) -> OmenResult<LuckReading> {
    if name.trim().is_empty() {
        return Err(OmenError::EmptyField { field: "name" });
    }

    let key = canonical_key(&[
        KeyField::Text(name),
        KeyField::Number(number),
        KeyField::Date(date),
    ]);
    let digest = Digest::of(&key);

    let score = SCORE.apply(&digest) as Percent;
    log::debug!("luck key={key} score={score}");

    Ok(LuckReading {
        date,
        score,
        tier: LuckTier::from_score(score),
        color: COLOR.pick(&digest, &LUCKY_COLORS),
        time: TIME.pick(&digest, &LUCKY_TIMES),
        advice: ADVICE.pick(&digest, &LUCKY_ADVICE),
    })
}
