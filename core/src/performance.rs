//! Next-match performance reading — fixture selections + date in,
//! predicted runs, strike rate and a verdict out.
//!
//! Slice map (disjoint, shared digest):
//!   [0,2)  base runs draw  % (max − min) + min
//!   [2,4)  strike rate draw, modulo and base depend on match format
//!
//! ADJUSTMENT ORDER (fixed, documented, never reordered):
//!   position → opposition → venue → importance → pitch → format bonus
//! The clamp to zero happens exactly once, after every adjustment has
//! been applied. Clamping between steps would change historical results.

use crate::{
    canonical::{canonical_key, KeyField},
    digest::Digest,
    error::OmenResult,
    outcome::{meter, OutcomeSpec},
    types::{Percent, Runs, StrikeRate},
};
use chrono::NaiveDate;
use serde::Serialize;

// ── Fixed reference data ─────────────────────────────────────────────────────

/// Batting position tier. Drives the first runs adjustment.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Opener,
    Middle,
    Lower,
}

impl Position {
    fn runs_adjust(self) -> Runs {
        match self {
            Self::Opener => 10,
            Self::Middle => 0,
            Self::Lower => -5,
        }
    }
}

/// Hidden opposition strength tier — never shown to the user, but it
/// moves the prediction more than any other single factor.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    Weak,
    Average,
    Strong,
}

impl Strength {
    fn runs_adjust(self) -> Runs {
        match self {
            Self::Weak => 15,
            Self::Average => 0,
            Self::Strong => -12,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    T20,
    Odi,
    Test,
}

impl MatchType {
    pub fn label(self) -> &'static str {
        match self {
            Self::T20 => "T20",
            Self::Odi => "ODI",
            Self::Test => "Test",
        }
    }

    /// Longer formats add runs on top of the adjusted draw.
    fn runs_bonus(self) -> Runs {
        match self {
            Self::T20 => 0,
            Self::Odi => 10,
            Self::Test => 25,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    International,
    Ipl,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Self::International => "International",
            Self::Ipl => "IPL",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Venue {
    Home,
    Away,
}

impl Venue {
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Away => "Away",
        }
    }

    fn runs_adjust(self) -> Runs {
        match self {
            Self::Home => 8,
            Self::Away => -5,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Importance {
    League,
    Knockout,
}

impl Importance {
    pub fn label(self) -> &'static str {
        match self {
            Self::League => "League Match",
            Self::Knockout => "Knockout Match",
        }
    }

    fn runs_adjust(self) -> Runs {
        match self {
            Self::League => 0,
            Self::Knockout => -5, // pressure
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Pitch {
    Flat,
    Green,
    Spin,
}

impl Pitch {
    pub fn label(self) -> &'static str {
        match self {
            Self::Flat => "Flat Pitch 🏏",
            Self::Green => "Green Pitch 🌿",
            Self::Spin => "Spin Pitch 🌀",
        }
    }

    fn runs_adjust(self) -> Runs {
        match self {
            Self::Flat => 5,
            Self::Green => -8,
            Self::Spin => -5,
        }
    }
}

/// One selectable player: display name, role, batting position and the
/// half-open `[min, max)` base runs range the draw lands in.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlayerProfile {
    pub name:     &'static str,
    pub role:     &'static str,
    pub position: Position,
    pub base:     (Runs, Runs),
}

/// One selectable opponent: display label plus hidden strength tier.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Opponent {
    pub label:    &'static str,
    pub strength: Strength,
}

/// The fixed player pool, verbatim labels and ranges.
pub fn players() -> &'static [PlayerProfile] {
    &[
        PlayerProfile { name: "Virat Kohli",    role: "Top Order", position: Position::Opener, base: (35, 85) },
        PlayerProfile { name: "Rohit Sharma",   role: "Opener",    position: Position::Opener, base: (30, 80) },
        PlayerProfile { name: "Shubman Gill",   role: "Opener",    position: Position::Opener, base: (28, 78) },
        PlayerProfile { name: "KL Rahul",       role: "Anchor",    position: Position::Middle, base: (25, 70) },
        PlayerProfile { name: "Hardik Pandya",  role: "Finisher",  position: Position::Lower,  base: (18, 55) },
        PlayerProfile { name: "Jasprit Bumrah", role: "Bowler",    position: Position::Lower,  base: (5, 25) },
    ]
}

/// International opponents with their hidden strength tiers.
pub fn international_opponents() -> &'static [Opponent] {
    &[
        Opponent { label: "Australia 🇦🇺",    strength: Strength::Strong },
        Opponent { label: "England 🏴",       strength: Strength::Strong },
        Opponent { label: "Pakistan 🇵🇰",     strength: Strength::Average },
        Opponent { label: "South Africa 🇿🇦", strength: Strength::Strong },
        Opponent { label: "Sri Lanka 🇱🇰",    strength: Strength::Average },
        Opponent { label: "Bangladesh 🇧🇩",   strength: Strength::Weak },
        Opponent { label: "Afghanistan 🇦🇫",  strength: Strength::Weak },
        Opponent { label: "Nepal 🇳🇵",        strength: Strength::Weak },
    ]
}

/// IPL opponents. Franchise strength is always Average — league depth
/// evens everyone out in the reference model.
pub fn ipl_opponents() -> &'static [Opponent] {
    &[
        Opponent { label: "CSK 🦁", strength: Strength::Average },
        Opponent { label: "MI 🔵",  strength: Strength::Average },
        Opponent { label: "RCB 🔴", strength: Strength::Average },
        Opponent { label: "KKR 🟣", strength: Strength::Average },
        Opponent { label: "GT ⚡",  strength: Strength::Average },
    ]
}

// ── Slice map ────────────────────────────────────────────────────────────────

const RUNS_DRAW_OFFSET: usize = 0;
const SR_DRAW_OFFSET: usize = 2;
const DRAW_WIDTH: usize = 2;

// ── Public types ─────────────────────────────────────────────────────────────

/// Verdict tier derived from the final predicted runs.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    NetPractice,   // 0..20
    Decent,        // 20..50
    MatchDefining, // 50..80
    Classic,       // 80..
}

impl Verdict {
    pub fn from_runs(runs: Runs) -> Self {
        match runs {
            r if r < 20 => Self::NetPractice,
            r if r < 50 => Self::Decent,
            r if r < 80 => Self::MatchDefining,
            _ => Self::Classic,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::NetPractice => "💀 Net practice vibes",
            Self::Decent => "🙂 Decent contribution",
            Self::MatchDefining => "🔥 Match defining knock",
            Self::Classic => "🐐 All-time classic",
        }
    }
}

/// All selections for one fixture. Every field comes from a fixed
/// vocabulary, so a fixture cannot be invalid by construction.
#[derive(Debug, Clone, Copy)]
pub struct Fixture {
    pub player:     &'static PlayerProfile,
    pub match_type: MatchType,
    pub mode:       Mode,
    pub opponent:   &'static Opponent,
    pub venue:      Venue,
    pub importance: Importance,
    pub pitch:      Pitch,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PerformanceReading {
    pub date:        NaiveDate,
    pub player:      &'static str,
    pub opponent:    &'static str,
    pub runs:        Runs,
    pub strike_rate: StrikeRate,
    pub verdict:     Verdict,
}

impl PerformanceReading {
    /// Progress-meter view of the predicted runs, clamped at 100.
    /// Display only — `runs` itself is the real stat and may exceed 100.
    pub fn meter(&self) -> Percent {
        meter(self.runs as i64)
    }

    pub fn to_json(&self) -> OmenResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ── Derivation ───────────────────────────────────────────────────────────────

/// Derive the performance reading for a fixture on a given date.
pub fn predict(fixture: &Fixture, date: NaiveDate) -> PerformanceReading {
    let key = canonical_key(&[
        KeyField::Label(fixture.player.name),
        KeyField::Label(fixture.match_type.label()),
        KeyField::Label(fixture.opponent.label),
        KeyField::Label(fixture.venue.label()),
        KeyField::Label(fixture.importance.label()),
        KeyField::Label(fixture.pitch.label()),
        KeyField::Label(fixture.mode.label()),
        KeyField::Date(date),
    ]);
    let digest = Digest::of(&key);

    let (min, max) = fixture.player.base;
    let draw = OutcomeSpec::bounded(RUNS_DRAW_OFFSET, DRAW_WIDTH, (max - min) as u64, min as i64);
    let mut runs = draw.apply(&digest) as Runs;

    // Fixed order — see module docs.
    runs += fixture.player.position.runs_adjust();
    runs += fixture.opponent.strength.runs_adjust();
    runs += fixture.venue.runs_adjust();
    runs += fixture.importance.runs_adjust();
    runs += fixture.pitch.runs_adjust();
    runs += fixture.match_type.runs_bonus();

    // Exactly one clamp, after all adjustments.
    runs = runs.max(0);

    let strike_rate = strike_rate_for(&digest, fixture.match_type, fixture.mode);

    log::debug!(
        "performance key={key} runs={runs} sr={strike_rate} verdict={:?}",
        Verdict::from_runs(runs)
    );

    PerformanceReading {
        date,
        player: fixture.player.name,
        opponent: fixture.opponent.label,
        runs,
        strike_rate,
        verdict: Verdict::from_runs(runs),
    }
}

/// Strike rate draw. Each format has its own modulo and base; IPL T20s
/// start from a higher floor than internationals.
fn strike_rate_for(digest: &Digest, match_type: MatchType, mode: Mode) -> StrikeRate {
    let base = match (match_type, mode) {
        (MatchType::T20, Mode::Ipl) => 145,
        (MatchType::T20, Mode::International) => 120,
        (MatchType::Odi, _) => 85,
        (MatchType::Test, _) => 45,
    };
    let modulus = match match_type {
        MatchType::T20 => 80,
        MatchType::Odi => 50,
        MatchType::Test => 25,
    };
    let spec = OutcomeSpec::bounded(SR_DRAW_OFFSET, DRAW_WIDTH, modulus, base);
    spec.apply(digest) as StrikeRate
}
