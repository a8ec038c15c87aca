//! Finance reality check — the one reading with no digest at all.
//!
//! Pure arithmetic: a city-adjusted expense ratio drives a fixed tier
//! ladder plus two side remarks. Tier strings are verbatim reference
//! data, same rule as the digest-backed tables.

use crate::{
    error::{OmenError, OmenResult},
    outcome::meter,
    types::Percent,
};
use serde::Serialize;

/// City tier. Bigger city, bigger hidden cost on top of stated expenses.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum City {
    Metro,
    Tier2,
    Village,
}

impl City {
    pub fn label(self) -> &'static str {
        match self {
            Self::Metro => "Metro",
            Self::Tier2 => "Tier-2",
            Self::Village => "Village",
        }
    }

    fn cost_factor(self) -> f64 {
        match self {
            Self::Metro => 0.15,
            Self::Tier2 => 0.08,
            Self::Village => 0.0,
        }
    }
}

/// Broke tier by adjusted expense ratio. Thresholds are inclusive lower
/// bounds, checked top-down.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BrokeTier {
    UltraBroke,  // ratio >= 1.0
    Survival,    // ratio >= 0.7
    MiddleClass, // ratio >= 0.4
    Rich,        // else
}

impl BrokeTier {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 1.0 {
            Self::UltraBroke
        } else if ratio >= 0.7 {
            Self::Survival
        } else if ratio >= 0.4 {
            Self::MiddleClass
        } else {
            Self::Rich
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::UltraBroke => "💀 ULTRA BROKE 💀",
            Self::Survival => "😬 SURVIVAL MODE 😬",
            Self::MiddleClass => "😐 MIDDLE CLASS PRO MAX 😐",
            Self::Rich => "😎 RICH (FOR NOW) 😎",
        }
    }

    pub fn roast(&self) -> &'static str {
        match self {
            Self::UltraBroke => "🫠 UPI balance dekh ke phone silent ho jata hai",
            Self::Survival => "💳 Salary aati hai, EMI le jaati hai",
            Self::MiddleClass => "📈 Dreams high, bank balance low",
            Self::Rich => "💸 Aaj party, kal ka kal dekhenge",
        }
    }

    pub fn verdict(&self) -> &'static str {
        match self {
            Self::UltraBroke => "Paisa aata hi nahi, jaata hi jaata hai",
            Self::Survival => "Zindagi chal rahi hai, savings nahi",
            Self::MiddleClass => "Stable ho, par secure nahi",
            Self::Rich => "Filhaal toh paisa tumhare control mein hai",
        }
    }
}

/// Side remark keyed on age and ratio together.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AgeRemark {
    SeriousCombo, // 30+ and still at survival-or-worse ratio
    TimeToFix,    // under 25, same ratio — fixable
}

impl AgeRemark {
    pub fn label(&self) -> &'static str {
        match self {
            Self::SeriousCombo => "⚠️ Age + Broke = Serious Combo 💀",
            Self::TimeToFix => "🧒 Young ho, sudharne ka time hai",
        }
    }
}

pub const ZERO_SAVINGS_ROAST: &str = "🏦 Savings = 0 😭  Bhavishya bhi broke hai";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FinanceReading {
    pub ratio:        f64,
    pub tier:         BrokeTier,
    pub broke_meter:  Percent,
    pub zero_savings: bool,
    pub age_remark:   Option<AgeRemark>,
}

impl FinanceReading {
    pub fn to_json(&self) -> OmenResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Assess monthly finances. Amounts are in rupees; income must be
/// positive, everything else is caller-constrained to non-negative.
pub fn assess(
    income: f64,
    expenses: f64,
    savings: f64,
    city: City,
    age: u32,
) -> OmenResult<FinanceReading> {
    if income <= 0.0 {
        return Err(OmenError::ZeroIncome);
    }

    let adjusted = expenses + expenses * city.cost_factor();
    let ratio = adjusted / income;
    let tier = BrokeTier::from_ratio(ratio);

    let age_remark = if age >= 30 && ratio >= 0.7 {
        Some(AgeRemark::SeriousCombo)
    } else if age < 25 && ratio >= 0.7 {
        Some(AgeRemark::TimeToFix)
    } else {
        None
    };

    log::debug!("finance ratio={ratio:.3} tier={tier:?}");

    Ok(FinanceReading {
        ratio,
        tier,
        broke_meter: meter((ratio * 100.0) as i64),
        zero_savings: savings == 0.0,
        age_remark,
    })
}
