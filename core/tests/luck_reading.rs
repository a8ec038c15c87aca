//! Byte-for-byte compatibility with the historical luck meter, plus the
//! single error path (blank name) and the boundedness invariant.

use chrono::NaiveDate;
use omen_core::{
    luck::{self, LuckTier, LUCKY_ADVICE, LUCKY_COLORS, LUCKY_TIMES},
    Digest, OmenError,
};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

// Historical reference scenario: name "Rahul", number 5, 2024-01-01.
//   key    rahul-5-2024-01-01
//   digest 0f6111bcfe484d8cf0d71f09f78ff27f
//   score  0x0f % 101 = 15, color 0x61 % 5 = 2, time 0x11 % 4 = 1,
//   advice 0xbc % 5 = 3
#[test]
fn rahul_reference_scenario_is_reproduced_exactly() {
    let d = Digest::of("rahul-5-2024-01-01");
    assert_eq!(d.as_hex(), "0f6111bcfe484d8cf0d71f09f78ff27f");

    let reading = luck::read_luck("Rahul", 5, date("2024-01-01")).unwrap();
    assert_eq!(reading.score, 15);
    assert_eq!(reading.tier, LuckTier::VeryBad);
    assert_eq!(reading.color, LUCKY_COLORS[2]);
    assert_eq!(reading.time, LUCKY_TIMES[1]);
    assert_eq!(reading.advice, LUCKY_ADVICE[3]);
}

#[test]
fn blank_name_is_rejected_before_any_digest_work() {
    for bad in ["", "   ", "\t\n"] {
        let err = luck::read_luck(bad, 5, date("2024-01-01")).unwrap_err();
        assert!(matches!(err, OmenError::EmptyField { field: "name" }));
    }
}

#[test]
fn score_is_always_within_0_to_100() {
    let names = ["Rahul", "Alice", "Meera", "Bo", "x"];
    let days = ["2024-01-01", "2024-06-30", "2025-12-31"];
    for name in names {
        for number in 1..=9 {
            for day in days {
                let reading = luck::read_luck(name, number, date(day)).unwrap();
                assert!(reading.score <= 100, "score {} out of range", reading.score);
            }
        }
    }
}

#[test]
fn tier_thresholds_are_inclusive_at_the_top() {
    assert_eq!(LuckTier::from_score(0), LuckTier::VeryBad);
    assert_eq!(LuckTier::from_score(25), LuckTier::VeryBad);
    assert_eq!(LuckTier::from_score(26), LuckTier::Average);
    assert_eq!(LuckTier::from_score(50), LuckTier::Average);
    assert_eq!(LuckTier::from_score(51), LuckTier::Good);
    assert_eq!(LuckTier::from_score(75), LuckTier::Good);
    assert_eq!(LuckTier::from_score(76), LuckTier::VeryLucky);
    assert_eq!(LuckTier::from_score(100), LuckTier::VeryLucky);
}

#[test]
fn outcome_tables_are_the_reference_lists() {
    // Compatibility contract: entries and order are frozen.
    assert_eq!(LUCKY_COLORS.len(), 5);
    assert_eq!(LUCKY_COLORS[0], "Red ❤️");
    assert_eq!(LUCKY_TIMES.len(), 4);
    assert_eq!(LUCKY_TIMES[3], "🌙 Night (10 PM)");
    assert_eq!(LUCKY_ADVICE.len(), 5);
    assert_eq!(LUCKY_ADVICE[4], "😌 Calm raho, sab theek hoga");
}

#[test]
fn reading_serializes_to_json() {
    let reading = luck::read_luck("Rahul", 5, date("2024-01-01")).unwrap();
    let json = reading.to_json().unwrap();
    assert!(json.contains("\"score\": 15"));
    assert!(json.contains("very_bad"));
}
