//! Performance reading acceptance: pinned historical scenarios, the
//! single end-of-pipeline clamp, and a full sweep of the fixed
//! selection space for the boundedness invariants.

use chrono::NaiveDate;
use omen_core::performance::{
    self, Fixture, Importance, MatchType, Mode, Opponent, Pitch, PlayerProfile, Strength, Venue,
    Verdict,
};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn player(name: &str) -> &'static PlayerProfile {
    performance::players()
        .iter()
        .find(|p| p.name == name)
        .expect("player in fixed pool")
}

fn opponent(label_prefix: &str) -> &'static Opponent {
    performance::international_opponents()
        .iter()
        .find(|o| o.label.starts_with(label_prefix))
        .expect("opponent in fixed pool")
}

// Pinned scenario: Virat Kohli, T20 vs Australia, home league match on a
// flat pitch, 2024-01-01. Digest 3db2d365... → draw 46, then
// +10 opener −12 strong +8 home +0 league +5 flat +0 T20 = 57.
#[test]
fn virat_reference_scenario_is_reproduced_exactly() {
    let fixture = Fixture {
        player: player("Virat Kohli"),
        match_type: MatchType::T20,
        mode: Mode::International,
        opponent: opponent("Australia"),
        venue: Venue::Home,
        importance: Importance::League,
        pitch: Pitch::Flat,
    };
    let reading = performance::predict(&fixture, date("2024-01-01"));
    assert_eq!(reading.runs, 57);
    assert_eq!(reading.strike_rate, 138);
    assert_eq!(reading.verdict, Verdict::MatchDefining);
    assert_eq!(reading.meter(), 57);
}

// Jasprit Bumrah's draw of 5 accumulates −5 lower −12 strong −5 away
// −5 knockout −8 green = −30 before the clamp. The reported stat must
// be 0, not −30, and the clamp must not have fired earlier.
#[test]
fn negative_adjusted_total_clamps_to_zero_once_at_the_end() {
    let fixture = Fixture {
        player: player("Jasprit Bumrah"),
        match_type: MatchType::T20,
        mode: Mode::International,
        opponent: opponent("Australia"),
        venue: Venue::Away,
        importance: Importance::Knockout,
        pitch: Pitch::Green,
    };
    let reading = performance::predict(&fixture, date("2024-01-01"));
    assert_eq!(reading.runs, 0);
    assert_eq!(reading.verdict, Verdict::NetPractice);
    // Strike rate is untouched by the runs clamp.
    assert_eq!(reading.strike_rate, 185);
}

// A Test innings can exceed 100 runs; the meter view clamps at 100 but
// the stat itself must keep the real value.
#[test]
fn meter_clamps_at_100_without_touching_the_stat() {
    let fixture = Fixture {
        player: player("Virat Kohli"),
        match_type: MatchType::Test,
        mode: Mode::Ipl,
        opponent: &performance::ipl_opponents()[0], // CSK
        venue: Venue::Home,
        importance: Importance::League,
        pitch: Pitch::Spin,
    };
    let reading = performance::predict(&fixture, date("2024-01-01"));
    assert_eq!(reading.runs, 106);
    assert_eq!(reading.meter(), 100);
    assert_eq!(reading.strike_rate, 67);
    assert_eq!(reading.verdict, Verdict::Classic);
}

#[test]
fn hardik_knockout_scenario_is_reproduced_exactly() {
    let fixture = Fixture {
        player: player("Hardik Pandya"),
        match_type: MatchType::Odi,
        mode: Mode::International,
        opponent: opponent("England"),
        venue: Venue::Away,
        importance: Importance::Knockout,
        pitch: Pitch::Green,
    };
    let reading = performance::predict(&fixture, date("2024-03-11"));
    assert_eq!(reading.runs, 22);
    assert_eq!(reading.strike_rate, 131);
    assert_eq!(reading.verdict, Verdict::Decent);
}

#[test]
fn full_selection_sweep_respects_bounds() {
    let match_types = [MatchType::T20, MatchType::Odi, MatchType::Test];
    let venues = [Venue::Home, Venue::Away];
    let importances = [Importance::League, Importance::Knockout];
    let pitches = [Pitch::Flat, Pitch::Green, Pitch::Spin];
    let d = date("2024-06-30");

    for player in performance::players() {
        for (mode, pool) in [
            (Mode::International, performance::international_opponents()),
            (Mode::Ipl, performance::ipl_opponents()),
        ] {
            for opponent in pool {
                for match_type in match_types {
                    for venue in venues {
                        for importance in importances {
                            for pitch in pitches {
                                let fixture = Fixture {
                                    player,
                                    match_type,
                                    mode,
                                    opponent,
                                    venue,
                                    importance,
                                    pitch,
                                };
                                let r = performance::predict(&fixture, d);
                                assert!(r.runs >= 0, "negative runs for {fixture:?}");
                                assert!(r.meter() <= 100);
                                let (lo, hi) = match (match_type, mode) {
                                    (MatchType::T20, Mode::Ipl) => (145, 225),
                                    (MatchType::T20, Mode::International) => (120, 200),
                                    (MatchType::Odi, _) => (85, 135),
                                    (MatchType::Test, _) => (45, 70),
                                };
                                assert!(
                                    r.strike_rate >= lo && r.strike_rate < hi,
                                    "strike rate {} outside [{lo}, {hi}) for {fixture:?}",
                                    r.strike_rate
                                );
                            }
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn verdict_thresholds() {
    assert_eq!(Verdict::from_runs(0), Verdict::NetPractice);
    assert_eq!(Verdict::from_runs(19), Verdict::NetPractice);
    assert_eq!(Verdict::from_runs(20), Verdict::Decent);
    assert_eq!(Verdict::from_runs(49), Verdict::Decent);
    assert_eq!(Verdict::from_runs(50), Verdict::MatchDefining);
    assert_eq!(Verdict::from_runs(79), Verdict::MatchDefining);
    assert_eq!(Verdict::from_runs(80), Verdict::Classic);
}

#[test]
fn reference_pools_are_frozen() {
    assert_eq!(performance::players().len(), 6);
    assert_eq!(performance::international_opponents().len(), 8);
    assert_eq!(performance::ipl_opponents().len(), 5);
    assert!(performance::ipl_opponents()
        .iter()
        .all(|o| o.strength == Strength::Average));
    assert_eq!(player("Hardik Pandya").base, (18, 55));
}
