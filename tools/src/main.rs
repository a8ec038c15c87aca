//! omen-runner: headless reading runner for omen-core.
//!
//! Usage:
//!   omen-runner --mode luck --name Rahul --number 5
//!   omen-runner --mode cricket --player "Virat Kohli" --match-type T20 \
//!               --cricket-mode International --opponent Australia \
//!               --venue Home --importance League --pitch Flat
//!   omen-runner --mode finance --income 50000 --expenses 42000 \
//!               --savings 0 --city Metro --age 31
//!
//! `--date YYYY-MM-DD` overrides today; `--json` emits the raw reading.

use anyhow::{anyhow, bail, Context, Result};
use chrono::NaiveDate;
use omen_core::{
    finance::{self, City},
    luck,
    performance::{self, Fixture, Importance, MatchType, Mode, Opponent, Pitch, Venue},
};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mode = flag_value(&args, "--mode").unwrap_or("luck");
    let json = args.iter().any(|a| a == "--json");
    let date = match flag_value(&args, "--date") {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .with_context(|| format!("invalid --date '{raw}', expected YYYY-MM-DD"))?,
        None => chrono::Local::now().date_naive(),
    };

    log::debug!("mode={mode} date={date} json={json}");

    match mode {
        "luck" => run_luck(&args, date, json),
        "cricket" => run_cricket(&args, date, json),
        "finance" => run_finance(&args, json),
        other => bail!("unknown --mode '{other}' (expected luck, cricket or finance)"),
    }
}

fn run_luck(args: &[String], date: NaiveDate, json: bool) -> Result<()> {
    let name = flag_value(args, "--name").unwrap_or("");
    let number: u32 = parse_flag(args, "--number", 7)?;
    if !(1..=9).contains(&number) {
        bail!("--number must be within 1..=9, got {number}");
    }

    let reading = luck::read_luck(name, number, date)?;

    if json {
        println!("{}", reading.to_json()?);
        return Ok(());
    }
    println!("Luck Meter — {date}");
    println!("  score:  {}%  ({})", reading.score, reading.tier.label());
    println!("  color:  {}", reading.color);
    println!("  time:   {}", reading.time);
    println!("  advice: {}", reading.advice);
    Ok(())
}

fn run_cricket(args: &[String], date: NaiveDate, json: bool) -> Result<()> {
    let player_name = flag_value(args, "--player").unwrap_or("Virat Kohli");
    let player = performance::players()
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(player_name))
        .ok_or_else(|| anyhow!("unknown --player '{player_name}' ({})", name_list()))?;

    let match_type = match flag_value(args, "--match-type").unwrap_or("T20") {
        m if m.eq_ignore_ascii_case("T20") => MatchType::T20,
        m if m.eq_ignore_ascii_case("ODI") => MatchType::Odi,
        m if m.eq_ignore_ascii_case("Test") => MatchType::Test,
        other => bail!("unknown --match-type '{other}' (expected T20, ODI or Test)"),
    };
    let mode = match flag_value(args, "--cricket-mode").unwrap_or("International") {
        m if m.eq_ignore_ascii_case("International") => Mode::International,
        m if m.eq_ignore_ascii_case("IPL") => Mode::Ipl,
        other => bail!("unknown --cricket-mode '{other}' (expected International or IPL)"),
    };
    let venue = match flag_value(args, "--venue").unwrap_or("Home") {
        v if v.eq_ignore_ascii_case("Home") => Venue::Home,
        v if v.eq_ignore_ascii_case("Away") => Venue::Away,
        other => bail!("unknown --venue '{other}' (expected Home or Away)"),
    };
    let importance = match flag_value(args, "--importance").unwrap_or("League") {
        i if i.eq_ignore_ascii_case("League") => Importance::League,
        i if i.eq_ignore_ascii_case("Knockout") => Importance::Knockout,
        other => bail!("unknown --importance '{other}' (expected League or Knockout)"),
    };
    let pitch = match flag_value(args, "--pitch").unwrap_or("Flat") {
        p if p.eq_ignore_ascii_case("Flat") => Pitch::Flat,
        p if p.eq_ignore_ascii_case("Green") => Pitch::Green,
        p if p.eq_ignore_ascii_case("Spin") => Pitch::Spin,
        other => bail!("unknown --pitch '{other}' (expected Flat, Green or Spin)"),
    };

    let pool = match mode {
        Mode::International => performance::international_opponents(),
        Mode::Ipl => performance::ipl_opponents(),
    };
    let opponent_name = flag_value(args, "--opponent").unwrap_or(pool[0].label);
    let opponent = find_opponent(pool, opponent_name)
        .ok_or_else(|| anyhow!("unknown --opponent '{opponent_name}' ({})", opponent_list(pool)))?;

    let fixture = Fixture {
        player,
        match_type,
        mode,
        opponent,
        venue,
        importance,
        pitch,
    };
    let reading = performance::predict(&fixture, date);

    if json {
        println!("{}", reading.to_json()?);
        return Ok(());
    }
    println!("{} vs {} — {date}", reading.player, reading.opponent);
    println!("  predicted runs: {}  (meter {}%)", reading.runs, reading.meter());
    println!("  strike rate:    {}", reading.strike_rate);
    println!("  verdict:        {}", reading.verdict.label());
    Ok(())
}

fn run_finance(args: &[String], json: bool) -> Result<()> {
    let income: f64 = parse_flag(args, "--income", 0.0)?;
    let expenses: f64 = parse_flag(args, "--expenses", 0.0)?;
    let savings: f64 = parse_flag(args, "--savings", 0.0)?;
    let age: u32 = parse_flag(args, "--age", 22)?;
    let city = match flag_value(args, "--city").unwrap_or("Metro") {
        c if c.eq_ignore_ascii_case("Metro") => City::Metro,
        c if c.eq_ignore_ascii_case("Tier-2") || c.eq_ignore_ascii_case("Tier2") => City::Tier2,
        c if c.eq_ignore_ascii_case("Village") => City::Village,
        other => bail!("unknown --city '{other}' (expected Metro, Tier-2 or Village)"),
    };

    let reading = finance::assess(income, expenses, savings, city, age)?;

    if json {
        println!("{}", reading.to_json()?);
        return Ok(());
    }
    println!("{}", reading.tier.label());
    println!("  {}", reading.tier.roast());
    println!("  broke meter: {}%", reading.broke_meter);
    println!("  verdict: {}", reading.tier.verdict());
    if reading.zero_savings {
        println!("  {}", finance::ZERO_SAVINGS_ROAST);
    }
    if let Some(remark) = reading.age_remark {
        println!("  {}", remark.label());
    }
    Ok(())
}

// ── Arg helpers ──────────────────────────────────────────────────────────────

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> Result<T> {
    match flag_value(args, flag) {
        Some(raw) => raw
            .parse()
            .map_err(|_| anyhow!("invalid value '{raw}' for {flag}")),
        None => Ok(default),
    }
}

/// Opponent lookup is lenient: the emoji suffix on the stored label may
/// be omitted on the command line.
fn find_opponent<'a>(pool: &'a [Opponent], query: &str) -> Option<&'a Opponent> {
    pool.iter().find(|o| {
        let bare = o.label.split_whitespace().next().unwrap_or(o.label);
        o.label.eq_ignore_ascii_case(query)
            || bare.eq_ignore_ascii_case(query)
            || o.label
                .to_lowercase()
                .starts_with(&query.trim().to_lowercase())
    })
}

fn name_list() -> String {
    performance::players()
        .iter()
        .map(|p| p.name)
        .collect::<Vec<_>>()
        .join(", ")
}

fn opponent_list(pool: &[Opponent]) -> String {
    pool.iter()
        .map(|o| o.label)
        .collect::<Vec<_>>()
        .join(", ")
}
