use crate::side::Identity;
use lazy_static::lazy_static;
use regex::Regex;
use std::time::Duration;

lazy_static! {
    static ref DURATION_RE: Regex =
        Regex::new(r"^(?<value>[0-9]+(?:\.[0-9]+)?)(?<unit>ms|s|m)?$").unwrap();
}

/// Parses a wall-clock limit such as `500ms`, `2s`, `1.5` (seconds) or `1m`.
pub fn parse_duration(s: &str) -> Option<Duration> {
    let captures = DURATION_RE.captures(s.trim())?;
    let value = captures.name("value")?.as_str().parse::<f64>().ok()?;
    let seconds = match captures.name("unit").map(|m| m.as_str()) {
        Some("ms") => value / 1000.0,
        Some("m") => value * 60.0,
        _ => value,
    };
    Duration::try_from_secs_f64(seconds).ok()
}

/// Seconds rounded to two decimals, the precision progress output uses.
pub fn format_seconds(duration: Duration) -> String {
    format!("{:.2}", duration.as_secs_f64())
}

/// Cumulative think time of both identities over one game.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct GameClock {
    elapsed: [Duration; 2],
}

impl GameClock {
    pub fn new() -> GameClock {
        GameClock::default()
    }

    pub fn step(&mut self, identity: Identity, duration: Duration) {
        self.elapsed[identity.to_index()] += duration;
    }

    pub fn elapsed(&self, identity: Identity) -> Duration {
        self.elapsed[identity.to_index()]
    }
}

/// The identity that used strictly less time, if any.
pub fn faster(candidate: Duration, baseline: Duration) -> Option<Identity> {
    match candidate.cmp(&baseline) {
        std::cmp::Ordering::Less => Some(Identity::Candidate),
        std::cmp::Ordering::Greater => Some(Identity::Baseline),
        std::cmp::Ordering::Equal => None,
    }
}
