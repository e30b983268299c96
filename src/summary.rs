use crate::side::Identity;
use crate::tournament::GameResult;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("no games completed")]
pub struct NoGamesCompleted;

/// Running totals over the games finished so far.
#[derive(Debug, Default, Clone)]
pub struct SummaryBuilder {
    games_played: u32,
    wins_candidate: u32,
    wins_baseline: u32,
    ties: u32,
    score_candidate: i64,
    clock_candidate: Duration,
    clock_baseline: Duration,
}

impl SummaryBuilder {
    pub fn new() -> SummaryBuilder {
        SummaryBuilder::default()
    }

    pub fn add(&mut self, result: &GameResult) {
        self.clock_candidate += result.clock_candidate;
        self.clock_baseline += result.clock_baseline;
        self.score_candidate += result.candidate_advantage();
        match result.winner() {
            Some(Identity::Candidate) => self.wins_candidate += 1,
            Some(Identity::Baseline) => self.wins_baseline += 1,
            None => self.ties += 1,
        }
        self.games_played += 1;
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    pub fn finish(&self) -> Result<TournamentSummary, NoGamesCompleted> {
        if self.games_played == 0 {
            return Err(NoGamesCompleted);
        }
        let n = self.games_played;
        Ok(TournamentSummary {
            games_played: n,
            wins_candidate: self.wins_candidate,
            wins_baseline: self.wins_baseline,
            ties: self.ties,
            avg_score_candidate: self.score_candidate as f64 / f64::from(n),
            avg_clock_candidate: self.clock_candidate / n,
            avg_clock_baseline: self.clock_baseline / n,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TournamentSummary {
    pub games_played: u32,
    pub wins_candidate: u32,
    pub wins_baseline: u32,
    pub ties: u32,
    pub avg_score_candidate: f64,
    pub avg_clock_candidate: Duration,
    pub avg_clock_baseline: Duration,
}

impl TournamentSummary {
    /// The identity favored by the average score; a zero average names neither.
    pub fn best(&self) -> Option<Identity> {
        if self.avg_score_candidate > 0.0 {
            Some(Identity::Candidate)
        } else if self.avg_score_candidate < 0.0 {
            Some(Identity::Baseline)
        } else {
            None
        }
    }

    pub fn faster(&self) -> Option<Identity> {
        crate::clock::faster(self.avg_clock_candidate, self.avg_clock_baseline)
    }
}
