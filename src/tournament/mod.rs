use crate::error::ProcessFault;
use crate::side::Identity;
use crate::summary::{NoGamesCompleted, TournamentSummary};
use chrono::{DateTime, Utc};
use std::fmt;
use std::time::Duration;

mod alternating;
mod record_out_wrapper;
mod reporter_wrapper;

pub use alternating::Alternating;
pub use record_out_wrapper::RecordOutWrapper;
pub use reporter_wrapper::ReporterWrapper;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameTicket {
    pub id: u64,
    pub start: Identity,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum GameEnd {
    /// An engine reply carried the termination marker.
    Terminated,
    /// The half-move budget ran out.
    MoveLimit,
}

impl fmt::Display for GameEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GameEnd::Terminated => "terminated",
            GameEnd::MoveLimit => "move limit",
        })
    }
}

/// Everything one finished game contributes to the tournament.
#[derive(Debug, Clone, PartialEq)]
pub struct GameResult {
    pub start: Identity,
    pub game_start: DateTime<Utc>,
    pub clock_candidate: Duration,
    pub clock_baseline: Duration,
    /// Canonical evaluation, positive when white (the starting identity) leads.
    pub score: i32,
    pub plies: u64,
    pub end: GameEnd,
}

impl GameResult {
    pub fn candidate_advantage(&self) -> i64 {
        candidate_advantage(self.score, self.start)
    }

    pub fn winner(&self) -> Option<Identity> {
        match self.candidate_advantage() {
            0 => None,
            a if a > 0 => Some(Identity::Candidate),
            _ => Some(Identity::Baseline),
        }
    }
}

/// Maps a white-relative score to the candidate's point of view. The starting
/// identity is the one playing white.
pub fn candidate_advantage(score: i32, start: Identity) -> i64 {
    match start {
        Identity::Candidate => i64::from(score),
        Identity::Baseline => -i64::from(score),
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TournamentState {
    Continue,
    Stop,
}

pub trait Tournament {
    fn next(&mut self) -> Option<GameTicket>;
    fn game_complete(&mut self, ticket: &GameTicket, result: &GameResult) -> TournamentState;
    fn game_aborted(&mut self, ticket: &GameTicket, fault: &ProcessFault);
    fn tournament_complete(&mut self, summary: &Result<TournamentSummary, NoGamesCompleted>);
    fn expected_maximum_game_count(&self) -> Option<u64>;
}

#[cfg(test)]
pub(crate) fn result(start: Identity, score: i32, candidate_ms: u64, baseline_ms: u64) -> GameResult {
    GameResult {
        start,
        game_start: Utc::now(),
        clock_candidate: Duration::from_millis(candidate_ms),
        clock_baseline: Duration::from_millis(baseline_ms),
        score,
        plies: 19,
        end: GameEnd::MoveLimit,
    }
}
