use crate::clock::GameClock;
use crate::engine::EngineAdapter;
use crate::error::ProcessFault;
use crate::protocol::Protocol;
use crate::side::Identity;
use crate::summary::{NoGamesCompleted, SummaryBuilder, TournamentSummary};
use crate::tournament::{GameEnd, GameResult, Tournament, TournamentState};
use chrono::Utc;
use log::{error, info};
use std::time::Instant;

/// How a finished run went: the summary over the games that completed, and
/// the fault that cut it short, if any.
#[derive(Debug)]
pub struct RunReport {
    pub summary: Result<TournamentSummary, NoGamesCompleted>,
    pub aborted: Option<ProcessFault>,
}

#[derive(Debug)]
pub struct Runner<A: EngineAdapter> {
    adapter: A,
    protocol: Protocol,
    max_moves: u32,
}

impl<A: EngineAdapter> Runner<A> {
    pub fn new(adapter: A, protocol: Protocol, max_moves: u32) -> Runner<A> {
        Runner {
            adapter,
            protocol,
            max_moves,
        }
    }

    /// Half-moves played after the initialization call. The odd count is
    /// intentional: the starting identity already took a turn during init.
    pub fn ply_budget(&self) -> u64 {
        (2 * u64::from(self.max_moves)).saturating_sub(1)
    }

    /// Plays games until the tournament runs out of tickets or a game faults.
    pub fn run(&mut self, tournament: &mut dyn Tournament) -> RunReport {
        let mut summary = SummaryBuilder::new();
        let mut aborted = None;

        let mut state = TournamentState::Continue;
        while state != TournamentState::Stop {
            let Some(ticket) = tournament.next() else {
                break;
            };
            info!("Starting game {} with {} to move", ticket.id + 1, ticket.start);

            match self.play_game(ticket.start) {
                Ok(result) => {
                    summary.add(&result);
                    state = tournament.game_complete(&ticket, &result);
                }
                Err(fault) => {
                    error!(
                        "Stopping after {} games; game {} failed: {fault}",
                        summary.games_played(),
                        ticket.id + 1
                    );
                    tournament.game_aborted(&ticket, &fault);
                    aborted = Some(fault);
                    break;
                }
            }
        }

        let summary = summary.finish();
        tournament.tournament_complete(&summary);
        RunReport { summary, aborted }
    }

    /// Plays one game in which `start` moves first, and scores the final
    /// position.
    pub fn play_game(&mut self, start: Identity) -> Result<GameResult, ProcessFault> {
        let game_start = Utc::now();
        let mut clock = GameClock::new();
        let mut end = GameEnd::MoveLimit;
        let mut identity = start;

        info!("1.");
        self.protocol.init(&mut self.adapter, start)?;

        let budget = self.ply_budget();
        let mut plies = 0;
        while plies < budget {
            plies += 1;
            if plies % 2 == 0 {
                info!("{}.", plies / 2 + 1);
            }
            identity = identity.opponent();

            let now = Instant::now();
            let terminated = self.protocol.advance(&mut self.adapter, identity)?;
            clock.step(identity, now.elapsed());

            if terminated {
                info!("Game has ended after {plies} half-moves");
                end = GameEnd::Terminated;
                break;
            }
        }

        let score = self.protocol.evaluate(&mut self.adapter)?;

        Ok(GameResult {
            start,
            game_start,
            clock_candidate: clock.elapsed(Identity::Candidate),
            clock_baseline: clock.elapsed(Identity::Baseline),
            score,
            plies,
            end,
        })
    }

    #[cfg(test)]
    pub fn adapter(&self) -> &A {
        &self.adapter
    }
}
