use crate::{
    clock::format_seconds,
    error::ProcessFault,
    side::Identity,
    summary::{NoGamesCompleted, TournamentSummary},
    tournament::{self, GameEnd, GameResult, GameTicket, Tournament, TournamentState},
};

/// Prints human-readable progress around another tournament.
pub struct ReporterWrapper {
    inner: Box<dyn tournament::Tournament>,
    engine_names: [String; 2],
}

impl ReporterWrapper {
    pub fn new(inner: Box<dyn tournament::Tournament>, engine_names: [String; 2]) -> ReporterWrapper {
        ReporterWrapper {
            inner,
            engine_names,
        }
    }
}

impl ReporterWrapper {
    fn format_of_max_string(&self) -> String {
        match self.expected_maximum_game_count() {
            Some(count) => format!(" of {count}"),
            None => String::from(""),
        }
    }

    fn label(&self, identity: Option<Identity>) -> String {
        match identity {
            Some(identity) => format!("{identity} ({})", self.engine_names[identity.to_index()]),
            None => String::from("neither"),
        }
    }
}

impl Tournament for ReporterWrapper {
    fn next(&mut self) -> Option<GameTicket> {
        let ticket = self.inner.as_mut().next();
        if let Some(ticket) = &ticket {
            println!(
                "=== Game {}{} ===\n{} engine plays white",
                ticket.id + 1,
                self.format_of_max_string(),
                self.label(Some(ticket.start)),
            );
        }
        ticket
    }
    fn game_complete(&mut self, ticket: &GameTicket, result: &GameResult) -> TournamentState {
        if result.end == GameEnd::Terminated {
            println!("Game has ended after {} half-moves", result.plies);
        }
        match result.winner() {
            None => println!("Board evaluation: {}; it's a tie.", result.score),
            winner => println!(
                "Board evaluation: {}; {} engine is ahead",
                result.score,
                self.label(winner)
            ),
        }
        println!(
            "Time elapsed: {} vs. {} seconds; {} engine is faster.",
            format_seconds(result.clock_candidate),
            format_seconds(result.clock_baseline),
            self.label(crate::clock::faster(
                result.clock_candidate,
                result.clock_baseline
            )),
        );
        self.inner.as_mut().game_complete(ticket, result)
    }
    fn game_aborted(&mut self, ticket: &GameTicket, fault: &ProcessFault) {
        println!("Game {} aborted: {fault}", ticket.id + 1);
        self.inner.as_mut().game_aborted(ticket, fault)
    }
    fn tournament_complete(&mut self, summary: &Result<TournamentSummary, NoGamesCompleted>) {
        println!("======");
        match summary {
            Ok(summary) => {
                println!(
                    "Games won: {} vs {} ({} tied of {}); {} engine is best",
                    summary.wins_candidate,
                    summary.wins_baseline,
                    summary.ties,
                    summary.games_played,
                    self.label(summary.best()),
                );
                println!("Average score: {:.2}", summary.avg_score_candidate);
                println!(
                    "Average time: {} vs. {} seconds; {} engine is faster.",
                    format_seconds(summary.avg_clock_candidate),
                    format_seconds(summary.avg_clock_baseline),
                    self.label(summary.faster()),
                );
            }
            Err(e) => println!("No summary: {e}"),
        }
        self.inner.as_mut().tournament_complete(summary)
    }
    fn expected_maximum_game_count(&self) -> Option<u64> {
        self.inner.as_ref().expected_maximum_game_count()
    }
}
