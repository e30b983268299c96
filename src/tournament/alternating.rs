use crate::{
    error::ProcessFault,
    side::Identity,
    summary::{NoGamesCompleted, TournamentSummary},
    tournament::{GameResult, GameTicket, Tournament, TournamentState},
};

/// A fixed number of games in which the starting identity alternates,
/// candidate first.
#[derive(Debug)]
pub struct Alternating {
    game_index: u64,
    completed_games: u64,
    total_games: u64,
}

impl Alternating {
    pub fn new(total_games: u64) -> Alternating {
        Alternating {
            game_index: 0,
            completed_games: 0,
            total_games,
        }
    }
}

pub fn start_identity(game_index: u64) -> Identity {
    if game_index.is_multiple_of(2) {
        Identity::Candidate
    } else {
        Identity::Baseline
    }
}

impl Tournament for Alternating {
    fn next(&mut self) -> Option<GameTicket> {
        let id = self.game_index;
        if id >= self.total_games {
            return None;
        }
        self.game_index += 1;
        Some(GameTicket {
            id,
            start: start_identity(id),
        })
    }
    fn game_complete(&mut self, _: &GameTicket, _: &GameResult) -> TournamentState {
        self.completed_games += 1;

        if self.completed_games >= self.total_games {
            TournamentState::Stop
        } else {
            TournamentState::Continue
        }
    }
    fn game_aborted(&mut self, _: &GameTicket, _: &ProcessFault) {}
    fn tournament_complete(&mut self, _: &Result<TournamentSummary, NoGamesCompleted>) {}
    fn expected_maximum_game_count(&self) -> Option<u64> {
        Some(self.total_games)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tournament::result;

    #[test]
    fn starts_alternate_candidate_first() {
        let mut tournament = Alternating::new(4);
        let starts: Vec<_> = std::iter::from_fn(|| tournament.next())
            .map(|t| (t.id, t.start))
            .collect();
        assert_eq!(
            starts,
            vec![
                (0, Identity::Candidate),
                (1, Identity::Baseline),
                (2, Identity::Candidate),
                (3, Identity::Baseline),
            ]
        );
    }

    #[test]
    fn stops_after_last_game() {
        let mut tournament = Alternating::new(2);
        let first = tournament.next().unwrap();
        let r = result(first.start, 1, 1, 1);
        assert_eq!(tournament.game_complete(&first, &r), TournamentState::Continue);
        let second = tournament.next().unwrap();
        assert_eq!(tournament.game_complete(&second, &r), TournamentState::Stop);
        assert!(tournament.next().is_none());
        assert_eq!(tournament.expected_maximum_game_count(), Some(2));
    }
}
