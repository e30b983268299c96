use crate::{
    cli,
    error::ProcessFault,
    record,
    summary::{NoGamesCompleted, TournamentSummary},
    tournament::{GameResult, GameTicket, Tournament, TournamentState},
};
use log::error;

pub struct RecordOutWrapper {
    inner: Box<dyn Tournament>,
    records: record::RecordWriter,
}

impl RecordOutWrapper {
    pub fn new(
        inner: Box<dyn Tournament>,
        options: &cli::RecordOutOptions,
        engine_names: [String; 2],
    ) -> Result<RecordOutWrapper, std::io::Error> {
        Ok(RecordOutWrapper {
            inner,
            records: record::RecordWriter::create(options, engine_names)?,
        })
    }
}

impl Tournament for RecordOutWrapper {
    fn next(&mut self) -> Option<GameTicket> {
        self.inner.as_mut().next()
    }
    fn game_complete(&mut self, ticket: &GameTicket, result: &GameResult) -> TournamentState {
        if let Err(e) = self.records.write(ticket, result) {
            error!("could not write record of game {}: {e}", ticket.id + 1);
        }
        self.inner.as_mut().game_complete(ticket, result)
    }
    fn game_aborted(&mut self, ticket: &GameTicket, fault: &ProcessFault) {
        self.inner.as_mut().game_aborted(ticket, fault)
    }
    fn tournament_complete(&mut self, summary: &Result<TournamentSummary, NoGamesCompleted>) {
        self.inner.as_mut().tournament_complete(summary)
    }
    fn expected_maximum_game_count(&self) -> Option<u64> {
        self.inner.as_ref().expected_maximum_game_count()
    }
}
