use crate::{cli, side::Identity, tournament};
use std::fs::File;
use std::io::{Error, Write};

/// Appends one tag-pair block per finished game.
#[derive(Debug)]
pub struct RecordWriter<W: Write = File> {
    out: W,
    engine_names: [String; 2],
}

impl RecordWriter<File> {
    pub fn create(
        options: &cli::RecordOutOptions,
        engine_names: [String; 2],
    ) -> Result<RecordWriter<File>, Error> {
        Ok(RecordWriter::new(File::create_new(&options.file)?, engine_names))
    }
}

impl<W: Write> RecordWriter<W> {
    pub fn new(out: W, engine_names: [String; 2]) -> RecordWriter<W> {
        RecordWriter { out, engine_names }
    }

    fn write_header(out: &mut W, key: &str, value: &str) -> Result<(), Error> {
        writeln!(out, "[{} {:?}]", key, value)?;
        Ok(())
    }

    fn name(&self, identity: Identity) -> &str {
        &self.engine_names[identity.to_index()]
    }

    pub fn write(
        &mut self,
        ticket: &tournament::GameTicket,
        result: &tournament::GameResult,
    ) -> Result<(), Error> {
        let white = self.name(ticket.start).to_string();
        let black = self.name(ticket.start.opponent()).to_string();
        let winner = match result.winner() {
            Some(identity) => identity.to_string(),
            None => String::from("tie"),
        };
        let f = &mut self.out;

        Self::write_header(f, "Game", &(ticket.id + 1).to_string())?;
        Self::write_header(f, "Date", &result.game_start.format("%Y-%m-%d").to_string())?;
        Self::write_header(f, "GameStartTime", &result.game_start.to_rfc3339())?;
        Self::write_header(f, "White", &white)?;
        Self::write_header(f, "Black", &black)?;
        Self::write_header(f, "Start", &ticket.start.to_string())?;
        Self::write_header(f, "PlyCount", &result.plies.to_string())?;
        Self::write_header(f, "Termination", &result.end.to_string())?;
        Self::write_header(f, "Score", &result.score.to_string())?;
        Self::write_header(f, "Winner", &winner)?;
        Self::write_header(
            f,
            "CandidateTime",
            &format!("{}s", result.clock_candidate.as_secs_f64()),
        )?;
        Self::write_header(
            f,
            "BaselineTime",
            &format!("{}s", result.clock_baseline.as_secs_f64()),
        )?;
        writeln!(f)?;
        f.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tournament::{GameTicket, result};

    fn names() -> [String; 2] {
        [String::from("new"), String::from("old")]
    }

    #[test]
    fn block_names_white_from_start_identity() {
        let mut writer = RecordWriter::new(Vec::new(), names());
        let ticket = GameTicket {
            id: 1,
            start: Identity::Baseline,
        };
        writer
            .write(&ticket, &result(Identity::Baseline, -12, 1500, 250))
            .unwrap();
        let text = String::from_utf8(writer.into_inner()).unwrap();
        assert!(text.contains("[Game \"2\"]"));
        assert!(text.contains("[White \"old\"]"));
        assert!(text.contains("[Black \"new\"]"));
        assert!(text.contains("[Score \"-12\"]"));
        assert!(text.contains("[Winner \"candidate\"]"));
        assert!(text.contains("[CandidateTime \"1.5s\"]"));
        assert!(text.contains("[Termination \"move limit\"]"));
        assert!(text.ends_with("\n\n"));
    }

    #[test]
    fn refuses_to_overwrite_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let options = cli::RecordOutOptions {
            file: dir.path().join("games.txt").to_string_lossy().into_owned(),
        };
        assert!(RecordWriter::create(&options, names()).is_ok());
        assert!(RecordWriter::create(&options, names()).is_err());
    }
}
