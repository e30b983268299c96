use crate::engine::EngineAdapter;
use crate::error::ProcessFault;
use crate::side::{Color, Identity};
use log::{debug, warn};

pub const SWITCH: &str = "switch";
pub const EVALUATE: &str = "evaluate";
pub const DEFAULT_MARKER: &str = "#";

/// Evaluations always come from this build, whichever side is to move.
pub const EVALUATION_SOURCE: Identity = Identity::Candidate;

/// The three-command conversation a game is made of: one initialization,
/// alternating `switch` calls, and a final `evaluate`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Protocol {
    pub init: Color,
    pub marker: String,
}

impl Default for Protocol {
    fn default() -> Self {
        Protocol {
            init: Color::default(),
            marker: String::from(DEFAULT_MARKER),
        }
    }
}

impl Protocol {
    /// Tells `identity` to take the first turn of a new game.
    pub fn init<A: EngineAdapter + ?Sized>(
        &self,
        adapter: &mut A,
        identity: Identity,
    ) -> Result<(), ProcessFault> {
        adapter.invoke(identity, self.init.as_command())?;
        Ok(())
    }

    /// Has `identity` make its next move. Returns true once the reply carries
    /// the termination marker.
    pub fn advance<A: EngineAdapter + ?Sized>(
        &self,
        adapter: &mut A,
        identity: Identity,
    ) -> Result<bool, ProcessFault> {
        let output = adapter.invoke(identity, SWITCH)?;
        let terminated = memchr::memmem::find(output.as_bytes(), self.marker.as_bytes()).is_some();
        if terminated {
            debug!("{identity} reported the end of the game");
        }
        Ok(terminated)
    }

    /// Score of the current position, positive when white is ahead. A reply
    /// that is not an integer counts as a tie.
    pub fn evaluate<A: EngineAdapter + ?Sized>(&self, adapter: &mut A) -> Result<i32, ProcessFault> {
        let output = adapter.invoke(EVALUATION_SOURCE, EVALUATE)?;
        match output.trim().parse::<i32>() {
            Ok(score) => Ok(score),
            Err(e) => {
                warn!("Unable to evaluate: {EVALUATION_SOURCE} replied {output:?} ({e})");
                Ok(0)
            }
        }
    }
}
