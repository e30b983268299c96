use std::fmt;

/// Which of the two engine builds a command is addressed to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Identity {
    /// The build under test.
    Candidate,
    /// The reference build it is compared against.
    Baseline,
}

impl Identity {
    pub const ALL: [Identity; 2] = [Identity::Candidate, Identity::Baseline];

    pub fn opponent(self) -> Identity {
        match self {
            Identity::Candidate => Identity::Baseline,
            Identity::Baseline => Identity::Candidate,
        }
    }

    pub fn to_index(self) -> usize {
        match self {
            Identity::Candidate => 0,
            Identity::Baseline => 1,
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Identity::Candidate => "candidate",
            Identity::Baseline => "baseline",
        })
    }
}

/// Side token sent with the initialization command. The harness does not
/// track colors beyond that call.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum Color {
    White,
    #[default]
    Black,
}

impl Color {
    pub fn parse(s: &str) -> Option<Color> {
        match s.to_lowercase().as_str() {
            "white" => Some(Color::White),
            "black" => Some(Color::Black),
            _ => None,
        }
    }

    pub fn as_command(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_command())
    }
}
