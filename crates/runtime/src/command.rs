//! Line-oriented player commands.

use std::convert::Infallible;
use std::str::FromStr;

use game_core::Direction;

/// One line of player input, parsed.
///
/// Parsing never fails: anything unrecognised becomes [`Command::Unknown`]
/// and is ignored by the runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `L`, `R`, `U` or `D`: resolve a full turn.
    Move(Direction),
    /// `save`: write the registry to the save slot.
    Save,
    /// `load`: replace the registry from the save slot.
    Load,
    Unknown(String),
}

impl Command {
    /// Parses one input line. Surrounding whitespace is ignored, case is not.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line {
            "save" => Command::Save,
            "load" => Command::Load,
            _ => match Direction::from_str(line) {
                Ok(direction) => Command::Move(direction),
                Err(_) => Command::Unknown(line.to_owned()),
            },
        }
    }
}

impl FromStr for Command {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Command::parse(s))
    }
}
