//! Line-oriented console frontend.
//!
//! Reads the player's character, then loops: print the board, print the
//! result or the roster, prompt for a command and hand it to the runtime.
//! End of input stops the loop cleanly at any prompt.

use std::io::{self, BufRead, Write};

use game_core::{Entity, Faction, PlayerSpec, RngOracle};
use runtime::{Command, CommandReport, Runtime, RuntimeError, SaveRepository};

pub const MOVE_PROMPT: &str = "Enter move (L, R, U, D, save, load): ";

/// Console bound to an input and an output stream.
pub struct Console<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Console<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> O {
        self.output
    }

    /// Asks for the character's name and stats.
    ///
    /// The name is the first word entered. Stats are taken as-is, negative
    /// values included; non-numeric answers are asked again. Returns `None`
    /// if input ends first.
    pub fn read_player(&mut self) -> io::Result<Option<PlayerSpec>> {
        let Some(name) = self.ask_word("Enter your character's name: ")? else {
            return Ok(None);
        };
        let Some(health) = self.ask_number("Enter health: ")? else {
            return Ok(None);
        };
        let Some(armor) = self.ask_number("Enter armor: ")? else {
            return Ok(None);
        };
        let Some(damage) = self.ask_number("Enter damage: ")? else {
            return Ok(None);
        };

        Ok(Some(PlayerSpec::new(name, health, armor, damage)))
    }

    /// Runs the command loop until the game ends or input runs out.
    pub fn run<S, R>(&mut self, runtime: &mut Runtime<S, R>) -> io::Result<()>
    where
        S: SaveRepository,
        R: RngOracle,
    {
        loop {
            write!(self.output, "{}", runtime.world().grid())?;

            if let Some(outcome) = runtime.outcome() {
                writeln!(self.output, "{}", outcome.message())?;
                return Ok(());
            }

            for entity in runtime.world().registry.iter() {
                writeln!(self.output, "{}", status_line(entity))?;
            }

            writeln!(self.output)?;
            let Some(line) = self.ask(MOVE_PROMPT)? else {
                writeln!(self.output)?;
                return Ok(());
            };

            self.dispatch(runtime, Command::parse(&line))?;
        }
    }

    fn dispatch<S, R>(&mut self, runtime: &mut Runtime<S, R>, command: Command) -> io::Result<()>
    where
        S: SaveRepository,
        R: RngOracle,
    {
        let is_load = command == Command::Load;

        match runtime.handle(command) {
            Ok(CommandReport::Saved { .. }) => writeln!(self.output, "Game saved!"),
            Ok(CommandReport::Loaded(_)) => writeln!(self.output, "Game loaded!"),
            Ok(CommandReport::LoadMissing) => writeln!(self.output, "Failed to load game."),
            Ok(CommandReport::Turn(_) | CommandReport::Ignored) => Ok(()),
            Err(error) => {
                log_failure(&error);
                if is_load {
                    writeln!(self.output, "Failed to load game.")
                } else {
                    writeln!(self.output, "Error: {error}")
                }
            }
        }
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    fn ask_word(&mut self, prompt: &str) -> io::Result<Option<String>> {
        loop {
            let Some(line) = self.ask(prompt)? else {
                return Ok(None);
            };
            if let Some(word) = line.split_whitespace().next() {
                return Ok(Some(word.to_owned()));
            }
        }
    }

    fn ask_number(&mut self, prompt: &str) -> io::Result<Option<i32>> {
        loop {
            let Some(line) = self.ask(prompt)? else {
                return Ok(None);
            };
            match line.parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "Please enter a whole number.")?,
            }
        }
    }
}

fn log_failure(error: &RuntimeError) {
    let severity = error.severity();
    if severity.is_internal() {
        tracing::error!(severity = severity.as_str(), "Command failed: {}", error);
    } else {
        tracing::warn!(severity = severity.as_str(), "Command failed: {}", error);
    }
}

fn status_line(entity: &Entity) -> String {
    let label = match entity.faction {
        Faction::Player => "Player",
        Faction::Enemy => "Enemy",
    };
    format!(
        "{label}: {} h={} a={} d={}",
        entity.name, entity.health, entity.armor, entity.damage
    )
}
