//! Error types for turn resolution.

use crate::action::MoveError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::GameOutcome;

/// Errors surfaced while resolving a turn through the game engine.
///
/// Every variant is raised before the world is mutated, except `Move`,
/// after which the turn is abandoned and the phase returns to
/// `AwaitingCommand`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnError {
    #[error("the game is over ({0})")]
    GameOver(GameOutcome),

    #[error("registry index 0 does not hold a player")]
    PlayerMissing,

    #[error("move failed: {0}")]
    Move(#[from] MoveError),
}

impl GameError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            TurnError::GameOver(_) | TurnError::PlayerMissing => ErrorSeverity::Validation,
            TurnError::Move(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            TurnError::GameOver(_) => "TURN_GAME_OVER",
            TurnError::PlayerMissing => "TURN_PLAYER_MISSING",
            TurnError::Move(error) => error.error_code(),
        }
    }
}
