//! Errors surfaced by the runtime API.
//!
//! Wraps repository and turn failures so clients can bubble them up with
//! consistent context. None of them end the session: issuing another command
//! is always allowed.

use thiserror::Error;

use game_core::{ErrorSeverity, GameError, TurnError};

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Turn(#[from] TurnError),
}

impl RuntimeError {
    /// Classification used by clients to pick a log level.
    ///
    /// I/O failures may go away on retry; unreadable save data will not.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::Turn(error) => error.severity(),
            RuntimeError::Repository(RepositoryError::Io(_)) => ErrorSeverity::Recoverable,
            RuntimeError::Repository(
                RepositoryError::CorruptedData(_) | RepositoryError::TruncatedRecord { .. },
            ) => ErrorSeverity::Validation,
            RuntimeError::Repository(RepositoryError::LockPoisoned) => ErrorSeverity::Internal,
        }
    }
}
