//! Runtime orchestration for the grid dungeon.
//!
//! Consumers embed [`Runtime`] to start a game, feed it player [`Command`]s
//! and read back what happened.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator
//! - [`command`] parses line-oriented player input
//! - [`config`] loads runtime settings from the environment
//! - [`repository`] persists the save slot
pub mod command;
pub mod config;
pub mod error;
pub mod repository;
pub mod runtime;

pub use command::Command;
pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use repository::{
    FileSaveRepository, InMemorySaveRepo, RepositoryError, SaveRepository, codec,
};
pub use runtime::{CommandReport, Runtime};
