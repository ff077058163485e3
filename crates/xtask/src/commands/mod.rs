//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod clean;
mod inspect_save;

pub use clean::Clean;
pub use inspect_save::InspectSave;
