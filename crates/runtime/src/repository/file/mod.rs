//! File-based repository implementations.

mod state;

pub use state::FileSaveRepository;
