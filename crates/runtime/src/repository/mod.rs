//! Save-slot persistence.
//!
//! [`SaveRepository`] is the seam between the runtime and storage. Both
//! implementations store the same byte layout defined in [`codec`].

pub mod codec;
mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileSaveRepository;
pub use memory::InMemorySaveRepo;
pub use traits::SaveRepository;
