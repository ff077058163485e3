//! File-based SaveRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use game_core::Entity;

use crate::repository::codec;
use crate::repository::{RepositoryError, Result, SaveRepository};

/// File-based implementation of SaveRepository.
///
/// The slot is a single file in the [`codec`] layout. Writes go to a sibling
/// temp file first and are renamed over the target, so an interrupted save
/// leaves the previous slot intact.
pub struct FileSaveRepository {
    path: PathBuf,
}

impl FileSaveRepository {
    /// Create a repository over `path`. The file does not need to exist.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl SaveRepository for FileSaveRepository {
    fn save(&self, entities: &[Entity]) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(RepositoryError::Io)?;
        }

        let temp_path = self.temp_path();
        fs::write(&temp_path, codec::encode(entities)).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &self.path).map_err(RepositoryError::Io)?;

        tracing::debug!(
            "Saved {} entities to {}",
            entities.len(),
            self.path.display()
        );

        Ok(())
    }

    fn load(&self) -> Result<Option<Vec<Entity>>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&self.path).map_err(RepositoryError::Io)?;
        let entities = codec::decode(&bytes)?;

        tracing::debug!(
            "Loaded {} entities from {}",
            entities.len(),
            self.path.display()
        );

        Ok(Some(entities))
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}
