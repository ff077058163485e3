//! In-memory SaveRepository implementation for tests and local runs.

use std::sync::RwLock;

use game_core::Entity;

use crate::repository::codec;
use crate::repository::{RepositoryError, Result, SaveRepository};

/// In-memory implementation of SaveRepository.
///
/// Keeps the encoded bytes rather than the entities so that loads go through
/// the same decoder as the file repository.
pub struct InMemorySaveRepo {
    slot: RwLock<Option<Vec<u8>>>,
}

impl InMemorySaveRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }

    /// Create a repository whose slot already holds `bytes`.
    pub fn with_bytes(bytes: Vec<u8>) -> Self {
        Self {
            slot: RwLock::new(Some(bytes)),
        }
    }

    /// Copy of the raw slot contents.
    pub fn bytes(&self) -> Result<Option<Vec<u8>>> {
        let slot = self.slot.read().map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(slot.clone())
    }
}

impl Default for InMemorySaveRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl SaveRepository for InMemorySaveRepo {
    fn save(&self, entities: &[Entity]) -> Result<()> {
        let mut slot = self
            .slot
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *slot = Some(codec::encode(entities));
        Ok(())
    }

    fn load(&self) -> Result<Option<Vec<Entity>>> {
        let slot = self.slot.read().map_err(|_| RepositoryError::LockPoisoned)?;
        slot.as_deref().map(codec::decode).transpose()
    }

    fn exists(&self) -> bool {
        self.slot
            .read()
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }
}
