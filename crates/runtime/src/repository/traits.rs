//! Repository contract for the single save slot.

use game_core::Entity;

use super::Result;

/// Persistence for the save slot.
///
/// There is exactly one slot. Saving overwrites it; loading returns the
/// entities last written, in registry order.
pub trait SaveRepository: Send + Sync {
    /// Overwrite the slot with `entities`.
    fn save(&self, entities: &[Entity]) -> Result<()>;

    /// Read the slot back.
    ///
    /// Returns `Ok(None)` when nothing has been saved yet. A decoded slot is
    /// returned whole or not at all.
    fn load(&self) -> Result<Option<Vec<Entity>>>;

    /// Check if the slot holds a save.
    fn exists(&self) -> bool;
}
