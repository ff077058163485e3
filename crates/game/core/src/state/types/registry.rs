use super::{Entity, Position};

/// Ordered collection of every entity in the world.
///
/// Order is insertion order and is significant: index 0 is the player for
/// move dispatch, enemies move in registry order, and the first entity found
/// on a cell is the one a mover collides with.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityRegistry {
    entities: Vec<Entity>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entities(entities: Vec<Entity>) -> Self {
        Self { entities }
    }

    pub fn push(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entity> {
        self.entities.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Entity> {
        self.entities.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn as_slice(&self) -> &[Entity] {
        &self.entities
    }

    pub fn into_vec(self) -> Vec<Entity> {
        self.entities
    }

    /// The entity that receives the player's commands, if index 0 holds one.
    pub fn player(&self) -> Option<&Entity> {
        self.entities.first().filter(|entity| entity.is_player())
    }

    /// Indices of every non-player entity, in registry order.
    pub fn enemy_indices(&self) -> Vec<usize> {
        self.entities
            .iter()
            .enumerate()
            .filter(|(_, entity)| !entity.is_player())
            .map(|(index, _)| index)
            .collect()
    }

    /// Index of the first entity standing on `position`.
    ///
    /// Dead entities that have not been pruned yet still count.
    pub fn occupant_at(&self, position: Position) -> Option<usize> {
        self.entities
            .iter()
            .position(|entity| entity.position == position)
    }

    /// Removes every entity with no health left, keeping the survivors in
    /// their relative order. Returns the removed entities.
    pub fn prune_dead(&mut self) -> Vec<Entity> {
        let (alive, dead): (Vec<Entity>, Vec<Entity>) = self
            .entities
            .drain(..)
            .partition(|entity| entity.is_alive());
        self.entities = alive;
        dead
    }

    /// Swaps in a complete new entity list, dropping the current one.
    pub fn replace(&mut self, entities: Vec<Entity>) {
        self.entities = entities;
    }
}

impl FromIterator<Entity> for EntityRegistry {
    fn from_iter<I: IntoIterator<Item = Entity>>(iter: I) -> Self {
        Self::from_entities(iter.into_iter().collect())
    }
}
