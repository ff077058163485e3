//! Turn sequencing over the [`World`].
//!
//! The [`GameEngine`] is the only code that mutates a world during play. It
//! borrows the world for the duration of a call, so the runtime keeps
//! ownership and no state lives anywhere else.

mod errors;
mod turns;

pub use errors::TurnError;

use crate::action::{Direction, MoveOutcome};
use crate::state::{Entity, EntityName, GameOutcome, World};

/// One entity's move during a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnEvent {
    /// Registry index of the mover at the time it moved.
    pub actor: usize,
    pub name: EntityName,
    pub direction: Direction,
    /// Indices inside the outcome also refer to the pre-prune registry.
    pub outcome: MoveOutcome,
}

/// Complete outcome of one resolved turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    /// 1-based number of the turn just resolved.
    pub turn: u64,
    /// Player move first, then every enemy in registry order.
    pub events: Vec<TurnEvent>,
    /// Entities removed by the end-of-turn prune.
    pub pruned: Vec<Entity>,
    /// Set when this turn ended the game.
    pub outcome: Option<GameOutcome>,
}

/// Result of a prune + re-render + end check without any movement.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Refresh {
    pub pruned: Vec<Entity>,
    pub outcome: Option<GameOutcome>,
}

/// Game engine that resolves turns against a borrowed world.
pub struct GameEngine<'a> {
    world: &'a mut World,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine over the given world.
    pub fn new(world: &'a mut World) -> Self {
        Self { world }
    }

    pub fn world(&self) -> &World {
        self.world
    }

    /// Replaces every entity with `entities` (the result of a load) and
    /// refreshes the world.
    ///
    /// The turn counter and the game seed are kept.
    pub fn replace_entities(&mut self, entities: Vec<Entity>) -> Refresh {
        self.world.registry.replace(entities);
        self.refresh()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{EntityRegistry, Position, TurnPhase};

    #[test]
    fn replacing_entities_resets_phase_from_the_new_board() {
        let mut world = World::new(
            0,
            EntityRegistry::from_entities(vec![
                Entity::player("Hero", Position::ORIGIN).with_stats(0, 0, 0),
            ]),
        );
        let mut engine = GameEngine::new(&mut world);
        assert_eq!(engine.refresh().outcome, Some(GameOutcome::Defeat));

        let refresh = engine.replace_entities(vec![
            Entity::player("Hero", Position::ORIGIN).with_stats(10, 0, 5),
            Entity::enemy("Enemy #1", Position::new(4, 4)).with_stats(10, 0, 5),
            Entity::enemy("Enemy #2", Position::new(5, 5)).with_stats(0, 0, 5),
        ]);

        assert_eq!(refresh.outcome, None);
        assert_eq!(refresh.pruned.len(), 1);
        assert_eq!(world.phase(), TurnPhase::AwaitingCommand);
        assert_eq!(world.registry.len(), 2);
    }
}
