//! Authoritative game state representation.
//!
//! This module owns the data structures that describe entities, the rendered
//! board and turn bookkeeping. Runtime layers query this state but mutate it
//! exclusively through the engine (or by wholesale replacement on load).
pub mod types;

pub use types::{
    Cell, Entity, EntityName, EntityRegistry, Faction, GameOutcome, Grid, Position, TurnPhase,
    TurnState, entity_name,
};

/// Everything the simulation knows about one game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct World {
    /// RNG seed for deterministic random generation.
    ///
    /// Set once at game initialization and never modified. Combined with
    /// `turn.nonce` to derive a unique seed for each random draw.
    pub game_seed: u64,

    /// Turn bookkeeping including the controller phase.
    pub turn: TurnState,

    /// Every entity, player first.
    pub registry: EntityRegistry,

    /// Board projection of `registry`, refreshed by the engine.
    grid: Grid,
}

impl World {
    /// Creates a world around `registry` and renders its first grid.
    ///
    /// The phase starts as `AwaitingCommand`; run
    /// [`GameEngine::refresh`](crate::engine::GameEngine::refresh) to prune
    /// and evaluate the end condition before the first command.
    pub fn new(game_seed: u64, registry: EntityRegistry) -> Self {
        let grid = Grid::render(registry.iter());
        Self {
            game_seed,
            turn: TurnState::new(),
            registry,
            grid,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn phase(&self) -> TurnPhase {
        self.turn.phase
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.turn.phase.outcome()
    }

    pub(crate) fn rerender(&mut self) {
        self.grid = Grid::render(self.registry.iter());
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(0, EntityRegistry::new())
    }
}
