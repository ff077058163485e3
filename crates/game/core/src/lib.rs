//! Deterministic rules of the grid dungeon.
//!
//! `game-core` defines the world model (entities, registry, grid), the combat
//! and movement rules and the turn controller, and exposes pure APIs reused by
//! the runtime and offline tools. All in-game state mutation flows through
//! [`engine::GameEngine`].
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use action::{Direction, MoveError, MoveOutcome, move_entity};
pub use combat::{AttackOutcome, calculate_damage, resolve_attack};
pub use config::GameConfig;
pub use engine::{GameEngine, Refresh, TurnError, TurnEvent, TurnReport};
pub use env::{PcgRng, PlayerSpec, RngOracle, compute_seed, spawn_world};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    Cell, Entity, EntityName, EntityRegistry, Faction, GameOutcome, Grid, Position, TurnPhase,
    TurnState, World, entity_name,
};
