mod common;
mod entity;
mod grid;
mod registry;
mod turn;

pub use common::Position;
pub use entity::{Entity, EntityName, Faction, entity_name};
pub use grid::{Cell, Grid};
pub use registry::EntityRegistry;
pub use turn::{GameOutcome, TurnPhase, TurnState};
