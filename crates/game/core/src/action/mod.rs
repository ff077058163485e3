//! Actions an entity can take on its turn.
//!
//! The grid simulation has a single action: a one-cell step that turns into
//! an attack when the player walks into an enemy.
pub mod movement;

pub use movement::{Direction, MoveError, MoveOutcome, move_entity};
