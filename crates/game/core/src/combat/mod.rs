//! Combat resolution system.
//!
//! This module provides pure functions for resolving combat interactions.
//! All combat logic is deterministic; the only mutation is applying damage to
//! the defender handed in by the caller.
//!
//! # Core Functions
//!
//! - `resolve_attack`: faction check + damage calculation + application
//! - `calculate_damage`: attack strength reduced by half the defender's armor
//! - `apply_damage`: pool reduction (clamped to 0)

pub mod damage;
pub mod result;

pub use damage::{apply_damage, calculate_damage, strike};
pub use result::{AttackOutcome, resolve_attack};
