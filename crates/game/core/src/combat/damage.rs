//! Damage calculation and application.

use crate::config::GameConfig;
use crate::state::Entity;

// ============================================================================
// Damage Calculation
// ============================================================================

/// Calculate damage from an attack.
///
/// # Formula
///
/// ```text
/// reduced = attacker_damage - floor(defender_armor / ARMOR_DIVISOR)
/// final   = max(reduced, 0)
/// ```
///
/// For non-negative inputs the result lies in `[0, attacker_damage]`.
pub fn calculate_damage(attacker_damage: i32, defender_armor: i32) -> i32 {
    let reduction = defender_armor.div_euclid(GameConfig::ARMOR_DIVISOR);
    attacker_damage.saturating_sub(reduction).max(0)
}

// ============================================================================
// Damage Application
// ============================================================================

/// Apply damage to a pool (health or armor).
///
/// # Returns
///
/// New pool value (clamped to 0)
pub fn apply_damage(current: i32, damage: i32) -> i32 {
    current.saturating_sub(damage).max(0)
}

/// Apply `damage` to both of the defender's pools.
///
/// Armor is consumed 1:1 alongside health, so it works as a second health
/// pool rather than a fixed reduction. Both are clamped independently.
pub fn strike(defender: &mut Entity, damage: i32) {
    defender.health = apply_damage(defender.health, damage);
    defender.armor = apply_damage(defender.armor, damage);
}
