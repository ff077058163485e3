//! Combat result types and attack resolution.

use crate::state::Entity;

use super::damage::{calculate_damage, strike};

/// What an attack did to its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackOutcome {
    /// Damage removed from both health and armor (before clamping).
    pub damage: i32,
    /// Defender health after the hit.
    pub health: i32,
    /// Defender armor after the hit.
    pub armor: i32,
}

impl AttackOutcome {
    /// The defender has no health left and will be pruned at the end of the
    /// turn.
    pub fn is_lethal(&self) -> bool {
        self.health <= 0
    }
}

/// Resolve an attack of `attacker` against `defender`.
///
/// Returns `None` and leaves the defender untouched when the pairing does not
/// fight (anything other than the player walking into an enemy).
pub fn resolve_attack(attacker: &Entity, defender: &mut Entity) -> Option<AttackOutcome> {
    if !attacker.faction.attacks(defender.faction) {
        return None;
    }

    let damage = calculate_damage(attacker.damage, defender.armor);
    strike(defender, damage);

    Some(AttackOutcome {
        damage,
        health: defender.health,
        armor: defender.armor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Position;

    #[test]
    fn player_hits_enemy() {
        let player = Entity::player("Hero", Position::ORIGIN).with_stats(100, 10, 20);
        let mut enemy = Entity::enemy("Enemy #1", Position::new(0, 1)).with_stats(10, 10, 15);

        let outcome = resolve_attack(&player, &mut enemy).unwrap();

        assert_eq!(outcome.damage, 15);
        assert_eq!(outcome.health, 0);
        assert_eq!(outcome.armor, 0);
        assert!(outcome.is_lethal());
        assert_eq!(enemy.health, 0);
    }

    #[test]
    fn enemies_never_start_combat() {
        let enemy = Entity::enemy("Enemy #1", Position::ORIGIN).with_stats(50, 0, 30);
        let mut player = Entity::player("Hero", Position::new(0, 1)).with_stats(100, 10, 20);
        let mut other = Entity::enemy("Enemy #2", Position::new(1, 0)).with_stats(50, 0, 30);

        assert_eq!(resolve_attack(&enemy, &mut player), None);
        assert_eq!(resolve_attack(&enemy, &mut other), None);
        assert_eq!(player.health, 100);
        assert_eq!(other.health, 50);
    }
}
