use arrayvec::ArrayString;

use super::Position;
use crate::config::GameConfig;

/// Fixed-capacity entity name. Matches the name field of a save record.
pub type EntityName = ArrayString<{ GameConfig::NAME_CAPACITY }>;

/// Builds an [`EntityName`] from arbitrary text.
///
/// The name stops at the first NUL character and is truncated to
/// [`GameConfig::NAME_CAPACITY`] bytes on a char boundary.
pub fn entity_name(raw: &str) -> EntityName {
    let raw = raw.split('\0').next().unwrap_or_default();

    let mut end = raw.len().min(GameConfig::NAME_CAPACITY);
    while !raw.is_char_boundary(end) {
        end -= 1;
    }

    let mut name = EntityName::new();
    name.push_str(&raw[..end]);
    name
}

/// Which side of the fight an entity is on.
///
/// The simulation only knows two factions: the single player and everything
/// hostile to it.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Faction {
    Player,
    #[default]
    Enemy,
}

impl Faction {
    pub const fn from_is_player(is_player: bool) -> Self {
        if is_player {
            Faction::Player
        } else {
            Faction::Enemy
        }
    }

    /// Check if an entity of this faction starts combat when it walks into
    /// an entity of `other`.
    ///
    /// Only the player attacks, and only non-players. Enemy collisions never
    /// resolve combat.
    pub const fn attacks(self, other: Faction) -> bool {
        matches!((self, other), (Faction::Player, Faction::Enemy))
    }
}

/// A character on the map: the player or one of the enemies.
///
/// `health` and `armor` are signed so that user-supplied starting stats are
/// kept verbatim; combat clamps both to zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    pub name: EntityName,
    pub health: i32,
    pub armor: i32,
    pub damage: i32,
    pub position: Position,
    pub faction: Faction,
}

impl Entity {
    /// Create an entity with zeroed stats. Chain [`Entity::with_stats`] to
    /// fill them in.
    pub fn new(name: &str, faction: Faction, position: Position) -> Self {
        Self {
            name: entity_name(name),
            health: 0,
            armor: 0,
            damage: 0,
            position,
            faction,
        }
    }

    pub fn player(name: &str, position: Position) -> Self {
        Self::new(name, Faction::Player, position)
    }

    pub fn enemy(name: &str, position: Position) -> Self {
        Self::new(name, Faction::Enemy, position)
    }

    pub fn with_stats(mut self, health: i32, armor: i32, damage: i32) -> Self {
        self.health = health;
        self.armor = armor;
        self.damage = damage;
        self
    }

    #[inline]
    pub fn is_player(&self) -> bool {
        self.faction == Faction::Player
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_names_are_kept_verbatim() {
        assert_eq!(entity_name("Enemy #3").as_str(), "Enemy #3");
        assert_eq!(entity_name("").as_str(), "");
    }

    #[test]
    fn long_names_are_truncated_on_a_char_boundary() {
        let ascii = "a".repeat(GameConfig::NAME_CAPACITY + 8);
        assert_eq!(entity_name(&ascii).len(), GameConfig::NAME_CAPACITY);

        // 'é' is two bytes; 31 bytes of 'a' leave room for one byte only.
        let mixed = format!("{}é", "a".repeat(GameConfig::NAME_CAPACITY - 1));
        let name = entity_name(&mixed);
        assert_eq!(name.len(), GameConfig::NAME_CAPACITY - 1);
        assert!(name.chars().all(|c| c == 'a'));
    }

    #[test]
    fn names_stop_at_nul() {
        assert_eq!(entity_name("Hero\0junk").as_str(), "Hero");
    }

    #[test]
    fn only_the_player_attacks_enemies() {
        assert!(Faction::Player.attacks(Faction::Enemy));
        assert!(!Faction::Player.attacks(Faction::Player));
        assert!(!Faction::Enemy.attacks(Faction::Player));
        assert!(!Faction::Enemy.attacks(Faction::Enemy));
    }

    #[test]
    fn liveness_follows_health() {
        let hero = Entity::player("Hero", Position::ORIGIN).with_stats(1, 0, 0);
        assert!(hero.is_alive());
        assert!(hero.is_player());

        let corpse = Entity::enemy("Enemy #1", Position::ORIGIN).with_stats(0, 5, 20);
        assert!(!corpse.is_alive());
        assert!(!corpse.is_player());
    }
}
