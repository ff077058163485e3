use core::ops::RangeInclusive;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Number of enemies spawned for a new game.
    pub enemy_count: usize,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Side length of the square map, in cells.
    pub const MAP_SIZE: usize = 20;
    /// Maximum byte length of an entity name. Also the width of the name field
    /// in a save record.
    pub const NAME_CAPACITY: usize = 32;

    // ===== combat balance =====
    /// Armor is divided by this before being subtracted from incoming damage.
    pub const ARMOR_DIVISOR: i32 = 2;

    // ===== enemy generation =====
    pub const ENEMY_HEALTH: RangeInclusive<i32> = 50..=150;
    pub const ENEMY_ARMOR: RangeInclusive<i32> = 0..=50;
    pub const ENEMY_DAMAGE: RangeInclusive<i32> = 15..=30;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ENEMY_COUNT: usize = 5;

    pub fn new() -> Self {
        Self {
            enemy_count: Self::DEFAULT_ENEMY_COUNT,
        }
    }

    pub fn with_enemy_count(enemy_count: usize) -> Self {
        Self { enemy_count }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
