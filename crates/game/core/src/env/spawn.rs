//! Initial world generation.

use super::rng::{RngOracle, compute_seed};
use crate::config::GameConfig;
use crate::state::{Entity, EntityRegistry, Position, World};

/// Draw contexts used while spawning. Spawning runs at nonce 0, before the
/// first turn, so these never collide with movement draws.
mod draw {
    pub const ROW: u32 = 0;
    pub const COLUMN: u32 = 1;
    pub const HEALTH: u32 = 2;
    pub const ARMOR: u32 = 3;
    pub const DAMAGE: u32 = 4;
}

/// Player character as entered by the user.
///
/// Stats are taken as-is; negative or zero values are not rejected here.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSpec {
    pub name: String,
    pub health: i32,
    pub armor: i32,
    pub damage: i32,
}

impl PlayerSpec {
    pub fn new(name: impl Into<String>, health: i32, armor: i32, damage: i32) -> Self {
        Self {
            name: name.into(),
            health,
            armor,
            damage,
        }
    }
}

/// Builds a fresh world: the player at index 0 followed by
/// `config.enemy_count` enemies named `Enemy #1`, `Enemy #2`, ...
///
/// Every entity gets a uniformly random cell; spawns may overlap. Enemy stats
/// are drawn from [`GameConfig::ENEMY_HEALTH`], [`GameConfig::ENEMY_ARMOR`]
/// and [`GameConfig::ENEMY_DAMAGE`].
pub fn spawn_world(
    player: &PlayerSpec,
    config: &GameConfig,
    rng: &impl RngOracle,
    game_seed: u64,
) -> World {
    let roll = |actor: usize, context: u32| compute_seed(game_seed, 0, actor as u32, context);
    let place = |actor: usize| {
        Position::new(
            rng.pick(roll(actor, draw::ROW), GameConfig::MAP_SIZE) as i32,
            rng.pick(roll(actor, draw::COLUMN), GameConfig::MAP_SIZE) as i32,
        )
    };

    let mut registry = EntityRegistry::new();
    registry.push(Entity::player(&player.name, place(0)).with_stats(
        player.health,
        player.armor,
        player.damage,
    ));

    for number in 1..=config.enemy_count {
        let enemy = Entity::enemy(&format!("Enemy #{number}"), place(number)).with_stats(
            rng.range(roll(number, draw::HEALTH), GameConfig::ENEMY_HEALTH),
            rng.range(roll(number, draw::ARMOR), GameConfig::ENEMY_ARMOR),
            rng.range(roll(number, draw::DAMAGE), GameConfig::ENEMY_DAMAGE),
        );
        registry.push(enemy);
    }

    World::new(game_seed, registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;

    fn hero() -> PlayerSpec {
        PlayerSpec::new("Hero", 100, 10, 20)
    }

    #[test]
    fn player_comes_first_with_entered_stats() {
        let world = spawn_world(&hero(), &GameConfig::default(), &PcgRng, 1);
        let player = world.registry.player().unwrap();

        assert_eq!(player.name.as_str(), "Hero");
        assert_eq!((player.health, player.armor, player.damage), (100, 10, 20));
        assert!(player.position.in_bounds());
    }

    #[test]
    fn enemies_follow_the_documented_ranges() {
        let config = GameConfig::with_enemy_count(40);
        let world = spawn_world(&hero(), &config, &PcgRng, 0xDEAD_BEEF);

        assert_eq!(world.registry.len(), 41);
        for (number, enemy) in world.registry.iter().skip(1).enumerate() {
            assert!(!enemy.is_player());
            assert_eq!(enemy.name.as_str(), format!("Enemy #{}", number + 1));
            assert!(GameConfig::ENEMY_HEALTH.contains(&enemy.health));
            assert!(GameConfig::ENEMY_ARMOR.contains(&enemy.armor));
            assert!(GameConfig::ENEMY_DAMAGE.contains(&enemy.damage));
            assert!(enemy.position.in_bounds());
        }
    }

    #[test]
    fn default_config_spawns_five_enemies() {
        let world = spawn_world(&hero(), &GameConfig::default(), &PcgRng, 3);
        assert_eq!(world.registry.enemy_indices().len(), 5);
    }

    #[test]
    fn same_seed_same_world() {
        let config = GameConfig::default();
        let a = spawn_world(&hero(), &config, &PcgRng, 77);
        let b = spawn_world(&hero(), &config, &PcgRng, 77);
        let c = spawn_world(&hero(), &config, &PcgRng, 78);

        assert_eq!(a, b);
        assert_ne!(a.registry, c.registry);
    }

    #[test]
    fn negative_stats_are_kept() {
        let spec = PlayerSpec::new("Glass", -3, -1, 0);
        let world = spawn_world(&spec, &GameConfig::with_enemy_count(0), &PcgRng, 5);
        let player = world.registry.player().unwrap();

        assert_eq!((player.health, player.armor, player.damage), (-3, -1, 0));
    }
}
