//! Runtime configuration and its environment loader.

use std::env;
use std::path::PathBuf;

use game_core::GameConfig;

/// Configuration needed to start a [`Runtime`](crate::Runtime).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    /// Location of the save slot.
    pub save_path: PathBuf,
    /// Fixed game seed. `None` draws one from OS entropy at start.
    pub game_seed: Option<u64>,
}

impl RuntimeConfig {
    pub const DEFAULT_SAVE_PATH: &'static str = "save.bin";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DUNGEON_SAVE_PATH` - Save slot location (default: `save.bin`)
    /// - `DUNGEON_SEED` - Game seed for reproducible runs (default: random)
    /// - `DUNGEON_ENEMY_COUNT` - Enemies spawned at start (default: 5)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(path) = env::var_os("DUNGEON_SAVE_PATH").filter(|path| !path.is_empty()) {
            config.save_path = PathBuf::from(path);
        }

        config.game_seed = read_env::<u64>("DUNGEON_SEED");

        if let Some(count) = read_env::<usize>("DUNGEON_ENEMY_COUNT") {
            config.game_config.enemy_count = count;
        }

        config
    }

    pub fn with_seed(mut self, game_seed: u64) -> Self {
        self.game_seed = Some(game_seed);
        self
    }

    pub fn with_save_path(mut self, save_path: impl Into<PathBuf>) -> Self {
        self.save_path = save_path.into();
        self
    }

    pub fn with_enemy_count(mut self, enemy_count: usize) -> Self {
        self.game_config.enemy_count = enemy_count;
        self
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            save_path: PathBuf::from(Self::DEFAULT_SAVE_PATH),
            game_seed: None,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}
