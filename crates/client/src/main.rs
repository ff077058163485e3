//! Dungeon game client binary.
//!
//! Environment variables (a `.env` file is honoured):
//! - `DUNGEON_SAVE_PATH`, `DUNGEON_SEED`, `DUNGEON_ENEMY_COUNT` - see
//!   [`runtime::RuntimeConfig::from_env`]
//! - `RUST_LOG` - log filter (default: `info`)

use std::io;

use anyhow::Result;
use dungeon_client::{Console, logging};
use runtime::{Runtime, RuntimeConfig};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let _guard = logging::setup_logging()?;

    let config = RuntimeConfig::from_env();
    tracing::info!("Starting Dungeon client");
    tracing::info!("Save path: {}", config.save_path.display());

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    let Some(player) = console.read_player()? else {
        tracing::info!("Input closed before the character was created");
        return Ok(());
    };

    let mut runtime = Runtime::from_config(&config, &player);
    console.run(&mut runtime)?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
