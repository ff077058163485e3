//! Development tasks for Dungeon project
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod dirs;

use anyhow::Result;
use clap::Parser;
use commands::{Clean, InspectSave};

/// Development tasks for Dungeon project
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for Dungeon", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Decode and inspect a save file
    InspectSave(InspectSave),

    /// Clean the save file and logs
    Clean(Clean),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for DUNGEON_SAVE_PATH and other env vars)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match cli.command {
        Command::InspectSave(cmd) => cmd.execute(),
        Command::Clean(cmd) => cmd.execute(),
    }
}
