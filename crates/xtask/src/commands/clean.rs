//! Clean the save file and logs command
//!
//! Provides utilities to clean up Dungeon's persistent data:
//! - Logs (cache directory)
//! - The save file (`DUNGEON_SAVE_PATH`, default `save.bin`)
//!
//! Safety: Always prompts for confirmation before deletion.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::dirs;

/// Clean the save file and logs
#[derive(Parser, Debug)]
pub struct Clean {
    /// Clean only logs (cache directory)
    #[arg(long)]
    pub logs: bool,

    /// Clean only the save file, at PATH if given
    #[arg(long, value_name = "PATH", num_args = 0..=1, default_missing_value = "")]
    pub save: Option<PathBuf>,

    /// Skip confirmation prompt (dangerous!)
    #[arg(short = 'y', long)]
    pub yes: bool,
}

enum Target {
    Dir(PathBuf),
    File(PathBuf),
}

impl Target {
    fn path(&self) -> &PathBuf {
        match self {
            Target::Dir(path) | Target::File(path) => path,
        }
    }

    fn remove(&self) -> io::Result<()> {
        match self {
            Target::Dir(path) => std::fs::remove_dir_all(path),
            Target::File(path) => std::fs::remove_file(path),
        }
    }
}

impl Clean {
    pub fn execute(self) -> Result<()> {
        // If no flags specified, clean both
        let clean_logs = self.logs || self.save.is_none();
        let clean_save = self.save.is_some() || !self.logs;

        let mut targets = Vec::new();

        if clean_logs {
            let log_dir = dirs::log_dir();
            if log_dir.exists() {
                targets.push(("All logs", Target::Dir(log_dir)));
            }
        }

        if clean_save {
            let save_path = self
                .save
                .clone()
                .filter(|path| !path.as_os_str().is_empty())
                .unwrap_or_else(dirs::save_path);
            if save_path.is_file() {
                targets.push(("Save file", Target::File(save_path)));
            }
        }

        if targets.is_empty() {
            println!(
                "{}",
                style("Nothing to clean - no save file or logs yet").dim()
            );
            return Ok(());
        }

        // Display what will be cleaned
        println!("{}", style("Clean Dungeon Data").yellow().bold());
        println!();
        println!("The following will be deleted:");
        for (label, target) in &targets {
            println!("  {} {}", style("→").cyan(), style(label).bold());
            println!("    {}", style(target.path().display()).dim());
        }
        println!();

        // Confirm deletion
        if !self.yes && !self.confirm()? {
            println!("{}", style("Cancelled").dim());
            return Ok(());
        }

        for (label, target) in targets {
            print!("Deleting {}... ", label);
            io::stdout().flush()?;

            target
                .remove()
                .with_context(|| format!("Failed to delete: {}", target.path().display()))?;

            println!("{}", style("✓").green());
        }

        println!();
        println!("{}", style("✓ Cleanup complete!").green().bold());

        Ok(())
    }

    /// Prompt user for confirmation
    fn confirm(&self) -> Result<bool> {
        print!("{} ", style("Proceed? [y/N]").yellow().bold());
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim().to_lowercase();
        Ok(input == "y" || input == "yes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn removes_an_explicit_save_file_without_touching_logs() {
        let dir = TempDir::new().unwrap();
        let save = dir.path().join("slot.bin");
        std::fs::write(&save, [0u8; 56]).unwrap();

        Clean {
            logs: false,
            save: Some(save.clone()),
            yes: true,
        }
        .execute()
        .unwrap();

        assert!(!save.exists());
    }

    #[test]
    fn missing_save_file_is_nothing_to_do() {
        let dir = TempDir::new().unwrap();

        let result = Clean {
            logs: false,
            save: Some(dir.path().join("absent.bin")),
            yes: true,
        }
        .execute();

        assert!(result.is_ok());
    }
}
