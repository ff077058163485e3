//! Read and inspect the binary save file
//!
//! Decodes the save slot with the runtime's codec and displays its contents.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::collections::BTreeMap;
use std::path::PathBuf;

use game_core::{Entity, GameOutcome, Grid, Position};
use runtime::codec;

use crate::dirs;

/// Decode and inspect a save file
#[derive(Parser)]
pub struct InspectSave {
    /// Save file to read (defaults to DUNGEON_SAVE_PATH, then save.bin)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Summary view (roster, board, end condition)
    Summary,
    /// Full JSON output
    Json,
    /// Pretty-printed debug format
    Debug,
}

impl InspectSave {
    pub fn execute(self) -> Result<()> {
        let save_file = self.path.unwrap_or_else(dirs::save_path);

        if !save_file.exists() {
            anyhow::bail!("Save file not found: {}", save_file.display());
        }

        let bytes = std::fs::read(&save_file)
            .with_context(|| format!("Failed to read save file: {}", save_file.display()))?;

        let entities = codec::decode(&bytes)
            .with_context(|| format!("Failed to decode save file: {}", save_file.display()))?;

        // Print header
        println!(
            "{} {}",
            style("Save File:").bold().cyan(),
            save_file.display()
        );
        println!(
            "{} {} ({} records of {} bytes)",
            style("File Size:").bold().cyan(),
            format_bytes(bytes.len()),
            entities.len(),
            codec::RECORD_SIZE
        );
        println!();

        match self.format {
            OutputFormat::Summary => print_summary(&entities),
            OutputFormat::Json => print_json(&entities)?,
            OutputFormat::Debug => print_debug(&entities),
        }

        Ok(())
    }
}

/// Figures derived from a decoded save.
#[derive(Debug, PartialEq, Eq)]
struct Summary {
    players: usize,
    enemies: usize,
    dead: usize,
    /// Cells holding more than one entity, with the registry indices there.
    shared_cells: Vec<(Position, Vec<usize>)>,
    outcome: Option<GameOutcome>,
}

impl Summary {
    fn of(entities: &[Entity]) -> Self {
        let mut cells: BTreeMap<Position, Vec<usize>> = BTreeMap::new();
        for (index, entity) in entities.iter().enumerate() {
            cells.entry(entity.position).or_default().push(index);
        }

        Self {
            players: entities.iter().filter(|e| e.is_player()).count(),
            enemies: entities.iter().filter(|e| !e.is_player()).count(),
            dead: entities.iter().filter(|e| !e.is_alive()).count(),
            shared_cells: cells
                .into_iter()
                .filter(|(_, indices)| indices.len() > 1)
                .collect(),
            outcome: GameOutcome::evaluate(entities),
        }
    }
}

fn print_summary(entities: &[Entity]) {
    let summary = Summary::of(entities);

    println!("{}", style("=== Save Summary ===").bold().green());
    println!();

    println!("{}", style("Roster:").bold().yellow());
    println!("  Players: {}", summary.players);
    println!("  Enemies: {}", summary.enemies);
    println!("  Dead (pruned on load): {}", summary.dead);
    println!();

    if !entities.is_empty() {
        println!("{}", style("Entities:").bold().yellow());
        for (index, entity) in entities.iter().enumerate() {
            println!(
                "  [{}] {:<32} {:<6} h={} a={} d={} at {}",
                index,
                entity.name,
                entity.faction,
                entity.health,
                entity.armor,
                entity.damage,
                entity.position
            );
        }
        println!();
    }

    if entities.first().is_some_and(|first| !first.is_player()) {
        println!(
            "{} registry index 0 is not a player; moves will be rejected",
            style("Warning:").bold().red()
        );
        println!();
    }

    if !summary.shared_cells.is_empty() {
        println!("{}", style("Shared Cells:").bold().yellow());
        for (position, indices) in &summary.shared_cells {
            println!("  {} holds {:?}", position, indices);
        }
        println!();
    }

    println!("{}", style("Board:").bold().yellow());
    print!("{}", Grid::render(entities.iter()));
    println!();

    let status = match summary.outcome {
        Some(outcome) => outcome.message(),
        None => "Game in progress",
    };
    println!("{} {}", style("Status:").bold().yellow(), status);
}

fn print_json(entities: &[Entity]) -> Result<()> {
    let json =
        serde_json::to_string_pretty(entities).context("Failed to serialize save to JSON")?;
    println!("{}", json);
    Ok(())
}

fn print_debug(entities: &[Entity]) {
    println!("{:#?}", entities);
}

fn format_bytes(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
