//! Command-driven runtime orchestrator.
//!
//! The runtime owns the [`World`], the random source and the save repository,
//! and turns each player [`Command`] into engine calls or repository I/O.

use game_core::{
    GameEngine, GameOutcome, PcgRng, PlayerSpec, Refresh, RngOracle, TurnReport, World,
    spawn_world,
};

use crate::command::Command;
use crate::config::RuntimeConfig;
use crate::error::Result;
use crate::repository::{FileSaveRepository, SaveRepository};

/// What a handled command did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandReport {
    /// A full turn was resolved.
    Turn(TurnReport),
    /// The registry was written to the save slot.
    Saved { entities: usize },
    /// The registry was replaced from the save slot and refreshed.
    Loaded(Refresh),
    /// The save slot is empty; nothing changed.
    LoadMissing,
    /// Unrecognised input; nothing changed.
    Ignored,
}

/// Main runtime that owns one game session.
pub struct Runtime<S, R = PcgRng> {
    world: World,
    repository: S,
    rng: R,
}

impl Runtime<FileSaveRepository, PcgRng> {
    /// Starts a new game backed by the save file named in `config`.
    pub fn from_config(config: &RuntimeConfig, player: &PlayerSpec) -> Self {
        Self::start(
            config,
            player,
            FileSaveRepository::new(&config.save_path),
            PcgRng,
        )
    }
}

impl<S, R> Runtime<S, R>
where
    S: SaveRepository,
    R: RngOracle,
{
    /// Spawns a fresh world for `player` and settles its starting phase.
    ///
    /// Uses `config.game_seed` when set, otherwise a seed drawn from OS
    /// entropy.
    pub fn start(config: &RuntimeConfig, player: &PlayerSpec, repository: S, rng: R) -> Self {
        let game_seed = config.game_seed.unwrap_or_else(rand::random);
        let world = spawn_world(player, &config.game_config, &rng, game_seed);

        tracing::info!(
            game_seed,
            enemies = config.game_config.enemy_count,
            "Starting new game for {}",
            player.name
        );

        Self::with_world(world, repository, rng)
    }

    /// Wraps an existing world. The world is refreshed before first use.
    pub fn with_world(mut world: World, repository: S, rng: R) -> Self {
        let refresh = GameEngine::new(&mut world).refresh();
        if !refresh.pruned.is_empty() {
            tracing::debug!("Pruned {} dead entities at start", refresh.pruned.len());
        }

        Self {
            world,
            repository,
            rng,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn repository(&self) -> &S {
        &self.repository
    }

    /// Final result once the game has ended.
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.world.outcome()
    }

    /// Parses `line` and handles the resulting command.
    pub fn handle_line(&mut self, line: &str) -> Result<CommandReport> {
        self.handle(Command::parse(line))
    }

    /// Handles one command.
    ///
    /// Errors leave the world exactly as it was before the call.
    pub fn handle(&mut self, command: Command) -> Result<CommandReport> {
        match command {
            Command::Move(direction) => {
                let report = GameEngine::new(&mut self.world).execute_turn(direction, &self.rng)?;
                log_turn(&report);
                Ok(CommandReport::Turn(report))
            }
            Command::Save => self.save(),
            Command::Load => self.load(),
            Command::Unknown(input) => {
                tracing::trace!("Ignoring unknown command {:?}", input);
                Ok(CommandReport::Ignored)
            }
        }
    }

    fn save(&mut self) -> Result<CommandReport> {
        let entities = self.world.registry.as_slice();
        self.repository.save(entities)?;

        tracing::info!("Saved {} entities", entities.len());
        Ok(CommandReport::Saved {
            entities: entities.len(),
        })
    }

    fn load(&mut self) -> Result<CommandReport> {
        let Some(entities) = self.repository.load()? else {
            tracing::info!("Nothing to load: save slot is empty");
            return Ok(CommandReport::LoadMissing);
        };

        let count = entities.len();
        let refresh = GameEngine::new(&mut self.world).replace_entities(entities);

        tracing::info!(
            pruned = refresh.pruned.len(),
            outcome = ?refresh.outcome,
            "Loaded {} entities",
            count
        );
        Ok(CommandReport::Loaded(refresh))
    }
}

fn log_turn(report: &TurnReport) {
    for event in &report.events {
        tracing::trace!(
            turn = report.turn,
            actor = event.actor,
            direction = %event.direction,
            "{}: {:?}",
            event.name,
            event.outcome
        );
    }
    for entity in &report.pruned {
        tracing::debug!(turn = report.turn, "{} was removed", entity.name);
    }
    if let Some(outcome) = report.outcome {
        tracing::info!(turn = report.turn, ?outcome, "Game finished");
    } else {
        tracing::debug!(turn = report.turn, "Turn resolved");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemorySaveRepo;
    use game_core::{Direction, Entity, EntityRegistry, Position, TurnError};

    use crate::error::RuntimeError;

    fn runtime(entities: Vec<Entity>) -> Runtime<InMemorySaveRepo> {
        let world = World::new(5, EntityRegistry::from_entities(entities));
        Runtime::with_world(world, InMemorySaveRepo::new(), PcgRng)
    }

    #[test]
    fn start_spawns_player_and_configured_enemies() {
        let config = RuntimeConfig::default().with_seed(42).with_enemy_count(3);
        let player = PlayerSpec::new("Hero", 100, 10, 20);

        let runtime = Runtime::start(&config, &player, InMemorySaveRepo::new(), PcgRng);

        let registry = &runtime.world().registry;
        assert_eq!(registry.len(), 4);
        assert_eq!(registry.player().unwrap().name.as_str(), "Hero");
        assert_eq!(runtime.world().game_seed, 42);
        assert_eq!(runtime.outcome(), None);
    }

    #[test]
    fn unknown_commands_change_nothing() {
        let mut runtime = runtime(vec![
            Entity::player("Hero", Position::ORIGIN).with_stats(100, 10, 20),
            Entity::enemy("Enemy #1", Position::new(9, 9)).with_stats(60, 0, 15),
        ]);
        let before = runtime.world().clone();

        assert_eq!(runtime.handle_line("jump").unwrap(), CommandReport::Ignored);
        assert_eq!(runtime.world(), &before);
    }

    #[test]
    fn load_from_empty_slot_is_reported_and_harmless() {
        let mut runtime = runtime(vec![
            Entity::player("Hero", Position::ORIGIN).with_stats(100, 10, 20),
            Entity::enemy("Enemy #1", Position::new(9, 9)).with_stats(60, 0, 15),
        ]);
        let before = runtime.world().clone();

        assert_eq!(runtime.handle(Command::Load).unwrap(), CommandReport::LoadMissing);
        assert_eq!(runtime.world(), &before);
    }

    #[test]
    fn moves_after_the_end_are_rejected() {
        let mut runtime = runtime(vec![
            Entity::player("Hero", Position::ORIGIN).with_stats(100, 10, 20),
        ]);
        assert_eq!(runtime.outcome(), Some(GameOutcome::Victory));

        let result = runtime.handle(Command::Move(Direction::Down));

        assert!(matches!(
            result,
            Err(RuntimeError::Turn(TurnError::GameOver(GameOutcome::Victory)))
        ));
    }
}
