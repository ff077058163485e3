use crate::action::{Direction, MoveError, move_entity};
use crate::env::{RngOracle, compute_seed};
use crate::state::{GameOutcome, TurnPhase};

use super::{GameEngine, Refresh, TurnError, TurnEvent, TurnReport};

/// Draw context for an enemy's movement direction.
const DIRECTION_DRAW: u32 = 0;

/// Registry index that receives the player's commands.
const PLAYER_INDEX: usize = 0;

/// Turn sequencing methods for GameEngine.
impl<'a> GameEngine<'a> {
    /// Resolves one full turn.
    ///
    /// 1. The player (registry index 0) moves in `direction`.
    /// 2. Every non-player entity, in registry order, moves in a direction
    ///    drawn uniformly from [`Direction::ALL`].
    /// 3. Entities with no health left are pruned, the grid is re-rendered
    ///    and the end condition is evaluated.
    ///
    /// Deaths only take effect at step 3: an enemy killed by the player still
    /// blocks its cell for the enemy moves of the same turn.
    pub fn execute_turn(
        &mut self,
        direction: Direction,
        rng: &impl RngOracle,
    ) -> Result<TurnReport, TurnError> {
        if let TurnPhase::Finished(outcome) = self.world.turn.phase {
            return Err(TurnError::GameOver(outcome));
        }
        if self.world.registry.player().is_none() {
            return Err(TurnError::PlayerMissing);
        }

        let turn = self.world.turn.nonce + 1;
        self.world.turn.phase = TurnPhase::ResolvingTurn;

        let events = match self.resolve_moves(turn, direction, rng) {
            Ok(events) => events,
            Err(error) => {
                self.world.turn.phase = TurnPhase::AwaitingCommand;
                return Err(error.into());
            }
        };

        let Refresh { pruned, outcome } = self.refresh();
        self.world.turn.nonce = turn;

        Ok(TurnReport {
            turn,
            events,
            pruned,
            outcome,
        })
    }

    /// Prunes the dead, re-renders the grid and re-evaluates the end
    /// condition, without moving anyone.
    ///
    /// Ends every turn; also run after a load and before the first command.
    pub fn refresh(&mut self) -> Refresh {
        let pruned = self.world.registry.prune_dead();
        self.world.rerender();

        let outcome = GameOutcome::evaluate(self.world.registry.iter());
        self.world.turn.phase = TurnPhase::settle(outcome);

        Refresh { pruned, outcome }
    }

    fn resolve_moves(
        &mut self,
        turn: u64,
        direction: Direction,
        rng: &impl RngOracle,
    ) -> Result<Vec<TurnEvent>, MoveError> {
        let game_seed = self.world.game_seed;
        let enemies = self.world.registry.enemy_indices();
        let mut events = Vec::with_capacity(enemies.len() + 1);

        events.push(self.step(PLAYER_INDEX, direction)?);

        for index in enemies {
            let seed = compute_seed(game_seed, turn, index as u32, DIRECTION_DRAW);
            let direction = Direction::ALL[rng.pick(seed, Direction::ALL.len())];
            events.push(self.step(index, direction)?);
        }

        Ok(events)
    }

    fn step(&mut self, actor: usize, direction: Direction) -> Result<TurnEvent, MoveError> {
        let name = self
            .world
            .registry
            .get(actor)
            .map(|entity| entity.name)
            .ok_or(MoveError::EntityNotFound(actor))?;
        let outcome = move_entity(&mut self.world.registry, actor, direction)?;

        Ok(TurnEvent {
            actor,
            name,
            direction,
            outcome,
        })
    }
}
