use crate::combat::{AttackOutcome, resolve_attack};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityRegistry, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    #[error("no entity at registry index {0}")]
    EntityNotFound(usize),
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            MoveError::EntityNotFound(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            MoveError::EntityNotFound(_) => "MOVE_ENTITY_NOT_FOUND",
        }
    }
}

/// One of the four unit steps an entity can take.
///
/// Parses from (and displays as) the single-letter command: `L`, `R`, `U`, `D`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[strum(serialize = "L")]
    Left,
    #[strum(serialize = "R")]
    Right,
    #[strum(serialize = "U")]
    Up,
    #[strum(serialize = "D")]
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// `(dx, dy)` offset; `x` is the row and `y` the column.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
        }
    }

    pub fn step_from(self, origin: Position) -> Position {
        let (dx, dy) = self.delta();
        origin.offset(dx, dy)
    }
}

/// What a single move attempt did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveOutcome {
    /// The mover stepped into an empty cell.
    Moved { from: Position, to: Position },

    /// The player walked into an enemy and hit it instead of moving.
    Attacked {
        target: usize,
        destination: Position,
        attack: AttackOutcome,
    },

    /// The destination is occupied by an entity the mover does not fight.
    Blocked {
        occupant: usize,
        destination: Position,
    },

    /// The destination lies outside the map.
    OutOfBounds { destination: Position },
}

impl MoveOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}

/// Moves the entity at index `mover` one step in `direction`.
///
/// 1. Off-map destinations are rejected without mutation.
/// 2. The first entity standing on the destination (dead or alive) is the
///    occupant. If the mover attacks the occupant's faction, combat is
///    resolved and the mover stays put; otherwise the move is blocked.
/// 3. An empty destination moves the mover.
///
/// Never mutates both the mover and another entity in the same call.
pub fn move_entity(
    registry: &mut EntityRegistry,
    mover: usize,
    direction: Direction,
) -> Result<MoveOutcome, MoveError> {
    let actor = *registry
        .get(mover)
        .ok_or(MoveError::EntityNotFound(mover))?;
    let destination = direction.step_from(actor.position);

    if !destination.in_bounds() {
        return Ok(MoveOutcome::OutOfBounds { destination });
    }

    if let Some(occupant) = registry.occupant_at(destination) {
        let defender = registry
            .get_mut(occupant)
            .ok_or(MoveError::EntityNotFound(occupant))?;

        return Ok(match resolve_attack(&actor, defender) {
            Some(attack) => MoveOutcome::Attacked {
                target: occupant,
                destination,
                attack,
            },
            None => MoveOutcome::Blocked {
                occupant,
                destination,
            },
        });
    }

    let entity = registry
        .get_mut(mover)
        .ok_or(MoveError::EntityNotFound(mover))?;
    entity.position = destination;

    Ok(MoveOutcome::Moved {
        from: actor.position,
        to: destination,
    })
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::config::GameConfig;
    use crate::state::Entity;

    fn registry(entities: Vec<Entity>) -> EntityRegistry {
        EntityRegistry::from_entities(entities)
    }

    fn hero(x: i32, y: i32) -> Entity {
        Entity::player("Hero", Position::new(x, y)).with_stats(100, 10, 20)
    }

    fn goblin(x: i32, y: i32) -> Entity {
        Entity::enemy("Enemy #1", Position::new(x, y)).with_stats(50, 10, 15)
    }

    #[test]
    fn parses_single_letter_commands() {
        assert_eq!(Direction::from_str("L"), Ok(Direction::Left));
        assert_eq!(Direction::from_str("R"), Ok(Direction::Right));
        assert_eq!(Direction::from_str("U"), Ok(Direction::Up));
        assert_eq!(Direction::from_str("D"), Ok(Direction::Down));
        assert!(Direction::from_str("X").is_err());
        assert!(Direction::from_str("l").is_err());
        assert_eq!(Direction::Up.to_string(), "U");
    }

    #[test]
    fn moves_into_empty_cell() {
        let mut world = registry(vec![hero(5, 5), goblin(10, 10)]);
        let before = *world.get(1).unwrap();

        let outcome = move_entity(&mut world, 0, Direction::Down).unwrap();

        assert_eq!(
            outcome,
            MoveOutcome::Moved {
                from: Position::new(5, 5),
                to: Position::new(6, 5),
            }
        );
        assert_eq!(world.get(0).unwrap().position, Position::new(6, 5));
        assert_eq!(*world.get(1).unwrap(), before);
    }

    #[test]
    fn every_direction_steps_one_cell() {
        for (direction, expected) in [
            (Direction::Left, Position::new(5, 4)),
            (Direction::Right, Position::new(5, 6)),
            (Direction::Up, Position::new(4, 5)),
            (Direction::Down, Position::new(6, 5)),
        ] {
            let mut world = registry(vec![hero(5, 5)]);
            move_entity(&mut world, 0, direction).unwrap();
            assert_eq!(world.get(0).unwrap().position, expected, "{direction:?}");
        }
    }

    #[test]
    fn off_map_moves_are_rejected() {
        let edge = GameConfig::MAP_SIZE as i32 - 1;
        let mut world = registry(vec![hero(0, 0), goblin(edge, edge)]);

        assert_eq!(
            move_entity(&mut world, 0, Direction::Up).unwrap(),
            MoveOutcome::OutOfBounds {
                destination: Position::new(-1, 0)
            }
        );
        assert!(matches!(
            move_entity(&mut world, 1, Direction::Right).unwrap(),
            MoveOutcome::OutOfBounds { .. }
        ));
        assert_eq!(world.get(0).unwrap().position, Position::new(0, 0));
        assert_eq!(world.get(1).unwrap().position, Position::new(edge, edge));
    }

    #[test]
    fn player_attacks_instead_of_moving() {
        let mut world = registry(vec![hero(0, 0), goblin(0, 1)]);

        let outcome = move_entity(&mut world, 0, Direction::Right).unwrap();

        let MoveOutcome::Attacked { target, attack, .. } = outcome else {
            panic!("expected an attack, got {outcome:?}");
        };
        assert_eq!(target, 1);
        assert_eq!(attack.damage, 15);
        assert_eq!(world.get(0).unwrap().position, Position::new(0, 0));
        let enemy = world.get(1).unwrap();
        assert_eq!((enemy.health, enemy.armor), (35, 0));
    }

    #[test]
    fn enemies_are_blocked_by_anyone() {
        let mut world = registry(vec![hero(0, 0), goblin(0, 1), goblin(1, 1)]);

        assert_eq!(
            move_entity(&mut world, 1, Direction::Left).unwrap(),
            MoveOutcome::Blocked {
                occupant: 0,
                destination: Position::new(0, 0)
            }
        );
        assert!(matches!(
            move_entity(&mut world, 2, Direction::Up).unwrap(),
            MoveOutcome::Blocked { occupant: 1, .. }
        ));
        assert_eq!(world.get(0).unwrap().health, 100);
        assert_eq!(world.get(1).unwrap().health, 50);
    }

    #[test]
    fn corpses_still_block() {
        let corpse = Entity::enemy("Enemy #2", Position::new(3, 4)).with_stats(0, 0, 15);
        let mut world = registry(vec![hero(9, 9), goblin(3, 3), corpse]);

        assert!(matches!(
            move_entity(&mut world, 1, Direction::Right).unwrap(),
            MoveOutcome::Blocked { occupant: 2, .. }
        ));
    }

    #[test]
    fn collision_picks_the_first_occupant() {
        let first = Entity::enemy("Enemy #1", Position::new(0, 1)).with_stats(50, 0, 15);
        let second = Entity::enemy("Enemy #2", Position::new(0, 1)).with_stats(50, 0, 15);
        let mut world = registry(vec![hero(0, 0), first, second]);

        move_entity(&mut world, 0, Direction::Right).unwrap();

        assert_eq!(world.get(1).unwrap().health, 30);
        assert_eq!(world.get(2).unwrap().health, 50);
    }

    #[test]
    fn unknown_mover_is_an_error() {
        let mut world = registry(vec![hero(0, 0)]);
        assert_eq!(
            move_entity(&mut world, 3, Direction::Down),
            Err(MoveError::EntityNotFound(3))
        );
    }
}
