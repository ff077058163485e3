use super::Entity;

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum GameOutcome {
    /// No player entity has health left.
    Defeat,
    /// The player is alive and no enemy has health left.
    Victory,
}

impl GameOutcome {
    /// Evaluates the end condition over `entities`.
    ///
    /// Defeat is checked first, so a board where everyone is dead reports
    /// defeat. Returns `None` while the game is still on.
    pub fn evaluate<'a>(entities: impl IntoIterator<Item = &'a Entity>) -> Option<Self> {
        let mut player_alive = false;
        let mut enemies_alive = false;
        for entity in entities {
            if entity.is_alive() {
                if entity.is_player() {
                    player_alive = true;
                } else {
                    enemies_alive = true;
                }
            }
        }

        if !player_alive {
            Some(GameOutcome::Defeat)
        } else if !enemies_alive {
            Some(GameOutcome::Victory)
        } else {
            None
        }
    }

    /// Line shown to the player when the game ends.
    pub const fn message(self) -> &'static str {
        match self {
            GameOutcome::Defeat => "You have been defeated. Game Over!",
            GameOutcome::Victory => "You have defeated all enemies. You win!",
        }
    }
}

/// Where the turn controller currently stands.
///
/// ```text
/// AwaitingCommand ──direction──▶ ResolvingTurn ──▶ AwaitingCommand
///                                      │
///                                      └──end condition──▶ Finished
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnPhase {
    #[default]
    AwaitingCommand,
    ResolvingTurn,
    Finished(GameOutcome),
}

impl TurnPhase {
    pub const fn is_finished(self) -> bool {
        matches!(self, TurnPhase::Finished(_))
    }

    pub const fn outcome(self) -> Option<GameOutcome> {
        match self {
            TurnPhase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub(crate) const fn settle(outcome: Option<GameOutcome>) -> Self {
        match outcome {
            Some(outcome) => TurnPhase::Finished(outcome),
            None => TurnPhase::AwaitingCommand,
        }
    }
}

/// Turn bookkeeping for the world.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    pub phase: TurnPhase,

    /// Number of turns resolved so far. Feeds the seed of every random
    /// draw made during the next turn.
    pub nonce: u64,
}

impl TurnState {
    pub fn new() -> Self {
        Self::default()
    }
}
