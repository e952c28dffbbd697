//! Typed view of a state's terminal status.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// How a game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line yet and empty cells remain.
    InProgress,
    /// The player completed a line with the last move.
    Won(PlayerId),
    /// The board filled up without a line.
    Draw,
}

impl Outcome {
    /// Is the episode over?
    #[must_use]
    pub const fn is_done(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Reward for the player who just moved: 1 for a win, 0 otherwise.
    #[must_use]
    pub const fn result(self) -> u8 {
        match self {
            Outcome::Won(_) => 1,
            Outcome::InProgress | Outcome::Draw => 0,
        }
    }

    /// The winning player, if any.
    #[must_use]
    pub const fn winner(self) -> Option<PlayerId> {
        match self {
            Outcome::Won(player) => Some(player),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}
