//! Error types for the environment.
//!
//! Every failure is local to the call that produced it. An `IllegalMove`
//! never leaves a partially updated state behind, so callers in self-play
//! loops can recover by choosing another action.

use thiserror::Error;

use crate::core::PlayerId;

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalMoveReason {
    /// The action decodes to a cell outside the board.
    OutOfRange,
    /// The target cell already holds a stone.
    Occupied,
}

impl std::fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMoveReason::OutOfRange => write!(f, "cell is out of range"),
            IllegalMoveReason::Occupied => write!(f, "cell is already occupied"),
        }
    }
}

/// Main error type for the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("illegal move {action} for {player}: {reason}")]
    IllegalMove {
        action: usize,
        player: PlayerId,
        reason: IllegalMoveReason,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("episode already finished after {turn} moves; call reset first")]
    EpisodeFinished { turn: usize },

    #[error("rendering is not supported")]
    RenderUnsupported,
}

impl Error {
    /// Build an `InvalidConfiguration` error.
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Error::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Is this a recoverable per-move rejection?
    #[must_use]
    pub fn is_illegal_move(&self) -> bool {
        matches!(self, Error::IllegalMove { .. })
    }
}

/// Convenience alias for results using the crate's `Error`.
pub type Result<T> = std::result::Result<T, Error>;
