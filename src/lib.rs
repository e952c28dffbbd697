//! # gomoku-env
//!
//! A deterministic N-in-a-row (Gomoku family) environment for
//! reinforcement-learning loops and game-tree search.
//!
//! ## Design Principles
//!
//! 1. **Immutable States**: `GameState::act` returns a new state and never
//!    touches its parent, so search code can keep any state it has seen.
//!
//! 2. **N-Player First**: Turn order is round-robin over `num_player`
//!    players; nothing assumes two.
//!
//! 3. **Explicit Failure**: Illegal moves, bad configurations and steps on
//!    finished episodes come back as `Error` values, never panics.
//!
//! ## Modules
//!
//! - `core`: Players, cells, board, actions, configuration, state, RNG
//! - `rules`: Win detection, outcomes, transposition comparison
//! - `env`: The reset/step controller and random rollouts
//! - `nn`: Observation encoding for learning agents
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod env;
pub mod error;
pub mod nn;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{Action, Board, Cell, Coord, EnvConfig, GameRng, GameState, PlayerId};

pub use crate::env::{play_random_episode, Environment, Episode, GomokuEnv, Step, StepInfo};

pub use crate::error::{Error, IllegalMoveReason, Result};

pub use crate::nn::{BoardEncoder, EncodedState, StateEncoder};

pub use crate::rules::{check_win, Axis, ByBoard, Outcome, TranspositionSet};
