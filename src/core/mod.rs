//! Core types: players, cells, board, actions, configuration, state, RNG.
//!
//! Everything here is independent of how the game is driven; the
//! environment controller in [`crate::env`] is a thin owner of these types.

pub mod action;
pub mod board;
pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, Coord};
pub use board::{in_range, Board};
pub use config::{EnvConfig, MAX_PLAYERS};
pub use player::{Cell, PlayerId};
pub use rng::GameRng;
pub use state::GameState;
