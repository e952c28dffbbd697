//! Observation encoding for learning agents.
//!
//! ## Overview
//!
//! - **Tensor**: `EncodedState`, stacked `f32` planes in one buffer
//! - **Encoding**: `StateEncoder` trait and the `BoardEncoder` plane encoder
//!
//! ## Usage
//!
//! ```
//! use gomoku_env::core::{EnvConfig, GameState, PlayerId};
//! use gomoku_env::nn::{BoardEncoder, StateEncoder};
//!
//! let config = EnvConfig::new(9, 5);
//! let encoder = BoardEncoder::new(&config)?;
//! let encoded = encoder.encode(&GameState::initial(config)?, PlayerId::new(0));
//! assert_eq!(encoded.shape, vec![3, 9, 9]);
//! # Ok::<(), gomoku_env::Error>(())
//! ```

pub mod encoded;
pub mod encoder;

pub use encoded::EncodedState;
pub use encoder::{BoardEncoder, StateEncoder};
