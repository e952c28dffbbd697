//! Environment controller and rollouts.
//!
//! [`GomokuEnv`] owns the configuration and the current state and exposes
//! the `reset`/`step` contract through the [`Environment`] trait.

pub mod environment;
pub mod rollout;

pub use environment::{Environment, GomokuEnv, Step, StepInfo};
pub use rollout::{play_random_episode, Episode};
