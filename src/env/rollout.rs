//! Uniformly random rollouts.
//!
//! Plays an episode to completion by sampling legal actions. Useful as a
//! baseline opponent, for smoke-testing agents, and for benchmarks.

use serde::{Deserialize, Serialize};

use super::environment::{Environment, GomokuEnv};
use crate::core::{Action, GameRng};
use crate::error::Result;
use crate::rules::Outcome;

/// Summary of one finished episode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// Actions in the order they were played.
    pub actions: Vec<Action>,
    /// How the episode ended.
    pub outcome: Outcome,
}

impl Episode {
    /// Moves played.
    #[must_use]
    pub fn turns(&self) -> usize {
        self.actions.len()
    }
}

/// Reset `env` and play random legal actions until the episode ends.
///
/// The same environment configuration and seed always produce the same episode.
///
/// # Errors
///
/// Propagates environment errors; sampled actions are always legal, so none
/// are expected in practice.
pub fn play_random_episode(env: &mut GomokuEnv, rng: &mut GameRng) -> Result<Episode> {
    env.reset();
    let mut actions = Vec::with_capacity(env.config().action_space_size());

    while !env.state().is_done() {
        let Some(action) = env.sample_action(rng) else {
            break;
        };
        env.step(action)?;
        actions.push(action);
    }

    Ok(Episode {
        actions,
        outcome: env.state().outcome(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EnvConfig;

    #[test]
    fn test_random_episode_terminates() {
        let mut env = GomokuEnv::new(EnvConfig::new(5, 4)).unwrap();
        let mut rng = GameRng::new(42);

        let episode = play_random_episode(&mut env, &mut rng).unwrap();

        assert!(episode.outcome.is_done());
        assert!(episode.turns() <= 25);
        assert_eq!(episode.turns(), env.state().turn());
    }

    #[test]
    fn test_random_episode_deterministic() {
        let config = EnvConfig::new(6, 4).with_num_player(3);
        let mut env1 = GomokuEnv::new(config).unwrap();
        let mut env2 = GomokuEnv::new(config).unwrap();

        let e1 = play_random_episode(&mut env1, &mut GameRng::new(99)).unwrap();
        let e2 = play_random_episode(&mut env2, &mut GameRng::new(99)).unwrap();

        assert_eq!(e1, e2);
    }

    #[test]
    fn test_episode_resets_first() {
        let mut env = GomokuEnv::new(EnvConfig::new(3, 3)).unwrap();
        let mut rng = GameRng::new(1);

        play_random_episode(&mut env, &mut rng).unwrap();
        let second = play_random_episode(&mut env, &mut rng).unwrap();

        assert!(second.outcome.is_done());
        assert_eq!(second.turns(), env.state().turn());
    }
}
