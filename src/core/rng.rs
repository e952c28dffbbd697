//! Seeded action sampling.
//!
//! The environment is deterministic; randomness only enters through callers
//! that sample actions. A `GameRng` built from a seed always makes the same
//! picks, so a seeded rollout replays exactly.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// ChaCha8 stream used to pick among legal actions.
///
/// ```
/// use gomoku_env::core::GameRng;
///
/// let cells = [3, 5, 8];
/// let pick = GameRng::new(7).choose(&cells).copied();
/// assert_eq!(pick, GameRng::new(7).choose(&cells).copied());
/// ```
#[derive(Clone, Debug)]
pub struct GameRng(ChaCha8Rng);

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Uniform pick from `items`; `None` when it is empty.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.0)
    }
}
