//! Opt-in board-only comparison.
//!
//! Different move orders can reach the same position. Search code that
//! wants to merge such transpositions wraps states in [`ByBoard`], whose
//! equality and hash look only at the board contents. Plain `GameState`
//! equality keeps histories apart.

use std::hash::{Hash, Hasher};

use rustc_hash::{FxHashSet, FxHasher};

use crate::core::{Board, GameState};

/// Fx hash of a board's contents.
#[must_use]
pub fn board_hash(board: &Board) -> u64 {
    let mut hasher = FxHasher::default();
    board.hash(&mut hasher);
    hasher.finish()
}

/// A state compared by board contents alone, ignoring turn and last move.
#[derive(Clone, Debug)]
pub struct ByBoard(pub GameState);

impl ByBoard {
    /// Unwrap the state.
    #[must_use]
    pub fn into_inner(self) -> GameState {
        self.0
    }
}

impl PartialEq for ByBoard {
    fn eq(&self, other: &Self) -> bool {
        self.0.board() == other.0.board()
    }
}

impl Eq for ByBoard {}

impl Hash for ByBoard {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.board().hash(state);
    }
}

/// Set of positions seen so far, keyed by board contents.
#[derive(Clone, Debug, Default)]
pub struct TranspositionSet {
    seen: FxHashSet<Board>,
}

impl TranspositionSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a state. Returns `false` if its board was already present.
    pub fn insert(&mut self, state: &GameState) -> bool {
        if self.seen.contains(state.board()) {
            return false;
        }
        self.seen.insert(state.board().clone())
    }

    /// Has a state with this board been recorded?
    #[must_use]
    pub fn contains(&self, state: &GameState) -> bool {
        self.seen.contains(state.board())
    }

    /// Number of distinct boards recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Is the set empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
