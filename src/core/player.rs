//! Player identification and board cell contents.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting 2-255 players. Turn order is
//! round-robin: the player to move on turn `t` is `t mod num_player`.
//!
//! ## Cell
//!
//! A board cell is either empty or holds one player's stone.

use serde::{Deserialize, Serialize};

/// Player identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The player to move after `turn` moves have been played.
    ///
    /// ```
    /// use gomoku_env::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::for_turn(0, 3), PlayerId::new(0));
    /// assert_eq!(PlayerId::for_turn(4, 3), PlayerId::new(1));
    /// ```
    #[must_use]
    pub fn for_turn(turn: usize, num_player: usize) -> Self {
        debug_assert!((1..=255).contains(&num_player));
        Self((turn % num_player) as u8)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Contents of a single board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Stone(PlayerId),
}

impl Cell {
    /// Integer marker used by the raw grid observation.
    pub const EMPTY_MARKER: i32 = -1;

    /// Is this cell empty?
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The owner of the stone in this cell, if any.
    #[must_use]
    pub const fn owner(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Stone(player) => Some(player),
        }
    }

    /// Integer encoding: `-1` for empty, the player index otherwise.
    #[must_use]
    pub const fn to_marker(self) -> i32 {
        match self {
            Cell::Empty => Self::EMPTY_MARKER,
            Cell::Stone(player) => player.0 as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_round_robin_three_players() {
        let order: Vec<u8> = (0..6).map(|t| PlayerId::for_turn(t, 3).0).collect();
        assert_eq!(order, vec![0, 1, 2, 0, 1, 2]);
    }

    #[test]
    fn test_cell_markers() {
        assert_eq!(Cell::Empty.to_marker(), -1);
        assert_eq!(Cell::Stone(PlayerId::new(2)).to_marker(), 2);
        assert!(Cell::default().is_empty());
        assert_eq!(Cell::Stone(PlayerId::new(1)).owner(), Some(PlayerId::new(1)));
        assert_eq!(Cell::Empty.owner(), None);
    }

    #[test]
    fn test_cell_serialization() {
        let cell = Cell::Stone(PlayerId::new(1));
        let json = serde_json::to_string(&cell).unwrap();
        let deserialized: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(cell, deserialized);
    }
}
