//! Action representation: a flattened board index.
//!
//! An action names the cell a stone is placed on. Cells are flattened in
//! row-major order, so on a board of size `n` the action `a` decodes to
//! `(a / n, a % n)`.

use serde::{Deserialize, Serialize};

/// A move: the flattened index of the target cell.
///
/// ```
/// use gomoku_env::core::{Action, Coord};
///
/// let action = Action::new(7);
/// assert_eq!(action.decode(3), Coord::new(2, 1));
/// assert_eq!(Action::encode(Coord::new(2, 1), 3), action);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Action(pub usize);

impl Action {
    /// Create an action from a flattened index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the flattened index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Decode to board coordinates. The result may lie outside the board
    /// when the index is not below `board_size²`.
    #[must_use]
    pub const fn decode(self, board_size: usize) -> Coord {
        Coord {
            x: self.0 / board_size,
            y: self.0 % board_size,
        }
    }

    /// Encode board coordinates as an action.
    #[must_use]
    pub const fn encode(coord: Coord, board_size: usize) -> Self {
        Self(coord.x * board_size + coord.y)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Action({})", self.0)
    }
}

/// Board coordinates: `x` is the row, `y` the column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_row_major() {
        assert_eq!(Action::new(0).decode(3), Coord::new(0, 0));
        assert_eq!(Action::new(2).decode(3), Coord::new(0, 2));
        assert_eq!(Action::new(3).decode(3), Coord::new(1, 0));
        assert_eq!(Action::new(8).decode(3), Coord::new(2, 2));
    }

    #[test]
    fn test_decode_past_board() {
        let coord = Action::new(9).decode(3);
        assert_eq!(coord, Coord::new(3, 0));
    }

    #[test]
    fn test_action_serialization() {
        let json = serde_json::to_string(&Action::new(12)).unwrap();
        assert_eq!(json, "12");
        let deserialized: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Action::new(12));
    }
}
