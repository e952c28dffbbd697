//! Square board storage and position predicates.
//!
//! The board is a fixed-shape `size × size` grid stored row-major. Its shape
//! is set at construction and never changes. Predicates take signed
//! coordinates so direction walks can step off either edge and simply read
//! as "out of range".

use serde::{Deserialize, Serialize};

use super::action::{Action, Coord};
use super::player::{Cell, PlayerId};
use crate::error::Error;

/// Is `v` a valid row or column index on a board of side `board_size`?
#[inline]
#[must_use]
pub const fn in_range(board_size: usize, v: isize) -> bool {
    // A negative `v` wraps to a huge `usize`, so one comparison covers both ends.
    (v as usize) < board_size
}

/// An `N × N` grid of cells.
///
/// Deserialization rejects a cell list whose length is not `size²`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Build a board from row-major cells.
    ///
    /// Returns `None` if `cells.len() != size * size`.
    #[must_use]
    pub fn from_cells(size: usize, cells: Vec<Cell>) -> Option<Self> {
        (size.checked_mul(size) == Some(cells.len())).then_some(Self { size, cells })
    }

    /// Side length.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    // === Position Predicates ===

    /// Is `v` a valid row or column index?
    #[inline]
    #[must_use]
    pub const fn in_range(&self, v: isize) -> bool {
        in_range(self.size, v)
    }

    /// Are both coordinates in range and the cell empty?
    #[inline]
    #[must_use]
    pub fn is_available(&self, x: isize, y: isize) -> bool {
        matches!(self.get(x, y), Some(Cell::Empty))
    }

    // === Access ===

    /// Get a cell, or `None` when either coordinate is off the board.
    #[inline]
    #[must_use]
    pub fn get(&self, x: isize, y: isize) -> Option<Cell> {
        if self.in_range(x) && self.in_range(y) {
            Some(self.cells[x as usize * self.size + y as usize])
        } else {
            None
        }
    }

    /// Get the cell at an in-range coordinate.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is off the board.
    #[must_use]
    pub fn at(&self, coord: Coord) -> Cell {
        assert!(
            coord.x < self.size && coord.y < self.size,
            "coordinate {:?} is off a board of size {}",
            coord,
            self.size
        );
        self.cells[coord.x * self.size + coord.y]
    }

    /// Put `player`'s stone on an in-range cell.
    pub(crate) fn place(&mut self, coord: Coord, player: PlayerId) {
        debug_assert!(coord.x < self.size && coord.y < self.size);
        self.cells[coord.x * self.size + coord.y] = Cell::Stone(player);
    }

    /// Number of stones on the board.
    #[must_use]
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Flattened indices of the empty cells, ascending.
    pub fn empty_cells(&self) -> impl Iterator<Item = Action> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| Action(i))
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // `max(1)` keeps `chunks` happy for the degenerate zero-size board.
        self.cells.chunks(self.size.max(1))
    }

    /// Integer grid view: `-1` for empty, the player index otherwise.
    #[must_use]
    pub fn to_grid(&self) -> Vec<Vec<i32>> {
        self.rows()
            .map(|row| row.iter().map(|c| c.to_marker()).collect())
            .collect()
    }
}

#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = Error;

    fn try_from(raw: RawBoard) -> Result<Self, Error> {
        let len = raw.cells.len();
        Board::from_cells(raw.size, raw.cells).ok_or_else(|| {
            Error::config(format!("board of size {} cannot hold {len} cells", raw.size))
        })
    }
}
