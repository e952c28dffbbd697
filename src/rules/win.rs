//! Win detection through the most recent move.
//!
//! Only lines passing through the last stone placed can have been completed
//! by that move, so detection walks the four axes through that one cell
//! instead of scanning the whole board. Cost is `O(4 × board_size)`.

use crate::core::{Board, Coord, PlayerId};

/// The four line directions on a square grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Along a row.
    Horizontal,
    /// Along a column.
    Vertical,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Axis {
    /// Every axis, in the default checking order.
    pub const ALL: [Axis; 4] = [
        Axis::Vertical,
        Axis::Horizontal,
        Axis::Diagonal,
        Axis::AntiDiagonal,
    ];

    /// Step `(dx, dy)` in the positive direction, `x` being the row.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Axis::Vertical => (1, 0),
            Axis::Horizontal => (0, 1),
            Axis::Diagonal => (1, 1),
            Axis::AntiDiagonal => (1, -1),
        }
    }
}

/// Count cells owned by `player` walking from `(x, y)` inclusive by `(dx, dy)`.
fn run_length(
    board: &Board,
    (mut x, mut y): (isize, isize),
    (dx, dy): (isize, isize),
    player: PlayerId,
) -> usize {
    let mut count = 0;
    while let Some(cell) = board.get(x, y) {
        if cell.owner() != Some(player) {
            break;
        }
        count += 1;
        x += dx;
        y += dy;
    }
    count
}

/// Length of the same-owner line through `pos` along `axis`.
///
/// Returns 0 when `pos` is empty or off the board.
#[must_use]
pub fn line_length(board: &Board, pos: Coord, axis: Axis) -> usize {
    let (x, y) = (pos.x as isize, pos.y as isize);
    let Some(player) = board.get(x, y).and_then(|c| c.owner()) else {
        return 0;
    };
    let (dx, dy) = axis.delta();
    let forward = run_length(board, (x, y), (dx, dy), player);
    let backward = run_length(board, (x, y), (-dx, -dy), player);
    // The stone at `pos` is counted by both walks.
    forward + backward - 1
}

/// Did the stone at `pos` complete a line of at least `num_win`?
///
/// The owner of `pos` is the player being checked; an empty cell never wins.
#[must_use]
pub fn check_win(board: &Board, pos: Coord, num_win: usize) -> bool {
    check_win_on_axes(board, pos, num_win, &Axis::ALL)
}

/// [`check_win`] with an explicit axis order. Stops at the first axis that
/// qualifies; the answer does not depend on the order.
#[must_use]
pub fn check_win_on_axes(board: &Board, pos: Coord, num_win: usize, axes: &[Axis]) -> bool {
    axes.iter().any(|&axis| line_length(board, pos, axis) >= num_win)
}
