//! Game rules: win detection, outcomes, and transposition comparison.
//!
//! Legality lives with the board (`Board::is_available`); this module
//! decides what a legal move leads to.

pub mod outcome;
pub mod transposition;
pub mod win;

pub use outcome::Outcome;
pub use transposition::{board_hash, ByBoard, TranspositionSet};
pub use win::{check_win, check_win_on_axes, line_length, Axis};
