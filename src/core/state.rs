//! Immutable game state.
//!
//! A `GameState` is a board snapshot plus turn bookkeeping. States are never
//! mutated once built: [`GameState::act`] copies the board and returns a new
//! state, so no two states share board storage and a parent stays valid for
//! as long as a caller (e.g. a search tree) holds it.
//!
//! ## Derived fields
//!
//! `valid_actions`, `done` and `result` are computed on first access and
//! cached in `OnceLock`s. Because the state is immutable the cache never goes
//! stale, and `OnceLock` keeps states `Send + Sync`.
//!
//! ## Equality
//!
//! `PartialEq` compares configuration, board, last move and turn, so two
//! different histories are different states. For board-only comparison
//! (transposition detection) use [`ByBoard`](crate::rules::ByBoard).

use std::sync::OnceLock;

use tracing::warn;

use super::action::Action;
use super::board::Board;
use super::config::EnvConfig;
use super::player::PlayerId;
use crate::error::{Error, IllegalMoveReason, Result};
use crate::rules::{check_win, Outcome};

/// Snapshot of a game in progress or finished.
#[derive(Clone, Debug)]
pub struct GameState {
    config: EnvConfig,
    board: Board,
    last_move: Option<Action>,
    turn: usize,

    // === Memoized ===
    valid_actions: OnceLock<Vec<Action>>,
    outcome: OnceLock<Outcome>,
}

impl GameState {
    /// Empty board, turn 0, no last move.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfiguration` if `config` fails validation.
    pub fn initial(config: EnvConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::empty(config))
    }

    fn empty(config: EnvConfig) -> Self {
        Self::from_parts(config, Board::new(config.board_size), None, 0)
    }

    fn from_parts(config: EnvConfig, board: Board, last_move: Option<Action>, turn: usize) -> Self {
        Self {
            config,
            board,
            last_move,
            turn,
            valid_actions: OnceLock::new(),
            outcome: OnceLock::new(),
        }
    }

    /// A fresh initial state with the same configuration.
    #[must_use]
    pub fn reset(&self) -> Self {
        Self::empty(self.config)
    }

    // === Accessors ===

    /// The configuration this state was built with.
    #[must_use]
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The move that produced this state; `None` for an initial state.
    #[must_use]
    pub fn last_move(&self) -> Option<Action> {
        self.last_move
    }

    /// Moves played so far.
    #[must_use]
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// The player to move: `turn mod num_player`.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        PlayerId::for_turn(self.turn, self.config.num_player)
    }

    /// The player who made the last move, if any.
    #[must_use]
    pub fn last_player(&self) -> Option<PlayerId> {
        self.turn
            .checked_sub(1)
            .map(|t| PlayerId::for_turn(t, self.config.num_player))
    }

    // === Derived ===

    /// Empty cells as ascending flattened indices.
    #[must_use]
    pub fn valid_actions(&self) -> &[Action] {
        self.valid_actions
            .get_or_init(|| self.board.empty_cells().collect())
    }

    /// Would `action` be accepted by [`GameState::act`]?
    #[must_use]
    pub fn is_legal(&self, action: Action) -> bool {
        let coord = action.decode(self.config.board_size);
        self.board.is_available(coord.x as isize, coord.y as isize)
    }

    /// Win/draw/in-progress classification of this state.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        *self.outcome.get_or_init(|| self.classify())
    }

    /// Is the episode over (a line was completed or the board is full)?
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.outcome().is_done()
    }

    /// 1 if the last move won, else 0. Draws and unfinished games both
    /// report 0; read [`GameState::is_done`] to tell them apart.
    #[must_use]
    pub fn result(&self) -> u8 {
        self.outcome().result()
    }

    /// The winning player, if the last move completed a line.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.outcome().winner()
    }

    fn classify(&self) -> Outcome {
        let Some(last) = self.last_move else {
            return Outcome::InProgress;
        };
        let pos = last.decode(self.config.board_size);
        if check_win(&self.board, pos, self.config.num_win) {
            if let Some(player) = self.board.at(pos).owner() {
                return Outcome::Won(player);
            }
        }
        if self.turn >= self.config.action_space_size() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    // === Transition ===

    /// Place the current player's stone on `action`, returning the successor.
    ///
    /// `self` is left untouched either way.
    ///
    /// # Errors
    ///
    /// Returns `Error::IllegalMove` if the action decodes to a cell that is
    /// off the board or already occupied.
    pub fn act(&self, action: Action) -> Result<GameState> {
        let player = self.current_player();
        let coord = action.decode(self.config.board_size);
        let (x, y) = (coord.x as isize, coord.y as isize);

        if !self.board.is_available(x, y) {
            let reason = if self.board.in_range(x) && self.board.in_range(y) {
                IllegalMoveReason::Occupied
            } else {
                IllegalMoveReason::OutOfRange
            };
            warn!(action = action.index(), %player, ?reason, "rejected illegal move");
            return Err(Error::IllegalMove {
                action: action.index(),
                player,
                reason,
            });
        }

        let mut board = self.board.clone();
        board.place(coord, player);
        Ok(Self::from_parts(self.config, board, Some(action), self.turn + 1))
    }
}

impl PartialEq for GameState {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
            && self.turn == other.turn
            && self.last_move == other.last_move
            && self.board == other.board
    }
}

impl Eq for GameState {}
