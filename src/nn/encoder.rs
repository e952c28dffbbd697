//! State encoding for learning agents.
//!
//! Transforms a game state into tensor planes suitable for convolutional
//! policy/value networks.

use crate::core::{Cell, EnvConfig, GameState, PlayerId};
use crate::error::Result;

use super::encoded::EncodedState;

/// Encodes game state into tensors.
///
/// Each encoder defines:
/// - How to convert state to a tensor from a player's perspective
/// - The shape of the output tensor
/// - The size of the action space
pub trait StateEncoder: Send + Sync {
    /// Encode the game state from a player's perspective.
    fn encode(&self, state: &GameState, perspective: PlayerId) -> EncodedState;

    /// Get the shape of encoded states.
    fn output_shape(&self) -> Vec<usize>;

    /// Get the total number of possible actions (policy output length).
    fn action_space_size(&self) -> usize;

    /// Get the number of players this encoder supports.
    fn player_count(&self) -> usize;
}

/// Plane encoder for N-in-a-row boards.
///
/// Produces `num_player + 1` planes of `board_size × board_size`:
/// - planes `0..num_player`: stones of each player, starting with the
///   perspective player and continuing in turn order
/// - the last plane: all ones if the perspective player is to move, else zeros
#[derive(Clone, Debug)]
pub struct BoardEncoder {
    board_size: usize,
    num_player: usize,
}

impl BoardEncoder {
    /// Create an encoder for boards built with `config`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfiguration` if `config` fails validation.
    pub fn new(config: &EnvConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            board_size: config.board_size,
            num_player: config.num_player,
        })
    }

    fn plane_size(&self) -> usize {
        self.board_size * self.board_size
    }

    /// Legal-action mask: 1.0 for each empty cell, 0.0 otherwise.
    #[must_use]
    pub fn action_mask(&self, state: &GameState) -> Vec<f32> {
        let mut mask = vec![0.0f32; self.plane_size()];
        for action in state.valid_actions() {
            mask[action.index()] = 1.0;
        }
        mask
    }
}

impl StateEncoder for BoardEncoder {
    fn encode(&self, state: &GameState, perspective: PlayerId) -> EncodedState {
        debug_assert_eq!(state.config().board_size, self.board_size);

        let plane = self.plane_size();
        let mut tensor = vec![0.0f32; plane * (self.num_player + 1)];

        for (i, cell) in state.board().cells().iter().enumerate() {
            if let Cell::Stone(owner) = cell {
                // Rotate so the perspective player always lands on plane 0.
                let rel = (owner.index() + self.num_player - perspective.index()) % self.num_player;
                tensor[rel * plane + i] = 1.0;
            }
        }

        if state.current_player() == perspective {
            let to_move = self.num_player * plane;
            tensor[to_move..].fill(1.0);
        }

        EncodedState::new(tensor, self.output_shape())
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![self.num_player + 1, self.board_size, self.board_size]
    }

    fn action_space_size(&self) -> usize {
        self.plane_size()
    }

    fn player_count(&self) -> usize {
        self.num_player
    }
}
