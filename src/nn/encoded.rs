//! Plane tensor handed to learning agents.

use serde::{Deserialize, Serialize};

/// A stack of `board_size × board_size` planes stored as one row-major buffer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedState {
    /// Plane-major, then row-major values.
    pub tensor: Vec<f32>,

    /// `[planes, board_size, board_size]`.
    pub shape: Vec<usize>,
}

impl EncodedState {
    pub(crate) fn new(tensor: Vec<f32>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(tensor.len(), shape.iter().product::<usize>());
        Self { tensor, shape }
    }

    /// Number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }

    /// Value at a flat index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f32> {
        self.tensor.get(index).copied()
    }

    /// One plane as a flat slice of `board_size²` values.
    #[must_use]
    pub fn plane(&self, index: usize) -> Option<&[f32]> {
        let plane_len: usize = self.shape.iter().skip(1).product();
        let start = index.checked_mul(plane_len)?;
        self.tensor.get(start..start.checked_add(plane_len)?)
    }
}
