//! Game state bindings for Python.

use numpy::PyArray2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Action, GameState};
use crate::rules::board_hash;

use super::to_py_err;

/// Python wrapper for an immutable GameState.
#[pyclass(name = "GomokuState", frozen)]
#[derive(Clone, Debug)]
pub struct PyGomokuState(pub GameState);

#[pymethods]
impl PyGomokuState {
    /// Board as an int32 array of shape (board_size, board_size); -1 marks empty.
    #[getter]
    fn board<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<i32>>> {
        PyArray2::from_vec2_bound(py, &self.0.board().to_grid())
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Player to move.
    #[getter]
    fn current_player(&self) -> u8 {
        self.0.current_player().0
    }

    /// Empty cells as ascending flat indices.
    #[getter]
    fn valid_actions(&self) -> Vec<usize> {
        self.0.valid_actions().iter().map(|a| a.index()).collect()
    }

    #[getter]
    fn done(&self) -> bool {
        self.0.is_done()
    }

    #[getter]
    fn result(&self) -> u8 {
        self.0.result()
    }

    #[getter]
    fn turn(&self) -> usize {
        self.0.turn()
    }

    #[getter]
    fn last_move(&self) -> Option<usize> {
        self.0.last_move().map(Action::index)
    }

    /// Return the successor state; raises ValueError on an illegal move.
    fn act(&self, action: usize) -> PyResult<Self> {
        self.0.act(Action(action)).map(Self).map_err(to_py_err)
    }

    /// Return a fresh initial state with the same configuration.
    fn reset(&self) -> Self {
        Self(self.0.reset())
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    // Equal states have equal boards, so hashing the board alone is consistent.
    fn __hash__(&self) -> u64 {
        board_hash(self.0.board())
    }

    fn __repr__(&self) -> String {
        format!(
            "GomokuState(turn={}, to_move={}, done={}, result={})",
            self.0.turn(),
            self.0.current_player().0,
            self.0.is_done(),
            self.0.result()
        )
    }
}
