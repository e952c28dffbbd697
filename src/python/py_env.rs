//! Environment bindings for Python.

use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::core::{Action, EnvConfig, GameRng};
use crate::env::{Environment, GomokuEnv};

use super::py_state::PyGomokuState;
use super::to_py_err;

/// Python wrapper for GomokuEnv.
#[pyclass(name = "GomokuEnv")]
pub struct PyGomokuEnv {
    env: GomokuEnv,
    rng: GameRng,
}

#[pymethods]
impl PyGomokuEnv {
    /// Create a new environment.
    ///
    /// # Arguments
    /// - board_size: Side length of the board
    /// - num_win: Stones in a row needed to win
    /// - num_player: Number of players (default 2)
    /// - seed: Seed for `sample_action`
    #[new]
    #[pyo3(signature = (board_size, num_win, num_player = 2, seed = 0))]
    fn new(board_size: usize, num_win: usize, num_player: usize, seed: u64) -> PyResult<Self> {
        let config = EnvConfig::new(board_size, num_win).with_num_player(num_player);
        let env = GomokuEnv::new(config).map_err(to_py_err)?;
        Ok(Self {
            env,
            rng: GameRng::new(seed),
        })
    }

    /// Start a new episode and return the initial state.
    fn reset(&mut self) -> PyGomokuState {
        PyGomokuState(self.env.reset())
    }

    /// Play one action; returns (state, result, done, info).
    fn step<'py>(
        &mut self,
        py: Python<'py>,
        action: usize,
    ) -> PyResult<(PyGomokuState, u8, bool, Bound<'py, PyDict>)> {
        let step = self.env.step(Action(action)).map_err(to_py_err)?;
        Ok((
            PyGomokuState(step.state),
            step.result,
            step.done,
            PyDict::new_bound(py),
        ))
    }

    /// Not supported; raises NotImplementedError.
    fn render(&self) -> PyResult<()> {
        self.env.render().map_err(to_py_err)
    }

    /// A uniformly random legal action, or None when the board is full.
    fn sample_action(&mut self) -> Option<usize> {
        self.env.sample_action(&mut self.rng).map(Action::index)
    }

    #[getter]
    fn state(&self) -> PyGomokuState {
        PyGomokuState(self.env.state().clone())
    }

    #[getter]
    fn board_size(&self) -> usize {
        self.env.config().board_size
    }

    #[getter]
    fn num_win(&self) -> usize {
        self.env.config().num_win
    }

    #[getter]
    fn num_player(&self) -> usize {
        self.env.num_player()
    }

    fn __repr__(&self) -> String {
        let config = self.env.config();
        format!(
            "GomokuEnv(board_size={}, num_win={}, num_player={}, turn={})",
            config.board_size,
            config.num_win,
            config.num_player,
            self.env.state().turn()
        )
    }
}
