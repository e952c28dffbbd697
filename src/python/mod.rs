//! Python bindings for the environment.
//!
//! # Quick Start
//!
//! ```python
//! import gomoku_env
//!
//! env = gomoku_env.GomokuEnv(board_size=9, num_win=5, seed=42)
//! state = env.reset()
//! while not state.done:
//!     state, result, done, info = env.step(env.sample_action())
//! ```

use pyo3::exceptions::{PyNotImplementedError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::error::Error;

mod py_env;
mod py_state;

pub use py_env::PyGomokuEnv;
pub use py_state::PyGomokuState;

/// Map crate errors onto Python exception types.
pub(crate) fn to_py_err(err: Error) -> PyErr {
    match err {
        Error::IllegalMove { .. } | Error::InvalidConfiguration { .. } => {
            PyValueError::new_err(err.to_string())
        }
        Error::EpisodeFinished { .. } => PyRuntimeError::new_err(err.to_string()),
        Error::RenderUnsupported => PyNotImplementedError::new_err(err.to_string()),
    }
}

/// gomoku_env: N-in-a-row environment for reinforcement learning.
#[pymodule]
fn gomoku_env(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGomokuEnv>()?;
    m.add_class::<PyGomokuState>()?;
    Ok(())
}
