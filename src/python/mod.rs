//! Python bindings for the 2048 board engine.
//!
//! # Quick Start
//!
//! ```python
//! import rust_2048
//!
//! game = rust_2048.Game(seed=42)
//! outcome = game.step("left")
//! print(game.grid().reshape(4, 4), game.score, outcome.is_over)
//! ```

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::core::{tile_color, EngineError};

mod py_engine;
mod py_game;

pub use py_engine::*;
pub use py_game::*;

/// Map engine errors onto Python exceptions.
///
/// Bad input raises `ValueError`; `BoardFull` and `GameOver` raise
/// `RuntimeError`.
pub(crate) fn to_py_err(err: EngineError) -> PyErr {
    match err {
        EngineError::InvalidArgument(_)
        | EngineError::InvalidTile { .. }
        | EngineError::InvalidConfig(_) => PyValueError::new_err(err.to_string()),
        EngineError::BoardFull | EngineError::GameOver => PyRuntimeError::new_err(err.to_string()),
    }
}

/// Background color for a tile value.
#[pyfunction]
#[pyo3(name = "tile_color")]
fn py_tile_color(value: u32) -> String {
    tile_color(value)
}

/// rust_2048: a deterministic 2048 board engine.
#[pymodule]
fn rust_2048(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBoardEngine>()?;
    m.add_class::<PyMoveResult>()?;
    m.add_class::<PyGame>()?;
    m.add_class::<PyStepOutcome>()?;
    m.add_function(wrap_pyfunction!(py_tile_color, m)?)?;

    Ok(())
}
