//! Board engine bindings for Python.

use numpy::PyArray1;
use pyo3::prelude::*;

use crate::core::{GameRng, Grid, Tile};
use crate::engine::{BoardEngine, MoveResult};

use super::to_py_err;

/// Python wrapper for MoveResult.
#[pyclass(name = "MoveResult")]
#[derive(Clone, Debug)]
pub struct PyMoveResult(pub MoveResult);

#[pymethods]
impl PyMoveResult {
    /// Whether the move changed the grid.
    #[getter]
    fn changed(&self) -> bool {
        self.0.changed
    }

    /// Points gained from merges.
    #[getter]
    fn score_delta(&self) -> u64 {
        self.0.score_delta
    }

    /// Grid after the move as a flat numpy array.
    fn grid<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<u32>> {
        PyArray1::from_slice_bound(py, self.0.grid.cells())
    }

    fn __repr__(&self) -> String {
        format!(
            "MoveResult(changed={}, score_delta={})",
            self.0.changed, self.0.score_delta
        )
    }
}

/// Python wrapper for BoardEngine.
///
/// Exposes the raw transition engine: moves never spawn and never end the
/// game. Use `Game` for the full move/spawn/game-over loop.
#[pyclass(name = "BoardEngine")]
pub struct PyBoardEngine {
    inner: BoardEngine,
}

#[pymethods]
impl PyBoardEngine {
    /// Create an engine.
    ///
    /// # Arguments
    /// - seed: RNG seed for tile spawning
    /// - cells: optional 16 row-major tile values to start from
    /// - score: starting score
    #[new]
    #[pyo3(signature = (seed = 42, cells = None, score = 0))]
    fn new(seed: u64, cells: Option<Vec<Tile>>, score: u64) -> PyResult<Self> {
        let inner = match cells {
            Some(cells) => {
                let grid = Grid::try_from(cells.as_slice()).map_err(to_py_err)?;
                BoardEngine::from_grid(grid, score, GameRng::new(seed))
            }
            None => BoardEngine::new(seed),
        };
        Ok(Self { inner })
    }

    /// Apply a move ("up", "down", "left", "right").
    fn apply_move(&mut self, direction: &str) -> PyResult<PyMoveResult> {
        self.inner
            .apply_named_move(direction)
            .map(PyMoveResult)
            .map_err(to_py_err)
    }

    /// Spawn a tile. Returns `(index, value)`, or None when the board is full.
    fn spawn_tile(&mut self) -> Option<(usize, Tile)> {
        self.inner.spawn_tile().ok().map(|t| (t.index, t.value))
    }

    /// Whether any move could still change the board.
    fn has_moves_available(&self) -> bool {
        self.inner.has_moves_available()
    }

    /// Current grid as a flat numpy array.
    fn grid<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<u32>> {
        PyArray1::from_slice_bound(py, self.inner.grid().cells())
    }

    #[getter]
    fn score(&self) -> u64 {
        self.inner.score()
    }

    fn __repr__(&self) -> String {
        format!(
            "BoardEngine(score={}, max_tile={}, empty={})",
            self.inner.score(),
            self.inner.max_tile(),
            self.inner.empty_count()
        )
    }
}
