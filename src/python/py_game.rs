//! Game session bindings for Python.

use numpy::PyArray1;
use pyo3::prelude::*;

use crate::core::Tile;
use crate::game::{Game, GameBuilder, StepOutcome};

use super::to_py_err;

/// Python wrapper for StepOutcome.
#[pyclass(name = "StepOutcome")]
#[derive(Clone, Debug)]
pub struct PyStepOutcome(pub StepOutcome);

#[pymethods]
impl PyStepOutcome {
    #[getter]
    fn changed(&self) -> bool {
        self.0.result.changed
    }

    #[getter]
    fn score_delta(&self) -> u64 {
        self.0.result.score_delta
    }

    /// `(index, value)` of the spawned tile, if any.
    #[getter]
    fn spawned(&self) -> Option<(usize, Tile)> {
        self.0.spawned.map(|t| (t.index, t.value))
    }

    #[getter]
    fn is_over(&self) -> bool {
        self.0.status.is_over()
    }

    fn __repr__(&self) -> String {
        format!(
            "StepOutcome(changed={}, score_delta={}, over={})",
            self.0.result.changed,
            self.0.result.score_delta,
            self.0.status.is_over()
        )
    }
}

/// Python wrapper for Game.
///
/// A full game session: each step moves, spawns and checks for game over.
#[pyclass(name = "Game")]
pub struct PyGame {
    inner: Game,
}

#[pymethods]
impl PyGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - seed: RNG seed for deterministic games
    /// - four_probability: chance a spawned tile is a 4
    /// - initial_tiles: tiles placed at the start
    #[new]
    #[pyo3(signature = (seed = 42, four_probability = 0.1, initial_tiles = 2))]
    fn new(seed: u64, four_probability: f64, initial_tiles: usize) -> PyResult<Self> {
        let inner = GameBuilder::new()
            .four_probability(four_probability)
            .initial_tiles(initial_tiles)
            .build(seed)
            .map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Play one move ("up", "down", "left", "right" or "ArrowUp" etc.).
    fn step(&mut self, direction: &str) -> PyResult<PyStepOutcome> {
        self.inner
            .step_named(direction)
            .map(PyStepOutcome)
            .map_err(to_py_err)
    }

    /// Current grid as a flat numpy array (row-major, 16 cells).
    fn grid<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<u32>> {
        PyArray1::from_slice_bound(py, self.inner.grid().cells())
    }

    /// Legal directions as booleans [up, down, left, right].
    fn legal_moves(&self) -> Vec<bool> {
        self.inner.legal_moves().to_vec()
    }

    #[getter]
    fn score(&self) -> u64 {
        self.inner.score()
    }

    #[getter]
    fn moves(&self) -> u32 {
        self.inner.moves()
    }

    #[getter]
    fn is_over(&self) -> bool {
        self.inner.is_over()
    }

    fn __repr__(&self) -> String {
        let status = if self.inner.is_over() { "over" } else { "playing" };
        format!(
            "Game(score={}, moves={}, status={})",
            self.inner.score(),
            self.inner.moves(),
            status
        )
    }
}
