//! The board engine: grid and score, move application, tile spawning.
//!
//! `apply_move` is a pure state transition. It never spawns and never
//! checks for game over; callers sequence those steps themselves (or use
//! [`Game`](crate::game::Game), which does it with a fixed policy).

use log::{debug, trace};

use crate::core::{
    Direction, EngineConfig, EngineError, GameRng, Grid, SpawnSource, Tile,
    DEFAULT_FOUR_PROBABILITY,
};

use super::outcome::{GameStatus, MoveResult, SpawnedTile};

/// Owns one grid and its score.
///
/// Generic over the spawn source so tests can script tile placement;
/// defaults to the seeded [`GameRng`].
///
/// ```
/// use rust_2048::{BoardEngine, Direction, Grid};
///
/// let grid = Grid::from_cells([2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]).unwrap();
/// let mut engine = BoardEngine::from_grid(grid, 0, rust_2048::GameRng::new(1));
///
/// let result = engine.apply_move(Direction::Left);
/// assert!(result.changed);
/// assert_eq!(result.score_delta, 4);
/// assert_eq!(engine.score(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct BoardEngine<S = GameRng> {
    grid: Grid,
    score: u64,
    source: S,
    four_probability: f64,
}

impl BoardEngine<GameRng> {
    /// Empty board with a seeded RNG.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_source(GameRng::new(seed))
    }

    /// Empty board configured from `config`.
    ///
    /// `initial_tiles` is not applied here; that belongs to a game session.
    pub fn from_config(config: &EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let mut engine = Self::new(config.seed);
        engine.four_probability = config.four_probability;
        Ok(engine)
    }
}

impl<S: SpawnSource> BoardEngine<S> {
    /// Empty board using the given spawn source.
    pub fn with_source(source: S) -> Self {
        Self::from_grid(Grid::EMPTY, 0, source)
    }

    /// Start from an existing grid and score.
    pub fn from_grid(grid: Grid, score: u64, source: S) -> Self {
        Self {
            grid,
            score,
            source,
            four_probability: DEFAULT_FOUR_PROBABILITY,
        }
    }

    /// Set the probability that a spawned tile is a 4.
    pub fn set_four_probability(&mut self, probability: f64) -> Result<(), EngineError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(EngineError::InvalidConfig(format!(
                "four_probability must be within [0, 1], got {probability}"
            )));
        }
        self.four_probability = probability;
        Ok(())
    }

    // === Queries ===

    /// Copy of the current grid.
    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Largest tile on the board.
    #[must_use]
    pub fn max_tile(&self) -> Tile {
        self.grid.max_tile()
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.grid.empty_count()
    }

    /// The spawn source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// True if an empty cell exists or two adjacent cells hold the same value.
    #[must_use]
    pub fn has_moves_available(&self) -> bool {
        self.grid.has_moves_available()
    }

    /// `Over` iff no moves are available.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.has_moves_available() {
            GameStatus::Playing
        } else {
            GameStatus::Over
        }
    }

    // === Moves ===

    /// Simulate a move without touching the board.
    #[must_use]
    pub fn preview_move(&self, dir: Direction) -> MoveResult {
        let (grid, gained) = self.grid.shift(dir);
        let changed = grid != self.grid;
        MoveResult {
            changed,
            score_delta: if changed { gained } else { 0 },
            grid,
        }
    }

    /// Apply a move to the board.
    ///
    /// A move that leaves the grid identical is a no-op: `changed` is false
    /// and the score is untouched. The score saturates at `u64::MAX`.
    pub fn apply_move(&mut self, dir: Direction) -> MoveResult {
        let result = self.preview_move(dir);
        if result.changed {
            self.grid = result.grid;
            self.score = self.score.saturating_add(result.score_delta);
        }
        trace!(
            "move {dir}: changed={} delta={} score={}",
            result.changed,
            result.score_delta,
            self.score
        );
        result
    }

    /// Parse `name` as a direction and apply it.
    ///
    /// Unknown names are rejected and the board is left untouched.
    pub fn apply_named_move(&mut self, name: &str) -> Result<MoveResult, EngineError> {
        let dir: Direction = name.parse()?;
        Ok(self.apply_move(dir))
    }

    /// Which directions would change the board, in `Direction::ALL` order.
    #[must_use]
    pub fn legal_moves(&self) -> [bool; 4] {
        Direction::ALL.map(|dir| self.preview_move(dir).changed)
    }

    // === Spawning ===

    /// Place a 2 (or a 4, with the configured probability) in a uniformly
    /// chosen empty cell.
    ///
    /// Returns [`EngineError::BoardFull`] and leaves the grid unchanged when
    /// there is no empty cell, and [`EngineError::InvalidArgument`] when the
    /// spawn source answers outside `0..len`.
    pub fn spawn_tile(&mut self) -> Result<SpawnedTile, EngineError> {
        let empties = self.grid.empty_cells();
        if empties.is_empty() {
            debug!("spawn skipped: board full");
            return Err(EngineError::BoardFull);
        }

        let pick = self.source.choose_index(empties.len());
        let index = *empties.get(pick).ok_or_else(|| {
            EngineError::InvalidArgument(format!(
                "spawn source picked {pick} but only {} cells are empty",
                empties.len()
            ))
        })?;
        let value = if self.source.chance(self.four_probability) {
            4
        } else {
            2
        };
        self.grid.set(index, value);

        debug!("spawned {value} at {index}");
        Ok(SpawnedTile { index, value })
    }

    /// Boolean form of [`spawn_tile`](Self::spawn_tile).
    pub fn try_spawn_tile(&mut self) -> bool {
        self.spawn_tile().is_ok()
    }
}
