//! Game session implementation.

use log::info;
use serde::{Deserialize, Serialize};

use crate::core::{Direction, EngineConfig, EngineError, GameRng, Grid, SpawnSource};
use crate::engine::{BoardEngine, GameStatus, MoveResult, SpawnedTile};

/// Everything that happened during one [`Game::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepOutcome {
    /// The move itself.
    pub result: MoveResult,
    /// Tile placed after a board-changing move, if there was room.
    pub spawned: Option<SpawnedTile>,
    /// Status after the terminal check.
    pub status: GameStatus,
}

/// Read-only view for presentation layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub grid: Grid,
    pub score: u64,
    pub status: GameStatus,
    /// Moves that changed the board.
    pub moves: u32,
}

/// A running game: a board engine plus the move/spawn/terminal policy.
#[derive(Clone, Debug)]
pub struct Game<S = GameRng> {
    engine: BoardEngine<S>,
    status: GameStatus,
    moves: u32,
}

/// Builder for creating a [`Game`].
#[derive(Clone, Debug)]
pub struct GameBuilder {
    config: EngineConfig,
    grid: Option<Grid>,
    score: u64,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            grid: None,
            score: 0,
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn four_probability(mut self, probability: f64) -> Self {
        self.config.four_probability = probability;
        self
    }

    pub fn initial_tiles(mut self, count: usize) -> Self {
        self.config.initial_tiles = count;
        self
    }

    /// Start from this grid instead of an empty board.
    ///
    /// No initial tiles are spawned onto a provided grid.
    pub fn grid(mut self, grid: Grid) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Starting score, only meaningful together with [`grid`](Self::grid).
    pub fn score(mut self, score: u64) -> Self {
        self.score = score;
        self
    }

    /// Build the game with a seeded RNG.
    ///
    /// `seed` takes precedence over the configured `seed`; use
    /// [`build_from_config`](Self::build_from_config) to honour it.
    pub fn build(self, seed: u64) -> Result<Game, EngineError> {
        self.build_with_source(GameRng::new(seed))
    }

    /// Build the game seeded from the configuration.
    pub fn build_from_config(self) -> Result<Game, EngineError> {
        let seed = self.config.seed;
        self.build(seed)
    }

    /// Build the game with any spawn source.
    pub fn build_with_source<S: SpawnSource>(self, source: S) -> Result<Game<S>, EngineError> {
        self.config.validate()?;

        let start = self.grid.unwrap_or(Grid::EMPTY);
        let mut engine = BoardEngine::from_grid(start, self.score, source);
        engine.set_four_probability(self.config.four_probability)?;

        if self.grid.is_none() {
            for _ in 0..self.config.initial_tiles {
                engine.spawn_tile()?;
            }
        }

        let status = engine.status();
        Ok(Game {
            engine,
            status,
            moves: 0,
        })
    }
}

impl Game<GameRng> {
    /// New game with default settings: two starting tiles.
    pub fn new(seed: u64) -> Self {
        let mut engine = BoardEngine::new(seed);
        // Two spawns on an empty board cannot fail.
        engine.try_spawn_tile();
        engine.try_spawn_tile();
        Self {
            engine,
            status: GameStatus::Playing,
            moves: 0,
        }
    }

    /// New game from a configuration (seed, spawn odds, starting tiles).
    pub fn from_config(config: &EngineConfig) -> Result<Self, EngineError> {
        GameBuilder::new().config(config.clone()).build_from_config()
    }
}

impl<S: SpawnSource> Game<S> {
    /// Apply a move, spawn if the board changed, then check for game over.
    ///
    /// The terminal check runs after every attempted move, including no-op
    /// moves, so a stuck board is reported as soon as the player tries it.
    /// Once the game is over every step fails with [`EngineError::GameOver`].
    pub fn step(&mut self, dir: Direction) -> Result<StepOutcome, EngineError> {
        if self.status.is_over() {
            return Err(EngineError::GameOver);
        }

        let result = self.engine.apply_move(dir);
        let spawned = if result.changed {
            self.moves += 1;
            match self.engine.spawn_tile() {
                Ok(tile) => Some(tile),
                Err(EngineError::BoardFull) => None,
                Err(err) => return Err(err),
            }
        } else {
            None
        };

        self.status = self.engine.status();
        if self.status.is_over() {
            info!(
                "game over after {} moves: score={} max_tile={}",
                self.moves,
                self.engine.score(),
                self.engine.max_tile()
            );
        }

        Ok(StepOutcome {
            result,
            spawned,
            status: self.status,
        })
    }

    /// Parse `name` as a direction, then [`step`](Self::step).
    pub fn step_named(&mut self, name: &str) -> Result<StepOutcome, EngineError> {
        let dir: Direction = name.parse()?;
        self.step(dir)
    }

    /// The underlying engine.
    pub fn engine(&self) -> &BoardEngine<S> {
        &self.engine
    }

    /// Copy of the current grid.
    pub fn grid(&self) -> Grid {
        self.engine.grid()
    }

    /// Current score.
    pub fn score(&self) -> u64 {
        self.engine.score()
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if the game has ended.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Moves that changed the board.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Which directions would change the board.
    pub fn legal_moves(&self) -> [bool; 4] {
        self.engine.legal_moves()
    }

    /// Plain-data view of the game.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            grid: self.grid(),
            score: self.score(),
            status: self.status,
            moves: self.moves,
        }
    }
}
