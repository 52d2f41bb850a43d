//! # rust-2048
//!
//! A deterministic 2048 board engine.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: `apply_move` computes the next grid and score
//!    delta and nothing else. Spawning and game-over checks are separate
//!    calls.
//!
//! 2. **Injectable Randomness**: the only random step (tile spawning) goes
//!    through `SpawnSource`, so every game is reproducible from a seed and
//!    tests can script tile placement.
//!
//! 3. **One Traversal Table**: each direction maps to four index lines;
//!    slide/merge is written once against a plain line of four tiles.
//!
//! ## Modules
//!
//! - `core`: Tiles, grid, directions, line kernel, RNG, configuration, errors
//! - `engine`: `BoardEngine` (move, spawn, availability) and its result types
//! - `game`: `Game` session applying the move/spawn/game-over policy
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod engine;
pub mod game;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Direction, EngineConfig, EngineError,
    GameRng, GameRngState, SpawnSource,
    Grid, Tile, CELLS, SIDE,
    compact, combine, slide_line, tile_color,
};

pub use crate::engine::{BoardEngine, GameStatus, MoveResult, SpawnedTile};

pub use crate::game::{Game, GameBuilder, GameSnapshot, StepOutcome};
