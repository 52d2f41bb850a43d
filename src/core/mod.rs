//! Core types: tiles, grid, directions, the line kernel, RNG, configuration.
//!
//! Everything here is a pure value or a pure function except the spawn
//! source, which is the single place randomness enters.

pub mod config;
pub mod direction;
pub mod error;
pub mod grid;
pub mod line;
pub mod rng;
pub mod tile;

pub use config::{EngineConfig, DEFAULT_FOUR_PROBABILITY};
pub use direction::{Direction, Line};
pub use error::EngineError;
pub use grid::{EmptyCells, Grid, CELLS, SIDE};
pub use line::{combine, compact, slide_line, Row};
pub use rng::{GameRng, GameRngState, SpawnSource};
pub use tile::{exponent, is_valid_tile, tile_color, Tile, EMPTY, MAX_TILE};
