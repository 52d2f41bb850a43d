//! Engine error type.
//!
//! `BoardFull` and `GameOver` are ordinary signals the caller is expected to
//! handle; the other variants reject malformed input at the boundary.

use thiserror::Error;

use super::tile::Tile;

/// Errors returned by the board engine and game session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A spawn was requested but no cell is empty.
    #[error("board is full: no empty cell to spawn into")]
    BoardFull,

    /// Input outside the accepted domain (e.g. an unknown direction).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A grid was built from a value that is not a valid tile.
    #[error("invalid tile {value} at index {index}: expected 0 or a power of two >= 2")]
    InvalidTile { index: usize, value: Tile },

    /// Configuration failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The session already reached its terminal state.
    #[error("game over: no moves left")]
    GameOver,
}
