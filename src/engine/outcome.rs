//! Plain-data results handed back to the caller.

use serde::{Deserialize, Serialize};

use crate::core::{Grid, Tile};

/// Result of applying one move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    /// Whether the grid changed. `false` means the move was a no-op.
    pub changed: bool,
    /// Points gained from merges during this move.
    pub score_delta: u64,
    /// Grid after the move.
    pub grid: Grid,
}

/// A tile placed by a successful spawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnedTile {
    /// Row-major cell index.
    pub index: usize,
    /// Value placed (2 or 4).
    pub value: Tile,
}

/// Whether the game can continue.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves may still be possible.
    #[default]
    Playing,
    /// Board full and no adjacent equal tiles.
    Over,
}

impl GameStatus {
    /// Check if the game has ended.
    #[must_use]
    pub fn is_over(self) -> bool {
        self == GameStatus::Over
    }
}
