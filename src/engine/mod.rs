//! Board engine: the grid/score owner and its move, spawn and
//! availability operations.
//!
//! The engine calls into the core line kernel but never performs I/O or
//! decides what happens after a move.

pub mod board;
pub mod outcome;

pub use board::BoardEngine;
pub use outcome::{GameStatus, MoveResult, SpawnedTile};
