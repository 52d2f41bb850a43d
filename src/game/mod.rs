//! Game session: orchestration around a board engine.
//!
//! - A new game starts with two tiles (configurable)
//! - Each step: apply the move, spawn a tile if the board changed, check
//!   for game over
//! - Once over, further steps are rejected
//!
//! Presentation layers that want a different policy can drive
//! [`BoardEngine`](crate::engine::BoardEngine) directly.

mod session;

pub use session::{Game, GameBuilder, GameSnapshot, StepOutcome};
