//! Engine configuration.

use serde::{Deserialize, Serialize};

use super::error::EngineError;
use super::grid::CELLS;

/// Default probability that a spawned tile is a 4.
pub const DEFAULT_FOUR_PROBABILITY: f64 = 0.1;

/// Configuration for a board engine or game session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seed for the spawn RNG.
    /// Same seed produces the same spawn sequence.
    pub seed: u64,

    /// Probability that a spawned tile is a 4 instead of a 2.
    pub four_probability: f64,

    /// Tiles placed when a new game starts.
    pub initial_tiles: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            four_probability: DEFAULT_FOUR_PROBABILITY,
            initial_tiles: 2,
        }
    }
}

impl EngineConfig {
    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the probability of spawning a 4.
    #[must_use]
    pub fn with_four_probability(mut self, probability: f64) -> Self {
        self.four_probability = probability;
        self
    }

    /// Set the number of starting tiles.
    #[must_use]
    pub fn with_initial_tiles(mut self, count: usize) -> Self {
        self.initial_tiles = count;
        self
    }

    /// Check that every value is in range.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(EngineError::InvalidConfig(format!(
                "four_probability must be within [0, 1], got {}",
                self.four_probability
            )));
        }
        if self.initial_tiles > CELLS {
            return Err(EngineError::InvalidConfig(format!(
                "initial_tiles must be at most {CELLS}, got {}",
                self.initial_tiles
            )));
        }
        Ok(())
    }
}
