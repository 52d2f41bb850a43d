//! Random source for tile spawning.
//!
//! ## Key Features
//!
//! - **Injectable**: the engine only talks to [`SpawnSource`], so tests and
//!   hosts can script exactly where tiles land
//! - **Deterministic**: [`GameRng`] produces the same sequence for the same seed
//! - **Restorable**: O(1) state capture and restore via [`GameRngState`]
//!
//! ```
//! use rust_2048::core::{GameRng, SpawnSource};
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.choose_index(16), b.choose_index(16));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// The only randomness the board engine consumes.
pub trait SpawnSource {
    /// Pick an index in `0..len`, uniformly. `len` is never zero.
    ///
    /// An answer outside the range makes the spawn fail with
    /// `EngineError::InvalidArgument`.
    fn choose_index(&mut self, len: usize) -> usize;

    /// Return true with the given probability.
    fn chance(&mut self, probability: f64) -> bool;
}

impl<S: SpawnSource + ?Sized> SpawnSource for &mut S {
    fn choose_index(&mut self, len: usize) -> usize {
        (**self).choose_index(len)
    }

    fn chance(&mut self, probability: f64) -> bool {
        (**self).chance(probability)
    }
}

/// Deterministic seeded RNG.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Get the current state for later restore.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl SpawnSource for GameRng {
    fn choose_index(&mut self, len: usize) -> usize {
        self.gen_range_usize(0..len)
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.gen_bool(probability)
    }
}

/// Captured RNG position.
///
/// Uses ChaCha8 word position, so capture cost does not depend on how many
/// numbers were drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
