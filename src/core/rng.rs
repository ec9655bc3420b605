//! Deterministic random number generation for randomized strategies.
//!
//! Same seed, same sequence. Forks give independent but reproducible
//! streams, so two random players seeded from one root never mirror each
//! other.
//!
//! ```
//! use stonehenge_solver::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut other = rng.fork();
//!
//! let mut rng2 = GameRng::new(42);
//! let mut other2 = rng2.fork();
//!
//! let moves = ['A', 'B', 'C', 'D'];
//! assert_eq!(other.choose(&moves), other2.choose(&moves));
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG with forking.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent branch.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}
