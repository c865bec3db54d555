//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the single source of randomness for a
//! run. The engine owns one and lends it to every representation operator, so a
//! run seeded with [`RandomNumberGenerator::from_seed`] is fully reproducible.
//!
//! ## Example
//!
//! ```rust
//! use rulegen::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let index = rng.index(10);
//! assert!(index < 10);
//!
//! let value = rng.uniform(-1.0, 1.0);
//! assert!((-1.0..1.0).contains(&value));
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng` that provides the draws the
/// genetic operators need.
#[derive(Debug, Clone)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns an index drawn uniformly from `0..len`.
    ///
    /// `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    /// Returns an integer drawn uniformly from the inclusive range `low..=high`.
    pub fn between(&mut self, low: usize, high: usize) -> usize {
        self.rng.gen_range(low..=high)
    }

    /// Returns a value drawn uniformly from `[from, to)`.
    ///
    /// An empty range yields `from`.
    pub fn uniform(&mut self, from: f64, to: f64) -> f64 {
        if to <= from {
            return from;
        }
        self.rng.gen_range(from..to)
    }

    /// Returns a value drawn uniformly from `[0, 1)`.
    pub fn unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Fair coin flip.
    pub fn coin(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    /// Returns `true` with probability `1 / denominator`.
    ///
    /// A denominator of 0 or 1 always hits.
    pub fn one_in(&mut self, denominator: u32) -> bool {
        denominator <= 1 || self.rng.gen_range(0..denominator) == 0
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
