//! # Solution Trait
//!
//! The `Solution` trait defines the capability contract every candidate
//! solution must satisfy for the [`EvolutionEngine`](crate::evolution::EvolutionEngine)
//! to drive it: a cached fitness, a two-child crossover and an in-place mutation.
//!
//! ## Example
//!
//! ```rust
//! use std::fmt;
//!
//! use rulegen::caching::FitnessCache;
//! use rulegen::rng::RandomNumberGenerator;
//! use rulegen::solution::Solution;
//!
//! #[derive(Clone, Debug)]
//! struct Ones {
//!     bits: Vec<bool>,
//!     fitness: FitnessCache,
//! }
//!
//! impl fmt::Display for Ones {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         for bit in &self.bits {
//!             write!(f, "{}", *bit as u8)?;
//!         }
//!         Ok(())
//!     }
//! }
//!
//! impl Solution for Ones {
//!     fn fitness(&self) -> f64 {
//!         self.fitness
//!             .get_or_compute(|| self.bits.iter().filter(|b| **b).count() as f64)
//!     }
//!
//!     fn crossover(&self, other: &Self, rng: &mut RandomNumberGenerator) -> (Self, Self) {
//!         let point = rng.between(1, self.bits.len() - 1);
//!         let mut first = self.bits[..point].to_vec();
//!         first.extend_from_slice(&other.bits[point..]);
//!         let mut second = other.bits[..point].to_vec();
//!         second.extend_from_slice(&self.bits[point..]);
//!         (
//!             Ones { bits: first, fitness: FitnessCache::new() },
//!             Ones { bits: second, fitness: FitnessCache::new() },
//!         )
//!     }
//!
//!     fn mutate(&mut self, mutation_rate: u32, rng: &mut RandomNumberGenerator) {
//!         self.fitness.invalidate();
//!         for bit in self.bits.iter_mut() {
//!             if rng.one_in(mutation_rate) {
//!                 *bit = !*bit;
//!             }
//!         }
//!     }
//! }
//! ```

use std::fmt::{Debug, Display};

use crate::rng::RandomNumberGenerator;

/// Trait for candidate solutions evolved by the engine.
///
/// The canonical `Display` rendering lists the solution's rules in order and is
/// used for diagnostics and logging only; genetic operators never look at it.
pub trait Solution: Clone + Debug + Display {
    /// Returns the training fitness of this solution.
    ///
    /// The value is non-negative. Implementations memoise it and must return the
    /// memoised value until the genes change.
    fn fitness(&self) -> f64;

    /// Produces two children from `self` and `other`.
    ///
    /// The children keep the parents' rule count, carry genetic material from
    /// both parents and start with an empty fitness memo. Neither parent is
    /// modified.
    fn crossover(&self, other: &Self, rng: &mut RandomNumberGenerator) -> (Self, Self);

    /// Mutates the solution in place, each gene flipping with probability
    /// `1 / mutation_rate`. Always invalidates the fitness memo.
    fn mutate(&mut self, mutation_rate: u32, rng: &mut RandomNumberGenerator);
}
