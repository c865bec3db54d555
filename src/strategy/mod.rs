//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines the interface for strategies responsible
//! for turning the selected parents of a generation into offspring.
pub mod paired;

use std::fmt::Debug;

use crate::{error::Result, rng::RandomNumberGenerator, solution::Solution};

/// # BreedStrategy
///
/// Breeds exactly `parents.len()` offspring from the selected parents using the
/// solutions' own crossover operator. Mutation is applied by the engine
/// afterwards, not here.
pub trait BreedStrategy<S: Solution>
where
    Self: Debug + Clone,
{
    /// Breeds one offspring per parent.
    ///
    /// ## Errors
    ///
    /// Fails if `parents` is empty.
    fn breed(&self, parents: &[S], rng: &mut RandomNumberGenerator) -> Result<Vec<S>>;
}

pub use paired::PairedBreeding;
