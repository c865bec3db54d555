use crate::{error::Result, rng::RandomNumberGenerator, solution::Solution};

use super::EvolutionOptions;

/// The problem-specific half of an evolutionary run.
///
/// A challenge knows how to create random candidate solutions for its
/// representation and, when it holds held-out data, how accurately a solution
/// classifies that data.
pub trait Challenge {
    type Solution: Solution;

    /// Generates a random candidate solution.
    fn random_solution(&self, rng: &mut RandomNumberGenerator) -> Self::Solution;

    /// Run parameters the challenge was configured with, if it carries any.
    ///
    /// `EvolutionEngineBuilder` falls back to these when no options are given.
    fn options(&self) -> Option<&EvolutionOptions> {
        None
    }

    /// Whether held-out testing data is available.
    fn can_test(&self) -> bool;

    /// Percentage in `[0, 100]` of testing records that `solution` classifies
    /// correctly.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::UnsupportedOperation` when no testing data was
    /// supplied.
    fn test_accuracy(&self, solution: &Self::Solution) -> Result<f64>;
}
