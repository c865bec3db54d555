use std::sync::Arc;

use super::{config::IntervalClassificationConfig, solution::IntervalRuleSolution};
use crate::{
    dataset::{ensure_matching_widths, RealDataSet},
    error::{GeneticError, Result},
    evolution::{Challenge, EvolutionEngine, EvolutionOptions},
    rng::RandomNumberGenerator,
    strategy::PairedBreeding,
};

/// An engine evolving interval-rule classifiers.
pub type IntervalClassifier = EvolutionEngine<IntervalChallenge>;

/// Interval-rule classification over a training set and an optional testing set.
#[derive(Debug, Clone)]
pub struct IntervalChallenge {
    config: IntervalClassificationConfig,
    training: Arc<[RealDataSet]>,
    testing: Option<Arc<[RealDataSet]>>,
    input_len: usize,
}

impl IntervalChallenge {
    /// # Errors
    ///
    /// Returns a data format error if the training set is empty, the records
    /// differ in width, or a testing set is given that is empty or of another
    /// width.
    pub fn new(
        config: IntervalClassificationConfig,
        training: Vec<RealDataSet>,
        testing: Option<Vec<RealDataSet>>,
    ) -> Result<Self> {
        let input_len = ensure_matching_widths(&training, testing.as_deref())?;

        Ok(Self {
            config,
            training: training.into(),
            testing: testing.map(Into::into),
            input_len,
        })
    }

    pub fn config(&self) -> &IntervalClassificationConfig {
        &self.config
    }

    pub fn training(&self) -> &[RealDataSet] {
        &self.training
    }

    pub fn testing(&self) -> Option<&[RealDataSet]> {
        self.testing.as_deref()
    }

    pub fn input_len(&self) -> usize {
        self.input_len
    }

    /// Wraps the challenge in an engine driven by the configured options.
    pub fn into_classifier(self, rng: RandomNumberGenerator) -> IntervalClassifier {
        let options = self.config.options().clone();
        EvolutionEngine::new(self, PairedBreeding::new(), options, rng)
    }
}

impl Challenge for IntervalChallenge {
    type Solution = IntervalRuleSolution;

    fn random_solution(&self, rng: &mut RandomNumberGenerator) -> IntervalRuleSolution {
        IntervalRuleSolution::random(
            self.config.rule_count(),
            self.input_len,
            self.config.bounds(),
            Arc::clone(&self.training),
            self.config.max_mutation_step(),
            self.config.step_sampling(),
            rng,
        )
    }

    fn options(&self) -> Option<&EvolutionOptions> {
        Some(self.config.options())
    }

    fn can_test(&self) -> bool {
        self.testing.is_some()
    }

    fn test_accuracy(&self, solution: &IntervalRuleSolution) -> Result<f64> {
        let testing = self.testing.as_ref().ok_or_else(|| {
            GeneticError::UnsupportedOperation("No testing data was supplied".to_string())
        })?;
        Ok(solution.fitness_on(testing) / testing.len() as f64 * 100.0)
    }
}
