use std::sync::Arc;

use super::{config::BinaryClassificationConfig, solution::BitRuleSolution};
use crate::{
    dataset::{ensure_matching_widths, BinaryDataSet},
    error::{GeneticError, Result},
    evolution::{Challenge, EvolutionEngine, EvolutionOptions},
    rng::RandomNumberGenerator,
    strategy::PairedBreeding,
};

/// An engine evolving bit-rule classifiers.
pub type BinaryClassifier = EvolutionEngine<BinaryChallenge>;

/// Bit-rule classification over a training set and an optional testing set.
#[derive(Debug, Clone)]
pub struct BinaryChallenge {
    config: BinaryClassificationConfig,
    training: Arc<[BinaryDataSet]>,
    testing: Option<Arc<[BinaryDataSet]>>,
    input_len: usize,
}

impl BinaryChallenge {
    /// # Errors
    ///
    /// Returns a data format error if the training set is empty, the records
    /// differ in width, or a testing set is given that is empty or of another
    /// width.
    pub fn new(
        config: BinaryClassificationConfig,
        training: Vec<BinaryDataSet>,
        testing: Option<Vec<BinaryDataSet>>,
    ) -> Result<Self> {
        let input_len = ensure_matching_widths(&training, testing.as_deref())?;

        Ok(Self {
            config,
            training: training.into(),
            testing: testing.map(Into::into),
            input_len,
        })
    }

    pub fn config(&self) -> &BinaryClassificationConfig {
        &self.config
    }

    pub fn training(&self) -> &[BinaryDataSet] {
        &self.training
    }

    pub fn testing(&self) -> Option<&[BinaryDataSet]> {
        self.testing.as_deref()
    }

    /// Width of every input record.
    pub fn input_len(&self) -> usize {
        self.input_len
    }

    /// Wraps the challenge in an engine driven by the configured options.
    pub fn into_classifier(self, rng: RandomNumberGenerator) -> BinaryClassifier {
        let options = self.config.options().clone();
        EvolutionEngine::new(self, PairedBreeding::new(), options, rng)
    }
}

impl Challenge for BinaryChallenge {
    type Solution = BitRuleSolution;

    fn random_solution(&self, rng: &mut RandomNumberGenerator) -> BitRuleSolution {
        BitRuleSolution::random(
            self.config.rule_count(),
            self.input_len,
            Arc::clone(&self.training),
            self.config.use_wildcard(),
            rng,
        )
    }

    fn options(&self) -> Option<&EvolutionOptions> {
        Some(self.config.options())
    }

    fn can_test(&self) -> bool {
        self.testing.is_some()
    }

    fn test_accuracy(&self, solution: &BitRuleSolution) -> Result<f64> {
        let testing = self.testing.as_ref().ok_or_else(|| {
            GeneticError::UnsupportedOperation("No testing data was supplied".to_string())
        })?;
        Ok(solution.fitness_on(testing) / testing.len() as f64 * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        binary::BitRule,
        evolution::{EvolutionOptions, LogLevel},
    };

    fn config(rule_count: usize) -> BinaryClassificationConfig {
        BinaryClassificationConfig::new(
            EvolutionOptions::new(10, 10, 1, LogLevel::None),
            rule_count,
            true,
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_empty_training() {
        let result = BinaryChallenge::new(config(1), Vec::new(), None);
        assert!(matches!(result, Err(GeneticError::DataFormat(_))));
    }

    #[test]
    fn test_rejects_mismatched_widths() {
        let training = vec![
            BinaryDataSet::new(vec![0, 1], 0),
            BinaryDataSet::new(vec![0, 1, 1], 0),
        ];
        assert!(BinaryChallenge::new(config(1), training, None).is_err());

        let training = vec![BinaryDataSet::new(vec![0, 1], 0)];
        let testing = vec![BinaryDataSet::new(vec![0], 0)];
        assert!(BinaryChallenge::new(config(1), training, Some(testing)).is_err());
    }

    #[test]
    fn test_random_solution_shape() {
        let training = vec![BinaryDataSet::new(vec![0, 1, 1, 0], 1)];
        let challenge = BinaryChallenge::new(config(3), training, None).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(0);
        let solution = challenge.random_solution(&mut rng);

        assert_eq!(solution.rules().len(), 3);
        assert!(solution.rules().iter().all(|r| r.input().len() == 4));
    }

    #[test]
    fn test_accuracy_percentage() {
        let training = vec![BinaryDataSet::new(vec![0, 0], 0)];
        let testing = vec![
            BinaryDataSet::new(vec![0, 0], 0),
            BinaryDataSet::new(vec![0, 1], 0),
            BinaryDataSet::new(vec![1, 1], 1),
            BinaryDataSet::new(vec![1, 0], 0),
        ];
        let challenge = BinaryChallenge::new(config(1), training.clone(), Some(testing)).unwrap();
        let rule = BitRule::from_pattern("0#", 0, true).unwrap();
        let solution = BitRuleSolution::new(vec![rule], training.into(), true);

        assert_eq!(challenge.test_accuracy(&solution).unwrap(), 50.0);
    }

    #[test]
    fn test_accuracy_without_testing_data() {
        let training = vec![BinaryDataSet::new(vec![0, 0], 0)];
        let challenge = BinaryChallenge::new(config(1), training, None).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(0);
        let solution = challenge.random_solution(&mut rng);

        assert!(!challenge.can_test());
        assert!(matches!(
            challenge.test_accuracy(&solution),
            Err(GeneticError::UnsupportedOperation(_))
        ));
    }
}
