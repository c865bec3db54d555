//! Repeats complete runs of an engine and averages the recorded series
//! element-wise.

use tracing::debug;

use super::{challenge::Challenge, engine::EvolutionEngine, history::RunHistory};
use crate::{
    error::{GeneticError, Result},
    strategy::BreedStrategy,
};

/// Element-wise mean of several [`RunHistory`] series.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct AveragedHistory {
    pub runs: usize,
    pub best_fitness: Vec<f64>,
    pub average_fitness: Vec<f64>,
    pub test_results: Option<Vec<f64>>,
}

impl AveragedHistory {
    /// Averages `histories`, which must all have the same length and agree on
    /// whether a test series exists.
    pub fn from_histories(histories: &[RunHistory]) -> Result<Self> {
        let first = histories.first().ok_or_else(|| {
            GeneticError::Configuration("Cannot average zero runs".to_string())
        })?;
        let len = first.len();
        let has_tests = first.test_results.is_some();

        if histories
            .iter()
            .any(|h| h.len() != len || h.test_results.is_some() != has_tests)
        {
            return Err(GeneticError::Evolution(
                "Run histories differ in shape and cannot be averaged".to_string(),
            ));
        }

        let runs = histories.len();
        let best_fitness =
            mean_series(histories.iter().map(|h| h.best_fitness.as_slice()), len, runs);
        let average_fitness =
            mean_series(histories.iter().map(|h| h.average_fitness.as_slice()), len, runs);
        let test_results = has_tests.then(|| {
            mean_series(
                histories.iter().filter_map(|h| h.test_results.as_deref()),
                len,
                runs,
            )
        });

        Ok(Self {
            runs,
            best_fitness,
            average_fitness,
            test_results,
        })
    }

    /// Number of averaged generations, including generation 0.
    pub fn len(&self) -> usize {
        self.best_fitness.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best_fitness.is_empty()
    }
}

fn mean_series<'a>(series: impl Iterator<Item = &'a [f64]>, len: usize, runs: usize) -> Vec<f64> {
    let mut sums = vec![0.0; len];
    for values in series {
        for (sum, value) in sums.iter_mut().zip(values) {
            *sum += value;
        }
    }
    sums.into_iter().map(|sum| sum / runs as f64).collect()
}

/// Runs an engine `runs` times from scratch and averages the results.
///
/// ```rust
/// use rulegen::binary::{BinaryChallenge, BinaryClassificationConfig};
/// use rulegen::dataset::BinaryDataSet;
/// use rulegen::evolution::{AlgorithmRunner, EvolutionOptions};
/// use rulegen::rng::RandomNumberGenerator;
///
/// let training = vec![BinaryDataSet::new(vec![1, 0, 1], 1)];
/// let options = EvolutionOptions::builder()
///     .num_generations(4)
///     .population_size(6)
///     .build()
///     .unwrap();
/// let config = BinaryClassificationConfig::new(options, 2, false).unwrap();
/// let challenge = BinaryChallenge::new(config, training, None).unwrap();
/// let mut engine = challenge.into_classifier(RandomNumberGenerator::from_seed(1));
///
/// let averaged = AlgorithmRunner::new(3).unwrap().run(&mut engine).unwrap();
/// assert_eq!(averaged.runs, 3);
/// assert_eq!(averaged.len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmRunner {
    runs: usize,
}

impl AlgorithmRunner {
    /// # Errors
    ///
    /// Returns a configuration error if `runs` is zero.
    pub fn new(runs: usize) -> Result<Self> {
        if runs < 1 {
            return Err(GeneticError::Configuration(
                "Number of runs must be at least 1".to_string(),
            ));
        }
        Ok(Self { runs })
    }

    pub fn runs(&self) -> usize {
        self.runs
    }

    pub fn run<C, B>(&self, engine: &mut EvolutionEngine<C, B>) -> Result<AveragedHistory>
    where
        C: Challenge,
        B: BreedStrategy<C::Solution>,
    {
        let mut histories = Vec::with_capacity(self.runs);
        for run in 0..self.runs {
            let history = engine.run_algorithm()?;
            debug!(
                run,
                best = history.last().map(|s| s.best_fitness),
                "run complete"
            );
            histories.push(history);
        }
        AveragedHistory::from_histories(&histories)
    }
}
