//! Per-generation statistics and the observer hook the engine reports them to.

/// Summary of the population after a generation.
///
/// Generation 0 describes the freshly initialized population.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    pub generation: usize,
    pub best_fitness: f64,
    pub average_fitness: f64,
    /// Accuracy percentage of the best solution on the testing data, if any.
    pub test_accuracy: Option<f64>,
}

/// The series recorded by one complete run, indexed by generation
/// `0..=num_generations`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunHistory {
    pub best_fitness: Vec<f64>,
    pub average_fitness: Vec<f64>,
    /// Present only when the challenge has testing data.
    pub test_results: Option<Vec<f64>>,
}

impl RunHistory {
    pub fn with_capacity(generations: usize, can_test: bool) -> Self {
        Self {
            best_fitness: Vec::with_capacity(generations + 1),
            average_fitness: Vec::with_capacity(generations + 1),
            test_results: can_test.then(|| Vec::with_capacity(generations + 1)),
        }
    }

    pub fn record(&mut self, stats: &GenerationStats) {
        self.best_fitness.push(stats.best_fitness);
        self.average_fitness.push(stats.average_fitness);
        if let (Some(series), Some(accuracy)) = (self.test_results.as_mut(), stats.test_accuracy) {
            series.push(accuracy);
        }
    }

    /// Number of recorded generations, including generation 0.
    pub fn len(&self) -> usize {
        self.best_fitness.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best_fitness.is_empty()
    }

    /// The statistics of the last recorded generation.
    pub fn last(&self) -> Option<GenerationStats> {
        let generation = self.len().checked_sub(1)?;
        Some(GenerationStats {
            generation,
            best_fitness: self.best_fitness[generation],
            average_fitness: self.average_fitness[generation],
            test_accuracy: self
                .test_results
                .as_ref()
                .and_then(|series| series.get(generation).copied()),
        })
    }
}

/// Receives the statistics of every recorded generation.
///
/// Closures taking `&GenerationStats` implement this trait.
pub trait GenerationObserver {
    fn on_generation(&mut self, stats: &GenerationStats);
}

impl<F> GenerationObserver for F
where
    F: FnMut(&GenerationStats),
{
    fn on_generation(&mut self, stats: &GenerationStats) {
        self(stats)
    }
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl GenerationObserver for NoopObserver {
    fn on_generation(&mut self, _stats: &GenerationStats) {}
}
