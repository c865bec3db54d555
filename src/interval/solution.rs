use std::{fmt, sync::Arc};

use super::{
    config::{StepSampling, ValueRange},
    rule::IntervalRule,
};
use crate::{
    caching::FitnessCache,
    dataset::RealDataSet,
    rng::RandomNumberGenerator,
    solution::Solution,
};

/// A first-match decision list of [`IntervalRule`]s.
///
/// Training fitness scores +1 for each record whose first matching rule
/// predicts the right label and -1 for each whose first match is wrong,
/// floored at zero. Scoring other data with [`fitness_on`](Self::fitness_on)
/// applies no penalty.
#[derive(Debug, Clone)]
pub struct IntervalRuleSolution {
    rules: Vec<IntervalRule>,
    training: Arc<[RealDataSet]>,
    max_mutation_step: f64,
    step_sampling: StepSampling,
    fitness: FitnessCache,
}

impl IntervalRuleSolution {
    pub fn new(
        rules: Vec<IntervalRule>,
        training: Arc<[RealDataSet]>,
        max_mutation_step: f64,
        step_sampling: StepSampling,
    ) -> Self {
        Self {
            rules,
            training,
            max_mutation_step,
            step_sampling,
            fitness: FitnessCache::new(),
        }
    }

    /// Generates `rule_count` random rules over `input_len` dimensions.
    pub fn random(
        rule_count: usize,
        input_len: usize,
        bounds: ValueRange,
        training: Arc<[RealDataSet]>,
        max_mutation_step: f64,
        step_sampling: StepSampling,
        rng: &mut RandomNumberGenerator,
    ) -> Self {
        let rules = (0..rule_count)
            .map(|_| IntervalRule::generate(input_len, bounds, rng))
            .collect();
        Self::new(rules, training, max_mutation_step, step_sampling)
    }

    pub fn rules(&self) -> &[IntervalRule] {
        &self.rules
    }

    pub fn max_mutation_step(&self) -> f64 {
        self.max_mutation_step
    }

    /// Number of records in `data` classified correctly, without penalties.
    pub fn fitness_on(&self, data: &[RealDataSet]) -> f64 {
        self.score(data, false)
    }

    fn score(&self, data: &[RealDataSet], penalize: bool) -> f64 {
        let total: f64 = data
            .iter()
            .filter_map(|record| {
                self.rules
                    .iter()
                    .find(|rule| rule.input_matches(record))
                    .map(|rule| rule.output_matches(record))
            })
            .map(|correct| match (correct, penalize) {
                (true, _) => 1.0,
                (false, true) => -1.0,
                (false, false) => 0.0,
            })
            .sum();
        total.max(0.0)
    }
}

impl Solution for IntervalRuleSolution {
    fn fitness(&self) -> f64 {
        self.fitness
            .get_or_compute(|| self.score(&self.training, true))
    }

    /// Crosses the i-th rule of each parent for every i.
    fn crossover(&self, other: &Self, rng: &mut RandomNumberGenerator) -> (Self, Self) {
        let (rules1, rules2): (Vec<_>, Vec<_>) = self
            .rules
            .iter()
            .zip(&other.rules)
            .map(|(a, b)| a.crossover(b, rng))
            .unzip();

        (
            Self::new(
                rules1,
                Arc::clone(&self.training),
                self.max_mutation_step,
                self.step_sampling,
            ),
            Self::new(
                rules2,
                Arc::clone(&self.training),
                self.max_mutation_step,
                self.step_sampling,
            ),
        )
    }

    fn mutate(&mut self, mutation_rate: u32, rng: &mut RandomNumberGenerator) {
        self.fitness.invalidate();
        for rule in self.rules.iter_mut() {
            rule.mutate(mutation_rate, self.max_mutation_step, self.step_sampling, rng);
        }
    }
}

impl PartialEq for IntervalRuleSolution {
    fn eq(&self, other: &Self) -> bool {
        self.rules == other.rules
    }
}

impl fmt::Display for IntervalRuleSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", i + 1, rule)?;
        }
        Ok(())
    }
}
