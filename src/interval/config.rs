use crate::{
    dataset::RealDataSet,
    error::{GeneticError, Result},
    evolution::EvolutionOptions,
    rng::RandomNumberGenerator,
};

/// Closed range `[min, max]` every interval bound is kept inside.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    min: f64,
    max: f64,
}

impl ValueRange {
    /// # Errors
    ///
    /// Returns a configuration error unless both ends are finite and
    /// `min <= max`.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(GeneticError::Configuration(format!(
                "Value range [{}, {}] must be finite",
                min, max
            )));
        }
        if min > max {
            return Err(GeneticError::Configuration(format!(
                "Minimum value {} exceeds maximum value {}",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    /// The smallest range holding every input value of `records`.
    ///
    /// ```
    /// use rulegen::dataset::RealDataSet;
    /// use rulegen::interval::ValueRange;
    ///
    /// let records = vec![
    ///     RealDataSet::new(vec![0.5, -1.0], 0),
    ///     RealDataSet::new(vec![2.0, 0.25], 1),
    /// ];
    /// let range = ValueRange::observed(&records).unwrap();
    /// assert_eq!((range.min(), range.max()), (-1.0, 2.0));
    /// ```
    pub fn observed(records: &[RealDataSet]) -> Result<Self> {
        let mut values = records.iter().flat_map(|r| r.input.iter().copied());
        let first = values.next().ok_or_else(|| {
            GeneticError::DataFormat("Cannot derive a value range from no values".to_string())
        })?;
        let (min, max) = values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Self::new(min, max).map_err(|e| GeneticError::DataFormat(e.to_string()))
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    /// A value drawn uniformly from `[min, max)`.
    pub fn sample(&self, rng: &mut RandomNumberGenerator) -> f64 {
        rng.uniform(self.min, self.max)
    }
}

/// How the size of a bound shift is drawn during interval mutation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepSampling {
    /// Uniform over `[0, max_step)`.
    #[default]
    Uniform,
    /// `u % max_step` with `u` uniform over `[0, 1)`. Never exceeds 1, so
    /// steps above 1 are not reached.
    UnitModulo,
}

impl StepSampling {
    /// Draws an unsigned step. A non-positive `max_step` always yields 0.
    pub fn sample(self, max_step: f64, rng: &mut RandomNumberGenerator) -> f64 {
        if max_step <= 0.0 {
            return 0.0;
        }
        match self {
            StepSampling::Uniform => rng.uniform(0.0, max_step),
            StepSampling::UnitModulo => rng.unit() % max_step,
        }
    }
}

/// Parameters of an interval-rule classification run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalClassificationConfig {
    options: EvolutionOptions,
    rule_count: usize,
    bounds: ValueRange,
    max_mutation_step: f64,
    step_sampling: StepSampling,
}

impl IntervalClassificationConfig {
    /// # Errors
    ///
    /// Returns a configuration error if the options are out of bounds,
    /// `rule_count` is zero, or `max_mutation_step` is negative or not finite.
    pub fn new(
        options: EvolutionOptions,
        rule_count: usize,
        bounds: ValueRange,
        max_mutation_step: f64,
    ) -> Result<Self> {
        options.validate()?;
        if rule_count < 1 {
            return Err(GeneticError::Configuration(
                "Rule count must be at least 1".to_string(),
            ));
        }
        if !max_mutation_step.is_finite() || max_mutation_step < 0.0 {
            return Err(GeneticError::Configuration(format!(
                "Maximum mutation step must be a non-negative number, got {}",
                max_mutation_step
            )));
        }
        Ok(Self {
            options,
            rule_count,
            bounds,
            max_mutation_step,
            step_sampling: StepSampling::default(),
        })
    }

    pub fn with_step_sampling(mut self, step_sampling: StepSampling) -> Self {
        self.step_sampling = step_sampling;
        self
    }

    pub fn options(&self) -> &EvolutionOptions {
        &self.options
    }

    pub fn rule_count(&self) -> usize {
        self.rule_count
    }

    pub fn bounds(&self) -> ValueRange {
        self.bounds
    }

    pub fn max_mutation_step(&self) -> f64 {
        self.max_mutation_step
    }

    pub fn step_sampling(&self) -> StepSampling {
        self.step_sampling
    }
}
