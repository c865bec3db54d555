use std::fmt;

use super::config::{StepSampling, ValueRange};
use crate::{dataset::RealDataSet, rng::RandomNumberGenerator};

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// One closed interval per input dimension plus the predicted label.
///
/// Every pair satisfies `low <= high`, and mutation keeps both bounds inside
/// the rule's [`ValueRange`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalRule {
    pairs: Vec<(f64, f64)>,
    output: u8,
    bounds: ValueRange,
}

impl IntervalRule {
    /// Creates a rule, swapping any pair given as `(high, low)`.
    ///
    /// ```
    /// use rulegen::dataset::RealDataSet;
    /// use rulegen::interval::{IntervalRule, ValueRange};
    ///
    /// let bounds = ValueRange::new(0.0, 1.0).unwrap();
    /// let rule = IntervalRule::new(vec![(0.2, 0.6), (0.3, 0.7)], 1, bounds);
    /// assert!(rule.input_matches(&RealDataSet::new(vec![0.5, 0.35], 1)));
    /// assert!(!rule.input_matches(&RealDataSet::new(vec![0.5, 0.8], 1)));
    /// ```
    pub fn new(pairs: Vec<(f64, f64)>, output: u8, bounds: ValueRange) -> Self {
        Self {
            pairs: pairs.into_iter().map(|(a, b)| ordered(a, b)).collect(),
            output,
            bounds,
        }
    }

    /// Generates a rule over `input_len` dimensions with both bounds of each
    /// interval drawn uniformly from `bounds`.
    pub fn generate(input_len: usize, bounds: ValueRange, rng: &mut RandomNumberGenerator) -> Self {
        let pairs = (0..input_len)
            .map(|_| {
                let a = bounds.sample(rng);
                let b = bounds.sample(rng);
                ordered(a, b)
            })
            .collect();
        let output = u8::from(rng.coin());
        Self {
            pairs,
            output,
            bounds,
        }
    }

    pub fn pairs(&self) -> &[(f64, f64)] {
        &self.pairs
    }

    pub fn output(&self) -> u8 {
        self.output
    }

    pub fn bounds(&self) -> ValueRange {
        self.bounds
    }

    /// Single-point crossover over the interval list, cut in `[1, len]`.
    ///
    /// The first child keeps this rule's intervals before the cut and takes
    /// `other`'s after it; the second child is the mirror image. Each child
    /// predicts the label of the parent it did not start from.
    pub fn crossover(&self, other: &Self, rng: &mut RandomNumberGenerator) -> (Self, Self) {
        let len = self.pairs.len().min(other.pairs.len());
        let point = if len == 0 { 0 } else { rng.between(1, len) };

        let mut first = self.pairs[..point].to_vec();
        first.extend_from_slice(&other.pairs[point..]);
        let mut second = other.pairs[..point].to_vec();
        second.extend_from_slice(&self.pairs[point..]);

        (
            Self {
                pairs: first,
                output: other.output,
                bounds: self.bounds,
            },
            Self {
                pairs: second,
                output: self.output,
                bounds: self.bounds,
            },
        )
    }

    /// With probability `1 / mutation_rate` per dimension, shifts one bound
    /// (chosen at random) up or down by a step drawn with `sampling`, clamps it
    /// into the bounds and restores `low <= high`. The label flips with the
    /// same probability.
    pub fn mutate(
        &mut self,
        mutation_rate: u32,
        max_step: f64,
        sampling: StepSampling,
        rng: &mut RandomNumberGenerator,
    ) {
        for pair in self.pairs.iter_mut() {
            if !rng.one_in(mutation_rate) {
                continue;
            }
            let (mut low, mut high) = *pair;
            let shift_low = rng.coin();
            let step = sampling.sample(max_step, rng);
            let step = if rng.coin() { step } else { -step };

            if shift_low {
                low = self.bounds.clamp(low + step);
            } else {
                high = self.bounds.clamp(high + step);
            }
            *pair = ordered(low, high);
        }

        if rng.one_in(mutation_rate) {
            self.output ^= 1;
        }
    }

    /// Whether every input value lies inside its closed interval.
    pub fn input_matches(&self, data: &RealDataSet) -> bool {
        self.pairs.len() == data.input.len()
            && self
                .pairs
                .iter()
                .zip(&data.input)
                .all(|(&(low, high), &value)| low <= value && value <= high)
    }

    pub fn output_matches(&self, data: &RealDataSet) -> bool {
        self.output == data.output
    }
}

impl fmt::Display for IntervalRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (low, high) in &self.pairs {
            write!(f, "<{}, {}> ", low, high)?;
        }
        write!(f, "{}", self.output)
    }
}
