use std::{fmt, sync::Arc};

use super::rule::{crossover_point, swap_tails, BitRule, Symbol};
use crate::{
    caching::FitnessCache,
    dataset::BinaryDataSet,
    error::{GeneticError, Result},
    rng::RandomNumberGenerator,
    solution::Solution,
};

/// A first-match decision list of [`BitRule`]s.
///
/// Fitness counts the training records whose first matching rule predicts the
/// right label. Records no rule matches score nothing.
#[derive(Debug, Clone)]
pub struct BitRuleSolution {
    rules: Vec<BitRule>,
    training: Arc<[BinaryDataSet]>,
    use_wildcard: bool,
    fitness: FitnessCache,
}

impl BitRuleSolution {
    pub fn new(rules: Vec<BitRule>, training: Arc<[BinaryDataSet]>, use_wildcard: bool) -> Self {
        Self {
            rules,
            training,
            use_wildcard,
            fitness: FitnessCache::new(),
        }
    }

    /// Generates `rule_count` random rules over `input_len` input bits.
    pub fn random(
        rule_count: usize,
        input_len: usize,
        training: Arc<[BinaryDataSet]>,
        use_wildcard: bool,
        rng: &mut RandomNumberGenerator,
    ) -> Self {
        let rules = (0..rule_count)
            .map(|_| BitRule::generate(input_len, use_wildcard, rng))
            .collect();
        Self::new(rules, training, use_wildcard)
    }

    /// Re-segments a flattened bit string into rules of `rule_length`
    /// symbols each (inputs followed by the output).
    ///
    /// # Errors
    ///
    /// Returns a data format error if `rule_length` is zero or does not divide
    /// the string length.
    pub fn from_bit_string(
        bits: &[Symbol],
        rule_length: usize,
        training: Arc<[BinaryDataSet]>,
        use_wildcard: bool,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Self> {
        if rule_length == 0 || bits.len() % rule_length != 0 {
            return Err(GeneticError::DataFormat(format!(
                "A bit string of length {} cannot be split into rules of length {}",
                bits.len(),
                rule_length
            )));
        }
        let rules = bits
            .chunks(rule_length)
            .map(|chunk| BitRule::from_flat(chunk, use_wildcard, rng))
            .collect();
        Ok(Self::new(rules, training, use_wildcard))
    }

    pub fn rules(&self) -> &[BitRule] {
        &self.rules
    }

    pub fn use_wildcard(&self) -> bool {
        self.use_wildcard
    }

    /// Length of one flattened rule.
    pub fn rule_length(&self) -> usize {
        self.rules.first().map_or(0, BitRule::flat_len)
    }

    /// Every rule's input symbols followed by its output, concatenated.
    pub fn bit_string(&self) -> Vec<Symbol> {
        self.rules.iter().flat_map(BitRule::flat_symbols).collect()
    }

    /// Number of records in `data` classified correctly, without penalties.
    pub fn fitness_on(&self, data: &[BinaryDataSet]) -> f64 {
        data.iter()
            .filter(|record| {
                self.rules
                    .iter()
                    .find(|rule| rule.input_matches(record))
                    .is_some_and(|rule| rule.output_matches(record))
            })
            .count() as f64
    }
}

impl Solution for BitRuleSolution {
    fn fitness(&self) -> f64 {
        self.fitness
            .get_or_compute(|| self.fitness_on(&self.training))
    }

    /// Single-point crossover over the flattened bit strings, cut anywhere in
    /// `[1, len - 2]` regardless of rule boundaries.
    fn crossover(&self, other: &Self, rng: &mut RandomNumberGenerator) -> (Self, Self) {
        let first = self.bit_string();
        let second = other.bit_string();
        let point = crossover_point(first.len().min(second.len()), rng);
        let (bits1, bits2) = swap_tails(&first, &second, point);

        let rule_length = self.rule_length();
        let rebuild = |bits: &[Symbol], rng: &mut RandomNumberGenerator| {
            let rules = bits
                .chunks(rule_length.max(1))
                .map(|chunk| BitRule::from_flat(chunk, self.use_wildcard, rng))
                .collect();
            Self::new(rules, Arc::clone(&self.training), self.use_wildcard)
        };

        (rebuild(&bits1, rng), rebuild(&bits2, rng))
    }

    fn mutate(&mut self, mutation_rate: u32, rng: &mut RandomNumberGenerator) {
        self.fitness.invalidate();
        for rule in self.rules.iter_mut() {
            rule.mutate(mutation_rate, rng);
        }
    }
}

impl PartialEq for BitRuleSolution {
    fn eq(&self, other: &Self) -> bool {
        self.rules == other.rules
    }
}

impl fmt::Display for BitRuleSolution {
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
