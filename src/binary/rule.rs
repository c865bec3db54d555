use std::fmt;

use crate::{
    dataset::BinaryDataSet,
    error::{GeneticError, Result},
    rng::RandomNumberGenerator,
};

/// A single position of a bit rule.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Zero,
    One,
    /// `#`, matches either bit.
    Wildcard,
}

impl Symbol {
    /// `0` maps to `Zero`, anything else to `One`.
    pub fn from_bit(bit: u8) -> Self {
        if bit == 0 {
            Symbol::Zero
        } else {
            Symbol::One
        }
    }

    pub fn random_bit(rng: &mut RandomNumberGenerator) -> Self {
        if rng.coin() {
            Symbol::One
        } else {
            Symbol::Zero
        }
    }

    /// Draws from `{0, 0, 1, 1, #}` when wildcards are enabled, `{0, 1}` otherwise.
    pub fn random(use_wildcard: bool, rng: &mut RandomNumberGenerator) -> Self {
        let choices = if use_wildcard { 5 } else { 4 };
        match rng.index(choices) {
            0 | 1 => Symbol::Zero,
            2 | 3 => Symbol::One,
            _ => Symbol::Wildcard,
        }
    }

    /// Whether this symbol accepts the data bit.
    pub fn matches(self, bit: u8) -> bool {
        match self {
            Symbol::Zero => bit == 0,
            Symbol::One => bit == 1,
            Symbol::Wildcard => true,
        }
    }

    /// The bit value, or `None` for the wildcard.
    pub fn bit(self) -> Option<u8> {
        match self {
            Symbol::Zero => Some(0),
            Symbol::One => Some(1),
            Symbol::Wildcard => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Symbol::Zero => '0',
            Symbol::One => '1',
            Symbol::Wildcard => '#',
        }
    }
}

impl TryFrom<char> for Symbol {
    type Error = GeneticError;

    fn try_from(c: char) -> Result<Self> {
        match c {
            '0' => Ok(Symbol::Zero),
            '1' => Ok(Symbol::One),
            '#' => Ok(Symbol::Wildcard),
            other => Err(GeneticError::DataFormat(format!(
                "Invalid rule symbol '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Parses a string of `0`, `1` and `#` characters.
pub fn parse_symbols(pattern: &str) -> Result<Vec<Symbol>> {
    pattern.chars().map(Symbol::try_from).collect()
}

/// Picks a single crossover point in `[1, len - 2]` over a flattened string.
///
/// Strings shorter than three symbols have no interior point; they cut at 1.
pub(crate) fn crossover_point(len: usize, rng: &mut RandomNumberGenerator) -> usize {
    if len < 3 {
        len.min(1)
    } else {
        rng.between(1, len - 2)
    }
}

/// Swaps the tails of two equally long strings at `point`.
pub(crate) fn swap_tails<T: Copy>(first: &[T], second: &[T], point: usize) -> (Vec<T>, Vec<T>) {
    let mut child1 = first[..point].to_vec();
    child1.extend_from_slice(&second[point..]);
    let mut child2 = second[..point].to_vec();
    child2.extend_from_slice(&first[point..]);
    (child1, child2)
}

/// A bit pattern with wildcards and the label it predicts.
///
/// The input length is fixed at construction.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitRule {
    input: Vec<Symbol>,
    output: u8,
    use_wildcard: bool,
}

impl BitRule {
    /// Creates a rule, resolving a wildcard `output` to a random bit.
    pub fn new(
        input: Vec<Symbol>,
        output: Symbol,
        use_wildcard: bool,
        rng: &mut RandomNumberGenerator,
    ) -> Self {
        let output = match output.bit() {
            Some(bit) => bit,
            None => u8::from(rng.coin()),
        };
        Self {
            input,
            output,
            use_wildcard,
        }
    }

    /// Creates a rule from a pattern such as `"0#01"`.
    ///
    /// ```
    /// use rulegen::binary::BitRule;
    /// use rulegen::dataset::BinaryDataSet;
    ///
    /// let rule = BitRule::from_pattern("0#01", 1, true).unwrap();
    /// assert!(rule.input_matches(&BinaryDataSet::new(vec![0, 0, 0, 1], 1)));
    /// assert!(!rule.input_matches(&BinaryDataSet::new(vec![1, 0, 0, 1], 1)));
    /// ```
    pub fn from_pattern(pattern: &str, output: u8, use_wildcard: bool) -> Result<Self> {
        if output > 1 {
            return Err(GeneticError::DataFormat(format!(
                "Rule output must be 0 or 1, got {}",
                output
            )));
        }
        Ok(Self {
            input: parse_symbols(pattern)?,
            output,
            use_wildcard,
        })
    }

    /// Generates a random rule over `input_len` input bits.
    pub fn generate(input_len: usize, use_wildcard: bool, rng: &mut RandomNumberGenerator) -> Self {
        let input = (0..input_len)
            .map(|_| Symbol::random(use_wildcard, rng))
            .collect();
        let output = Symbol::random_bit(rng);
        Self::new(input, output, use_wildcard, rng)
    }

    /// Rebuilds a rule from its flattened form: the input symbols followed by
    /// the output symbol.
    pub(crate) fn from_flat(
        symbols: &[Symbol],
        use_wildcard: bool,
        rng: &mut RandomNumberGenerator,
    ) -> Self {
        match symbols.split_last() {
            Some((&output, input)) => Self::new(input.to_vec(), output, use_wildcard, rng),
            None => Self::new(Vec::new(), Symbol::Wildcard, use_wildcard, rng),
        }
    }

    pub fn input(&self) -> &[Symbol] {
        &self.input
    }

    pub fn output(&self) -> u8 {
        self.output
    }

    pub fn use_wildcard(&self) -> bool {
        self.use_wildcard
    }

    /// Length of the flattened rule, input plus output.
    pub fn flat_len(&self) -> usize {
        self.input.len() + 1
    }

    /// The input symbols followed by the output bit.
    pub fn flat_symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.input
            .iter()
            .copied()
            .chain(std::iter::once(Symbol::from_bit(self.output)))
    }

    /// Single-point crossover on the flattened `input + output` strings.
    pub fn crossover(&self, other: &Self, rng: &mut RandomNumberGenerator) -> (Self, Self) {
        let first: Vec<Symbol> = self.flat_symbols().collect();
        let second: Vec<Symbol> = other.flat_symbols().collect();
        let point = crossover_point(first.len().min(second.len()), rng);
        let (child1, child2) = swap_tails(&first, &second, point);
        (
            Self::from_flat(&child1, self.use_wildcard, rng),
            Self::from_flat(&child2, self.use_wildcard, rng),
        )
    }

    /// Mutates each input symbol and then the output with probability
    /// `1 / mutation_rate` each.
    ///
    /// A hit on a bit either flips it or, with wildcards enabled, turns it
    /// into `#` (even odds). A hit on `#`, or on any bit when wildcards are
    /// disabled, draws a fresh random bit.
    pub fn mutate(&mut self, mutation_rate: u32, rng: &mut RandomNumberGenerator) {
        for symbol in self.input.iter_mut() {
            if !rng.one_in(mutation_rate) {
                continue;
            }
            *symbol = match *symbol {
                Symbol::Zero | Symbol::One if self.use_wildcard => {
                    if rng.coin() {
                        flip(*symbol)
                    } else {
                        Symbol::Wildcard
                    }
                }
                _ => Symbol::random_bit(rng),
            };
        }

        if rng.one_in(mutation_rate) {
            self.output ^= 1;
        }
    }

    /// Whether every input symbol accepts the corresponding data bit.
    pub fn input_matches(&self, data: &BinaryDataSet) -> bool {
        self.input.len() == data.input.len()
            && self
                .input
                .iter()
                .zip(&data.input)
                .all(|(symbol, &bit)| symbol.matches(bit))
    }

    pub fn output_matches(&self, data: &BinaryDataSet) -> bool {
        self.output == data.output
    }
}

fn flip(symbol: Symbol) -> Symbol {
    match symbol {
        Symbol::Zero => Symbol::One,
        Symbol::One => Symbol::Zero,
        Symbol::Wildcard => Symbol::Wildcard,
    }
}

impl fmt::Display for BitRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.input {
            write!(f, "{}", symbol)?;
        }
        write!(f, " {}", self.output)
    }
}
