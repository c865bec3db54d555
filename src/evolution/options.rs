//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds the representation-independent
//! parameters of a run: the number of generations, the population size, the
//! mutation-rate divisor and the logging level.
//!
//! ## Example
//!
//! ```rust
//! use rulegen::evolution::options::{EvolutionOptions, LogLevel};
//!
//! // Unchecked construction
//! let options = EvolutionOptions::new(50, 20, 30, LogLevel::None);
//! assert_eq!(options.get_population_size(), 20);
//!
//! // Validated construction
//! let options = EvolutionOptions::builder()
//!     .num_generations(200)
//!     .population_size(50)
//!     .mutation_rate(100)
//!     .log_level(LogLevel::Minimal)
//!     .build()
//!     .unwrap();
//! assert_eq!(options.get_mutation_rate(), 100);
//! ```
//!
//! ## Fields
//!
//! - `num_generations`: The number of generations to evolve for.
//! - `population_size`: The number of candidate solutions, constant for the whole run.
//! - `mutation_rate`: Each gene mutates with probability `1 / mutation_rate`.
//! - `log_level`: How much the engine reports through `tracing` per generation.

use crate::error::{GeneticError, Result};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Per-generation statistics plus the best solution.
    Verbose,
    /// Per-generation statistics.
    Minimal,
    #[default]
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    num_generations: usize,
    population_size: usize,
    mutation_rate: u32,
    log_level: LogLevel,
}

impl EvolutionOptions {
    /// Creates options without validating them.
    pub fn new(
        num_generations: usize,
        population_size: usize,
        mutation_rate: u32,
        log_level: LogLevel,
    ) -> Self {
        Self {
            num_generations,
            population_size,
            mutation_rate,
            log_level,
        }
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_mutation_rate(&self) -> u32 {
        self.mutation_rate
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    /// Checks the documented bounds: at least one generation, a population of
    /// at least two and a mutation-rate divisor of at least one.
    pub fn validate(&self) -> Result<()> {
        if self.num_generations < 1 {
            return Err(GeneticError::Configuration(
                "Number of generations must be at least 1".to_string(),
            ));
        }
        if self.population_size < 2 {
            return Err(GeneticError::Configuration(
                "Population size must be at least 2".to_string(),
            ));
        }
        if self.mutation_rate < 1 {
            return Err(GeneticError::Configuration(
                "Mutation rate must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns a builder for creating a validated `EvolutionOptions` instance.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            num_generations: 100,
            population_size: 50,
            mutation_rate: 100,
            log_level: LogLevel::None,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Unset fields fall back to the values of `EvolutionOptions::default()`.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    num_generations: Option<usize>,
    population_size: Option<usize>,
    mutation_rate: Option<u32>,
    log_level: Option<LogLevel>,
}

impl EvolutionOptionsBuilder {
    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn mutation_rate(mut self, value: u32) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Builds and validates the `EvolutionOptions` instance.
    pub fn build(self) -> Result<EvolutionOptions> {
        let defaults = EvolutionOptions::default();
        let options = EvolutionOptions {
            num_generations: self.num_generations.unwrap_or(defaults.num_generations),
            population_size: self.population_size.unwrap_or(defaults.population_size),
            mutation_rate: self.mutation_rate.unwrap_or(defaults.mutation_rate),
            log_level: self.log_level.unwrap_or(defaults.log_level),
        };
        options.validate()?;
        Ok(options)
    }
}
