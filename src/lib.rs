//! # rulegen
//!
//! An evolutionary search engine for rule-based classifiers.
//!
//! The [`EvolutionEngine`](evolution::EvolutionEngine) is generic over a
//! [`Challenge`](evolution::Challenge), which supplies random candidate
//! [`Solution`](solution::Solution)s and optional held-out scoring. Two
//! representations ship with the crate:
//!
//! - [`binary`]: bit-string rules over `{0, 1, #}`;
//! - [`interval`]: rules of closed real intervals.

pub mod binary;
pub mod caching;
pub mod dataset;
pub mod error;
pub mod evolution;
pub mod interval;
pub mod rng;
pub mod selection;
pub mod solution;
pub mod strategy;

// Re-export commonly used types for convenience
pub use binary::{BinaryChallenge, BinaryClassificationConfig, BinaryClassifier};
pub use error::{GeneticError, OptionExt, Result, ResultExt};
pub use evolution::{
    AlgorithmRunner, Challenge, EvolutionEngine, EvolutionEngineBuilder, EvolutionOptions,
    GenerationStats, LogLevel, RunHistory,
};
pub use interval::{IntervalChallenge, IntervalClassificationConfig, IntervalClassifier};
pub use solution::Solution;
