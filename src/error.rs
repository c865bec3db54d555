//! # Error Types
//!
//! This module defines the error type shared by the whole crate. The engine,
//! the rule representations and the data loaders all report failures through
//! [`GeneticError`].
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use rulegen::error::{GeneticError, Result};
//!
//! fn check_rule_count(rule_count: usize) -> Result<usize> {
//!     if rule_count == 0 {
//!         return Err(GeneticError::Configuration(
//!             "Rule count must be at least 1".to_string(),
//!         ));
//!     }
//!     Ok(rule_count)
//! }
//!
//! assert!(check_rule_count(0).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use rulegen::error::{GeneticError, OptionExt};
//!
//! fn first_label(labels: &[u8]) -> rulegen::error::Result<u8> {
//!     labels.first().copied().ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur while evolving rule-based classifiers.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when the engine is driven out of order, e.g. running a
    /// generation before the population exists or after the run has finished.
    #[error("Evolution error: {0}")]
    Evolution(String),

    /// Error that occurs when an operation is not available for the current
    /// configuration, such as testing a classifier built without testing data.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Error that occurs when labeled data is malformed or inconsistent.
    #[error("Data format error: {0}")]
    DataFormat(String),

    /// Error that occurs when an I/O operation fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Result to add context to errors.
///
/// ## Examples
///
/// ```rust
/// use rulegen::error::ResultExt;
///
/// fn parse_count(raw: &str) -> rulegen::error::Result<usize> {
///     raw.parse::<usize>().context("Failed to parse count")
/// }
///
/// assert!(parse_count("ten").is_err());
/// ```
pub trait ResultExt<T, E> {
    /// Converts the error to a `GeneticError` prefixed with the provided context.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| GeneticError::Other(format!("{}: {}", context, e)))
    }
}

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using a closure
    /// to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}
