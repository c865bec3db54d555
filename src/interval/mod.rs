//! # Interval-rule classification
//!
//! Rules hold one closed `[low, high]` interval per real-valued input plus a
//! predicted label. Bounds stay inside a configured [`ValueRange`].
//!
//! ## Example
//!
//! ```rust
//! use rulegen::dataset::RealDataSet;
//! use rulegen::evolution::{EvolutionOptions, LogLevel};
//! use rulegen::interval::{IntervalChallenge, IntervalClassificationConfig, ValueRange};
//! use rulegen::rng::RandomNumberGenerator;
//!
//! let training = vec![
//!     RealDataSet::new(vec![0.1, 0.2], 0),
//!     RealDataSet::new(vec![0.8, 0.9], 1),
//! ];
//! let bounds = ValueRange::observed(&training).unwrap();
//! let options = EvolutionOptions::new(15, 12, 10, LogLevel::None);
//! let config = IntervalClassificationConfig::new(options, 3, bounds, 0.2).unwrap();
//!
//! let mut classifier = IntervalChallenge::new(config, training, None)
//!     .unwrap()
//!     .into_classifier(RandomNumberGenerator::from_seed(3));
//! let history = classifier.run_algorithm().unwrap();
//!
//! assert_eq!(history.best_fitness.len(), 16);
//! assert!(history.best_fitness.iter().all(|f| *f >= 0.0));
//! assert!(classifier.test().is_err());
//! ```

pub mod challenge;
pub mod config;
pub mod rule;
pub mod solution;

pub use challenge::{IntervalChallenge, IntervalClassifier};
pub use config::{IntervalClassificationConfig, StepSampling, ValueRange};
pub use rule::IntervalRule;
pub use solution::IntervalRuleSolution;
