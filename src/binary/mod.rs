//! # Bit-rule classification
//!
//! Rules are strings over `{0, 1, #}` with a predicted label; a solution is a
//! first-match decision list of them.
//!
//! ## Example
//!
//! ```rust
//! use rulegen::binary::{BinaryChallenge, BinaryClassificationConfig};
//! use rulegen::dataset::BinaryDataSet;
//! use rulegen::evolution::EvolutionOptions;
//! use rulegen::rng::RandomNumberGenerator;
//!
//! let training = vec![
//!     BinaryDataSet::new(vec![0, 0, 1], 1),
//!     BinaryDataSet::new(vec![1, 1, 0], 0),
//! ];
//! let testing = vec![BinaryDataSet::new(vec![0, 1, 1], 1)];
//!
//! let options = EvolutionOptions::builder()
//!     .num_generations(20)
//!     .population_size(16)
//!     .mutation_rate(20)
//!     .build()
//!     .unwrap();
//! let config = BinaryClassificationConfig::new(options, 2, true).unwrap();
//! let challenge = BinaryChallenge::new(config, training, Some(testing)).unwrap();
//!
//! let mut classifier = challenge.into_classifier(RandomNumberGenerator::from_seed(7));
//! let history = classifier.run_algorithm().unwrap();
//!
//! assert_eq!(history.len(), 21);
//! assert!(history.test_results.is_some());
//! let accuracy = classifier.test().unwrap();
//! assert!((0.0..=100.0).contains(&accuracy));
//! ```

pub mod challenge;
pub mod config;
pub mod rule;
pub mod solution;

pub use challenge::{BinaryChallenge, BinaryClassifier};
pub use config::BinaryClassificationConfig;
pub use rule::{parse_symbols, BitRule, Symbol};
pub use solution::BitRuleSolution;
