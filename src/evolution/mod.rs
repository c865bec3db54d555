pub mod builder;
pub mod challenge;
pub mod engine;
pub mod history;
pub mod options;
pub mod runner;

pub use builder::EvolutionEngineBuilder;
pub use challenge::Challenge;
pub use engine::{EngineState, EvolutionEngine};
pub use history::{GenerationObserver, GenerationStats, NoopObserver, RunHistory};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, LogLevel};
pub use runner::{AlgorithmRunner, AveragedHistory};
