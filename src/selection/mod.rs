pub mod elitist;
pub mod tournament;

pub use elitist::{best_index, best_solution, worst_index};
pub use tournament::TournamentSelection;
