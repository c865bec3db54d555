use std::collections::HashSet;

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;
use crate::solution::Solution;

/// A selection strategy that selects individuals through tournament selection.
///
/// Each tournament draws `tournament_size` individuals uniformly at random
/// (with replacement) and keeps the first drawn unless a later one has strictly
/// greater fitness. With the default size of two this is the classic binary
/// tournament: ties keep the first draw.
///
/// # Examples
///
/// ```
/// use rulegen::rng::RandomNumberGenerator;
/// use rulegen::selection::TournamentSelection;
///
/// let fitness = vec![0.5, 0.8, 0.3, 0.9, 0.1];
/// let mut rng = RandomNumberGenerator::from_seed(3);
///
/// let selection = TournamentSelection::default();
/// let winners = selection.select_indices(&fitness, 4, &mut rng).unwrap();
///
/// assert_eq!(winners.len(), 4);
/// assert!(winners.iter().all(|&i| i < fitness.len()));
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct TournamentSelection {
    tournament_size: usize,
}

impl TournamentSelection {
    /// Creates a new TournamentSelection strategy with the specified tournament size.
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is 0.
    pub fn new(tournament_size: usize) -> Result<Self> {
        if tournament_size < 1 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        Ok(Self { tournament_size })
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Runs a single tournament and returns the index of the winner.
    ///
    /// # Arguments
    ///
    /// * `fitness` - The fitness scores of all individuals.
    /// * `rng` - A random number generator.
    /// * `excluded` - Indices that may not take part in the tournament.
    ///
    /// # Errors
    ///
    /// Returns an error if every individual is excluded.
    pub fn run_tournament(
        &self,
        fitness: &[f64],
        rng: &mut RandomNumberGenerator,
        excluded: &HashSet<usize>,
    ) -> Result<usize> {
        let eligible = eligible_indices(fitness.len(), excluded)?;
        Ok(self.tournament_among(fitness, &eligible, rng))
    }

    /// `eligible` must be non-empty.
    fn tournament_among(
        &self,
        fitness: &[f64],
        eligible: &[usize],
        rng: &mut RandomNumberGenerator,
    ) -> usize {
        let mut best_idx = eligible[rng.index(eligible.len())];
        let mut best_fitness = fitness[best_idx];

        for _ in 1..self.tournament_size {
            let idx = eligible[rng.index(eligible.len())];
            if fitness[idx] > best_fitness {
                best_idx = idx;
                best_fitness = fitness[idx];
            }
        }

        best_idx
    }

    /// Runs `count` independent tournaments over every individual.
    pub fn select_indices(
        &self,
        fitness: &[f64],
        count: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<usize>> {
        self.select_indices_excluding(fitness, count, rng, &HashSet::new())
    }

    /// Runs `count` independent tournaments, never letting an `excluded`
    /// index take part.
    pub fn select_indices_excluding(
        &self,
        fitness: &[f64],
        count: usize,
        rng: &mut RandomNumberGenerator,
        excluded: &HashSet<usize>,
    ) -> Result<Vec<usize>> {
        let eligible = eligible_indices(fitness.len(), excluded)?;
        Ok((0..count)
            .map(|_| self.tournament_among(fitness, &eligible, rng))
            .collect())
    }

    /// Selects `count` clones of tournament winners from `population`.
    ///
    /// # Errors
    ///
    /// Returns an error if the population is empty.
    pub fn select<S: Solution>(
        &self,
        population: &[S],
        count: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<S>> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let fitness: Vec<f64> = population.iter().map(Solution::fitness).collect();
        let winners = self.select_indices(&fitness, count, rng)?;
        Ok(winners.into_iter().map(|i| population[i].clone()).collect())
    }
}

fn eligible_indices(len: usize, excluded: &HashSet<usize>) -> Result<Vec<usize>> {
    let eligible: Vec<usize> = (0..len).filter(|i| !excluded.contains(i)).collect();
    if eligible.is_empty() {
        return Err(GeneticError::EmptyPopulation);
    }
    Ok(eligible)
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self { tournament_size: 2 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tournament_selection_invalid_size() {
        assert!(TournamentSelection::new(0).is_err());
        assert!(TournamentSelection::new(1).is_ok());
    }

    #[test]
    fn test_run_tournament_with_excluded() {
        let fitness = vec![0.5, 0.8, 0.3, 0.9, 0.1];
        let mut rng = RandomNumberGenerator::from_seed(42);

        let excluded: HashSet<usize> = [0, 1, 2, 4].into_iter().collect();

        let selection = TournamentSelection::default();
        let winner = selection
            .run_tournament(&fitness, &mut rng, &excluded)
            .unwrap();

        // Only index 3 is not excluded
        assert_eq!(winner, 3);

        let excluded: HashSet<usize> = (0..fitness.len()).collect();
        let result = selection.run_tournament(&fitness, &mut rng, &excluded);
        assert!(result.is_err());
    }

    #[test]
    fn test_excluded_index_never_wins() {
        let fitness = vec![10.0, 1.0, 2.0, 3.0];
        let excluded: HashSet<usize> = [0].into_iter().collect();
        let mut rng = RandomNumberGenerator::from_seed(9);

        let winners = TournamentSelection::default()
            .select_indices_excluding(&fitness, 200, &mut rng, &excluded)
            .unwrap();

        assert_eq!(winners.len(), 200);
        assert!(winners.iter().all(|&i| i != 0));
    }

    #[test]
    fn test_worst_never_wins_a_binary_tournament_against_distinct_fitness() {
        // The minimum can only win if it is drawn twice.
        let fitness = vec![0.0, 5.0];
        let mut rng = RandomNumberGenerator::from_seed(11);
        let selection = TournamentSelection::default();
        let winners = selection.select_indices(&fitness, 1000, &mut rng).unwrap();
        let low_wins = winners.iter().filter(|&&i| i == 0).count();
        assert!(low_wins < 400, "low fitness won {} of 1000", low_wins);
    }

    #[test]
    fn test_ties_keep_first_draw() {
        let fitness = vec![1.0; 6];
        let selection = TournamentSelection::default();
        for seed in 0..50 {
            let mut draws = RandomNumberGenerator::from_seed(seed);
            let first = draws.index(fitness.len());

            let mut rng = RandomNumberGenerator::from_seed(seed);
            let winner = selection
                .run_tournament(&fitness, &mut rng, &HashSet::new())
                .unwrap();
            assert_eq!(winner, first, "seed {}", seed);
        }
    }

    #[test]
    fn test_strictly_fitter_second_draw_wins() {
        let fitness = vec![0.0, 1.0, 2.0, 3.0, 4.0];
        let selection = TournamentSelection::default();
        for seed in 0..50 {
            let mut draws = RandomNumberGenerator::from_seed(seed);
            let first = draws.index(fitness.len());
            let second = draws.index(fitness.len());

            let mut rng = RandomNumberGenerator::from_seed(seed);
            let winner = selection
                .run_tournament(&fitness, &mut rng, &HashSet::new())
                .unwrap();
            assert_eq!(winner, first.max(second), "seed {}", seed);
        }
    }

    #[test]
    fn test_batch_draws_match_single_tournaments() {
        let fitness = vec![3.0, 1.0, 3.0, 2.0, 0.5, 3.0];
        let excluded: HashSet<usize> = [2].into_iter().collect();
        let selection = TournamentSelection::default();

        let mut batch_rng = RandomNumberGenerator::from_seed(21);
        let batch = selection
            .select_indices_excluding(&fitness, 30, &mut batch_rng, &excluded)
            .unwrap();

        let mut single_rng = RandomNumberGenerator::from_seed(21);
        let singles: Vec<usize> = (0..30)
            .map(|_| {
                selection
                    .run_tournament(&fitness, &mut single_rng, &excluded)
                    .unwrap()
            })
            .collect();

        assert_eq!(batch, singles);
    }

    #[test]
    fn test_select_indices_excluding_everything() {
        let fitness = vec![1.0, 2.0];
        let excluded: HashSet<usize> = (0..2).collect();
        let mut rng = RandomNumberGenerator::from_seed(0);
        let result =
            TournamentSelection::default().select_indices_excluding(&fitness, 3, &mut rng, &excluded);
        assert!(matches!(result, Err(GeneticError::EmptyPopulation)));
    }
}
