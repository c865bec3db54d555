//! Elitism helpers.
//!
//! "Best" is the strictly greatest fitness and "worst" the strictly least; in
//! both cases the first occurrence wins a tie.

use crate::solution::Solution;

/// Index of the first individual with the greatest fitness.
///
/// Returns `None` for an empty slice.
///
/// ```
/// use rulegen::selection::best_index;
///
/// assert_eq!(best_index(&[1.0, 3.0, 3.0, 2.0]), Some(1));
/// assert_eq!(best_index(&[]), None);
/// ```
pub fn best_index(fitness: &[f64]) -> Option<usize> {
    let (first, rest) = fitness.split_first()?;
    let mut best = (0, *first);
    for (offset, &value) in rest.iter().enumerate() {
        if value > best.1 {
            best = (offset + 1, value);
        }
    }
    Some(best.0)
}

/// Index of the first individual with the least fitness.
///
/// ```
/// use rulegen::selection::worst_index;
///
/// assert_eq!(worst_index(&[2.0, 0.0, 1.0, 0.0]), Some(1));
/// ```
pub fn worst_index(fitness: &[f64]) -> Option<usize> {
    let (first, rest) = fitness.split_first()?;
    let mut worst = (0, *first);
    for (offset, &value) in rest.iter().enumerate() {
        if value < worst.1 {
            worst = (offset + 1, value);
        }
    }
    Some(worst.0)
}

/// Returns the fittest solution of `population`, first occurrence on ties.
pub fn best_solution<S: Solution>(population: &[S]) -> Option<&S> {
    let fitness: Vec<f64> = population.iter().map(Solution::fitness).collect();
    best_index(&fitness).map(|i| &population[i])
}
