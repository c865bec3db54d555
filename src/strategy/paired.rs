//! # PairedBreeding
//!
//! Parents are consumed in consecutive pairs `(i, i + 1)`, each pair producing
//! two children. When the parent count is odd the final unmatched parent is
//! crossed with the parent at index 0 and only the first child is kept.

use super::BreedStrategy;
use crate::{
    error::{GeneticError, Result},
    rng::RandomNumberGenerator,
    solution::Solution,
};

/// # PairedBreeding
///
/// Breeding strategy that keeps the offspring count equal to the parent count.
#[derive(Debug, Clone, Default)]
pub struct PairedBreeding;

impl PairedBreeding {
    pub fn new() -> Self {
        Self
    }
}

impl<S> BreedStrategy<S> for PairedBreeding
where
    S: Solution,
{
    fn breed(&self, parents: &[S], rng: &mut RandomNumberGenerator) -> Result<Vec<S>> {
        if parents.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let mut offspring = Vec::with_capacity(parents.len());

        let pairs = parents.chunks_exact(2);
        let unmatched = pairs.remainder().first();

        for pair in pairs {
            let (child1, child2) = pair[0].crossover(&pair[1], rng);
            offspring.push(child1);
            offspring.push(child2);
        }

        if let Some(last) = unmatched {
            tracing::trace!(index = parents.len() - 1, "pairing unmatched parent with parent 0");
            let (child, _) = last.crossover(&parents[0], rng);
            offspring.push(child);
        }

        Ok(offspring)
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Tagged {
        parents: (u32, u32),
        id: u32,
    }

    impl fmt::Display for Tagged {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.id)
        }
    }

    impl Solution for Tagged {
        fn fitness(&self) -> f64 {
            0.0
        }

        fn crossover(&self, other: &Self, _rng: &mut RandomNumberGenerator) -> (Self, Self) {
            let parents = (self.id, other.id);
            (
                Tagged { parents, id: 100 + self.id },
                Tagged { parents, id: 200 + self.id },
            )
        }

        fn mutate(&mut self, _mutation_rate: u32, _rng: &mut RandomNumberGenerator) {}
    }

    fn parents(n: u32) -> Vec<Tagged> {
        (0..n).map(|id| Tagged { parents: (id, id), id }).collect()
    }

    #[test]
    fn test_breed_even() {
        let mut rng = RandomNumberGenerator::from_seed(0);
        let children = PairedBreeding::new().breed(&parents(4), &mut rng).unwrap();

        let pairs: Vec<(u32, u32)> = children.iter().map(|c| c.parents).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 1), (2, 3), (2, 3)]);
        let ids: Vec<u32> = children.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![100, 200, 102, 202]);
    }

    #[test]
    fn test_breed_odd_pairs_last_with_first() {
        let mut rng = RandomNumberGenerator::from_seed(0);
        let children = PairedBreeding::new().breed(&parents(5), &mut rng).unwrap();

        assert_eq!(children.len(), 5);
        assert_eq!(children[4].parents, (4, 0));
        assert_eq!(children[4].id, 104);
    }

    #[test]
    fn test_breed_three_parents_in_order() {
        let mut rng = RandomNumberGenerator::from_seed(0);
        let children = PairedBreeding::new().breed(&parents(3), &mut rng).unwrap();

        let pairs: Vec<(u32, u32)> = children.iter().map(|c| c.parents).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 1), (2, 0)]);
        let ids: Vec<u32> = children.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![100, 200, 102]);
    }

    #[test]
    fn test_breed_single_parent() {
        let mut rng = RandomNumberGenerator::from_seed(0);
        let children = PairedBreeding::new().breed(&parents(1), &mut rng).unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].parents, (0, 0));
    }

    #[test]
    fn test_breed_empty_parents() {
        let mut rng = RandomNumberGenerator::new();
        let result = PairedBreeding::new().breed(&Vec::<Tagged>::new(), &mut rng);

        match result {
            Err(GeneticError::EmptyPopulation) => (),
            _ => panic!("Expected EmptyPopulation error"),
        }
    }
}
