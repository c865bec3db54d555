//! # Caching Module
//!
//! Fitness evaluation walks the whole training set, so every solution keeps a
//! memo of its last computed fitness. The memo is an explicit `Option<f64>`
//! that genetic operators clear whenever they touch the genes.

use std::cell::Cell;

/// A per-solution fitness memo.
///
/// Cloning a solution clones its memo, which is correct because the clone
/// carries identical genes.
#[derive(Debug, Clone, Default)]
pub struct FitnessCache {
    value: Cell<Option<f64>>,
}

impl FitnessCache {
    /// Creates an empty memo.
    pub fn new() -> Self {
        Self {
            value: Cell::new(None),
        }
    }

    /// Returns the memoised fitness, computing and storing it first if needed.
    pub fn get_or_compute<F>(&self, compute: F) -> f64
    where
        F: FnOnce() -> f64,
    {
        if let Some(fitness) = self.value.get() {
            return fitness;
        }
        let fitness = compute();
        self.value.set(Some(fitness));
        fitness
    }

    /// Returns the memoised fitness without computing it.
    pub fn cached(&self) -> Option<f64> {
        self.value.get()
    }

    /// Returns true if a fitness value is memoised.
    pub fn is_cached(&self) -> bool {
        self.value.get().is_some()
    }

    /// Forgets the memoised fitness.
    pub fn invalidate(&self) {
        self.value.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_computes_once() {
        let cache = FitnessCache::new();
        let mut evaluations = 0;

        let first = cache.get_or_compute(|| {
            evaluations += 1;
            3.0
        });
        let second = cache.get_or_compute(|| {
            evaluations += 1;
            5.0
        });

        assert_eq!(first, 3.0);
        assert_eq!(second, 3.0);
        assert_eq!(evaluations, 1);
    }

    #[test]
    fn test_invalidate_forces_recompute() {
        let cache = FitnessCache::new();
        cache.get_or_compute(|| 1.0);
        assert!(cache.is_cached());

        cache.invalidate();
        assert!(!cache.is_cached());
        assert_eq!(cache.get_or_compute(|| 2.0), 2.0);
    }

    #[test]
    fn test_clone_keeps_value() {
        let cache = FitnessCache::new();
        cache.get_or_compute(|| 4.0);
        let copy = cache.clone();
        assert_eq!(copy.cached(), Some(4.0));

        copy.invalidate();
        assert_eq!(cache.cached(), Some(4.0));
    }
}
