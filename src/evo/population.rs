//! Population store: evaluation vector → solution.

use std::collections::HashMap;

use rand::{Rng, RngCore};

use super::dominance::non_dominated;
use super::eval::Evaluation;

/// The working set of candidate solutions, keyed by their evaluation
/// vector.
///
/// Keying by score vector deduplicates by quality: two structurally
/// different solutions with identical scores occupy one slot, and a later
/// insertion with an already-seen vector silently replaces the earlier
/// solution body. This bounds memory by the number of distinct quality
/// levels rather than the number of solutions generated.
///
/// The store grows by insertion during evolution and shrinks only when
/// [`remove_dominated`](Population::remove_dominated) collapses it to the
/// current non-dominated frontier. It is never empty after seeding.
#[derive(Debug, Clone)]
pub struct Population<S> {
    entries: HashMap<Evaluation, S>,
}

impl<S> Population<S> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Stores `solution` under `eval`, overwriting any previous solution
    /// with the same vector (deduplication-by-score).
    pub fn insert(&mut self, eval: Evaluation, solution: S) {
        self.entries.insert(eval, solution);
    }

    /// Number of stored solutions (= distinct evaluation vectors).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the store holds no solutions.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The solution stored under `eval`, if any.
    pub fn get(&self, eval: &Evaluation) -> Option<&S> {
        self.entries.get(eval)
    }

    /// Iterates over `(evaluation, solution)` entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&Evaluation, &S)> {
        self.entries.iter()
    }

    /// Iterates over the stored evaluation vectors in arbitrary order.
    pub fn evaluations(&self) -> impl Iterator<Item = &Evaluation> {
        self.entries.keys()
    }

    /// Draws `k` solutions independently and uniformly at random, WITH
    /// replacement, each an independent deep copy.
    ///
    /// An empty store yields an empty vector — defensive only, since the
    /// store is never empty once seeded.
    pub fn sample(&self, k: usize, rng: &mut dyn RngCore) -> Vec<S>
    where
        S: Clone,
    {
        if self.entries.is_empty() {
            return Vec::new();
        }
        let values: Vec<&S> = self.entries.values().collect();
        (0..k)
            .map(|_| values[rng.random_range(0..values.len())].clone())
            .collect()
    }

    /// Collapses the store to its non-dominated frontier.
    ///
    /// A key is removed when any other stored key dominates it. The
    /// operation is idempotent and order-independent; afterwards the key
    /// set is an antichain under [`dominates`](super::dominates), with
    /// exactly one solution per surviving vector.
    pub fn remove_dominated(&mut self) {
        let keys: Vec<Evaluation> = self.entries.keys().cloned().collect();
        let survivors = non_dominated(&keys);
        self.entries.retain(|k, _| survivors.contains(k));
    }
}

impl<S> Default for Population<S> {
    fn default() -> Self {
        Self::new()
    }
}
