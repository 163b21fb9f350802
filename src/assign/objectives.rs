//! The five penalty objectives.
//!
//! Each objective is a pure function of the assignment matrix, closed over
//! the injected problem data. Registration order is canonical:
//! overallocation, conflicts, undersupport, unwilling, unpreferred — the
//! dominance frontier, the selector weights, and the report columns all
//! use it.

use std::collections::HashSet;
use std::sync::Arc;

use crate::evo::Objective;

use super::data::{Preference, Problem};
use super::solution::Assignment;

/// Total assignments beyond each worker's requested maximum.
pub struct Overallocation {
    data: Arc<Problem>,
}

impl Overallocation {
    /// Closes over the injected problem data.
    pub fn new(data: Arc<Problem>) -> Self {
        Self { data }
    }
}

impl Objective<Assignment> for Overallocation {
    fn name(&self) -> &str {
        "overallocation"
    }

    fn score(&self, solution: &Assignment) -> f64 {
        self.data
            .workers()
            .iter()
            .enumerate()
            .map(|(w, worker)| u64::from(solution.load(w).saturating_sub(worker.max_load)))
            .sum::<u64>() as f64
    }
}

/// Number of workers covering two slots that meet at the same time.
pub struct Conflicts {
    data: Arc<Problem>,
}

impl Conflicts {
    /// Closes over the injected problem data.
    pub fn new(data: Arc<Problem>) -> Self {
        Self { data }
    }
}

impl Objective<Assignment> for Conflicts {
    fn name(&self) -> &str {
        "conflicts"
    }

    fn score(&self, solution: &Assignment) -> f64 {
        let mut conflicted = 0u64;
        for w in 0..solution.workers() {
            let mut seen = HashSet::new();
            let clash = solution
                .worker_slots(w)
                .into_iter()
                .any(|s| !seen.insert(self.data.slots()[s].time_bucket.as_str()));
            if clash {
                conflicted += 1;
            }
        }
        conflicted as f64
    }
}

/// Total staffing shortfall below each slot's required minimum.
pub struct Undersupport {
    data: Arc<Problem>,
}

impl Undersupport {
    /// Closes over the injected problem data.
    pub fn new(data: Arc<Problem>) -> Self {
        Self { data }
    }
}

impl Objective<Assignment> for Undersupport {
    fn name(&self) -> &str {
        "undersupport"
    }

    fn score(&self, solution: &Assignment) -> f64 {
        self.data
            .slots()
            .iter()
            .enumerate()
            .map(|(s, slot)| u64::from(slot.min_load.saturating_sub(solution.coverage(s))))
            .sum::<u64>() as f64
    }
}

/// Assignments a worker declared themselves unwilling to take.
pub struct Unwilling {
    data: Arc<Problem>,
}

impl Unwilling {
    /// Closes over the injected problem data.
    pub fn new(data: Arc<Problem>) -> Self {
        Self { data }
    }
}

impl Objective<Assignment> for Unwilling {
    fn name(&self) -> &str {
        "unwilling"
    }

    fn score(&self, solution: &Assignment) -> f64 {
        count_assigned_with(&self.data, solution, Preference::Unwilling) as f64
    }
}

/// Assignments marked willing-but-not-preferred.
pub struct Unpreferred {
    data: Arc<Problem>,
}

impl Unpreferred {
    /// Closes over the injected problem data.
    pub fn new(data: Arc<Problem>) -> Self {
        Self { data }
    }
}

impl Objective<Assignment> for Unpreferred {
    fn name(&self) -> &str {
        "unpreferred"
    }

    fn score(&self, solution: &Assignment) -> f64 {
        count_assigned_with(&self.data, solution, Preference::Willing) as f64
    }
}

fn count_assigned_with(data: &Problem, solution: &Assignment, preference: Preference) -> u64 {
    let mut count = 0u64;
    for w in 0..data.worker_count() {
        for s in 0..data.slot_count() {
            if solution.is_assigned(w, s) && data.preference(w, s) == preference {
                count += 1;
            }
        }
    }
    count
}
