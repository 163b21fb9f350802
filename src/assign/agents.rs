//! The five mutation agents.
//!
//! Every agent draws one sampled solution, mutates its own copy, and
//! returns it. When nothing applicable exists (no overloaded worker, no
//! conflict, ...) the input comes back unchanged — a normal, if wasteful,
//! iteration for the engine.

use std::collections::HashMap;
use std::sync::Arc;

use rand::{Rng, RngCore};

use crate::evo::Agent;

use super::data::{Preference, Problem};
use super::solution::Assignment;

fn choose<'a, T>(items: &'a [T], rng: &mut dyn RngCore) -> Option<&'a T> {
    if items.is_empty() {
        None
    } else {
        Some(&items[rng.random_range(0..items.len())])
    }
}

fn take_pick(picks: Vec<Assignment>) -> Assignment {
    picks
        .into_iter()
        .next()
        .expect("arity-1 agent invoked on an unseeded population")
}

/// Flips one uniformly chosen cell: assign or unassign a random worker on
/// a random slot.
pub struct RandomToggle;

impl Agent<Assignment> for RandomToggle {
    fn name(&self) -> &str {
        "random toggle"
    }

    fn apply(&self, picks: Vec<Assignment>, rng: &mut dyn RngCore) -> Assignment {
        let mut next = take_pick(picks);
        let worker = rng.random_range(0..next.workers());
        let slot = rng.random_range(0..next.slots());
        next.toggle(worker, slot);
        next
    }
}

/// Unassigns a randomly chosen overloaded worker from one of its slots.
pub struct OverallocationReducer {
    data: Arc<Problem>,
}

impl OverallocationReducer {
    /// Closes over the injected problem data.
    pub fn new(data: Arc<Problem>) -> Self {
        Self { data }
    }
}

impl Agent<Assignment> for OverallocationReducer {
    fn name(&self) -> &str {
        "overallocation reducer"
    }

    fn apply(&self, picks: Vec<Assignment>, rng: &mut dyn RngCore) -> Assignment {
        let mut next = take_pick(picks);
        let overloaded: Vec<usize> = self
            .data
            .workers()
            .iter()
            .enumerate()
            .filter(|&(w, worker)| next.load(w) > worker.max_load)
            .map(|(w, _)| w)
            .collect();

        if let Some(&worker) = choose(&overloaded, rng) {
            let covered = next.worker_slots(worker);
            if let Some(&slot) = choose(&covered, rng) {
                next.unassign(worker, slot);
            }
        }
        next
    }
}

/// For every worker with a time clash, unassigns one randomly chosen slot
/// from a conflicting bucket.
pub struct ConflictReducer {
    data: Arc<Problem>,
}

impl ConflictReducer {
    /// Closes over the injected problem data.
    pub fn new(data: Arc<Problem>) -> Self {
        Self { data }
    }
}

impl Agent<Assignment> for ConflictReducer {
    fn name(&self) -> &str {
        "conflict reducer"
    }

    fn apply(&self, picks: Vec<Assignment>, rng: &mut dyn RngCore) -> Assignment {
        let mut next = take_pick(picks);
        for worker in 0..next.workers() {
            let covered = next.worker_slots(worker);

            let mut bucket_counts: HashMap<&str, u32> = HashMap::new();
            for &slot in &covered {
                *bucket_counts
                    .entry(self.data.slots()[slot].time_bucket.as_str())
                    .or_default() += 1;
            }

            let conflicting: Vec<usize> = covered
                .into_iter()
                .filter(|&slot| bucket_counts[self.data.slots()[slot].time_bucket.as_str()] > 1)
                .collect();

            if let Some(&slot) = choose(&conflicting, rng) {
                next.unassign(worker, slot);
            }
        }
        next
    }
}

/// Assigns a randomly chosen free worker to a randomly chosen
/// undersupported slot.
pub struct UndersupportFiller {
    data: Arc<Problem>,
}

impl UndersupportFiller {
    /// Closes over the injected problem data.
    pub fn new(data: Arc<Problem>) -> Self {
        Self { data }
    }
}

impl Agent<Assignment> for UndersupportFiller {
    fn name(&self) -> &str {
        "undersupport filler"
    }

    fn apply(&self, picks: Vec<Assignment>, rng: &mut dyn RngCore) -> Assignment {
        let mut next = take_pick(picks);
        let undersupported: Vec<usize> = self
            .data
            .slots()
            .iter()
            .enumerate()
            .filter(|&(s, slot)| next.coverage(s) < slot.min_load)
            .map(|(s, _)| s)
            .collect();

        if let Some(&slot) = choose(&undersupported, rng) {
            let available: Vec<usize> =
                (0..next.workers()).filter(|&w| !next.is_assigned(w, slot)).collect();
            if let Some(&worker) = choose(&available, rng) {
                next.assign(worker, slot);
            }
        }
        next
    }
}

/// Drops one randomly chosen assignment the worker is unwilling to take.
pub struct UnwillingReducer {
    data: Arc<Problem>,
}

impl UnwillingReducer {
    /// Closes over the injected problem data.
    pub fn new(data: Arc<Problem>) -> Self {
        Self { data }
    }
}

impl Agent<Assignment> for UnwillingReducer {
    fn name(&self) -> &str {
        "unwilling reducer"
    }

    fn apply(&self, picks: Vec<Assignment>, rng: &mut dyn RngCore) -> Assignment {
        let mut next = take_pick(picks);
        let mut unwilling: Vec<(usize, usize)> = Vec::new();
        for worker in 0..next.workers() {
            for slot in 0..next.slots() {
                if next.is_assigned(worker, slot)
                    && self.data.preference(worker, slot) == Preference::Unwilling
                {
                    unwilling.push((worker, slot));
                }
            }
        }

        if let Some(&(worker, slot)) = choose(&unwilling, rng) {
            next.unassign(worker, slot);
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assign::data::{Slot, Worker};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Two workers, three slots; slots 0 and 1 share a time bucket.
    fn fixture() -> Arc<Problem> {
        let prefs = |codes: [&str; 3]| codes.iter().map(|c| Preference::from_code(c)).collect();
        let workers = vec![
            Worker {
                name: "Alice".into(),
                max_load: 1,
                preferences: prefs(["", "U", ""]),
            },
            Worker {
                name: "Bob".into(),
                max_load: 2,
                preferences: prefs(["W", "", ""]),
            },
        ];
        let slot = |name: &str, bucket: &str, min_load| Slot {
            name: name.into(),
            time_bucket: bucket.into(),
            min_load,
        };
        let slots = vec![
            slot("Lab 1", "R 9:50", 1),
            slot("Lab 2", "R 9:50", 1),
            slot("Lab 3", "W 14:30", 1),
        ];
        Arc::new(Problem::new(workers, slots).unwrap())
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_random_toggle_changes_exactly_one_cell() {
        let before = Assignment::empty(2, 3);
        let after = RandomToggle.apply(vec![before.clone()], &mut rng());

        let changed: usize = (0..2)
            .flat_map(|w| (0..3).map(move |s| (w, s)))
            .filter(|&(w, s)| before.is_assigned(w, s) != after.is_assigned(w, s))
            .count();
        assert_eq!(changed, 1);
    }

    #[test]
    fn test_overallocation_reducer_sheds_one_assignment() {
        let data = fixture();
        // Alice (cap 1) covers all three slots.
        let before = Assignment::from_rows(&[vec![1, 1, 1], vec![0, 0, 0]]);
        let after = OverallocationReducer::new(data).apply(vec![before.clone()], &mut rng());
        assert_eq!(after.load(0), 2);
        assert_eq!(after.load(1), 0);
    }

    #[test]
    fn test_overallocation_reducer_noop_when_nobody_overloaded() {
        let data = fixture();
        let before = Assignment::from_rows(&[vec![1, 0, 0], vec![1, 1, 0]]);
        let after = OverallocationReducer::new(data).apply(vec![before.clone()], &mut rng());
        assert_eq!(after, before);
    }

    #[test]
    fn test_conflict_reducer_breaks_the_clash() {
        let data = fixture();
        // Alice covers both R 9:50 slots.
        let before = Assignment::from_rows(&[vec![1, 1, 1], vec![0, 0, 0]]);
        let after = ConflictReducer::new(data.clone()).apply(vec![before], &mut rng());

        // One of the two clashing slots is gone; the distinct bucket stays.
        assert_eq!(after.load(0), 2);
        assert!(after.is_assigned(0, 2));
        assert!(after.is_assigned(0, 0) ^ after.is_assigned(0, 1));
    }

    #[test]
    fn test_conflict_reducer_noop_without_clash() {
        let data = fixture();
        let before = Assignment::from_rows(&[vec![1, 0, 1], vec![0, 1, 0]]);
        let after = ConflictReducer::new(data).apply(vec![before.clone()], &mut rng());
        assert_eq!(after, before);
    }

    #[test]
    fn test_undersupport_filler_adds_coverage() {
        let data = fixture();
        let before = Assignment::empty(2, 3);
        let after = UndersupportFiller::new(data.clone()).apply(vec![before], &mut rng());

        let total: u32 = (0..3).map(|s| after.coverage(s)).sum();
        assert_eq!(total, 1);
    }

    #[test]
    fn test_undersupport_filler_noop_when_all_slots_covered() {
        let data = fixture();
        let before = Assignment::from_rows(&[vec![1, 0, 1], vec![0, 1, 0]]);
        let after = UndersupportFiller::new(data).apply(vec![before.clone()], &mut rng());
        assert_eq!(after, before);
    }

    #[test]
    fn test_unwilling_reducer_drops_a_u_assignment() {
        let data = fixture();
        // Alice on slot 1 is the only U assignment.
        let before = Assignment::from_rows(&[vec![0, 1, 0], vec![1, 0, 0]]);
        let after = UnwillingReducer::new(data).apply(vec![before], &mut rng());
        assert!(!after.is_assigned(0, 1));
        assert!(after.is_assigned(1, 0));
    }

    #[test]
    fn test_unwilling_reducer_noop_without_u_assignments() {
        let data = fixture();
        let before = Assignment::from_rows(&[vec![1, 0, 0], vec![0, 1, 0]]);
        let after = UnwillingReducer::new(data).apply(vec![before.clone()], &mut rng());
        assert_eq!(after, before);
    }
}
