//! The assignment matrix: which worker covers which slot.

/// A dense binary worker × slot matrix.
///
/// Rows are workers, columns are slots; a cell is 1 when the worker covers
/// the slot. `Clone` produces a fully independent deep copy, which is what
/// the engine relies on when sampling.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    workers: usize,
    slots: usize,
    cells: Vec<u8>,
}

impl Assignment {
    /// An all-zero matrix (nobody assigned anywhere).
    pub fn empty(workers: usize, slots: usize) -> Self {
        Self {
            workers,
            slots,
            cells: vec![0; workers * slots],
        }
    }

    /// Builds a matrix from explicit rows.
    ///
    /// # Panics
    ///
    /// Panics if the rows are ragged.
    pub fn from_rows(rows: &[Vec<u8>]) -> Self {
        let workers = rows.len();
        let slots = rows.first().map_or(0, Vec::len);
        assert!(
            rows.iter().all(|r| r.len() == slots),
            "assignment rows must be rectangular"
        );
        Self {
            workers,
            slots,
            cells: rows.iter().flatten().map(|&c| u8::from(c != 0)).collect(),
        }
    }

    /// Number of workers (rows).
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Number of slots (columns).
    pub fn slots(&self) -> usize {
        self.slots
    }

    fn index(&self, worker: usize, slot: usize) -> usize {
        debug_assert!(worker < self.workers && slot < self.slots);
        worker * self.slots + slot
    }

    /// True when `worker` covers `slot`.
    pub fn is_assigned(&self, worker: usize, slot: usize) -> bool {
        self.cells[self.index(worker, slot)] == 1
    }

    /// Assigns `worker` to `slot`.
    pub fn assign(&mut self, worker: usize, slot: usize) {
        let i = self.index(worker, slot);
        self.cells[i] = 1;
    }

    /// Removes `worker` from `slot`.
    pub fn unassign(&mut self, worker: usize, slot: usize) {
        let i = self.index(worker, slot);
        self.cells[i] = 0;
    }

    /// Flips one cell.
    pub fn toggle(&mut self, worker: usize, slot: usize) {
        let i = self.index(worker, slot);
        self.cells[i] = 1 - self.cells[i];
    }

    /// Number of slots `worker` covers.
    pub fn load(&self, worker: usize) -> u32 {
        self.row(worker).iter().map(|&c| u32::from(c)).sum()
    }

    /// Number of workers covering `slot`.
    pub fn coverage(&self, slot: usize) -> u32 {
        (0..self.workers)
            .map(|w| u32::from(self.cells[w * self.slots + slot]))
            .sum()
    }

    /// Slot indices `worker` covers, ascending.
    pub fn worker_slots(&self, worker: usize) -> Vec<usize> {
        self.row(worker)
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == 1)
            .map(|(s, _)| s)
            .collect()
    }

    /// Worker indices covering `slot`, ascending.
    pub fn slot_workers(&self, slot: usize) -> Vec<usize> {
        (0..self.workers)
            .filter(|&w| self.cells[w * self.slots + slot] == 1)
            .collect()
    }

    fn row(&self, worker: usize) -> &[u8] {
        let start = worker * self.slots;
        &self.cells[start..start + self.slots]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_matrix() {
        let a = Assignment::empty(3, 4);
        assert_eq!(a.workers(), 3);
        assert_eq!(a.slots(), 4);
        assert!(!a.is_assigned(2, 3));
        assert_eq!(a.load(0), 0);
        assert_eq!(a.coverage(0), 0);
    }

    #[test]
    fn test_assign_unassign_toggle() {
        let mut a = Assignment::empty(2, 2);
        a.assign(0, 1);
        assert!(a.is_assigned(0, 1));

        a.toggle(0, 1);
        assert!(!a.is_assigned(0, 1));

        a.toggle(1, 0);
        assert!(a.is_assigned(1, 0));

        a.unassign(1, 0);
        assert!(!a.is_assigned(1, 0));
    }

    #[test]
    fn test_load_and_coverage() {
        let a = Assignment::from_rows(&[vec![1, 0, 1], vec![1, 1, 0]]);
        assert_eq!(a.load(0), 2);
        assert_eq!(a.load(1), 2);
        assert_eq!(a.coverage(0), 2);
        assert_eq!(a.coverage(1), 1);
        assert_eq!(a.coverage(2), 1);
    }

    #[test]
    fn test_links() {
        let a = Assignment::from_rows(&[vec![1, 0, 1], vec![0, 1, 0]]);
        assert_eq!(a.worker_slots(0), vec![0, 2]);
        assert_eq!(a.worker_slots(1), vec![1]);
        assert_eq!(a.slot_workers(0), vec![0]);
        assert_eq!(a.slot_workers(1), vec![1]);
        assert_eq!(a.slot_workers(2), vec![0]);
    }

    #[test]
    fn test_clone_is_deep() {
        let a = Assignment::from_rows(&[vec![1, 0]]);
        let mut b = a.clone();
        b.toggle(0, 0);
        assert!(a.is_assigned(0, 0));
        assert!(!b.is_assigned(0, 0));
    }

    #[test]
    #[should_panic(expected = "rectangular")]
    fn test_ragged_rows_panic() {
        Assignment::from_rows(&[vec![1, 0], vec![1]]);
    }
}
