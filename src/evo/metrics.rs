//! Per-operation call and timing accounting.
//!
//! The engine records one entry per objective evaluation and one per agent
//! invocation, keyed by registry name. Drivers can render the accumulated
//! table after a run to see where the time budget went.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Accumulated statistics for one named operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpStats {
    /// Number of recorded invocations.
    pub calls: u64,
    /// Total time spent across all invocations.
    pub total: Duration,
}

/// A timer/counter registry keyed by operation name.
#[derive(Debug, Default)]
pub struct Profiler {
    stats: HashMap<String, OpStats>,
}

impl Profiler {
    /// Creates an empty profiler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one call and `elapsed` time to the named operation.
    pub fn record(&mut self, name: &str, elapsed: Duration) {
        let entry = self.stats.entry(name.to_string()).or_default();
        entry.calls += 1;
        entry.total += elapsed;
    }

    /// Times `op` and records it under `name`, returning its result.
    pub fn time<T>(&mut self, name: &str, op: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let value = op();
        self.record(name, start.elapsed());
        value
    }

    /// Number of recorded calls for `name` (0 when never recorded).
    pub fn calls(&self, name: &str) -> u64 {
        self.stats.get(name).map_or(0, |s| s.calls)
    }

    /// Total recorded time for `name`.
    pub fn total(&self, name: &str) -> Duration {
        self.stats.get(name).map_or(Duration::ZERO, |s| s.total)
    }

    /// Iterates over `(name, stats)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OpStats)> {
        self.stats.iter().map(|(n, s)| (n.as_str(), s))
    }

    /// Clears all recorded statistics.
    pub fn reset(&mut self) {
        self.stats.clear();
    }

    /// Renders calls, total runtime, and time per call for each operation,
    /// sorted by name.
    pub fn report(&self) -> String {
        let mut names: Vec<&String> = self.stats.keys().collect();
        names.sort();

        let mut out = String::from("Operation                 Calls     TotSec   Sec/Call");
        for name in names {
            let s = &self.stats[name];
            let total = s.total.as_secs_f64();
            let per_call = total / s.calls as f64;
            out.push_str(&format!(
                "\n{name:24} {calls:6} {total:10.3} {per_call:10.3}",
                calls = s.calls
            ));
        }
        out
    }
}
