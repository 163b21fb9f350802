//! Problem data: workers, slots, and preference codes.
//!
//! The data is loaded once at setup and injected — immutable, behind an
//! `Arc` — into the objective and agent constructors. Nothing in the
//! engine reads it directly.

use thiserror::Error;

/// How a worker feels about covering one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Preference {
    /// Code `U`: assigning this pair incurs the unwilling penalty.
    Unwilling,
    /// Code `W`: willing but not preferred; incurs the unpreferred penalty.
    Willing,
    /// Blank or any other code: no preference penalty.
    Preferred,
}

impl Preference {
    /// Parses the original table's one-letter code.
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "U" => Preference::Unwilling,
            "W" => Preference::Willing,
            _ => Preference::Preferred,
        }
    }
}

/// One assignable worker: a load cap and a per-slot preference row.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Worker {
    /// Display name, used by the reports.
    pub name: String,
    /// Maximum number of slots this worker asked to cover.
    pub max_load: u32,
    /// One entry per slot, in slot order.
    pub preferences: Vec<Preference>,
}

/// One slot to be covered: a minimum staffing level and a time bucket.
///
/// Two slots sharing a `time_bucket` meet at the same time; a worker
/// covering both has a conflict.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slot {
    /// Display name, used by the reports.
    pub name: String,
    /// Minimum number of workers required.
    pub min_load: u32,
    /// Scheduling time bucket (e.g. `"R 9:50"`).
    pub time_bucket: String,
}

/// Malformed problem data.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DataError {
    /// A table row has fewer fields than its header requires.
    #[error("row {row}: expected at least {expected} fields, found {found}")]
    MissingFields {
        /// 1-indexed data row.
        row: usize,
        /// Minimum field count.
        expected: usize,
        /// Actual field count.
        found: usize,
    },

    /// A numeric field failed to parse.
    #[error("row {row}: invalid numeric field `{value}`")]
    InvalidNumber {
        /// 1-indexed data row.
        row: usize,
        /// The offending field text.
        value: String,
    },

    /// A worker's preference row does not cover every slot.
    #[error("worker `{worker}` has {found} preference entries, expected {expected}")]
    PreferenceLength {
        /// Worker display name.
        worker: String,
        /// Slot count.
        expected: usize,
        /// Preference entries found.
        found: usize,
    },

    /// A problem needs at least one worker and one slot.
    #[error("problem must have at least one worker and one slot")]
    Empty,
}

/// The validated, immutable problem instance.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Problem {
    workers: Vec<Worker>,
    slots: Vec<Slot>,
}

impl Problem {
    /// Builds a problem, checking that every worker's preference row has
    /// one entry per slot.
    pub fn new(workers: Vec<Worker>, slots: Vec<Slot>) -> Result<Self, DataError> {
        if workers.is_empty() || slots.is_empty() {
            return Err(DataError::Empty);
        }
        for worker in &workers {
            if worker.preferences.len() != slots.len() {
                return Err(DataError::PreferenceLength {
                    worker: worker.name.clone(),
                    expected: slots.len(),
                    found: worker.preferences.len(),
                });
            }
        }
        Ok(Self { workers, slots })
    }

    /// Parses the two setup tables.
    ///
    /// `workers_csv`: header row, then `name,max_load` followed by one
    /// preference-code column per slot (`U`, `W`, blank/other).
    /// `slots_csv`: header row, then `name,time_bucket,min_load`.
    ///
    /// The retrieval corpus carries no CSV dependency, and the two fixed
    /// three-column-plus-codes layouts need none; fields are split on
    /// commas and trimmed.
    pub fn from_csv(workers_csv: &str, slots_csv: &str) -> Result<Self, DataError> {
        let slots = parse_slots(slots_csv)?;
        let workers = parse_workers(workers_csv)?;
        Self::new(workers, slots)
    }

    /// All workers, in table order.
    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    /// All slots, in table order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Number of workers (solution matrix rows).
    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Number of slots (solution matrix columns).
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// The preference of `worker` for `slot`.
    pub fn preference(&self, worker: usize, slot: usize) -> Preference {
        self.workers[worker].preferences[slot]
    }
}

fn data_rows(table: &str) -> impl Iterator<Item = (usize, &str)> {
    table
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .skip(1) // header
        .enumerate()
        .map(|(i, line)| (i + 1, line))
}

fn parse_number(row: usize, field: &str) -> Result<u32, DataError> {
    field
        .trim()
        .parse()
        .map_err(|_| DataError::InvalidNumber {
            row,
            value: field.trim().to_string(),
        })
}

fn parse_workers(table: &str) -> Result<Vec<Worker>, DataError> {
    let mut workers = Vec::new();
    for (row, line) in data_rows(table) {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 2 {
            return Err(DataError::MissingFields {
                row,
                expected: 2,
                found: fields.len(),
            });
        }
        workers.push(Worker {
            name: fields[0].trim().to_string(),
            max_load: parse_number(row, fields[1])?,
            preferences: fields[2..].iter().map(|f| Preference::from_code(f)).collect(),
        });
    }
    Ok(workers)
}

fn parse_slots(table: &str) -> Result<Vec<Slot>, DataError> {
    let mut slots = Vec::new();
    for (row, line) in data_rows(table) {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 3 {
            return Err(DataError::MissingFields {
                row,
                expected: 3,
                found: fields.len(),
            });
        }
        slots.push(Slot {
            name: fields[0].trim().to_string(),
            time_bucket: fields[1].trim().to_string(),
            min_load: parse_number(row, fields[2])?,
        });
    }
    Ok(slots)
}
