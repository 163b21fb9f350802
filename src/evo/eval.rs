//! Evaluation vectors: the canonical quality fingerprint of a solution.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// An ordered list of `(objective name, score)` pairs, one per registered
/// objective, in registration order.
///
/// Evaluations key the population store, so they implement `Eq` and `Hash`.
/// Scores are compared by their IEEE-754 bit pattern: objectives are pure
/// and deterministic, so equal solutions always produce bit-identical
/// scores, and distinct quality levels never collide by rounding.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    scores: Vec<(String, f64)>,
}

impl Evaluation {
    /// Creates an evaluation from `(name, score)` pairs in objective
    /// registration order.
    pub fn new(scores: Vec<(String, f64)>) -> Self {
        Self { scores }
    }

    /// Number of objectives.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// True when no objectives were registered.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Score of the named objective, if present.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.scores
            .iter()
            .find(|(n, _)| n == name)
            .map(|&(_, s)| s)
    }

    /// Score at a registration-order position.
    pub fn score_at(&self, index: usize) -> Option<f64> {
        self.scores.get(index).map(|&(_, s)| s)
    }

    /// Iterates over `(name, score)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores.iter().map(|(n, s)| (n.as_str(), *s))
    }

    /// Objective names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.scores.iter().map(|(n, _)| n.as_str())
    }

    /// Total order over evaluations: names lexicographically, then scores
    /// via `f64::total_cmp`, position by position.
    ///
    /// The population store itself is unordered; this comparator gives
    /// consumers (selection tie-breaks, report rows) a deterministic
    /// sequence independent of hash iteration order.
    pub fn total_cmp(&self, other: &Evaluation) -> Ordering {
        for ((an, a), (bn, b)) in self.scores.iter().zip(other.scores.iter()) {
            match an.cmp(bn).then(a.total_cmp(b)) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        self.scores.len().cmp(&other.scores.len())
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.scores.len() == other.scores.len()
            && self
                .scores
                .iter()
                .zip(other.scores.iter())
                .all(|((an, a), (bn, b))| an == bn && a.to_bits() == b.to_bits())
    }
}

impl Eq for Evaluation {}

impl Hash for Evaluation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for (name, score) in &self.scores {
            name.hash(state);
            score.to_bits().hash(state);
        }
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, (name, score)) in self.scores.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}={score}")?;
        }
        write!(f, ")")
    }
}
