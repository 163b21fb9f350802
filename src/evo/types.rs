//! Core capability traits for the engine.
//!
//! The two central traits — [`Objective`] and [`Agent`] — define the
//! contract between the generic engine and domain-specific collaborators.
//! Both are single-method capabilities registered by name; the engine owns
//! no domain knowledge of its own.

use rand::RngCore;

/// A named objective (fitness) function.
///
/// Objectives are pure, deterministic, and side-effect free; they return a
/// non-negative score where **lower is better**. An objective is not
/// allowed to fail — a panic inside one aborts the evolve run and
/// propagates to the caller.
pub trait Objective<S>: Send + Sync {
    /// The registry name of this objective.
    ///
    /// Registration order of names fixes the evaluation-vector layout, the
    /// dominance comparison order, and report columns.
    fn name(&self) -> &str;

    /// Scores a solution. Lower is better.
    fn score(&self, solution: &S) -> f64;
}

/// A named mutation operator.
///
/// On each invocation the engine draws [`arity`](Agent::arity) solutions
/// from the population — independent deep copies, never aliased to stored
/// solutions — and passes them as an owned, ordered sequence. The agent
/// returns one new candidate; it may consume and mutate its inputs freely.
///
/// An agent that finds no applicable mutation returns its input unchanged
/// rather than failing; the engine treats that as a normal (if wasteful)
/// iteration.
pub trait Agent<S>: Send + Sync {
    /// The registry name of this agent.
    fn name(&self) -> &str;

    /// How many solutions are sampled for each invocation.
    fn arity(&self) -> usize {
        1
    }

    /// Produces a new candidate from `picks` (`arity` deep copies, sampled
    /// uniformly with replacement).
    ///
    /// `picks` is shorter than `arity` only in the theoretical
    /// empty-population case, which cannot occur once the store is seeded.
    fn apply(&self, picks: Vec<S>, rng: &mut dyn RngCore) -> S;
}

/// Adapts a closure into an [`Objective`].
///
/// Lets ad-hoc objectives be registered without a named struct:
///
/// ```
/// use evofront::evo::{FnObjective, Objective};
///
/// let objective = FnObjective::new("length", |s: &Vec<u8>| s.len() as f64);
/// assert_eq!(objective.name(), "length");
/// assert_eq!(objective.score(&vec![1, 2, 3]), 3.0);
/// ```
pub struct FnObjective<F> {
    name: String,
    f: F,
}

impl<F> FnObjective<F> {
    /// Wraps `f` under the given registry name.
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<S, F> Objective<S> for FnObjective<F>
where
    F: Fn(&S) -> f64 + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn score(&self, solution: &S) -> f64 {
        (self.f)(solution)
    }
}

/// Adapts a closure into an [`Agent`] with an explicit arity.
pub struct FnAgent<F> {
    name: String,
    arity: usize,
    f: F,
}

impl<F> FnAgent<F> {
    /// Wraps `f` under the given registry name, sampling `arity` solutions
    /// per invocation.
    pub fn new(name: impl Into<String>, arity: usize, f: F) -> Self {
        Self {
            name: name.into(),
            arity,
            f,
        }
    }
}

impl<S, F> Agent<S> for FnAgent<F>
where
    F: Fn(Vec<S>, &mut dyn RngCore) -> S + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn arity(&self) -> usize {
        self.arity
    }

    fn apply(&self, picks: Vec<S>, rng: &mut dyn RngCore) -> S {
        (self.f)(picks, rng)
    }
}
