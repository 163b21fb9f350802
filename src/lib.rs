//! Multi-objective evolutionary search with Pareto-frontier pruning.
//!
//! The crate is split into a generic engine and one concrete domain:
//!
//! - **Engine** ([`evo`]): maintains a population of candidate solutions
//!   keyed by their evaluation vector, evolves it by repeatedly invoking
//!   registered mutation agents, and periodically collapses it to its
//!   non-dominated (Pareto) frontier. A weighted scalarization selector
//!   extracts one representative solution at the end of a run.
//! - **Assignment domain** ([`assign`]): workers assigned to time-slotted
//!   tasks under capacity and preference constraints — five penalty
//!   objectives, five mutation agents, and the report writers that render
//!   a finished frontier.
//!
//! # Architecture
//!
//! The engine is deliberately agnostic to the solution representation: it
//! only requires `Clone` (deep copy) and delegates all domain knowledge to
//! the [`Objective`](evo::Objective) and [`Agent`](evo::Agent) capabilities
//! registered at setup time. Domain collaborators are closures over
//! explicitly injected, immutable problem data — the engine never reads
//! domain state of its own.
//!
//! All objectives are **minimized**: lower scores are better, and a
//! solution dominates another when it is no worse on every objective and
//! strictly better on at least one.

pub mod assign;
pub mod evo;
