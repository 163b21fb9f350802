//! Generic multi-objective evolutionary search engine.
//!
//! The engine maintains a population of candidate solutions keyed by their
//! [`Evaluation`] vector, evolves it by sampling and applying registered
//! mutation [`Agent`]s, and periodically prunes it down to the
//! non-dominated (Pareto) frontier.
//!
//! # Core Traits
//!
//! - [`Objective`]: a named, pure scoring function (lower is better)
//! - [`Agent`]: a named mutation operator consuming `arity` sampled
//!   solutions and producing one new candidate
//!
//! # Key Types
//!
//! - [`Engine`]: registries + population + evolution loop
//! - [`EvolveConfig`]: loop parameters (prune interval, time budget, seed)
//! - [`Scalarization`]: weighted-sum selection of one frontier solution
//! - [`Profiler`]: per-operation call/time accounting
//!
//! # References
//!
//! - Deb et al. (2002), *A Fast and Elitist Multiobjective GA: NSGA-II*
//!   (dominance definition)
//! - Coello Coello et al. (2007), *Evolutionary Algorithms for Solving
//!   Multi-Objective Problems*

mod config;
mod dominance;
mod engine;
mod eval;
pub mod metrics;
mod population;
mod selector;
mod types;

pub use config::EvolveConfig;
pub use dominance::dominates;
pub use engine::{Engine, EvolveResult};
pub use eval::Evaluation;
pub use metrics::Profiler;
pub use population::Population;
pub use selector::{FeasibilityFallback, Scalarization, SelectError};
pub use types::{Agent, FnAgent, FnObjective, Objective};
