//! Worker/slot assignment under capacity and preference constraints.
//!
//! Solutions are binary worker × slot matrices; quality is measured by
//! five penalties (all minimized) and improved by five mutation agents.
//! The module supplies the engine's collaborators — it contains no search
//! logic of its own.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use evofront::assign::{self, Assignment, Problem};
//! use evofront::evo::EvolveConfig;
//!
//! let workers = "name,max_load,s1,s2\nAlice,1,,U\nBob,2,W,\n";
//! let slots = "name,time,min_load\nLab 1,R 9:50,1\nLab 2,W 14:30,1\n";
//! let data = Arc::new(Problem::from_csv(workers, slots)?);
//!
//! let seed = Assignment::empty(data.worker_count(), data.slot_count());
//! let mut engine = assign::build_engine(&data, seed);
//! engine.evolve(&EvolveConfig::default().with_time_limit_ms(50).with_seed(42));
//!
//! let (best_eval, _best) = engine.select_best(&assign::scalarization())?;
//! assert_eq!(best_eval.get("conflicts"), Some(0.0));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod agents;
mod data;
mod objectives;
mod report;
mod solution;

pub use agents::{
    ConflictReducer, OverallocationReducer, RandomToggle, UndersupportFiller, UnwillingReducer,
};
pub use data::{DataError, Preference, Problem, Slot, Worker};
pub use objectives::{Conflicts, Overallocation, Undersupport, Unpreferred, Unwilling};
pub use report::{write_best_report, write_summary_table};
pub use solution::Assignment;

use std::sync::Arc;

use crate::evo::{Engine, Scalarization};

/// Builds an engine wired with the five objectives (canonical order:
/// overallocation, conflicts, undersupport, unwilling, unpreferred), the
/// five agents, and the seed solution.
pub fn build_engine(data: &Arc<Problem>, seed: Assignment) -> Engine<Assignment> {
    let mut engine = Engine::new();

    engine.register_objective(Overallocation::new(Arc::clone(data)));
    engine.register_objective(Conflicts::new(Arc::clone(data)));
    engine.register_objective(Undersupport::new(Arc::clone(data)));
    engine.register_objective(Unwilling::new(Arc::clone(data)));
    engine.register_objective(Unpreferred::new(Arc::clone(data)));

    engine.register_agent(RandomToggle);
    engine.register_agent(OverallocationReducer::new(Arc::clone(data)));
    engine.register_agent(ConflictReducer::new(Arc::clone(data)));
    engine.register_agent(UndersupportFiller::new(Arc::clone(data)));
    engine.register_agent(UnwillingReducer::new(Arc::clone(data)));

    engine.insert(seed);
    engine
}

/// The domain's fixed selector: only zero-conflict candidates are
/// eligible, ranked by the weighted average of the four remaining
/// penalties.
pub fn scalarization() -> Scalarization {
    Scalarization::new("conflicts")
        .with_weight("unwilling", 0.5)
        .with_weight("overallocation", 0.14)
        .with_weight("undersupport", 0.35)
        .with_weight("unpreferred", 0.01)
}
