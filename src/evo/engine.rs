//! The evolution loop: registries, population, and the time-bounded
//! scheduler that drives agents against the frontier.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::EvolveConfig;
use super::eval::Evaluation;
use super::metrics::Profiler;
use super::population::Population;
use super::selector::{self, Scalarization, SelectError};
use super::types::{Agent, FnAgent, FnObjective, Objective};

/// Result of an evolve run.
#[derive(Debug, Clone)]
pub struct EvolveResult {
    /// Number of agent invocations performed.
    pub iterations: usize,

    /// Population size after the final pruning (= frontier size).
    pub frontier_size: usize,

    /// Number of pruning passes, the guaranteed final one included.
    pub prunes: usize,

    /// Wall-clock time actually spent, in milliseconds.
    pub elapsed_ms: u64,
}

/// A multi-objective evolutionary search environment.
///
/// Owns the objective and agent registries, the population store, and a
/// [`Profiler`] that accounts every objective evaluation and agent
/// invocation by name.
///
/// # Usage
///
/// ```
/// use evofront::evo::{Engine, EvolveConfig};
/// use rand::{Rng, RngCore};
///
/// // Minimize the distance of an integer to 42, by random nudging.
/// let mut engine: Engine<i64> = Engine::new();
/// engine.register_objective_fn("distance", |x: &i64| (x - 42).abs() as f64);
/// engine.register_agent_fn("nudge", 1, |picks: Vec<i64>, rng: &mut dyn RngCore| {
///     picks[0] + rng.random_range(-3i64..=3)
/// });
/// engine.insert(0);
///
/// let result = engine.evolve(&EvolveConfig::default().with_time_limit_ms(20).with_seed(1));
/// assert!(result.frontier_size >= 1);
/// ```
pub struct Engine<S> {
    objectives: Vec<Box<dyn Objective<S>>>,
    agents: Vec<Box<dyn Agent<S>>>,
    population: Population<S>,
    profiler: Profiler,
}

impl<S> Engine<S> {
    /// Creates an engine with empty registries and an empty population.
    pub fn new() -> Self {
        Self {
            objectives: Vec::new(),
            agents: Vec::new(),
            population: Population::new(),
            profiler: Profiler::new(),
        }
    }

    /// Registers an objective.
    ///
    /// Registration is last-write-wins by name: re-registering a name
    /// replaces the previous function in place, keeping its position in
    /// registration order, and affects only future evaluations — vectors
    /// already stored are not recomputed.
    pub fn register_objective(&mut self, objective: impl Objective<S> + 'static) {
        let boxed: Box<dyn Objective<S>> = Box::new(objective);
        match self
            .objectives
            .iter()
            .position(|o| o.name() == boxed.name())
        {
            Some(index) => self.objectives[index] = boxed,
            None => self.objectives.push(boxed),
        }
    }

    /// Registers a closure objective under `name`.
    pub fn register_objective_fn<F>(&mut self, name: impl Into<String>, f: F)
    where
        F: Fn(&S) -> f64 + Send + Sync + 'static,
    {
        self.register_objective(FnObjective::new(name, f));
    }

    /// Registers an agent (last-write-wins by name, like objectives).
    pub fn register_agent(&mut self, agent: impl Agent<S> + 'static) {
        let boxed: Box<dyn Agent<S>> = Box::new(agent);
        match self.agents.iter().position(|a| a.name() == boxed.name()) {
            Some(index) => self.agents[index] = boxed,
            None => self.agents.push(boxed),
        }
    }

    /// Registers a closure agent under `name` with the given arity.
    pub fn register_agent_fn<F>(&mut self, name: impl Into<String>, arity: usize, f: F)
    where
        F: Fn(Vec<S>, &mut dyn rand::RngCore) -> S + Send + Sync + 'static,
    {
        self.register_agent(FnAgent::new(name, arity, f));
    }

    /// The current population store.
    pub fn population(&self) -> &Population<S> {
        &self.population
    }

    /// Accumulated per-operation call/time statistics.
    pub fn profiler(&self) -> &Profiler {
        &self.profiler
    }
}

impl<S: Clone> Engine<S> {
    /// Applies every registered objective, in registration order, to
    /// `solution`. Each evaluation is profiled under the objective's name.
    pub fn evaluate(&mut self, solution: &S) -> Evaluation {
        let mut scores = Vec::with_capacity(self.objectives.len());
        for objective in &self.objectives {
            let start = Instant::now();
            let score = objective.score(solution);
            self.profiler.record(objective.name(), start.elapsed());
            scores.push((objective.name().to_string(), score));
        }
        Evaluation::new(scores)
    }

    /// Evaluates `solution` and stores it under its evaluation vector.
    ///
    /// This is the ONLY path by which a solution — the seed included —
    /// enters the population. A vector seen before silently replaces the
    /// earlier solution body (see [`Population::insert`]).
    pub fn insert(&mut self, solution: S) {
        let eval = self.evaluate(&solution);
        self.population.insert(eval, solution);
    }

    /// Collapses the population to its non-dominated frontier.
    pub fn remove_dominated(&mut self) {
        self.population.remove_dominated();
    }

    /// Runs the evolution loop for the configured wall-clock budget.
    ///
    /// Per iteration: uniformly pick one registered agent, sample `arity`
    /// solutions (deep copies, with replacement), invoke the agent, insert
    /// the returned solution (re-evaluating all objectives). Every
    /// `prune_interval`-th iteration — iteration 0 included — the
    /// population is pruned, and once more after the loop exits, so the
    /// store is frontier-pruned on return wherever the budget cuts off.
    ///
    /// The deadline is polled at the top of each iteration; an iteration
    /// in progress when it passes always completes. An agent returning its
    /// input unchanged still re-evaluates and re-inserts — wasted work,
    /// not an error, and there is no retry.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid or no agent is registered.
    pub fn evolve(&mut self, config: &EvolveConfig) -> EvolveResult {
        config.validate().expect("invalid EvolveConfig");
        assert!(!self.agents.is_empty(), "at least one agent required");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let budget = Duration::from_millis(config.time_limit_ms);
        let start = Instant::now();
        let mut iterations = 0usize;
        let mut prunes = 0usize;

        while start.elapsed() < budget {
            let pick = rng.random_range(0..self.agents.len());
            self.run_agent(pick, &mut rng);

            if iterations.is_multiple_of(config.prune_interval) {
                self.population.remove_dominated();
                prunes += 1;
                tracing::debug!(
                    iteration = iterations,
                    population = self.population.len(),
                    "pruned dominated entries"
                );
            }
            iterations += 1;
        }

        // Guarantee a frontier-pruned store on return.
        self.population.remove_dominated();
        prunes += 1;

        let elapsed_ms = start.elapsed().as_millis() as u64;
        tracing::info!(
            iterations,
            frontier_size = self.population.len(),
            prunes,
            elapsed_ms,
            "evolve finished"
        );

        EvolveResult {
            iterations,
            frontier_size: self.population.len(),
            prunes,
            elapsed_ms,
        }
    }

    /// Picks one frontier representative via weighted scalarization.
    pub fn select_best(
        &self,
        scalarization: &Scalarization,
    ) -> Result<(&Evaluation, &S), SelectError> {
        selector::select_best(&self.population, scalarization)
    }

    fn run_agent(&mut self, index: usize, rng: &mut StdRng) {
        let arity = self.agents[index].arity();
        let picks = self.population.sample(arity, rng);

        let start = Instant::now();
        let candidate = self.agents[index].apply(picks, rng);
        self.profiler.record(self.agents[index].name(), start.elapsed());

        self.insert(candidate);
    }
}

impl<S> Default for Engine<S> {
    fn default() -> Self {
        Self::new()
    }
}
