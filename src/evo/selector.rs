//! Scalarization: collapsing a frontier into one representative solution.

use thiserror::Error;

use super::eval::Evaluation;
use super::population::Population;

/// Selection failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SelectError {
    /// The population holds no solutions at all.
    #[error("population is empty")]
    EmptyPopulation,

    /// No candidate scores zero on the feasibility objective and the
    /// fallback is [`FeasibilityFallback::Strict`].
    #[error("no candidate has a zero `{0}` score")]
    NoFeasibleCandidate(String),

    /// A name used by the scalarization is not part of the evaluation
    /// vector (typically a registration-order / naming mismatch).
    #[error("objective `{0}` is not part of the evaluation vector")]
    UnknownObjective(String),
}

/// What to do when no candidate satisfies the feasibility objective
/// exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeasibilityFallback {
    /// Fail with [`SelectError::NoFeasibleCandidate`] (reference
    /// behavior).
    Strict,

    /// Relax the eligible pool to the candidates attaining the minimum
    /// feasibility score instead of exactly zero.
    RelaxToMinimum,
}

/// A fixed weighted-sum selector over a pruned frontier.
///
/// Candidates are restricted to evaluations whose **named** feasibility
/// objective scores zero; each eligible candidate is then ranked by
/// `round(Σ wᵢ·scoreᵢ / weight_count, 3)` and the minimum wins. Every
/// objective the weights reference is addressed by name, never by
/// position, so registration order cannot silently reassign weights.
///
/// ```
/// use evofront::evo::Scalarization;
///
/// let selector = Scalarization::new("conflicts")
///     .with_weight("unwilling", 0.5)
///     .with_weight("overallocation", 0.14)
///     .with_weight("undersupport", 0.35)
///     .with_weight("unpreferred", 0.01);
/// ```
#[derive(Debug, Clone)]
pub struct Scalarization {
    feasibility: String,
    fallback: FeasibilityFallback,
    weights: Vec<(String, f64)>,
}

impl Scalarization {
    /// Creates a selector whose eligible pool requires a zero score on the
    /// named feasibility objective. The fallback defaults to
    /// [`FeasibilityFallback::Strict`].
    pub fn new(feasibility: impl Into<String>) -> Self {
        Self {
            feasibility: feasibility.into(),
            fallback: FeasibilityFallback::Strict,
            weights: Vec::new(),
        }
    }

    /// Adds a named weight term.
    pub fn with_weight(mut self, objective: impl Into<String>, weight: f64) -> Self {
        self.weights.push((objective.into(), weight));
        self
    }

    /// Sets the behavior when no candidate is exactly feasible.
    pub fn with_fallback(mut self, fallback: FeasibilityFallback) -> Self {
        self.fallback = fallback;
        self
    }

    /// The feasibility objective name.
    pub fn feasibility(&self) -> &str {
        &self.feasibility
    }

    /// The weighted score of one evaluation: the named weighted sum,
    /// divided by the number of weight terms, rounded to 3 decimal places.
    pub fn weighted_score(&self, eval: &Evaluation) -> Result<f64, SelectError> {
        let mut sum = 0.0;
        for (name, weight) in &self.weights {
            let score = eval
                .get(name)
                .ok_or_else(|| SelectError::UnknownObjective(name.clone()))?;
            sum += weight * score;
        }
        Ok(round3(sum / self.weights.len() as f64))
    }
}

/// Rounds to 3 decimal places, half away from zero.
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Picks the frontier representative with the minimum weighted score.
///
/// Ties on the weighted score break deterministically by the evaluation
/// total order, independent of hash iteration order.
pub(crate) fn select_best<'a, S>(
    population: &'a Population<S>,
    scalarization: &Scalarization,
) -> Result<(&'a Evaluation, &'a S), SelectError> {
    if population.is_empty() {
        return Err(SelectError::EmptyPopulation);
    }

    let feasibility = |eval: &Evaluation| {
        eval.get(&scalarization.feasibility)
            .ok_or_else(|| SelectError::UnknownObjective(scalarization.feasibility.clone()))
    };

    let mut eligible: Vec<(&Evaluation, &S)> = Vec::new();
    for (eval, solution) in population.iter() {
        if feasibility(eval)? == 0.0 {
            eligible.push((eval, solution));
        }
    }

    if eligible.is_empty() {
        match scalarization.fallback {
            FeasibilityFallback::Strict => {
                return Err(SelectError::NoFeasibleCandidate(
                    scalarization.feasibility.clone(),
                ));
            }
            FeasibilityFallback::RelaxToMinimum => {
                let mut minimum = f64::INFINITY;
                for (eval, _) in population.iter() {
                    minimum = minimum.min(feasibility(eval)?);
                }
                for (eval, solution) in population.iter() {
                    if feasibility(eval)? == minimum {
                        eligible.push((eval, solution));
                    }
                }
            }
        }
    }

    let mut ranked: Vec<(f64, &Evaluation, &S)> = Vec::with_capacity(eligible.len());
    for (eval, solution) in eligible {
        ranked.push((scalarization.weighted_score(eval)?, eval, solution));
    }
    ranked.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.total_cmp(b.1)));

    let (_, eval, solution) = ranked
        .into_iter()
        .next()
        .expect("eligible pool is non-empty here");
    Ok((eval, solution))
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: [&str; 5] = [
        "overallocation",
        "conflicts",
        "undersupport",
        "unwilling",
        "unpreferred",
    ];

    fn eval(scores: [f64; 5]) -> Evaluation {
        Evaluation::new(
            NAMES
                .iter()
                .zip(scores)
                .map(|(&n, s)| (n.to_string(), s))
                .collect(),
        )
    }

    fn domain_selector() -> Scalarization {
        Scalarization::new("conflicts")
            .with_weight("unwilling", 0.5)
            .with_weight("overallocation", 0.14)
            .with_weight("undersupport", 0.35)
            .with_weight("unpreferred", 0.01)
    }

    #[test]
    fn test_weighted_arithmetic_matches_documented_formula() {
        let selector = domain_selector();

        // Same term order as the selector's weight list.
        let expected_a: f64 = ((0.5f64 * 1.0 + 0.14 * 4.0 + 0.35 * 2.0 + 0.01 * 1.0) / 4.0 * 1000.0)
            .round()
            / 1000.0;
        let expected_b: f64 = ((0.5f64 * 0.0 + 0.14 * 2.0 + 0.35 * 1.0 + 0.01 * 2.0) / 4.0 * 1000.0)
            .round()
            / 1000.0;

        let a = selector.weighted_score(&eval([4.0, 0.0, 2.0, 1.0, 1.0])).unwrap();
        let b = selector.weighted_score(&eval([2.0, 0.0, 1.0, 0.0, 2.0])).unwrap();

        assert_eq!(a, expected_a);
        assert_eq!(b, expected_b);
        assert!(b < a);
    }

    #[test]
    fn test_select_best_prefers_lower_weighted_score() {
        let mut pop: Population<&str> = Population::new();
        pop.insert(eval([4.0, 0.0, 2.0, 1.0, 1.0]), "a");
        pop.insert(eval([2.0, 0.0, 1.0, 0.0, 2.0]), "b");

        let (best_eval, best) = select_best(&pop, &domain_selector()).unwrap();
        assert_eq!(*best, "b");
        assert_eq!(best_eval.get("overallocation"), Some(2.0));
    }

    #[test]
    fn test_candidates_with_conflicts_are_ineligible() {
        let mut pop: Population<&str> = Population::new();
        // Much better weighted score, but one conflict.
        pop.insert(eval([0.0, 1.0, 0.0, 0.0, 0.0]), "infeasible");
        pop.insert(eval([4.0, 0.0, 2.0, 1.0, 1.0]), "feasible");

        let (_, best) = select_best(&pop, &domain_selector()).unwrap();
        assert_eq!(*best, "feasible");
    }

    #[test]
    fn test_strict_fallback_errors_without_feasible_candidate() {
        let mut pop: Population<&str> = Population::new();
        pop.insert(eval([1.0, 2.0, 0.0, 0.0, 0.0]), "a");

        let err = select_best(&pop, &domain_selector()).unwrap_err();
        assert_eq!(err, SelectError::NoFeasibleCandidate("conflicts".into()));
    }

    #[test]
    fn test_relax_to_minimum_fallback() {
        let mut pop: Population<&str> = Population::new();
        pop.insert(eval([1.0, 2.0, 0.0, 0.0, 0.0]), "two_conflicts");
        pop.insert(eval([9.0, 1.0, 9.0, 9.0, 9.0]), "one_conflict");

        let selector = domain_selector().with_fallback(FeasibilityFallback::RelaxToMinimum);
        let (best_eval, best) = select_best(&pop, &selector).unwrap();
        assert_eq!(*best, "one_conflict");
        assert_eq!(best_eval.get("conflicts"), Some(1.0));
    }

    #[test]
    fn test_empty_population_errors() {
        let pop: Population<&str> = Population::new();
        let err = select_best(&pop, &domain_selector()).unwrap_err();
        assert_eq!(err, SelectError::EmptyPopulation);
    }

    #[test]
    fn test_unknown_feasibility_objective_errors() {
        let mut pop: Population<&str> = Population::new();
        pop.insert(eval([0.0, 0.0, 0.0, 0.0, 0.0]), "a");

        let selector = Scalarization::new("nonexistent").with_weight("unwilling", 1.0);
        let err = select_best(&pop, &selector).unwrap_err();
        assert_eq!(err, SelectError::UnknownObjective("nonexistent".into()));
    }

    #[test]
    fn test_unknown_weight_objective_errors() {
        let mut pop: Population<&str> = Population::new();
        pop.insert(eval([0.0, 0.0, 0.0, 0.0, 0.0]), "a");

        let selector = Scalarization::new("conflicts").with_weight("typo", 1.0);
        let err = select_best(&pop, &selector).unwrap_err();
        assert_eq!(err, SelectError::UnknownObjective("typo".into()));
    }

    #[test]
    fn test_tie_breaks_are_deterministic() {
        // Two evaluations with identical weighted scores; the winner must
        // be the same regardless of insertion order.
        let a = eval([1.0, 0.0, 0.0, 0.0, 0.0]);
        let b = eval([0.0, 0.0, 0.0, 0.0, 14.0]);
        let selector = domain_selector();
        assert_eq!(
            selector.weighted_score(&a).unwrap(),
            selector.weighted_score(&b).unwrap()
        );

        let mut first: Population<&str> = Population::new();
        first.insert(a.clone(), "a");
        first.insert(b.clone(), "b");

        let mut second: Population<&str> = Population::new();
        second.insert(b, "b");
        second.insert(a, "a");

        let winner_first = *select_best(&first, &selector).unwrap().1;
        let winner_second = *select_best(&second, &selector).unwrap().1;
        assert_eq!(winner_first, winner_second);
    }
}
