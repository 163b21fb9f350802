//! Pareto dominance test and frontier reduction.
//!
//! All objectives are **minimized**: lower values are better.

use std::collections::HashSet;

use super::eval::Evaluation;

/// Returns true when `p` dominates `q`.
///
/// With `diff[i] = q[i] − p[i]` over matching objective order, `p`
/// dominates `q` iff `min(diff) >= 0 && max(diff) > 0`: `p` is no worse
/// than `q` on every objective and strictly better on at least one.
///
/// Ties on every objective mean neither vector dominates the other; in
/// particular the relation is irreflexive and asymmetric.
///
/// Both vectors must have the same length and objective order (they do by
/// construction when produced by one engine's registry).
pub fn dominates(p: &Evaluation, q: &Evaluation) -> bool {
    debug_assert_eq!(p.len(), q.len(), "evaluation vectors must match");

    let mut strictly_better = false;
    for ((_, ps), (_, qs)) in p.iter().zip(q.iter()) {
        let diff = qs - ps;
        if diff < 0.0 {
            return false;
        }
        if diff > 0.0 {
            strictly_better = true;
        }
    }
    strictly_better
}

/// Computes the non-dominated subset of `keys`.
///
/// The reference algorithm is a fold: start with the full key set, then
/// for every key `p` in the original snapshot remove from the accumulating
/// survivor set every `q` that `p` dominates. A key already removed by an
/// earlier `p` makes later removals no-ops, so the result is
/// order-independent, and re-running on an already-pruned set changes
/// nothing.
pub fn non_dominated(keys: &[Evaluation]) -> HashSet<&Evaluation> {
    let mut survivors: HashSet<&Evaluation> = keys.iter().collect();
    for p in keys {
        // `dominates` is irreflexive, so `p` can never evict itself.
        survivors.retain(|q| !dominates(p, q));
    }
    survivors
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn eval(scores: &[f64]) -> Evaluation {
        Evaluation::new(
            scores
                .iter()
                .enumerate()
                .map(|(i, &s)| (format!("obj{i}"), s))
                .collect(),
        )
    }

    #[test]
    fn test_dominates_strictly_better_everywhere() {
        let p = eval(&[3.0, 0.0, 1.0, 2.0, 0.0]);
        let q = eval(&[5.0, 0.0, 2.0, 3.0, 1.0]);
        assert!(dominates(&p, &q));
        assert!(!dominates(&q, &p));
    }

    #[test]
    fn test_dominates_requires_one_strict_improvement() {
        let p = eval(&[2.0, 2.0]);
        let q = eval(&[2.0, 3.0]);
        assert!(dominates(&p, &q));
    }

    #[test]
    fn test_ties_everywhere_dominate_neither_way() {
        let p = eval(&[1.0, 2.0]);
        let q = eval(&[1.0, 2.0]);
        assert!(!dominates(&p, &q));
        assert!(!dominates(&q, &p));
    }

    #[test]
    fn test_irreflexive() {
        let p = eval(&[4.0, 0.0, 2.0]);
        assert!(!dominates(&p, &p));
    }

    #[test]
    fn test_incomparable_vectors() {
        let p = eval(&[2.0, 0.0, 0.0, 0.0, 0.0]);
        let q = eval(&[0.0, 0.0, 2.0, 0.0, 0.0]);
        assert!(!dominates(&p, &q));
        assert!(!dominates(&q, &p));
    }

    #[test]
    fn test_non_dominated_removes_dominated_key() {
        let keys = vec![eval(&[5.0, 0.0, 2.0, 3.0, 1.0]), eval(&[3.0, 0.0, 1.0, 2.0, 0.0])];
        let survivors = non_dominated(&keys);
        assert_eq!(survivors.len(), 1);
        assert!(survivors.contains(&keys[1]));
    }

    #[test]
    fn test_non_dominated_keeps_incomparable_keys() {
        let keys = vec![eval(&[2.0, 0.0, 0.0, 0.0, 0.0]), eval(&[0.0, 0.0, 2.0, 0.0, 0.0])];
        let survivors = non_dominated(&keys);
        assert_eq!(survivors.len(), 2);
    }

    #[test]
    fn test_non_dominated_is_idempotent() {
        let keys = vec![
            eval(&[1.0, 5.0]),
            eval(&[3.0, 3.0]),
            eval(&[5.0, 1.0]),
            eval(&[4.0, 4.0]),
            eval(&[6.0, 6.0]),
        ];
        let once: Vec<Evaluation> = non_dominated(&keys).into_iter().cloned().collect();
        let twice = non_dominated(&once);
        assert_eq!(once.len(), twice.len());
        for e in &once {
            assert!(twice.contains(e));
        }
    }

    proptest! {
        #[test]
        fn prop_never_mutually_dominating(
            a in proptest::collection::vec(0u16..50, 1..6),
            b in proptest::collection::vec(0u16..50, 1..6),
        ) {
            let n = a.len().min(b.len());
            let p = eval(&a[..n].iter().map(|&v| f64::from(v)).collect::<Vec<_>>());
            let q = eval(&b[..n].iter().map(|&v| f64::from(v)).collect::<Vec<_>>());
            prop_assert!(!(dominates(&p, &q) && dominates(&q, &p)));
        }

        #[test]
        fn prop_irreflexive(scores in proptest::collection::vec(0u16..50, 1..6)) {
            let p = eval(&scores.iter().map(|&v| f64::from(v)).collect::<Vec<_>>());
            prop_assert!(!dominates(&p, &p));
        }

        #[test]
        fn prop_survivors_form_antichain(
            raw in proptest::collection::vec(
                proptest::collection::vec(0u16..10, 3),
                1..20,
            ),
        ) {
            let keys: Vec<Evaluation> = raw
                .iter()
                .map(|v| eval(&v.iter().map(|&x| f64::from(x)).collect::<Vec<_>>()))
                .collect();
            let survivors: Vec<&Evaluation> = non_dominated(&keys).into_iter().collect();
            for &p in &survivors {
                for &q in &survivors {
                    prop_assert!(!dominates(p, q));
                }
            }
        }
    }
}
