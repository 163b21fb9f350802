//! Report writers for a finished run.
//!
//! Both writers take any `io::Write` sink; drivers point them at files.

use std::io::{self, Write};

use crate::evo::{Evaluation, Population};

use super::data::Problem;
use super::solution::Assignment;

/// Writes the frontier summary: a comma-delimited table with one row per
/// surviving evaluation vector — a fixed label column, then each
/// objective's score in registration order.
///
/// Rows are sorted by the evaluation total order so repeated runs over the
/// same frontier render identically. An empty population writes nothing.
pub fn write_summary_table<W: Write>(
    out: &mut W,
    label: &str,
    population: &Population<Assignment>,
) -> io::Result<()> {
    let mut evals: Vec<&Evaluation> = population.evaluations().collect();
    evals.sort_by(|a, b| a.total_cmp(b));

    let Some(first) = evals.first() else {
        return Ok(());
    };

    write!(out, "group")?;
    for name in first.names() {
        write!(out, ",{name}")?;
    }
    writeln!(out)?;

    for eval in evals {
        write!(out, "{label}")?;
        for (_, score) in eval.iter() {
            write!(out, ",{score}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Writes the selected solution: its scores, then each worker's covered
/// slots (1-indexed), then the transpose view (each slot's workers).
pub fn write_best_report<W: Write>(
    out: &mut W,
    problem: &Problem,
    eval: &Evaluation,
    solution: &Assignment,
) -> io::Result<()> {
    writeln!(out, "Scores")?;
    for (name, score) in eval.iter() {
        writeln!(out, "  {name}: {score}")?;
    }

    writeln!(out)?;
    writeln!(out, "Slots per worker (1-indexed)")?;
    for (w, worker) in problem.workers().iter().enumerate() {
        let slots: Vec<String> = solution
            .worker_slots(w)
            .iter()
            .map(|s| (s + 1).to_string())
            .collect();
        writeln!(out, "  {}: {}", worker.name, slots.join(", "))?;
    }

    writeln!(out)?;
    writeln!(out, "Workers per slot (1-indexed)")?;
    for (s, slot) in problem.slots().iter().enumerate() {
        let workers: Vec<String> = solution
            .slot_workers(s)
            .iter()
            .map(|w| (w + 1).to_string())
            .collect();
        writeln!(out, "  {}: {}", slot.name, workers.join(", "))?;
    }
    Ok(())
}
