use super::domain::TrainSet;
use super::evaluation::{evaluate, InductionConstraints, InductionDecision};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Order decisions by descending priority. Ties keep the fleet order they arrived in.
pub fn rank_decisions(mut decisions: Vec<InductionDecision>) -> Vec<InductionDecision> {
    // `sort_by` is stable, which the tie-break relies on.
    decisions.sort_by(|a, b| b.priority.cmp(&a.priority));
    decisions
}

/// Evaluate every trainset, preserving fleet order, without ranking.
pub fn evaluate_fleet(
    fleet: &[TrainSet],
    constraints: &InductionConstraints,
    parallel: bool,
) -> Vec<InductionDecision> {
    if parallel {
        evaluate_parallel(fleet, constraints)
    } else {
        fleet
            .iter()
            .map(|train| evaluate(train, constraints))
            .collect()
    }
}

/// Evaluate and rank a fleet in one step.
pub fn optimize(
    fleet: &[TrainSet],
    constraints: &InductionConstraints,
    parallel: bool,
) -> Vec<InductionDecision> {
    rank_decisions(evaluate_fleet(fleet, constraints, parallel))
}

#[cfg(feature = "parallel")]
fn evaluate_parallel(
    fleet: &[TrainSet],
    constraints: &InductionConstraints,
) -> Vec<InductionDecision> {
    // Indexed collect keeps fleet order.
    fleet
        .par_iter()
        .map(|train| evaluate(train, constraints))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn evaluate_parallel(
    fleet: &[TrainSet],
    constraints: &InductionConstraints,
) -> Vec<InductionDecision> {
    fleet
        .iter()
        .map(|train| evaluate(train, constraints))
        .collect()
}
