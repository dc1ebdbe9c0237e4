mod config;
mod policy;
mod rules;

pub use config::InductionConstraints;
pub use policy::ConfidenceBand;
pub use rules::{Assessment, RuleKind};

#[cfg(test)]
pub(crate) use rules::NOMINAL_REASON;

use super::domain::{TrainId, TrainSet, TrainStatus};
use policy::decide_outcome;
use serde::{Deserialize, Serialize};

/// Stateless evaluator that applies a constraint set to trainset snapshots.
#[derive(Debug, Clone)]
pub struct InductionEngine {
    constraints: InductionConstraints,
}

impl InductionEngine {
    pub fn new(constraints: InductionConstraints) -> Self {
        Self { constraints }
    }

    pub fn constraints(&self) -> &InductionConstraints {
        &self.constraints
    }

    pub fn evaluate(&self, train: &TrainSet) -> InductionDecision {
        evaluate(train, &self.constraints)
    }
}

/// Run the ordered rule pipeline for a single trainset.
pub fn evaluate(train: &TrainSet, constraints: &InductionConstraints) -> InductionDecision {
    let assessment = rules::run_rules(train, constraints);
    decide_outcome(train.id.clone(), assessment)
}

/// Recommendation produced for one trainset, with the trail that led to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InductionDecision {
    pub train_id: TrainId,
    pub recommended_status: TrainStatus,
    pub confidence: u8,
    pub reasoning: Vec<String>,
    pub conflicts: Vec<String>,
    pub priority: u32,
}
