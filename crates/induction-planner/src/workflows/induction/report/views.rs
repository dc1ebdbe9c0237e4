use super::super::domain::{TrainId, TrainStatus};
use super::super::evaluation::{ConfidenceBand, InductionDecision};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct StatusCountEntry {
    pub status: TrainStatus,
    pub status_label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct FleetSummaryView {
    pub total_optimized: usize,
    pub status_counts: Vec<StatusCountEntry>,
    pub estimated_efficiency: f64,
    pub potential_savings: u64,
    pub high_confidence: usize,
    pub with_conflicts: usize,
}

/// Rendering-friendly projection of a single recommendation.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionView {
    pub rank: usize,
    pub train_id: TrainId,
    pub recommended_status: TrainStatus,
    pub status_label: &'static str,
    pub confidence: u8,
    pub confidence_band: ConfidenceBand,
    pub confidence_label: &'static str,
    pub headline: Option<String>,
    pub reasoning: Vec<String>,
    pub conflicts: Vec<String>,
    pub priority: u32,
}

impl DecisionView {
    pub fn from_decision(rank: usize, decision: &InductionDecision) -> Self {
        let band = decision.confidence_band();
        Self {
            rank,
            train_id: decision.train_id.clone(),
            recommended_status: decision.recommended_status,
            status_label: decision.recommended_status.label(),
            confidence: decision.confidence,
            confidence_band: band,
            confidence_label: band.label(),
            headline: decision.headline().map(str::to_string),
            reasoning: decision.reasoning.clone(),
            conflicts: decision.conflicts.clone(),
            priority: decision.priority,
        }
    }
}

/// Project ranked decisions into views numbered from 1.
pub fn decision_views(decisions: &[InductionDecision]) -> Vec<DecisionView> {
    decisions
        .iter()
        .enumerate()
        .map(|(index, decision)| DecisionView::from_decision(index + 1, decision))
        .collect()
}
