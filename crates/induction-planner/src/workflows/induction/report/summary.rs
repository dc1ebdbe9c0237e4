use super::super::domain::TrainStatus;
use super::super::evaluation::{ConfidenceBand, InductionDecision};
use super::views::{FleetSummaryView, StatusCountEntry};
use serde::{Deserialize, Serialize};

/// Illustrative credit for every unit inducted into service.
pub const SERVICE_CREDIT: u64 = 1250;
/// Illustrative credit for every unit held on standby.
pub const STANDBY_CREDIT: u64 = 300;

/// Fleet-wide roll-up of a ranked set of decisions.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetSummary {
    pub total_optimized: usize,
    pub service_ready: usize,
    pub standby_count: usize,
    pub maintenance_required: usize,
    pub ibl_scheduled: usize,
    pub estimated_efficiency: f64,
    pub potential_savings: u64,
    pub high_confidence: usize,
    pub with_conflicts: usize,
}

impl FleetSummary {
    pub fn from_decisions(decisions: &[InductionDecision]) -> Self {
        let mut summary = decisions
            .iter()
            .fold(Self::default(), |mut acc, decision| {
                acc.total_optimized += 1;
                match decision.recommended_status {
                    TrainStatus::Service => acc.service_ready += 1,
                    TrainStatus::Standby => acc.standby_count += 1,
                    TrainStatus::Maintenance => acc.maintenance_required += 1,
                    TrainStatus::Ibl => acc.ibl_scheduled += 1,
                }
                if decision.confidence_band() == ConfidenceBand::High {
                    acc.high_confidence += 1;
                }
                if !decision.conflicts.is_empty() {
                    acc.with_conflicts += 1;
                }
                acc
            });

        summary.estimated_efficiency = if summary.total_optimized == 0 {
            0.0
        } else {
            summary.service_ready as f64 / summary.total_optimized as f64 * 100.0
        };
        summary.potential_savings = summary.service_ready as u64 * SERVICE_CREDIT
            + summary.standby_count as u64 * STANDBY_CREDIT;

        summary
    }

    pub fn count_for(&self, status: TrainStatus) -> usize {
        match status {
            TrainStatus::Service => self.service_ready,
            TrainStatus::Standby => self.standby_count,
            TrainStatus::Maintenance => self.maintenance_required,
            TrainStatus::Ibl => self.ibl_scheduled,
        }
    }

    pub fn to_view(&self) -> FleetSummaryView {
        let status_counts = TrainStatus::ordered()
            .into_iter()
            .map(|status| StatusCountEntry {
                status,
                status_label: status.label(),
                count: self.count_for(status),
            })
            .collect();

        FleetSummaryView {
            total_optimized: self.total_optimized,
            status_counts,
            estimated_efficiency: self.estimated_efficiency,
            potential_savings: self.potential_savings,
            high_confidence: self.high_confidence,
            with_conflicts: self.with_conflicts,
        }
    }
}
