use super::super::domain::{TrainId, TrainStatus};
use super::rules::Assessment;
use super::InductionDecision;
use serde::{Deserialize, Serialize};

const HIGH_CONFIDENCE: u8 = 80;
const MEDIUM_CONFIDENCE: u8 = 60;

/// Coarse grading of a recommendation's confidence for operator dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceBand {
    High,
    Medium,
    Low,
}

impl ConfidenceBand {
    pub const fn from_confidence(confidence: u8) -> Self {
        if confidence >= HIGH_CONFIDENCE {
            Self::High
        } else if confidence >= MEDIUM_CONFIDENCE {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl InductionDecision {
    pub fn confidence_band(&self) -> ConfidenceBand {
        ConfidenceBand::from_confidence(self.confidence)
    }

    /// First reasoning entry, surfaced as the headline for the recommendation.
    pub fn headline(&self) -> Option<&str> {
        self.reasoning.first().map(String::as_str)
    }

    pub fn is_service_ready(&self) -> bool {
        self.recommended_status == TrainStatus::Service
    }

    pub fn summary(&self) -> String {
        match self.headline() {
            Some(reason) => format!(
                "{} -> {} ({}% confidence): {}",
                self.train_id,
                self.recommended_status.label(),
                self.confidence,
                reason
            ),
            None => format!(
                "{} -> {} ({}% confidence)",
                self.train_id,
                self.recommended_status.label(),
                self.confidence
            ),
        }
    }
}

pub(crate) fn decide_outcome(train_id: TrainId, assessment: Assessment) -> InductionDecision {
    let Assessment {
        status,
        confidence,
        priority,
        reasoning,
        conflicts,
        ..
    } = assessment;

    let confidence = u8::try_from(confidence.clamp(0, 100)).unwrap_or(0);

    InductionDecision {
        train_id,
        recommended_status: status,
        confidence,
        reasoning,
        conflicts,
        priority,
    }
}
