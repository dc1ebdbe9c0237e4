use super::super::domain::{BrandingPriority, CertificateKind, TrainSet, TrainStatus};
use super::config::InductionConstraints;
use serde::{Deserialize, Serialize};

pub(crate) const BASE_CONFIDENCE: i32 = 100;
pub(crate) const BASE_PRIORITY: u32 = 50;

const CRITICAL_JOB_CARD_PRIORITY: u32 = 30;
const CRITICAL_JOB_CARD_PENALTY: i32 = 15;
const OPEN_JOB_CARD_LIMIT: u32 = 2;
const OPEN_JOB_CARD_PENALTY: i32 = 10;
const BRANDING_COMPLETION_TARGET: f64 = 80.0;
const BRANDING_PRIORITY: u32 = 25;
const MILEAGE_OVERRUN_PRIORITY: u32 = 40;
const MILEAGE_OVERRUN_PENALTY: i32 = 20;
const MILEAGE_WARNING_PENALTY: i32 = 5;
const DEEP_CLEAN_PRIORITY: u32 = 15;
const STABLING_BAY_LIMIT: u32 = 25;
const STABLING_PENALTY: i32 = 5;
const FITNESS_OVERRIDE_PRIORITY: u32 = 50;

pub(crate) const NOMINAL_REASON: &str = "All systems nominal - suitable for service";

const fn certificate_penalty(kind: CertificateKind) -> i32 {
    match kind {
        CertificateKind::RollingStock => 30,
        CertificateKind::Signalling => 25,
        CertificateKind::Telecom => 20,
    }
}

/// Running state threaded through the rule pipeline.
///
/// Each rule consumes the previous snapshot and returns the next one, so every intermediate
/// state can be inspected on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub status: TrainStatus,
    pub confidence: i32,
    pub priority: u32,
    pub reasoning: Vec<String>,
    pub conflicts: Vec<String>,
    pub fitness_issue: bool,
}

impl Assessment {
    pub fn initial() -> Self {
        Self {
            status: TrainStatus::Service,
            confidence: BASE_CONFIDENCE,
            priority: BASE_PRIORITY,
            reasoning: Vec::new(),
            conflicts: Vec::new(),
            fitness_issue: false,
        }
    }
}

/// Rules in the order the engine applies them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    FitnessCheck,
    JobCards,
    BrandingPriority,
    MileageBalancing,
    CleaningSchedule,
    StablingOptimization,
    FitnessOverride,
    FallbackReasoning,
    ClampConfidence,
}

impl RuleKind {
    pub const fn ordered() -> [Self; 9] {
        [
            Self::FitnessCheck,
            Self::JobCards,
            Self::BrandingPriority,
            Self::MileageBalancing,
            Self::CleaningSchedule,
            Self::StablingOptimization,
            Self::FitnessOverride,
            Self::FallbackReasoning,
            Self::ClampConfidence,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FitnessCheck => "Fitness certificates",
            Self::JobCards => "Job cards",
            Self::BrandingPriority => "Branding priority",
            Self::MileageBalancing => "Mileage balancing",
            Self::CleaningSchedule => "Cleaning schedule",
            Self::StablingOptimization => "Stabling optimization",
            Self::FitnessOverride => "Fitness override",
            Self::FallbackReasoning => "Fallback reasoning",
            Self::ClampConfidence => "Confidence clamp",
        }
    }

    /// Whether the rule runs under the given constraints. Toggle-free rules always run.
    pub fn enabled(self, constraints: &InductionConstraints) -> bool {
        match self {
            Self::BrandingPriority => constraints.branding_priorities,
            Self::MileageBalancing => constraints.mileage_balancing,
            Self::CleaningSchedule => constraints.cleaning_schedule,
            Self::StablingOptimization => constraints.stabling_optimization,
            Self::FitnessCheck
            | Self::JobCards
            | Self::FitnessOverride
            | Self::FallbackReasoning
            | Self::ClampConfidence => true,
        }
    }

    pub fn apply(
        self,
        assessment: Assessment,
        train: &TrainSet,
        constraints: &InductionConstraints,
    ) -> Assessment {
        if !self.enabled(constraints) {
            return assessment;
        }

        match self {
            Self::FitnessCheck => fitness_check(assessment, train),
            Self::JobCards => job_cards(assessment, train),
            Self::BrandingPriority => branding_priority(assessment, train),
            Self::MileageBalancing => mileage_balancing(assessment, train),
            Self::CleaningSchedule => cleaning_schedule(assessment, train),
            Self::StablingOptimization => stabling_optimization(assessment, train),
            Self::FitnessOverride => fitness_override(assessment),
            Self::FallbackReasoning => fallback_reasoning(assessment),
            Self::ClampConfidence => clamp_confidence(assessment),
        }
    }
}

pub(crate) fn run_rules(train: &TrainSet, constraints: &InductionConstraints) -> Assessment {
    RuleKind::ordered()
        .into_iter()
        .fold(Assessment::initial(), |assessment, rule| {
            rule.apply(assessment, train, constraints)
        })
}

fn fitness_check(mut assessment: Assessment, train: &TrainSet) -> Assessment {
    for kind in train.fitness.invalid_certificates() {
        assessment
            .conflicts
            .push(format!("Invalid {} certificate", kind.label()));
        assessment.confidence -= certificate_penalty(kind);
        assessment.fitness_issue = true;
    }
    assessment
}

fn job_cards(mut assessment: Assessment, train: &TrainSet) -> Assessment {
    let cards = &train.job_cards;
    if cards.critical > 0 {
        assessment.reasoning.push(format!(
            "{} critical job cards require immediate attention",
            cards.critical
        ));
        assessment.status = TrainStatus::Maintenance;
        assessment.priority += CRITICAL_JOB_CARD_PRIORITY;
        assessment.confidence -= CRITICAL_JOB_CARD_PENALTY;
    } else if cards.open > OPEN_JOB_CARD_LIMIT {
        assessment.reasoning.push(format!(
            "{} open job cards suggest maintenance scheduling",
            cards.open
        ));
        if assessment.status == TrainStatus::Service {
            assessment.status = TrainStatus::Standby;
        }
        assessment.confidence -= OPEN_JOB_CARD_PENALTY;
    }
    assessment
}

fn branding_priority(mut assessment: Assessment, train: &TrainSet) -> Assessment {
    let branding = &train.branding;
    if branding.priority != BrandingPriority::High {
        return assessment;
    }

    let Some(completion) = branding.completion_rate() else {
        return assessment;
    };

    if completion < BRANDING_COMPLETION_TARGET {
        assessment.reasoning.push(format!(
            "High priority branding contract ({}) at {:.1}% completion",
            branding.advertiser, completion
        ));
        if assessment.status != TrainStatus::Maintenance {
            assessment.status = TrainStatus::Service;
        }
        assessment.priority += BRANDING_PRIORITY;
    }
    assessment
}

fn mileage_balancing(mut assessment: Assessment, train: &TrainSet) -> Assessment {
    let mileage = &train.mileage;
    if mileage.service_overdue() {
        assessment
            .reasoning
            .push("Mileage threshold exceeded - maintenance required".to_string());
        assessment.status = TrainStatus::Maintenance;
        assessment.priority += MILEAGE_OVERRUN_PRIORITY;
        assessment.confidence -= MILEAGE_OVERRUN_PENALTY;
    } else if mileage.approaching_service() {
        assessment
            .reasoning
            .push("Approaching mileage service threshold".to_string());
        assessment.confidence -= MILEAGE_WARNING_PENALTY;
    }
    assessment
}

fn cleaning_schedule(mut assessment: Assessment, train: &TrainSet) -> Assessment {
    if !train.cleaning.deep_clean_due || assessment.status != TrainStatus::Service {
        return assessment;
    }

    assessment.status = TrainStatus::Ibl;
    assessment.priority += DEEP_CLEAN_PRIORITY;
    assessment.reasoning.push("Deep cleaning overdue".to_string());
    assessment
}

fn stabling_optimization(mut assessment: Assessment, train: &TrainSet) -> Assessment {
    if train.stabling_bay > STABLING_BAY_LIMIT {
        assessment
            .reasoning
            .push("Suboptimal stabling position - high shunting cost".to_string());
        assessment.confidence -= STABLING_PENALTY;
    }
    assessment
}

fn fitness_override(mut assessment: Assessment) -> Assessment {
    if assessment.fitness_issue {
        assessment.status = TrainStatus::Ibl;
        assessment
            .reasoning
            .push("Fitness certificate issues require immediate attention".to_string());
        assessment.priority += FITNESS_OVERRIDE_PRIORITY;
    }
    assessment
}

fn fallback_reasoning(mut assessment: Assessment) -> Assessment {
    if assessment.reasoning.is_empty() {
        assessment.reasoning.push(NOMINAL_REASON.to_string());
    }
    assessment
}

fn clamp_confidence(mut assessment: Assessment) -> Assessment {
    assessment.confidence = assessment.confidence.clamp(0, BASE_CONFIDENCE);
    assessment
}
