//! Induction planning for the trainset fleet.
//!
//! Every trainset snapshot runs through an ordered rule pipeline producing a recommended
//! status, a bounded confidence score, and the reasoning behind it. Decisions are ranked by
//! priority and rolled up into a fleet summary; the what-if simulator replays the same
//! pipeline over a modified copy of the fleet.

pub mod domain;
pub(crate) mod evaluation;
pub mod fixtures;
pub mod ranking;
pub mod report;
pub mod repository;
pub mod router;
pub mod service;
pub mod simulation;

#[cfg(test)]
mod tests;

pub use domain::{
    BrandingContract, BrandingPriority, CertificateKind, CleaningRecord, FitnessCertificate,
    FitnessStatus, JobCards, MileageRecord, TrainId, TrainSet, TrainStatus,
};
pub use evaluation::{
    evaluate, Assessment, ConfidenceBand, InductionConstraints, InductionDecision,
    InductionEngine, RuleKind,
};
pub use fixtures::FleetGenerator;
pub use ranking::{evaluate_fleet, optimize, rank_decisions};
pub use report::FleetSummary;
pub use repository::{FleetRepository, RepositoryError};
pub use router::{induction_router, PlanningState};
pub use service::{InductionPlan, InductionPlanner, PlannerOptions};
pub use simulation::{apply_overrides, simulate_what_if, FleetOverrides, TrainOverride};
