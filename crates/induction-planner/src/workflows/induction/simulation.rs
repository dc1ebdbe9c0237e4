use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{
    BrandingContract, CleaningRecord, FitnessStatus, JobCards, MileageRecord, TrainId, TrainSet,
    TrainStatus,
};
use super::evaluation::{InductionConstraints, InductionDecision};
use super::ranking::optimize;

/// Partial replacement for a trainset snapshot.
///
/// Each populated field replaces the whole corresponding field of the original snapshot;
/// nested records are not merged field by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrainOverride {
    pub name: Option<String>,
    pub status: Option<TrainStatus>,
    pub fitness: Option<FitnessStatus>,
    pub job_cards: Option<JobCards>,
    pub branding: Option<BrandingContract>,
    pub mileage: Option<MileageRecord>,
    pub cleaning: Option<CleaningRecord>,
    pub stabling_bay: Option<u32>,
    pub last_induction: Option<NaiveDate>,
    pub predicted_availability: Option<u8>,
}

impl TrainOverride {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Copy of `train` with every populated override field swapped in.
    pub fn apply(&self, train: &TrainSet) -> TrainSet {
        let mut modified = train.clone();
        if let Some(name) = &self.name {
            modified.name = name.clone();
        }
        if let Some(status) = self.status {
            modified.status = status;
        }
        if let Some(fitness) = &self.fitness {
            modified.fitness = fitness.clone();
        }
        if let Some(job_cards) = &self.job_cards {
            modified.job_cards = job_cards.clone();
        }
        if let Some(branding) = &self.branding {
            modified.branding = branding.clone();
        }
        if let Some(mileage) = &self.mileage {
            modified.mileage = mileage.clone();
        }
        if let Some(cleaning) = &self.cleaning {
            modified.cleaning = cleaning.clone();
        }
        if let Some(bay) = self.stabling_bay {
            modified.stabling_bay = bay;
        }
        if let Some(date) = self.last_induction {
            modified.last_induction = date;
        }
        if let Some(availability) = self.predicted_availability {
            modified.predicted_availability = availability;
        }
        modified
    }
}

/// Overrides keyed by the trainset they target.
pub type FleetOverrides = BTreeMap<TrainId, TrainOverride>;

/// Build the hypothetical fleet described by `overrides`. Unknown ids are ignored.
pub fn apply_overrides(fleet: &[TrainSet], overrides: &FleetOverrides) -> Vec<TrainSet> {
    for id in overrides.keys() {
        if !fleet.iter().any(|train| &train.id == id) {
            debug!(train_id = %id, "ignoring override for unknown trainset");
        }
    }

    fleet
        .iter()
        .map(|train| match overrides.get(&train.id) {
            Some(change) => change.apply(train),
            None => train.clone(),
        })
        .collect()
}

/// Re-plan a hypothetical fleet.
///
/// Always evaluates under [`InductionConstraints::what_if_defaults`], not the constraints of the
/// caller's previous run.
pub fn simulate_what_if(
    fleet: &[TrainSet],
    overrides: &FleetOverrides,
) -> Vec<InductionDecision> {
    let modified = apply_overrides(fleet, overrides);
    optimize(&modified, &InductionConstraints::what_if_defaults(), false)
}
