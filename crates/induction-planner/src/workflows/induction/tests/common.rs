use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{NaiveDate, TimeZone, Utc};
use serde_json::Value;

use crate::workflows::induction::domain::{
    BrandingContract, BrandingPriority, CleaningRecord, FitnessCertificate, FitnessStatus,
    JobCards, MileageRecord, TrainId, TrainSet, TrainStatus,
};
use crate::workflows::induction::evaluation::InductionConstraints;
use crate::workflows::induction::repository::{FleetRepository, RepositoryError};
use crate::workflows::induction::router::{induction_router, PlanningState};
use crate::workflows::induction::service::{InductionPlanner, PlannerOptions};

fn certificate(valid: bool) -> FitnessCertificate {
    FitnessCertificate {
        valid,
        expiry_date: NaiveDate::from_ymd_opt(2025, 10, 15).expect("valid date"),
    }
}

/// A trainset that trips no rule at all.
pub(super) fn nominal_train(id: &str) -> TrainSet {
    TrainSet {
        id: TrainId::new(id),
        name: format!("Trainset {id}"),
        status: TrainStatus::Standby,
        fitness: FitnessStatus {
            rolling_stock: certificate(true),
            signalling: certificate(true),
            telecom: certificate(true),
        },
        job_cards: JobCards {
            open: 0,
            critical: 0,
            last_updated: Utc
                .with_ymd_and_hms(2025, 9, 23, 22, 15, 0)
                .single()
                .expect("valid timestamp"),
        },
        branding: BrandingContract {
            advertiser: "Samsung".to_string(),
            contract_hours: 200,
            completed_hours: 120,
            priority: BrandingPriority::Low,
        },
        mileage: MileageRecord {
            total_km: 84_000,
            last_service: 400,
            next_service_due: 1_500,
        },
        cleaning: CleaningRecord {
            last_cleaned: NaiveDate::from_ymd_opt(2025, 9, 21).expect("valid date"),
            deep_clean_due: false,
            estimated_hours: 3,
        },
        stabling_bay: 12,
        last_induction: NaiveDate::from_ymd_opt(2025, 9, 10).expect("valid date"),
        predicted_availability: 92,
    }
}

pub(super) fn invalidate(train: &mut TrainSet, rolling: bool, signalling: bool, telecom: bool) {
    train.fitness.rolling_stock.valid = !rolling;
    train.fitness.signalling.valid = !signalling;
    train.fitness.telecom.valid = !telecom;
}

pub(super) fn constraints() -> InductionConstraints {
    InductionConstraints::what_if_defaults()
}

pub(super) fn all_toggles_off() -> InductionConstraints {
    InductionConstraints {
        min_service_trains: 18,
        max_maintenance_trains: 5,
        branding_priorities: false,
        mileage_balancing: false,
        cleaning_schedule: false,
        stabling_optimization: false,
    }
}

/// Five trainsets covering each status outcome plus a nominal unit.
pub(super) fn mixed_fleet() -> Vec<TrainSet> {
    let nominal = nominal_train("KMRL-001");

    let mut critical = nominal_train("KMRL-002");
    critical.job_cards.critical = 1;

    let mut uncertified = nominal_train("KMRL-003");
    invalidate(&mut uncertified, false, true, false);

    let mut busy = nominal_train("KMRL-004");
    busy.job_cards.open = 4;

    let mut dirty = nominal_train("KMRL-005");
    dirty.cleaning.deep_clean_due = true;

    vec![nominal, critical, uncertified, busy, dirty]
}

#[derive(Default)]
pub(super) struct MemoryFleet {
    fleet: Mutex<Vec<TrainSet>>,
}

impl MemoryFleet {
    pub(super) fn with_fleet(fleet: Vec<TrainSet>) -> Self {
        Self {
            fleet: Mutex::new(fleet),
        }
    }
}

impl FleetRepository for MemoryFleet {
    fn snapshot(&self) -> Result<Vec<TrainSet>, RepositoryError> {
        Ok(self.fleet.lock().expect("fleet mutex poisoned").clone())
    }

    fn replace(&self, fleet: Vec<TrainSet>) -> Result<(), RepositoryError> {
        *self.fleet.lock().expect("fleet mutex poisoned") = fleet;
        Ok(())
    }
}

pub(super) struct OfflineFleet;

impl FleetRepository for OfflineFleet {
    fn snapshot(&self) -> Result<Vec<TrainSet>, RepositoryError> {
        Err(RepositoryError::Unavailable("maximo sync offline".to_string()))
    }

    fn replace(&self, _fleet: Vec<TrainSet>) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("maximo sync offline".to_string()))
    }
}

pub(super) fn planning_state<R: FleetRepository>(repository: R) -> Arc<PlanningState<R>> {
    Arc::new(PlanningState::new(
        Arc::new(repository),
        InductionPlanner::new(PlannerOptions { parallel: false }),
    ))
}

pub(super) fn router_with_fleet(
    fleet: Vec<TrainSet>,
) -> (axum::Router, Arc<PlanningState<MemoryFleet>>) {
    let state = planning_state(MemoryFleet::with_fleet(fleet));
    (induction_router(state.clone()), state)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
