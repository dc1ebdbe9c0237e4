use chrono::{Local, NaiveDate};
use induction_planner::config::PlannerConfig;
use induction_planner::workflows::induction::{
    FleetGenerator, FleetRepository, InductionPlanner, PlannerOptions, RepositoryError, TrainSet,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, RwLock};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Fleet store owned by the service; the planner only ever sees snapshots of it.
#[derive(Default, Clone)]
pub(crate) struct InMemoryFleetRepository {
    fleet: Arc<RwLock<Vec<TrainSet>>>,
}

impl InMemoryFleetRepository {
    pub(crate) fn with_fleet(fleet: Vec<TrainSet>) -> Self {
        Self {
            fleet: Arc::new(RwLock::new(fleet)),
        }
    }
}

impl FleetRepository for InMemoryFleetRepository {
    fn snapshot(&self) -> Result<Vec<TrainSet>, RepositoryError> {
        self.fleet
            .read()
            .map(|guard| guard.clone())
            .map_err(|_| RepositoryError::Unavailable("fleet lock poisoned".to_string()))
    }

    fn replace(&self, fleet: Vec<TrainSet>) -> Result<(), RepositoryError> {
        let mut guard = self
            .fleet
            .write()
            .map_err(|_| RepositoryError::Unavailable("fleet lock poisoned".to_string()))?;
        *guard = fleet;
        Ok(())
    }
}

pub(crate) fn planner_from_config(config: &PlannerConfig) -> InductionPlanner {
    InductionPlanner::new(PlannerOptions {
        parallel: config.parallel,
    })
}

pub(crate) fn sample_fleet(seed: u64, size: usize, today: Option<NaiveDate>) -> Vec<TrainSet> {
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    FleetGenerator::new(seed, today).generate(size)
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
