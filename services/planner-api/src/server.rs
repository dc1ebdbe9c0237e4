use crate::cli::ServeArgs;
use crate::infra::{planner_from_config, sample_fleet, AppState, InMemoryFleetRepository};
use crate::routes::with_induction_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use induction_planner::config::AppConfig;
use induction_planner::error::AppError;
use induction_planner::telemetry;
use induction_planner::workflows::ingest::FleetSnapshotImporter;
use induction_planner::workflows::induction::PlanningState;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let fleet = match args.fleet.take() {
        Some(path) => FleetSnapshotImporter::from_path(path)?,
        None => sample_fleet(config.planner.fleet_seed, config.planner.fleet_size, None),
    };
    info!(fleet_size = fleet.len(), "fleet store initialised");

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let planning_state = Arc::new(PlanningState::new(
        Arc::new(InMemoryFleetRepository::with_fleet(fleet)),
        planner_from_config(&config.planner),
    ));

    let app = with_induction_routes(planning_state)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "induction planner ready");

    axum::serve(listener, app).await?;
    Ok(())
}
