use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::TrainSet;
use super::evaluation::InductionConstraints;
use super::report::views::{decision_views, DecisionView, FleetSummaryView};
use super::repository::FleetRepository;
use super::service::{InductionPlan, InductionPlanner};
use super::simulation::FleetOverrides;
use crate::workflows::ingest::validate_fleet;

/// Shared state behind the induction endpoints.
pub struct PlanningState<R> {
    pub repository: Arc<R>,
    pub planner: InductionPlanner,
}

impl<R> PlanningState<R> {
    pub fn new(repository: Arc<R>, planner: InductionPlanner) -> Self {
        Self {
            repository,
            planner,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PlanRequest {
    #[serde(default)]
    pub constraints: Option<InductionConstraints>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WhatIfRequest {
    #[serde(default)]
    pub overrides: FleetOverrides,
}

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub decisions: Vec<DecisionView>,
    pub summary: FleetSummaryView,
}

impl From<&InductionPlan> for PlanResponse {
    fn from(plan: &InductionPlan) -> Self {
        Self {
            decisions: decision_views(&plan.decisions),
            summary: plan.summary.to_view(),
        }
    }
}

/// Router builder exposing fleet and induction planning endpoints.
pub fn induction_router<R>(state: Arc<PlanningState<R>>) -> Router
where
    R: FleetRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/fleet",
            get(fleet_handler::<R>).put(replace_fleet_handler::<R>),
        )
        .route("/api/v1/induction/plan", post(plan_handler::<R>))
        .route("/api/v1/induction/what-if", post(what_if_handler::<R>))
        .with_state(state)
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, axum::Json(json!({ "error": message }))).into_response()
}

pub(crate) async fn fleet_handler<R>(State(state): State<Arc<PlanningState<R>>>) -> Response
where
    R: FleetRepository + 'static,
{
    match state.repository.snapshot() {
        Ok(fleet) => (StatusCode::OK, axum::Json(fleet)).into_response(),
        Err(err) => error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    }
}

pub(crate) async fn replace_fleet_handler<R>(
    State(state): State<Arc<PlanningState<R>>>,
    axum::Json(fleet): axum::Json<Vec<TrainSet>>,
) -> Response
where
    R: FleetRepository + 'static,
{
    if let Err(err) = validate_fleet(&fleet) {
        return error_response(StatusCode::BAD_REQUEST, err.to_string());
    }

    let size = fleet.len();
    match state.repository.replace(fleet) {
        Ok(()) => (StatusCode::OK, axum::Json(json!({ "fleet_size": size }))).into_response(),
        Err(err) => error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    }
}

pub(crate) async fn plan_handler<R>(
    State(state): State<Arc<PlanningState<R>>>,
    axum::Json(request): axum::Json<PlanRequest>,
) -> Response
where
    R: FleetRepository + 'static,
{
    let fleet = match state.repository.snapshot() {
        Ok(fleet) => fleet,
        Err(err) => return error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    };

    let constraints = request.constraints.unwrap_or_default();
    let plan = state.planner.plan(&fleet, &constraints);
    (StatusCode::OK, axum::Json(PlanResponse::from(&plan))).into_response()
}

pub(crate) async fn what_if_handler<R>(
    State(state): State<Arc<PlanningState<R>>>,
    axum::Json(request): axum::Json<WhatIfRequest>,
) -> Response
where
    R: FleetRepository + 'static,
{
    let fleet = match state.repository.snapshot() {
        Ok(fleet) => fleet,
        Err(err) => return error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    };

    let plan = state.planner.what_if(&fleet, &request.overrides);
    (StatusCode::OK, axum::Json(PlanResponse::from(&plan))).into_response()
}
