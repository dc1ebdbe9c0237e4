use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::domain::TrainSet;
use super::evaluation::{InductionConstraints, InductionDecision};
use super::ranking::{evaluate_fleet, rank_decisions};
use super::report::FleetSummary;
use super::simulation::{apply_overrides, FleetOverrides};

/// Knobs for how the planner executes, independent of the decision rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerOptions {
    /// Evaluate trainsets on the rayon pool when the `parallel` feature is compiled in.
    pub parallel: bool,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            parallel: cfg!(feature = "parallel"),
        }
    }
}

/// Ranked decisions together with their fleet roll-up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InductionPlan {
    pub decisions: Vec<InductionDecision>,
    pub summary: FleetSummary,
}

impl InductionPlan {
    pub fn from_decisions(decisions: Vec<InductionDecision>) -> Self {
        let summary = FleetSummary::from_decisions(&decisions);
        Self { decisions, summary }
    }
}

/// Entry point composing evaluation, ranking, and summary.
///
/// Holds no fleet state between calls; every plan is computed from the snapshots passed in.
#[derive(Debug, Clone, Default)]
pub struct InductionPlanner {
    options: PlannerOptions,
}

impl InductionPlanner {
    pub fn new(options: PlannerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> PlannerOptions {
        self.options
    }

    pub fn plan(&self, fleet: &[TrainSet], constraints: &InductionConstraints) -> InductionPlan {
        debug!(
            fleet_size = fleet.len(),
            branding = constraints.branding_priorities,
            mileage = constraints.mileage_balancing,
            cleaning = constraints.cleaning_schedule,
            stabling = constraints.stabling_optimization,
            parallel = self.options.parallel,
            "evaluating induction plan"
        );

        let decisions = evaluate_fleet(fleet, constraints, self.options.parallel);
        let plan = InductionPlan::from_decisions(rank_decisions(decisions));

        info!(
            total = plan.summary.total_optimized,
            service = plan.summary.service_ready,
            standby = plan.summary.standby_count,
            maintenance = plan.summary.maintenance_required,
            ibl = plan.summary.ibl_scheduled,
            "induction plan ready"
        );
        plan
    }

    /// Plan a hypothetical fleet under the fixed what-if constraint set.
    pub fn what_if(&self, fleet: &[TrainSet], overrides: &FleetOverrides) -> InductionPlan {
        info!(
            fleet_size = fleet.len(),
            overrides = overrides.len(),
            "running what-if simulation"
        );
        let modified = apply_overrides(fleet, overrides);
        self.plan(&modified, &InductionConstraints::what_if_defaults())
    }
}
