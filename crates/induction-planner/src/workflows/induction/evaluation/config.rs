use serde::{Deserialize, Serialize};

/// Tunable constraints for an induction planning run.
///
/// `min_service_trains` and `max_maintenance_trains` are advisory fleet-level targets; the
/// per-unit rules never enforce them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InductionConstraints {
    pub min_service_trains: u32,
    pub max_maintenance_trains: u32,
    /// Let under-delivered high priority branding contracts pull a unit back into service.
    pub branding_priorities: bool,
    /// Send units past their service interval to maintenance and warn near the interval.
    pub mileage_balancing: bool,
    /// Move service units with an overdue deep clean to the inspection bay line.
    pub cleaning_schedule: bool,
    /// Penalise confidence for units parked in high-numbered stabling bays.
    pub stabling_optimization: bool,
}

impl InductionConstraints {
    /// Constraint set used by what-if simulations regardless of the caller's last run.
    pub const fn what_if_defaults() -> Self {
        Self {
            min_service_trains: 18,
            max_maintenance_trains: 5,
            branding_priorities: true,
            mileage_balancing: true,
            cleaning_schedule: true,
            stabling_optimization: true,
        }
    }
}

impl Default for InductionConstraints {
    fn default() -> Self {
        Self::what_if_defaults()
    }
}
