mod summary;
pub mod views;

pub use summary::{FleetSummary, SERVICE_CREDIT, STANDBY_CREDIT};
