use super::domain::TrainSet;

/// Storage abstraction for the fleet owned by the hosting application.
///
/// The planner only reads snapshots out of the store; replacing the fleet is the host's job.
pub trait FleetRepository: Send + Sync {
    fn snapshot(&self) -> Result<Vec<TrainSet>, RepositoryError>;
    fn replace(&self, fleet: Vec<TrainSet>) -> Result<(), RepositoryError>;
}

/// Error enumeration for fleet store failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("fleet store unavailable: {0}")]
    Unavailable(String),
}
