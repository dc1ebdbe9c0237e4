//! Fleet snapshot ingestion and validation.
//!
//! The induction engine assumes well-formed snapshots; this layer is where malformed
//! payloads are rejected before they reach it.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::workflows::induction::domain::TrainSet;

/// Errors raised while loading fleet snapshots.
#[derive(Debug, thiserror::Error)]
pub enum FleetImportError {
    #[error("failed to read fleet snapshot: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode fleet snapshot: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("trainset at position {position} has an empty id")]
    EmptyId { position: usize },
    #[error("duplicate trainset id '{id}'")]
    DuplicateId { id: String },
    #[error("trainset '{id}' predicted availability {value} exceeds 100")]
    AvailabilityOutOfRange { id: String, value: u8 },
    #[error("trainset '{id}' completed {completed} of {contracted} contracted branding hours")]
    BrandingHoursExceeded {
        id: String,
        completed: u32,
        contracted: u32,
    },
}

/// Loads a JSON array of trainset snapshots.
pub struct FleetSnapshotImporter;

impl FleetSnapshotImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<TrainSet>, FleetImportError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<TrainSet>, FleetImportError> {
        let fleet: Vec<TrainSet> = serde_json::from_reader(reader)?;
        validate_fleet(&fleet)?;
        Ok(fleet)
    }
}

/// Reject fleets that break the engine's input contract.
pub fn validate_fleet(fleet: &[TrainSet]) -> Result<(), FleetImportError> {
    let mut seen = HashSet::with_capacity(fleet.len());

    for (position, train) in fleet.iter().enumerate() {
        let id = train.id.as_str();
        if id.trim().is_empty() {
            return Err(FleetImportError::EmptyId { position });
        }
        if !seen.insert(id) {
            return Err(FleetImportError::DuplicateId { id: id.to_string() });
        }
        if train.predicted_availability > 100 {
            return Err(FleetImportError::AvailabilityOutOfRange {
                id: id.to_string(),
                value: train.predicted_availability,
            });
        }
        if train.branding.completed_hours > train.branding.contract_hours {
            return Err(FleetImportError::BrandingHoursExceeded {
                id: id.to_string(),
                completed: train.branding.completed_hours,
                contracted: train.branding.contract_hours,
            });
        }
    }

    Ok(())
}
