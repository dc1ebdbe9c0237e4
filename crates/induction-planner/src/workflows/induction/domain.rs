use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier wrapper for trainsets in the fleet.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrainId(pub String);

impl TrainId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Operational status shared by trainset snapshots and recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainStatus {
    Service,
    Standby,
    Maintenance,
    Ibl,
}

impl TrainStatus {
    pub const fn ordered() -> [Self; 4] {
        [Self::Service, Self::Standby, Self::Maintenance, Self::Ibl]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Service => "Service",
            Self::Standby => "Standby",
            Self::Maintenance => "Maintenance",
            Self::Ibl => "Inspection Bay (IBL)",
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Standby => "standby",
            Self::Maintenance => "maintenance",
            Self::Ibl => "ibl",
        }
    }
}

/// Departments that must sign off on a trainset before induction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificateKind {
    RollingStock,
    Signalling,
    Telecom,
}

impl CertificateKind {
    pub const fn ordered() -> [Self; 3] {
        [Self::RollingStock, Self::Signalling, Self::Telecom]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::RollingStock => "Rolling Stock",
            Self::Signalling => "Signalling",
            Self::Telecom => "Telecom",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitnessCertificate {
    pub valid: bool,
    pub expiry_date: NaiveDate,
}

/// Fitness certificates issued by the three sign-off departments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitnessStatus {
    pub rolling_stock: FitnessCertificate,
    pub signalling: FitnessCertificate,
    pub telecom: FitnessCertificate,
}

impl FitnessStatus {
    pub fn certificate(&self, kind: CertificateKind) -> &FitnessCertificate {
        match kind {
            CertificateKind::RollingStock => &self.rolling_stock,
            CertificateKind::Signalling => &self.signalling,
            CertificateKind::Telecom => &self.telecom,
        }
    }

    /// Certificates that are currently invalid, in department order.
    pub fn invalid_certificates(&self) -> impl Iterator<Item = CertificateKind> + '_ {
        CertificateKind::ordered()
            .into_iter()
            .filter(move |kind| !self.certificate(*kind).valid)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobCards {
    pub open: u32,
    pub critical: u32,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrandingPriority {
    High,
    Medium,
    Low,
}

/// Advertising wrap commitment carried by a trainset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandingContract {
    pub advertiser: String,
    pub contract_hours: u32,
    pub completed_hours: u32,
    pub priority: BrandingPriority,
}

impl BrandingContract {
    /// Percentage of contracted exposure hours already delivered. `None` for a zero-hour contract.
    pub fn completion_rate(&self) -> Option<f64> {
        if self.contract_hours == 0 {
            return None;
        }
        Some(f64::from(self.completed_hours) / f64::from(self.contract_hours) * 100.0)
    }
}

/// Odometer readings in kilometres.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MileageRecord {
    pub total_km: u32,
    /// Distance run since the last service.
    pub last_service: u32,
    /// Distance allowed between services.
    pub next_service_due: u32,
}

impl MileageRecord {
    pub fn service_overdue(&self) -> bool {
        self.last_service > self.next_service_due
    }

    /// True once the unit has run at least 80% of its service interval.
    pub fn approaching_service(&self) -> bool {
        u64::from(self.last_service) * 10 >= u64::from(self.next_service_due) * 8
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningRecord {
    pub last_cleaned: NaiveDate,
    pub deep_clean_due: bool,
    pub estimated_hours: u32,
}

/// Point-in-time snapshot of a trainset supplied by the fleet owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainSet {
    pub id: TrainId,
    pub name: String,
    pub status: TrainStatus,
    pub fitness: FitnessStatus,
    pub job_cards: JobCards,
    pub branding: BrandingContract,
    pub mileage: MileageRecord,
    pub cleaning: CleaningRecord,
    pub stabling_bay: u32,
    pub last_induction: NaiveDate,
    pub predicted_availability: u8,
}
