//! Seeded sample fleets for demos and tests.

use chrono::{Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::domain::{
    BrandingContract, BrandingPriority, CleaningRecord, FitnessCertificate, FitnessStatus,
    JobCards, MileageRecord, TrainId, TrainSet, TrainStatus,
};

const ADVERTISERS: [&str; 5] = ["Coca-Cola", "Samsung", "Reliance", "Tata", "Airtel"];
const PRIORITIES: [BrandingPriority; 3] = [
    BrandingPriority::High,
    BrandingPriority::Medium,
    BrandingPriority::Low,
];
const CONTRACT_HOURS: u32 = 200;

/// Deterministic trainset generator. The same seed always yields the same fleet.
#[derive(Debug, Clone)]
pub struct FleetGenerator {
    seed: u64,
    reference_date: NaiveDate,
}

impl FleetGenerator {
    pub fn new(seed: u64, reference_date: NaiveDate) -> Self {
        Self {
            seed,
            reference_date,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn generate(&self, count: usize) -> Vec<TrainSet> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        (1..=count)
            .map(|number| self.trainset(&mut rng, number))
            .collect()
    }

    fn trainset(&self, rng: &mut ChaCha8Rng, number: usize) -> TrainSet {
        let status = *TrainStatus::ordered()
            .choose(rng)
            .unwrap_or(&TrainStatus::Service);

        let fitness = FitnessStatus {
            rolling_stock: self.certificate(rng, 0.9),
            signalling: self.certificate(rng, 0.95),
            telecom: self.certificate(rng, 0.95),
        };

        let updated_minutes_ago = rng.gen_range(0..24 * 60);
        let last_updated = Utc.from_utc_datetime(&self.reference_date.and_time(NaiveTime::MIN))
            - Duration::minutes(updated_minutes_ago);
        let job_cards = JobCards {
            open: rng.gen_range(0..5),
            critical: rng.gen_range(0..2),
            last_updated,
        };

        let branding = BrandingContract {
            advertiser: ADVERTISERS
                .choose(rng)
                .copied()
                .unwrap_or(ADVERTISERS[0])
                .to_string(),
            contract_hours: CONTRACT_HOURS,
            completed_hours: rng.gen_range(0..CONTRACT_HOURS),
            priority: *PRIORITIES.choose(rng).unwrap_or(&BrandingPriority::Low),
        };

        let mileage = MileageRecord {
            total_km: rng.gen_range(50_000..150_000),
            last_service: rng.gen_range(0..5_000),
            next_service_due: rng.gen_range(500..2_500),
        };

        let cleaning = CleaningRecord {
            last_cleaned: self.days_ago(rng, 7),
            deep_clean_due: rng.gen_bool(0.3),
            estimated_hours: rng.gen_range(2..6),
        };

        TrainSet {
            id: TrainId(format!("KMRL-{number:03}")),
            name: format!("Trainset {number}"),
            status,
            fitness,
            job_cards,
            branding,
            mileage,
            cleaning,
            stabling_bay: rng.gen_range(1..=30),
            last_induction: self.days_ago(rng, 30),
            predicted_availability: rng.gen_range(60..100),
        }
    }

    fn certificate(&self, rng: &mut ChaCha8Rng, valid_probability: f64) -> FitnessCertificate {
        FitnessCertificate {
            valid: rng.gen_bool(valid_probability),
            expiry_date: self.reference_date + Duration::days(rng.gen_range(0..30)),
        }
    }

    fn days_ago(&self, rng: &mut ChaCha8Rng, max_days: i64) -> NaiveDate {
        self.reference_date - Duration::days(rng.gen_range(0..max_days))
    }
}
