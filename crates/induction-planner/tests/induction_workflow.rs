use std::collections::{BTreeMap, HashMap};

use chrono::{NaiveDate, TimeZone, Utc};
use induction_planner::workflows::induction::{
    optimize, simulate_what_if, BrandingContract, BrandingPriority, CleaningRecord,
    FitnessCertificate, FitnessStatus, FleetGenerator, FleetOverrides, FleetSummary,
    InductionConstraints, InductionPlanner, JobCards, MileageRecord, PlannerOptions, TrainId,
    TrainOverride, TrainSet, TrainStatus,
};
use proptest::prelude::*;

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 24).expect("valid reference date")
}

fn certificate(valid: bool) -> FitnessCertificate {
    FitnessCertificate {
        valid,
        expiry_date: reference_date(),
    }
}

fn priority_strategy() -> impl Strategy<Value = BrandingPriority> {
    prop_oneof![
        Just(BrandingPriority::High),
        Just(BrandingPriority::Medium),
        Just(BrandingPriority::Low),
    ]
}

fn train_strategy() -> impl Strategy<Value = TrainSet> {
    (
        (any::<bool>(), any::<bool>(), any::<bool>()),
        (0u32..6, 0u32..3),
        (0u32..=200, 0u32..=200, priority_strategy()),
        (0u32..6_000, 1u32..3_000),
        any::<bool>(),
        1u32..=30,
        0usize..4,
    )
        .prop_map(
            |(
                (rolling, signalling, telecom),
                (open, critical),
                (contract_hours, completed_hours, priority),
                (last_service, next_service_due),
                deep_clean_due,
                stabling_bay,
                status_index,
            )| TrainSet {
                id: TrainId::new("unassigned"),
                name: "Generated trainset".to_string(),
                status: TrainStatus::ordered()[status_index],
                fitness: FitnessStatus {
                    rolling_stock: certificate(rolling),
                    signalling: certificate(signalling),
                    telecom: certificate(telecom),
                },
                job_cards: JobCards {
                    open,
                    critical,
                    last_updated: Utc
                        .with_ymd_and_hms(2025, 9, 24, 5, 0, 0)
                        .single()
                        .expect("valid timestamp"),
                },
                branding: BrandingContract {
                    advertiser: "Reliance".to_string(),
                    contract_hours,
                    completed_hours,
                    priority,
                },
                mileage: MileageRecord {
                    total_km: 90_000,
                    last_service,
                    next_service_due,
                },
                cleaning: CleaningRecord {
                    last_cleaned: reference_date(),
                    deep_clean_due,
                    estimated_hours: 3,
                },
                stabling_bay,
                last_induction: reference_date(),
                predicted_availability: 80,
            },
        )
}

fn fleet_strategy() -> impl Strategy<Value = Vec<TrainSet>> {
    prop::collection::vec(train_strategy(), 0..40).prop_map(|mut fleet| {
        for (index, train) in fleet.iter_mut().enumerate() {
            train.id = TrainId(format!("KMRL-{:03}", index + 1));
        }
        fleet
    })
}

fn constraints_strategy() -> impl Strategy<Value = InductionConstraints> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(branding, mileage, cleaning, stabling)| InductionConstraints {
            min_service_trains: 18,
            max_maintenance_trains: 5,
            branding_priorities: branding,
            mileage_balancing: mileage,
            cleaning_schedule: cleaning,
            stabling_optimization: stabling,
        },
    )
}

proptest! {
    #[test]
    fn every_unit_gets_exactly_one_decision(
        fleet in fleet_strategy(),
        constraints in constraints_strategy(),
    ) {
        let decisions = optimize(&fleet, &constraints, false);

        prop_assert_eq!(decisions.len(), fleet.len());
        let mut seen: Vec<&str> = decisions.iter().map(|d| d.train_id.as_str()).collect();
        let mut expected: Vec<&str> = fleet.iter().map(|t| t.id.as_str()).collect();
        seen.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn decisions_respect_fitness_invariants(
        fleet in fleet_strategy(),
        constraints in constraints_strategy(),
    ) {
        let by_id: HashMap<&TrainId, &TrainSet> = fleet.iter().map(|t| (&t.id, t)).collect();

        for decision in optimize(&fleet, &constraints, false) {
            let train = by_id[&decision.train_id];
            let invalid = train.fitness.invalid_certificates().count();

            prop_assert!(decision.confidence <= 100);
            prop_assert_eq!(decision.conflicts.len(), invalid);
            prop_assert!(!decision.reasoning.is_empty());
            if invalid > 0 {
                prop_assert_eq!(decision.recommended_status, TrainStatus::Ibl);
            }
        }
    }

    #[test]
    fn ranking_is_descending_and_stable(
        fleet in fleet_strategy(),
        constraints in constraints_strategy(),
    ) {
        let position: HashMap<&TrainId, usize> =
            fleet.iter().enumerate().map(|(i, t)| (&t.id, i)).collect();
        let decisions = optimize(&fleet, &constraints, false);

        for pair in decisions.windows(2) {
            prop_assert!(pair[0].priority >= pair[1].priority);
            if pair[0].priority == pair[1].priority {
                prop_assert!(position[&pair[0].train_id] < position[&pair[1].train_id]);
            }
        }
    }

    #[test]
    fn summary_accounts_for_every_unit(
        fleet in fleet_strategy(),
        constraints in constraints_strategy(),
    ) {
        let decisions = optimize(&fleet, &constraints, false);
        let summary = FleetSummary::from_decisions(&decisions);

        let n = fleet.len();
        prop_assert_eq!(
            summary.service_ready
                + summary.standby_count
                + summary.maintenance_required
                + summary.ibl_scheduled,
            n
        );
        let expected = if n == 0 {
            0.0
        } else {
            summary.service_ready as f64 / n as f64 * 100.0
        };
        prop_assert!((summary.estimated_efficiency - expected).abs() < 1e-9);
        prop_assert_eq!(
            summary.potential_savings,
            summary.service_ready as u64 * 1_250 + summary.standby_count as u64 * 300
        );
    }

    #[test]
    fn parallel_evaluation_matches_sequential(
        fleet in fleet_strategy(),
        constraints in constraints_strategy(),
    ) {
        prop_assert_eq!(
            optimize(&fleet, &constraints, true),
            optimize(&fleet, &constraints, false)
        );
    }

    #[test]
    fn empty_what_if_equals_default_plan(fleet in fleet_strategy()) {
        prop_assert_eq!(
            simulate_what_if(&fleet, &FleetOverrides::new()),
            optimize(&fleet, &InductionConstraints::what_if_defaults(), false)
        );
    }
}

#[test]
fn seeded_fleets_are_reproducible() {
    let first = FleetGenerator::new(2024, reference_date()).generate(25);
    let second = FleetGenerator::new(2024, reference_date()).generate(25);
    let other = FleetGenerator::new(2025, reference_date()).generate(25);

    assert_eq!(first, second);
    assert_ne!(first, other);
    assert_eq!(first.len(), 25);
    assert_eq!(first[0].id.as_str(), "KMRL-001");
    assert_eq!(first[24].id.as_str(), "KMRL-025");
    assert!(first.iter().all(|train| {
        (1..=30).contains(&train.stabling_bay)
            && (60..100).contains(&train.predicted_availability)
            && train.branding.contract_hours == 200
            && train.branding.completed_hours < 200
            && train.job_cards.critical <= 1
    }));
}

#[test]
fn clearing_critical_card_changes_only_that_unit() {
    let mut fleet = FleetGenerator::new(11, reference_date()).generate(25);
    fleet[4].job_cards.critical = 1;
    fleet[4].cleaning.deep_clean_due = false;
    let target = fleet[4].id.clone();

    let mut overrides: BTreeMap<TrainId, TrainOverride> = BTreeMap::new();
    overrides.insert(
        target.clone(),
        TrainOverride {
            job_cards: Some(JobCards {
                critical: 0,
                ..fleet[4].job_cards.clone()
            }),
            ..TrainOverride::default()
        },
    );

    let baseline = optimize(&fleet, &InductionConstraints::what_if_defaults(), false);
    let simulated = simulate_what_if(&fleet, &overrides);

    let baseline_by_id: HashMap<&TrainId, _> =
        baseline.iter().map(|d| (&d.train_id, d)).collect();
    let mut changed = Vec::new();
    for decision in &simulated {
        if baseline_by_id[&decision.train_id] != decision {
            changed.push(decision.train_id.clone());
        }
    }
    assert_eq!(changed, vec![target.clone()]);

    let before = baseline_by_id[&target];
    let after = simulated
        .iter()
        .find(|d| d.train_id == target)
        .expect("target decision present");
    assert_eq!(after.priority + 30, before.priority);
}

#[test]
fn planner_serves_generated_fleet() {
    let fleet = FleetGenerator::new(42, reference_date()).generate(25);
    let planner = InductionPlanner::new(PlannerOptions { parallel: true });

    let plan = planner.plan(&fleet, &InductionConstraints::default());

    assert_eq!(plan.decisions.len(), 25);
    assert_eq!(plan.summary.total_optimized, 25);
    let serialized = serde_json::to_value(&plan).expect("plan serializes");
    assert_eq!(serialized["decisions"].as_array().map(Vec::len), Some(25));
}
