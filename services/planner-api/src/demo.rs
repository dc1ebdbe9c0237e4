use crate::infra::{planner_from_config, sample_fleet};
use chrono::NaiveDate;
use clap::Args;
use induction_planner::config::AppConfig;
use induction_planner::error::AppError;
use induction_planner::workflows::induction::report::views::decision_views;
use induction_planner::workflows::induction::{
    FleetOverrides, InductionConstraints, InductionPlan, TrainId, TrainOverride, TrainSet,
    TrainStatus,
};
use induction_planner::workflows::ingest::FleetSnapshotImporter;
use serde_json::json;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct FleetSourceArgs {
    /// JSON fleet snapshot to plan against. Defaults to the seeded sample fleet.
    #[arg(long)]
    pub(crate) fleet: Option<PathBuf>,
    /// Seed for the sample fleet (defaults to PLANNER_FLEET_SEED)
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Number of trainsets in the sample fleet (defaults to PLANNER_FLEET_SIZE)
    #[arg(long)]
    pub(crate) size: Option<usize>,
    /// Reference date for the sample fleet (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the plan as JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
    /// Evaluate trainsets one at a time even when parallel planning is enabled
    #[arg(long)]
    pub(crate) sequential: bool,
}

#[derive(Args, Debug)]
pub(crate) struct PlanArgs {
    #[command(flatten)]
    pub(crate) source: FleetSourceArgs,
    /// Advisory minimum number of service trainsets
    #[arg(long, default_value_t = 18)]
    pub(crate) min_service: u32,
    /// Advisory maximum number of trainsets in maintenance
    #[arg(long, default_value_t = 5)]
    pub(crate) max_maintenance: u32,
    /// Ignore branding contract priorities
    #[arg(long)]
    pub(crate) no_branding: bool,
    /// Ignore mileage balancing
    #[arg(long)]
    pub(crate) no_mileage: bool,
    /// Ignore the deep cleaning schedule
    #[arg(long)]
    pub(crate) no_cleaning: bool,
    /// Ignore stabling bay positions
    #[arg(long)]
    pub(crate) no_stabling: bool,
}

impl PlanArgs {
    fn constraints(&self) -> InductionConstraints {
        InductionConstraints {
            min_service_trains: self.min_service,
            max_maintenance_trains: self.max_maintenance,
            branding_priorities: !self.no_branding,
            mileage_balancing: !self.no_mileage,
            cleaning_schedule: !self.no_cleaning,
            stabling_optimization: !self.no_stabling,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct WhatIfArgs {
    #[command(flatten)]
    pub(crate) source: FleetSourceArgs,
    /// Trainset to modify, e.g. KMRL-007
    #[arg(long)]
    pub(crate) train: String,
    /// Replace the number of critical job cards
    #[arg(long)]
    pub(crate) critical_job_cards: Option<u32>,
    /// Replace the number of open job cards
    #[arg(long)]
    pub(crate) open_job_cards: Option<u32>,
    /// Mark the deep clean as due or done
    #[arg(long)]
    pub(crate) deep_clean_due: Option<bool>,
    /// Move the trainset to another stabling bay
    #[arg(long)]
    pub(crate) stabling_bay: Option<u32>,
    /// Mark every fitness certificate valid
    #[arg(long)]
    pub(crate) renew_certificates: bool,
}

impl WhatIfArgs {
    fn override_for(&self, train: &TrainSet) -> TrainOverride {
        let mut change = TrainOverride::default();

        if self.critical_job_cards.is_some() || self.open_job_cards.is_some() {
            let mut cards = train.job_cards.clone();
            if let Some(critical) = self.critical_job_cards {
                cards.critical = critical;
            }
            if let Some(open) = self.open_job_cards {
                cards.open = open;
            }
            change.job_cards = Some(cards);
        }
        if let Some(due) = self.deep_clean_due {
            let mut cleaning = train.cleaning.clone();
            cleaning.deep_clean_due = due;
            change.cleaning = Some(cleaning);
        }
        if self.renew_certificates {
            let mut fitness = train.fitness.clone();
            fitness.rolling_stock.valid = true;
            fitness.signalling.valid = true;
            fitness.telecom.valid = true;
            change.fitness = Some(fitness);
        }
        change.stabling_bay = self.stabling_bay;
        change
    }
}

fn load_fleet(source: &FleetSourceArgs, config: &AppConfig) -> Result<Vec<TrainSet>, AppError> {
    match &source.fleet {
        Some(path) => Ok(FleetSnapshotImporter::from_path(path)?),
        None => Ok(sample_fleet(
            source.seed.unwrap_or(config.planner.fleet_seed),
            source.size.unwrap_or(config.planner.fleet_size),
            source.today,
        )),
    }
}

fn planner_config(source: &FleetSourceArgs) -> Result<AppConfig, AppError> {
    let mut config = AppConfig::load()?;
    if source.sequential {
        config.planner.parallel = false;
    }
    Ok(config)
}

pub(crate) fn run_plan_report(args: PlanArgs) -> Result<(), AppError> {
    let config = planner_config(&args.source)?;
    let fleet = load_fleet(&args.source, &config)?;
    let constraints = args.constraints();

    let plan = planner_from_config(&config.planner).plan(&fleet, &constraints);

    if args.source.json {
        print_json(&plan);
    } else {
        println!("Induction plan for {} trainsets", fleet.len());
        print_constraints(&constraints);
        render_plan(&plan);
    }
    Ok(())
}

pub(crate) fn run_what_if(args: WhatIfArgs) -> Result<(), AppError> {
    let config = planner_config(&args.source)?;
    let fleet = load_fleet(&args.source, &config)?;
    let target = TrainId::new(args.train.trim());

    let mut overrides = FleetOverrides::new();
    match fleet.iter().find(|train| train.id == target) {
        Some(train) => {
            let change = args.override_for(train);
            if change.is_empty() {
                println!("No changes requested for {target}; showing the baseline plan");
            }
            overrides.insert(target.clone(), change);
        }
        None => println!("Trainset {target} not found in fleet; showing the baseline plan"),
    }

    let plan = planner_from_config(&config.planner).what_if(&fleet, &overrides);

    if args.source.json {
        print_json(&plan);
    } else {
        println!("What-if plan for {} trainsets (changes to {target})", fleet.len());
        print_constraints(&InductionConstraints::what_if_defaults());
        render_plan(&plan);
    }
    Ok(())
}

fn print_json(plan: &InductionPlan) {
    let payload = json!({
        "decisions": decision_views(&plan.decisions),
        "summary": plan.summary.to_view(),
    });
    match serde_json::to_string_pretty(&payload) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("Plan payload unavailable: {err}"),
    }
}

fn print_constraints(constraints: &InductionConstraints) {
    let on_off = |enabled: bool| if enabled { "on" } else { "off" };
    println!(
        "Constraints: min service {} | max maintenance {} | branding {} | mileage {} | cleaning {} | stabling {}",
        constraints.min_service_trains,
        constraints.max_maintenance_trains,
        on_off(constraints.branding_priorities),
        on_off(constraints.mileage_balancing),
        on_off(constraints.cleaning_schedule),
        on_off(constraints.stabling_optimization),
    );
}

fn render_plan(plan: &InductionPlan) {
    let summary = &plan.summary;
    println!("\nSummary");
    for status in TrainStatus::ordered() {
        println!("- {}: {}", status.label(), summary.count_for(status));
    }
    println!(
        "- Fleet efficiency: {:.1}% | potential savings: INR {}",
        summary.estimated_efficiency, summary.potential_savings
    );
    println!(
        "- {} high confidence decisions | {} trainsets with certificate conflicts",
        summary.high_confidence, summary.with_conflicts
    );

    println!("\nRanked recommendations");
    for view in decision_views(&plan.decisions) {
        println!(
            "{:>3}. {} -> {} | confidence {}% ({}) | priority {}",
            view.rank,
            view.train_id,
            view.status_label,
            view.confidence,
            view.confidence_label,
            view.priority
        );
        for reason in &view.reasoning {
            println!("       - {reason}");
        }
        for conflict in &view.conflicts {
            println!("       ! {conflict}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> FleetSourceArgs {
        FleetSourceArgs {
            fleet: None,
            seed: Some(3),
            size: Some(6),
            today: NaiveDate::from_ymd_opt(2025, 9, 24),
            json: false,
            sequential: true,
        }
    }

    #[test]
    fn what_if_override_touches_only_requested_fields() {
        let fleet = sample_fleet(3, 6, NaiveDate::from_ymd_opt(2025, 9, 24));
        let train = &fleet[2];
        let args = WhatIfArgs {
            source: source(),
            train: train.id.to_string(),
            critical_job_cards: Some(0),
            open_job_cards: None,
            deep_clean_due: None,
            stabling_bay: Some(4),
            renew_certificates: false,
        };

        let change = args.override_for(train);

        let cards = change.job_cards.expect("job cards overridden");
        assert_eq!(cards.critical, 0);
        assert_eq!(cards.open, train.job_cards.open);
        assert_eq!(change.stabling_bay, Some(4));
        assert!(change.cleaning.is_none());
        assert!(change.fitness.is_none());
    }

    #[test]
    fn plan_flags_disable_rules() {
        let args = PlanArgs {
            source: source(),
            min_service: 20,
            max_maintenance: 3,
            no_branding: true,
            no_mileage: false,
            no_cleaning: true,
            no_stabling: false,
        };

        let constraints = args.constraints();

        assert_eq!(constraints.min_service_trains, 20);
        assert!(!constraints.branding_priorities);
        assert!(constraints.mileage_balancing);
        assert!(!constraints.cleaning_schedule);
        assert!(constraints.stabling_optimization);
    }
}
