use crate::demo::{run_plan_report, run_what_if, PlanArgs, WhatIfArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use induction_planner::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Induction Planner",
    about = "Plan nightly trainset induction from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Rank the fleet and print the induction plan
    Plan(PlanArgs),
    /// Re-plan the fleet with hypothetical changes to one trainset
    WhatIf(WhatIfArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Seed the fleet store from a JSON snapshot instead of the generated sample fleet
    #[arg(long)]
    pub(crate) fleet: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Plan(args) => run_plan_report(args),
        Command::WhatIf(args) => run_what_if(args),
    }
}
