use crate::commands::{run_compare, run_insights, run_score, CompareArgs, InsightsArgs, ScoreArgs};
use crate::demo::{run_demo, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use nirf_score::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "nirf-score",
    about = "Score, rank and compare institutions against their cohort",
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
    /// Score a cohort file and print the ranking
    Score(ScoreArgs),
    /// Explain where one institution trails its cohort
    Insights(InsightsArgs),
    /// Compare selected institutions side by side
    Compare(CompareArgs),
    /// Score a built-in sample cohort
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// YAML file with category weights (overrides NIRF_WEIGHTS_PATH)
    #[arg(long)]
    pub(crate) weights: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Insights(args) => run_insights(args),
        Command::Compare(args) => run_compare(args),
        Command::Demo(args) => run_demo(args),
    }
}
