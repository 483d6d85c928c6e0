use crate::demo::{render_comparison, render_insights, render_rankings, render_weights};
use crate::infra::{load_cohort, weight_provider};
use clap::Args;
use nirf_score::config::AppConfig;
use nirf_score::error::AppError;
use nirf_score::ranking::{CohortReport, ScoreEngine};
use nirf_score::telemetry;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Cohort file (.json or .csv)
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// YAML file with category weights (overrides NIRF_WEIGHTS_PATH)
    #[arg(long)]
    pub(crate) weights: Option<PathBuf>,
    /// Print the ranking as pretty JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
    /// Include the per-component breakdown under each institution
    #[arg(long)]
    pub(crate) components: bool,
}

#[derive(Args, Debug)]
pub(crate) struct InsightsArgs {
    /// Cohort file (.json or .csv)
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Institution to explain
    #[arg(long)]
    pub(crate) institution: String,
    /// YAML file with category weights (overrides NIRF_WEIGHTS_PATH)
    #[arg(long)]
    pub(crate) weights: Option<PathBuf>,
    /// Print the insights as pretty JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CompareArgs {
    /// Cohort file (.json or .csv)
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Institution to include; repeat for each one
    #[arg(long = "institution", required = true)]
    pub(crate) institutions: Vec<String>,
    /// YAML file with category weights (overrides NIRF_WEIGHTS_PATH)
    #[arg(long)]
    pub(crate) weights: Option<PathBuf>,
    /// Print the comparison as pretty JSON
    #[arg(long)]
    pub(crate) json: bool,
}

fn score_file(input: &Path, weights: Option<PathBuf>) -> Result<(ScoreEngine, CohortReport), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let provider = weight_provider(weights.or(config.scoring.weights_path));
    let engine = ScoreEngine::from_provider(provider.as_ref());
    let cohort = load_cohort(input)?;
    let report = CohortReport::from_results(engine.score(&cohort));

    Ok((engine, report))
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        input,
        weights,
        json,
        components,
    } = args;

    let (engine, report) = score_file(&input, weights)?;
    if json {
        println!("{}", serde_json::to_string_pretty(report.entries())?);
        return Ok(());
    }

    render_weights(engine.weights());
    render_rankings(&report, components);
    Ok(())
}

pub(crate) fn run_insights(args: InsightsArgs) -> Result<(), AppError> {
    let InsightsArgs {
        input,
        institution,
        weights,
        json,
    } = args;

    let (_, report) = score_file(&input, weights)?;
    let insights = report
        .insights(&institution)
        .ok_or(AppError::UnknownInstitution(institution))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&insights)?);
    } else {
        render_insights(&insights);
    }
    Ok(())
}

pub(crate) fn run_compare(args: CompareArgs) -> Result<(), AppError> {
    let CompareArgs {
        input,
        institutions,
        weights,
        json,
    } = args;

    let (_, report) = score_file(&input, weights)?;
    let view = report.compare(&institutions);
    if view.entries.is_empty() {
        return Err(AppError::UnknownInstitution(institutions.join(", ")));
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        render_comparison(&view);
    }
    Ok(())
}
