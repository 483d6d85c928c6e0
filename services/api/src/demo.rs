use crate::infra::weight_provider;
use clap::Args;
use nirf_score::config::AppConfig;
use nirf_score::error::AppError;
use nirf_score::ranking::{
    CohortReport, ComparisonView, InputRecord, InstitutionCategory, InstitutionInsights,
    ScoreEngine, WeightConfig,
};
use nirf_score::telemetry;
use std::path::PathBuf;

const NAME_WIDTH: usize = 40;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// YAML file with category weights for the demo run
    #[arg(long)]
    pub(crate) weights: Option<PathBuf>,
    /// Include the per-component breakdown under each institution
    #[arg(long)]
    pub(crate) components: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        weights,
        components,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let provider = weight_provider(weights.or(config.scoring.weights_path));
    let engine = ScoreEngine::from_provider(provider.as_ref());
    let cohort = sample_cohort();

    println!("Cohort ranking demo ({} institutions)", cohort.len());
    render_weights(engine.weights());

    let report = CohortReport::from_results(engine.score(&cohort));
    render_rankings(&report, components);

    for entry in report.entries() {
        if let Some(insights) = report.insights(&entry.result.name) {
            render_insights(&insights);
        }
    }

    let names: Vec<&str> = report
        .entries()
        .iter()
        .map(|entry| entry.result.name.as_str())
        .collect();
    render_comparison(&report.compare(&names));

    Ok(())
}

pub(crate) fn sample_cohort() -> Vec<InputRecord> {
    vec![
        InputRecord {
            website_url: "https://northfield.example.edu".to_string(),
            full_time_faculty: 380.0,
            adjusted_faculty: 40.0,
            sanctioned_seats: 3_000.0,
            phd_percent: 88.0,
            avg_experience_years: 39.0,
            library_physical_spend: 2_100_000.0,
            library_electronic_spend: 1_500_000.0,
            lab_spend: 4_600.0,
            sports_facilities_pct: 80.0,
            sports_budget_pct: 60.0,
            sports_achievement_pct: 50.0,
            competition_winners: 5.0,
            publications_web_of_science: 260.0,
            publications_scopus: 470.0,
            publications_google_scholar: 180.0,
            publications_indian_index: 35.0,
            citations_web_of_science: 2_400.0,
            citations_scopus: 4_300.0,
            citations_google_scholar: 1_100.0,
            citations_indian_index: 150.0,
            patents_filed: 25.0,
            patents_granted: 9.0,
            patents_licensed: 3.0,
            patent_revenue: 1_400_000.0,
            graduating_on_time_pct: 84.0,
            placement_index: 74.0,
            community_engagement: 58.0,
            other_state_students: 480.0,
            other_country_students: 5.0,
            women_students_pct: 43.0,
            women_faculty_pct: 22.0,
            women_leadership_pct: 3.0,
            disadvantaged_pct: 19.0,
            has_ramps: true,
            has_lifts: true,
            has_walking_aids: true,
            has_accessible_toilets: true,
            has_audio_visual_aids: true,
            perception_survey: 32.0,
            applications: 52_000.0,
            sanctioned_intake: 3_000.0,
            ..InputRecord::named("Northfield University", InstitutionCategory::University)
        },
        InputRecord {
            website_url: "https://meadowbrook.example.edu".to_string(),
            full_time_faculty: 90.0,
            adjusted_faculty: 10.0,
            sanctioned_seats: 1_200.0,
            phd_percent: 52.0,
            avg_experience_years: 34.0,
            library_physical_spend: 520_000.0,
            library_electronic_spend: 260_000.0,
            lab_spend: 1_100.0,
            sports_facilities_pct: 60.0,
            sports_budget_pct: 45.0,
            sports_achievement_pct: 35.0,
            competition_winners: 1.0,
            publications_web_of_science: 30.0,
            publications_scopus: 48.0,
            publications_google_scholar: 65.0,
            publications_indian_index: 20.0,
            citations_web_of_science: 120.0,
            citations_scopus: 210.0,
            citations_google_scholar: 150.0,
            citations_indian_index: 45.0,
            patents_filed: 3.0,
            patents_granted: 1.0,
            graduating_on_time_pct: 76.0,
            placement_index: 58.0,
            community_engagement: 41.0,
            other_state_students: 190.0,
            other_country_students: 2.0,
            women_students_pct: 55.0,
            women_faculty_pct: 34.0,
            women_leadership_pct: 2.5,
            disadvantaged_pct: 28.0,
            has_ramps: true,
            has_accessible_toilets: true,
            perception_survey: 24.0,
            applications: 8_400.0,
            sanctioned_intake: 1_200.0,
            ..InputRecord::named("Meadowbrook College", InstitutionCategory::College)
        },
        InputRecord {
            full_time_faculty: 40.0,
            adjusted_faculty: 6.0,
            sanctioned_seats: 2_500.0,
            phd_percent: 22.0,
            avg_experience_years: 29.0,
            library_physical_spend: 150_000.0,
            library_electronic_spend: 40_000.0,
            lab_spend: 700.0,
            sports_facilities_pct: 35.0,
            sports_budget_pct: 20.0,
            sports_achievement_pct: 10.0,
            publications_scopus: 12.0,
            publications_google_scholar: 25.0,
            citations_scopus: 30.0,
            citations_google_scholar: 20.0,
            graduating_on_time_pct: 61.0,
            placement_index: 40.0,
            community_engagement: 12.0,
            other_state_students: 35.0,
            women_students_pct: 38.0,
            women_faculty_pct: 15.0,
            women_leadership_pct: 0.5,
            disadvantaged_pct: 35.0,
            has_ramps: true,
            perception_survey: 14.0,
            applications: 4_100.0,
            sanctioned_intake: 2_500.0,
            scraping_status: "manual_input".to_string(),
            ..InputRecord::named("Ridgeway Polytechnic College", InstitutionCategory::College)
        },
        InputRecord {
            full_time_faculty: 10.0,
            sanctioned_seats: 2_000.0,
            phd_percent: 10.0,
            avg_experience_years: 20.0,
            library_physical_spend: 40_000.0,
            library_electronic_spend: 5_000.0,
            lab_spend: 150.0,
            sports_facilities_pct: 15.0,
            sports_budget_pct: 10.0,
            publications_scopus: 2.0,
            citations_scopus: 1.0,
            graduating_on_time_pct: 45.0,
            placement_index: 20.0,
            community_engagement: 3.0,
            other_state_students: 5.0,
            women_students_pct: 30.0,
            women_faculty_pct: 8.0,
            disadvantaged_pct: 10.0,
            perception_survey: 8.0,
            applications: 1_500.0,
            sanctioned_intake: 2_000.0,
            ..InputRecord::named("Westbrook Evening College", InstitutionCategory::College)
        },
    ]
}

pub(crate) fn render_weights(weights: &WeightConfig) {
    println!(
        "Weights: TLR {:.0} | RP {:.0} | GO {:.0} | OI {:.0} | PR {:.0}",
        weights.teaching_resources,
        weights.research_output,
        weights.graduation_outcomes,
        weights.outreach_inclusivity,
        weights.perception
    );
    if !weights.sums_to_hundred() {
        println!(
            "  note: weights sum to {:.1}; totals are not on a 0-100 scale",
            weights.sum()
        );
    }
}

fn display_name(name: &str) -> String {
    if name.trim().is_empty() {
        return "(unnamed)".to_string();
    }
    if name.chars().count() > NAME_WIDTH {
        let truncated: String = name.chars().take(NAME_WIDTH - 3).collect();
        format!("{truncated}...")
    } else {
        name.to_string()
    }
}

pub(crate) fn render_rankings(report: &CohortReport, components: bool) {
    println!(
        "\n{:>4}  {:<width$} {:>7} {:>7} {:>7} {:>7} {:>7} {:>7}  Status",
        "Rank",
        "Institution",
        "TLR",
        "RP",
        "GO",
        "OI",
        "PR",
        "Total",
        width = NAME_WIDTH
    );
    for entry in report.entries() {
        let result = &entry.result;
        println!(
            "{:>4}  {:<width$} {:>7.2} {:>7.2} {:>7.2} {:>7.2} {:>7.2} {:>7.2}  {}",
            entry.rank,
            display_name(&result.name),
            result.teaching_resources,
            result.research_output,
            result.graduation_outcomes,
            result.outreach_inclusivity,
            result.perception,
            result.total,
            result.scraping_status,
            width = NAME_WIDTH
        );
        if components {
            for component in &result.components {
                println!(
                    "{:>10} {:<7} {:>7.2}  {}",
                    component.category.code(),
                    component.code,
                    component.score,
                    component.notes
                );
            }
        }
    }
}

pub(crate) fn render_insights(insights: &InstitutionInsights) {
    println!(
        "\n{} ranks {} of {} with a total of {:.2}",
        display_name(&insights.name),
        insights.rank,
        insights.cohort_size,
        insights.total
    );
    if insights.suggestions.is_empty() {
        if insights.rank <= 3 {
            println!("  Ranked in the top 3; no improvement suggestions.");
        } else {
            println!("  No category trails the cohort's 60th percentile.");
        }
        return;
    }
    for suggestion in &insights.suggestions {
        println!(
            "  - {} ({}): {:.2}, P{:.1}",
            suggestion.label,
            suggestion.key.code(),
            suggestion.score,
            suggestion.percentile
        );
        println!("    {}", suggestion.advice);
    }
}

pub(crate) fn render_comparison(view: &ComparisonView) {
    println!("\nSide-by-side comparison");
    for entry in &view.entries {
        let result = &entry.result;
        println!(
            "  #{:<3} {:<width$} TLR {:>6.2}  RP {:>6.2}  GO {:>6.2}  OI {:>6.2}  PR {:>6.2}  Total {:>6.2}",
            entry.rank,
            display_name(&result.name),
            result.teaching_resources,
            result.research_output,
            result.graduation_outcomes,
            result.outreach_inclusivity,
            result.perception,
            result.total,
            width = NAME_WIDTH
        );
    }
    if !view.leaders.is_empty() {
        println!("Category leaders");
        for leader in &view.leaders {
            println!(
                "  {:<24} {} ({:.2})",
                leader.label,
                display_name(&leader.name),
                leader.score
            );
        }
    }
    if !view.missing.is_empty() {
        println!("Not in cohort: {}", view.missing.join(", "));
    }
}
