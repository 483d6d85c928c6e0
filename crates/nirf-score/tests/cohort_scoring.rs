use nirf_score::intake::{self, CohortFormat};
use nirf_score::ranking::{CohortReport, InstitutionCategory, ScoreEngine, WeightConfig};

fn sample_cohort() -> Vec<nirf_score::ranking::InputRecord> {
    let data = include_bytes!("../sample_cohort.csv");
    intake::from_reader(&data[..], CohortFormat::Csv).expect("sample cohort imports")
}

#[test]
fn sample_cohort_imports_every_institution() {
    let cohort = sample_cohort();

    assert_eq!(cohort.len(), 4);
    assert_eq!(cohort[0].name, "Riverside Institute of Technology");
    assert_eq!(cohort[0].category, InstitutionCategory::University);
    assert_eq!(cohort[1].category, InstitutionCategory::College);
    assert_eq!(cohort[0].full_time_faculty, 420.0);
    assert!(cohort[0].has_ramps);
    assert!(!cohort[0].has_braille_labs);
    assert_eq!(cohort[3].website_url, "");
}

#[test]
fn scoring_the_sample_cohort_yields_finite_rounded_scores() {
    let cohort = sample_cohort();
    let results = ScoreEngine::default().score(&cohort);

    assert_eq!(results.len(), cohort.len());
    for (record, result) in cohort.iter().zip(&results) {
        assert_eq!(record.name, result.name);
        assert!(result.total.is_finite());
        assert!(result.total >= 0.0);
        assert_eq!(result.components.len(), 16);
    }
}

#[test]
fn report_ranks_the_strongest_institution_first() {
    let results = ScoreEngine::default().score(&sample_cohort());
    let report = CohortReport::from_results(results);

    let leader = &report.entries()[0];
    assert_eq!(leader.rank, 1);
    assert_eq!(leader.result.name, "Riverside Institute of Technology");
    assert!(report
        .entries()
        .windows(2)
        .all(|pair| pair[0].result.total >= pair[1].result.total));

    let podium = report
        .insights("riverside institute of technology")
        .expect("leader present");
    assert!(podium.suggestions.is_empty());

    let last = &report.entries()[3];
    let trailing = report
        .insights(&last.result.name)
        .expect("last place present");
    assert_eq!(trailing.rank, 4);
    assert!(trailing.suggestions.len() <= 3);
    assert!(trailing
        .suggestions
        .iter()
        .all(|suggestion| suggestion.percentile < 60.0));
}

#[test]
fn ranking_entries_serialize_with_collection_sheet_keys() {
    let results = ScoreEngine::default().score(&sample_cohort());
    let report = CohortReport::from_results(results);

    let json = serde_json::to_value(&report.entries()[0]).expect("entry serializes");
    assert_eq!(json["rank"], 1);
    assert_eq!(json["college_name"], "Riverside Institute of Technology");
    assert_eq!(json["institution_type"], "university");
    assert_eq!(json["scraping_status"], "manual_input");
    for key in ["TLR", "RP", "GO", "OI", "PR", "Total"] {
        assert!(json[key].is_number(), "{key} missing");
    }
    assert_eq!(json["components"][0]["code"], "FSR");
}

#[test]
fn custom_weights_reorder_the_cohort_deterministically() {
    let cohort = sample_cohort();
    let perception_only = WeightConfig {
        teaching_resources: 0.0,
        research_output: 0.0,
        graduation_outcomes: 0.0,
        outreach_inclusivity: 0.0,
        perception: 100.0,
    };
    let engine = ScoreEngine::new(perception_only);

    let first = CohortReport::from_results(engine.score(&cohort));
    let second = CohortReport::from_results(engine.score(&cohort));
    assert_eq!(first, second);
    assert!(first
        .entries()
        .iter()
        .all(|entry| (entry.result.total - entry.result.perception).abs() < 0.011));
}

#[test]
fn comparison_picks_category_leaders_among_selected() {
    let results = ScoreEngine::default().score(&sample_cohort());
    let report = CohortReport::from_results(results);

    let view = report.compare(&["Lakeview College of Arts", "Summit State University", "Unknown"]);
    assert_eq!(view.entries.len(), 2);
    assert_eq!(view.missing, ["Unknown"]);
    assert_eq!(view.leaders.len(), 5);
    for leader in &view.leaders {
        let best = view
            .entries
            .iter()
            .map(|entry| entry.result.category_score(leader.key))
            .fold(f64::MIN, f64::max);
        assert_eq!(leader.score, best);
    }
}
