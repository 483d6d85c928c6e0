use crate::ranking::domain::{InputRecord, InstitutionCategory, ScoreResult};

pub(super) fn approx_eq(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}

pub(super) fn component(result: &ScoreResult, code: &str) -> f64 {
    result
        .components
        .iter()
        .find(|component| component.code == code)
        .map(|component| component.score)
        .unwrap_or_else(|| panic!("component {code} missing for {}", result.name))
}

pub(super) fn sample_record(name: &str, category: InstitutionCategory) -> InputRecord {
    InputRecord {
        name: name.to_string(),
        category,
        full_time_faculty: 60.0,
        adjusted_faculty: 20.0,
        sanctioned_seats: 600.0,
        phd_percent: 80.0,
        avg_experience_years: 36.0,
        library_physical_spend: 300_000.0,
        library_electronic_spend: 150_000.0,
        lab_spend: 800.0,
        sports_facilities_pct: 70.0,
        sports_budget_pct: 50.0,
        sports_achievement_pct: 40.0,
        competition_winners: 1.0,
        publications_web_of_science: 40.0,
        publications_scopus: 60.0,
        publications_google_scholar: 20.0,
        publications_indian_index: 10.0,
        citations_web_of_science: 200.0,
        citations_scopus: 300.0,
        citations_google_scholar: 50.0,
        citations_indian_index: 20.0,
        patents_filed: 6.0,
        patents_granted: 3.0,
        patents_licensed: 1.0,
        patent_revenue: 250_000.0,
        graduating_on_time_pct: 72.0,
        placement_index: 65.0,
        community_engagement: 40.0,
        other_state_students: 120.0,
        other_country_students: 8.0,
        women_students_pct: 45.0,
        women_faculty_pct: 18.0,
        women_leadership_pct: 1.5,
        disadvantaged_pct: 25.0,
        has_ramps: true,
        has_lifts: true,
        has_accessible_toilets: true,
        perception_survey: 28.0,
        applications: 4_800.0,
        sanctioned_intake: 600.0,
        ..InputRecord::default()
    }
}

/// A hand-built result with the given category scores, for report tests.
pub(super) fn result(name: &str, categories: [f64; 5], total: f64) -> ScoreResult {
    ScoreResult {
        name: name.to_string(),
        category: InstitutionCategory::College,
        image_url: String::new(),
        website_url: String::new(),
        scraping_status: "manual_input".to_string(),
        teaching_resources: categories[0],
        research_output: categories[1],
        graduation_outcomes: categories[2],
        outreach_inclusivity: categories[3],
        perception: categories[4],
        total,
        components: Vec::new(),
    }
}
