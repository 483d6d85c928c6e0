use super::views::{InstitutionInsights, Suggestion};
use super::CohortReport;
use crate::ranking::domain::CategoryKey;
use crate::ranking::engine::percentile;

const SUGGESTION_PERCENTILE_CUTOFF: f64 = 60.0;
const MAX_SUGGESTIONS: usize = 3;
const PODIUM: usize = 3;

pub(crate) const fn advice(key: CategoryKey) -> &'static str {
    match key {
        CategoryKey::TeachingResources => {
            "Improve the faculty-to-student ratio with qualified full-time faculty and invest in library and lab expenditure."
        }
        CategoryKey::ResearchOutput => {
            "Increase peer-reviewed publications and citations; strengthen patent filings and technology transfer."
        }
        CategoryKey::GraduationOutcomes => {
            "Raise on-time graduation and placement outcomes through industry partnerships and career services."
        }
        CategoryKey::OutreachInclusivity => {
            "Broaden regional and women participation, include disadvantaged students and extend accessibility infrastructure."
        }
        CategoryKey::Perception => {
            "Grow applications per seat through outreach and branding, and build peer perception through collaborations."
        }
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub(crate) fn generate_insights(report: &CohortReport, index: usize) -> InstitutionInsights {
    let entry = &report.entries()[index];

    let mut suggestions = Vec::new();
    if entry.rank > PODIUM {
        for key in CategoryKey::ALL {
            let population: Vec<f64> = report
                .entries()
                .iter()
                .map(|other| other.result.category_score(key))
                .collect();
            let score = entry.result.category_score(key);
            let standing = percentile(&population, score);
            if standing < SUGGESTION_PERCENTILE_CUTOFF {
                suggestions.push(Suggestion {
                    key,
                    label: key.label(),
                    score,
                    percentile: round1(standing),
                    advice: advice(key),
                });
            }
        }
        suggestions.sort_by(|a, b| a.percentile.total_cmp(&b.percentile));
        suggestions.truncate(MAX_SUGGESTIONS);
    }

    InstitutionInsights {
        name: entry.result.name.clone(),
        rank: entry.rank,
        cohort_size: report.len(),
        total: entry.result.total,
        suggestions,
    }
}
