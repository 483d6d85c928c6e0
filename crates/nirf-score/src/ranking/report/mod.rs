//! Cohort-level views over engine output: rank order, improvement insights and side-by-side
//! comparison.

mod compare;
mod insights;
pub mod views;

pub use views::{CategoryLeader, ComparisonView, InstitutionInsights, RankingEntry, Suggestion};

use super::domain::ScoreResult;
use super::normalizer::normalize_name;

/// Non-finite totals sink to the bottom so the sort stays a total order.
fn rank_key(result: &ScoreResult) -> f64 {
    if result.total.is_finite() {
        result.total
    } else {
        f64::NEG_INFINITY
    }
}

/// Scored cohort in rank order. Ties keep their input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CohortReport {
    entries: Vec<RankingEntry>,
}

impl CohortReport {
    pub fn from_results(results: Vec<ScoreResult>) -> Self {
        let mut results = results;
        results.sort_by(|a, b| rank_key(b).total_cmp(&rank_key(a)));

        let entries = results
            .into_iter()
            .enumerate()
            .map(|(index, result)| RankingEntry {
                rank: index + 1,
                result,
            })
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[RankingEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<RankingEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        let wanted = normalize_name(name);
        if wanted.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .position(|entry| normalize_name(&entry.result.name) == wanted)
    }

    pub fn find(&self, name: &str) -> Option<&RankingEntry> {
        self.index_of(name).map(|index| &self.entries[index])
    }

    /// 1-based rank of the named institution.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.find(name).map(|entry| entry.rank)
    }

    pub fn insights(&self, name: &str) -> Option<InstitutionInsights> {
        self.index_of(name)
            .map(|index| insights::generate_insights(self, index))
    }

    pub fn compare<S: AsRef<str>>(&self, names: &[S]) -> ComparisonView {
        compare::compare(self, names)
    }
}

/// Convenience for callers that only need the ordered entries.
pub fn rank(results: &[ScoreResult]) -> Vec<RankingEntry> {
    CohortReport::from_results(results.to_vec()).into_entries()
}
