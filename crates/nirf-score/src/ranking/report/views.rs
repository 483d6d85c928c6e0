use crate::ranking::domain::{CategoryKey, ScoreResult};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingEntry {
    pub rank: usize,
    #[serde(flatten)]
    pub result: ScoreResult,
}

/// A category where the institution trails most of its cohort.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub key: CategoryKey,
    pub label: &'static str,
    pub score: f64,
    pub percentile: f64,
    pub advice: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstitutionInsights {
    pub name: String,
    pub rank: usize,
    pub cohort_size: usize,
    pub total: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryLeader {
    pub key: CategoryKey,
    pub label: &'static str,
    pub name: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonView {
    pub entries: Vec<RankingEntry>,
    pub leaders: Vec<CategoryLeader>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<String>,
}
