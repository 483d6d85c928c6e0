//! Institutional ranking: records in, percentile-normalized category scores and a weighted
//! composite out.

pub mod domain;
pub mod engine;
mod lenient;
pub mod normalizer;
pub mod report;
pub mod weights;

#[cfg(test)]
mod tests;

pub use domain::{
    CategoryKey, InputRecord, InstitutionCategory, ScoreComponent, ScoreResult,
};
pub use engine::{percentile, round2, CohortProfile, DerivedVector, ScoreEngine};
pub use report::{
    rank, CategoryLeader, CohortReport, ComparisonView, InstitutionInsights, RankingEntry,
    Suggestion,
};
pub use weights::{StaticWeights, WeightConfig, WeightProvider, WeightsError, WeightsFile};
