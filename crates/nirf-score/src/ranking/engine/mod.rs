//! The score engine: a two-pass batch transformation from a cohort of records to a cohort of
//! scores.
//!
//! Pass one derives per-record ratios and collects them into cohort-wide vectors plus the
//! application anchor. Pass two scores each record against those read-only vectors. Percentile
//! normalization makes every score relative to the cohort, so the whole cohort must be scored
//! together; scoring a single record in isolation ranks it against itself.

mod aggregate;
mod cohort;
mod percentile;
pub(crate) mod rules;

pub use aggregate::round2;
pub use cohort::{CohortProfile, DerivedVector};
pub use percentile::percentile;

use super::domain::{CategoryKey, InputRecord, ScoreResult};
use super::weights::{WeightConfig, WeightProvider};
use aggregate::{category_total, components, weighted_total};
use tracing::{debug, warn};

const DEFAULT_SCRAPING_STATUS: &str = "manual_input";

/// Stateless scorer holding the category weights for a pass.
#[derive(Debug, Clone)]
pub struct ScoreEngine {
    weights: WeightConfig,
}

impl Default for ScoreEngine {
    fn default() -> Self {
        Self::new(WeightConfig::default())
    }
}

impl ScoreEngine {
    pub fn new(weights: WeightConfig) -> Self {
        if !weights.sums_to_hundred() {
            warn!(
                sum = weights.sum(),
                "category weights do not sum to 100; totals will not be on a 0-100 scale"
            );
        }
        Self { weights }
    }

    pub fn from_provider(provider: &dyn WeightProvider) -> Self {
        Self::new(provider.weights())
    }

    pub fn weights(&self) -> &WeightConfig {
        &self.weights
    }

    /// Scores the cohort. Output order and cardinality match the input.
    pub fn score(&self, cohort: &[InputRecord]) -> Vec<ScoreResult> {
        let (profile, ratios) = CohortProfile::build(cohort);
        debug!(
            cohort_size = cohort.len(),
            application_anchor = profile.application_anchor,
            "derived cohort vectors"
        );

        cohort
            .iter()
            .zip(ratios.iter())
            .map(|(record, ratios)| self.score_record(record, ratios, &profile))
            .collect()
    }

    /// First pass only, exposed for diagnostics.
    pub fn profile(&self, cohort: &[InputRecord]) -> CohortProfile {
        CohortProfile::build(cohort).0
    }

    fn score_record(
        &self,
        record: &InputRecord,
        ratios: &cohort::DerivedRatios,
        profile: &CohortProfile,
    ) -> ScoreResult {
        let categories = [
            rules::teaching_resources(record, ratios, profile),
            rules::research_output(record, ratios, profile),
            rules::graduation_outcomes(record, profile),
            rules::outreach_inclusivity(record, profile),
            rules::perception(record, ratios, profile),
        ];

        let total = weighted_total(&categories, &self.weights);
        let scraping_status = if record.scraping_status.is_empty() {
            DEFAULT_SCRAPING_STATUS.to_string()
        } else {
            record.scraping_status.clone()
        };

        ScoreResult {
            name: record.name.clone(),
            category: record.category,
            image_url: record.image_url.clone(),
            website_url: record.website_url.clone(),
            scraping_status,
            teaching_resources: round2(category_total(&categories, CategoryKey::TeachingResources)),
            research_output: round2(category_total(&categories, CategoryKey::ResearchOutput)),
            graduation_outcomes: round2(category_total(
                &categories,
                CategoryKey::GraduationOutcomes,
            )),
            outreach_inclusivity: round2(category_total(
                &categories,
                CategoryKey::OutreachInclusivity,
            )),
            perception: round2(category_total(&categories, CategoryKey::Perception)),
            total: round2(total),
            components: components(&categories),
        }
    }
}
