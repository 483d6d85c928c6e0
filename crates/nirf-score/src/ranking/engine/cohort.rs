//! First pass: per-record derived ratios and the cohort-wide vectors they feed.

use super::percentile::percentile;
use crate::ranking::domain::InputRecord;

const PUBLICATION_CHANNEL_WEIGHTS: [f64; 4] = [0.3, 0.5, 0.1, 0.1];
const ADJUSTED_FACULTY_FACTOR: f64 = 0.3;

/// Non-positive denominators degenerate to 1.0 so the ratio collapses to its numerator.
pub(crate) fn guarded(denominator: f64) -> f64 {
    if denominator > 0.0 {
        denominator
    } else {
        1.0
    }
}

fn weighted_channels(channels: [f64; 4]) -> f64 {
    channels
        .iter()
        .zip(PUBLICATION_CHANNEL_WEIGHTS)
        .map(|(value, weight)| weight * value)
        .sum()
}

/// Population of one derived metric across the cohort, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DerivedVector(Vec<f64>);

impl DerivedVector {
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub fn push(&mut self, value: f64) {
        self.0.push(value);
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Percentile rank of `target` against this population, in `[0, 100]`.
    pub fn rank_of(&self, target: f64) -> f64 {
        percentile(&self.0, target)
    }

    /// Same as [`rank_of`](Self::rank_of) but scaled to `[0, 1]`.
    pub fn fraction_of(&self, target: f64) -> f64 {
        self.rank_of(target) / 100.0
    }

    pub fn max(&self) -> Option<f64> {
        self.0.iter().copied().reduce(f64::max)
    }
}

/// Ratios computed from a single record with no cohort dependency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DerivedRatios {
    pub effective_faculty: f64,
    pub publications: f64,
    pub citations: f64,
    pub library_per_student: f64,
    pub lab_per_student: f64,
    pub application_ratio: f64,
}

impl DerivedRatios {
    pub fn from_record(record: &InputRecord) -> Self {
        let effective_faculty =
            record.full_time_faculty + ADJUSTED_FACULTY_FACTOR * record.adjusted_faculty;

        let publications = weighted_channels([
            record.publications_web_of_science,
            record.publications_scopus,
            record.publications_google_scholar,
            record.publications_indian_index,
        ]);
        let citations = weighted_channels([
            record.citations_web_of_science,
            record.citations_scopus,
            record.citations_google_scholar,
            record.citations_indian_index,
        ]);

        let seats = record.sanctioned_seats;
        let (library_per_student, lab_per_student) = if seats > 0.0 {
            (
                record.library_physical_spend / seats
                    + 2.0 * record.library_electronic_spend / seats,
                // Lab expenditure is collected per student already.
                record.lab_spend,
            )
        } else {
            (0.0, 0.0)
        };

        let application_ratio = if record.sanctioned_intake > 0.0 {
            record.applications / record.sanctioned_intake
        } else {
            0.0
        };

        Self {
            effective_faculty,
            publications,
            citations,
            library_per_student,
            lab_per_student,
            application_ratio,
        }
    }

    pub fn publication_intensity(&self) -> f64 {
        self.publications / guarded(self.effective_faculty)
    }

    pub fn citation_intensity(&self) -> f64 {
        self.citations / guarded(self.publications)
    }

    pub fn per_faculty(&self, value: f64) -> f64 {
        value / guarded(self.effective_faculty)
    }

    /// Effective faculty per sanctioned seat; zero when no seats are declared.
    pub fn faculty_per_seat(&self, seats: f64) -> f64 {
        if seats > 0.0 {
            self.effective_faculty / seats
        } else {
            0.0
        }
    }
}

/// Everything the second pass needs to know about the cohort as a whole.
#[derive(Debug, Clone, Default)]
pub struct CohortProfile {
    pub publication_intensity: DerivedVector,
    pub citation_intensity: DerivedVector,
    pub patents_filed: DerivedVector,
    pub patents_granted: DerivedVector,
    pub patent_revenue: DerivedVector,
    pub library_per_student: DerivedVector,
    pub lab_per_student: DerivedVector,
    pub placement_index: DerivedVector,
    pub community_engagement: DerivedVector,
    pub other_states: DerivedVector,
    pub other_countries: DerivedVector,
    pub application_ratio: DerivedVector,
    /// Highest application-to-seat ratio in the cohort; 1.0 for an empty cohort.
    pub application_anchor: f64,
}

impl CohortProfile {
    pub(crate) fn build(records: &[InputRecord]) -> (Self, Vec<DerivedRatios>) {
        let n = records.len();
        let mut profile = Self {
            publication_intensity: DerivedVector::with_capacity(n),
            citation_intensity: DerivedVector::with_capacity(n),
            patents_filed: DerivedVector::with_capacity(n),
            patents_granted: DerivedVector::with_capacity(n),
            patent_revenue: DerivedVector::with_capacity(n),
            library_per_student: DerivedVector::with_capacity(n),
            lab_per_student: DerivedVector::with_capacity(n),
            placement_index: DerivedVector::with_capacity(n),
            community_engagement: DerivedVector::with_capacity(n),
            other_states: DerivedVector::with_capacity(n),
            other_countries: DerivedVector::with_capacity(n),
            application_ratio: DerivedVector::with_capacity(n),
            application_anchor: 1.0,
        };
        let mut ratios = Vec::with_capacity(n);

        for record in records {
            let derived = DerivedRatios::from_record(record);

            profile
                .publication_intensity
                .push(derived.publication_intensity());
            profile.citation_intensity.push(derived.citation_intensity());
            profile
                .patents_filed
                .push(derived.per_faculty(record.patents_filed));
            profile
                .patents_granted
                .push(derived.per_faculty(record.patents_granted));
            profile
                .patent_revenue
                .push(derived.per_faculty(record.patent_revenue));
            profile.library_per_student.push(derived.library_per_student);
            profile.lab_per_student.push(derived.lab_per_student);
            profile.placement_index.push(record.placement_index);
            profile.community_engagement.push(record.community_engagement);
            profile.other_states.push(record.other_state_students);
            profile.other_countries.push(record.other_country_students);
            profile.application_ratio.push(derived.application_ratio);

            ratios.push(derived);
        }

        profile.application_anchor = profile.application_ratio.max().unwrap_or(1.0);

        (profile, ratios)
    }

    pub fn len(&self) -> usize {
        self.application_ratio.len()
    }

    pub fn is_empty(&self) -> bool {
        self.application_ratio.is_empty()
    }
}
