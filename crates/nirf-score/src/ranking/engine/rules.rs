//! Second pass: the five category calculators.
//!
//! Each calculator reads one record, its first-pass ratios and the cohort profile, and returns
//! the category's sub-components in summation order.

use super::cohort::{guarded, CohortProfile, DerivedRatios};
use crate::ranking::domain::{CategoryKey, InputRecord, InstitutionCategory};

const MIN_FACULTY_PER_SEAT: f64 = 1.0 / 50.0;
const PHD_SATURATION_PCT: f64 = 95.0;
const EXPERIENCE_BASELINE_YEARS: f64 = 30.0;
const EXPERIENCE_SATURATION_YEARS: f64 = 45.0;
const EXPERIENCE_CAP: f64 = 15.0;
const SPORTS_WINNER_THRESHOLD: f64 = 3.0;
const GRADUATION_REFERENCE_PCT: f64 = 80.0;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SubScore {
    pub code: &'static str,
    pub value: f64,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CategoryScore {
    pub key: CategoryKey,
    pub parts: Vec<SubScore>,
}

impl CategoryScore {
    fn new(key: CategoryKey) -> Self {
        Self {
            key,
            parts: Vec::new(),
        }
    }

    fn push(&mut self, code: &'static str, value: f64, notes: String) {
        self.parts.push(SubScore { code, value, notes });
    }

    pub fn total(&self) -> f64 {
        self.parts.iter().fold(0.0, |acc, part| acc + part.value)
    }

    #[cfg(test)]
    pub fn part(&self, code: &str) -> Option<f64> {
        self.parts
            .iter()
            .find(|part| part.code == code)
            .map(|part| part.value)
    }
}

/// Faculty-to-seat ratio score with the 1:50 staffing cliff.
pub(crate) fn faculty_ratio_score(ratio: f64, category: InstitutionCategory) -> f64 {
    if ratio < MIN_FACULTY_PER_SEAT {
        return 0.0;
    }
    match category {
        InstitutionCategory::University => 20.0 * (15.0 * ratio),
        InstitutionCategory::College => 30.0 * (20.0 * ratio),
    }
}

pub(crate) fn phd_score(phd_percent: f64) -> f64 {
    if phd_percent <= PHD_SATURATION_PCT {
        15.0 * (phd_percent / PHD_SATURATION_PCT)
    } else {
        15.0
    }
}

pub(crate) fn experience_score(avg_experience_years: f64) -> f64 {
    let excess = if avg_experience_years <= EXPERIENCE_SATURATION_YEARS {
        (avg_experience_years - EXPERIENCE_BASELINE_YEARS).max(0.0)
    } else {
        EXPERIENCE_CAP
    };
    if excess <= EXPERIENCE_CAP {
        15.0 * (excess / EXPERIENCE_CAP)
    } else {
        15.0
    }
}

pub(crate) fn sports_score(record: &InputRecord) -> f64 {
    let facilities = record.sports_facilities_pct / 100.0;
    let budget = record.sports_budget_pct / 100.0;
    let achievement = if record.competition_winners >= SPORTS_WINNER_THRESHOLD {
        1.0
    } else {
        record.sports_achievement_pct / 100.0
    };
    10.0 * (facilities / 2.0 + budget / 4.0 + achievement / 4.0)
}

pub(crate) fn teaching_resources(
    record: &InputRecord,
    ratios: &DerivedRatios,
    cohort: &CohortProfile,
) -> CategoryScore {
    let mut score = CategoryScore::new(CategoryKey::TeachingResources);

    let ratio = ratios.faculty_per_seat(record.sanctioned_seats);
    let fsr = faculty_ratio_score(ratio, record.category);
    let fsr_notes = if ratio < MIN_FACULTY_PER_SEAT {
        format!("faculty per seat {ratio:.4} below the 1:50 minimum")
    } else {
        format!("faculty per seat {ratio:.4} ({})", record.category.label())
    };
    score.push("FSR", fsr, fsr_notes);

    let fqe = phd_score(record.phd_percent) + experience_score(record.avg_experience_years);
    score.push(
        "FQE",
        fqe,
        format!(
            "{:.1}% PhD faculty, {:.1} average years of experience",
            record.phd_percent, record.avg_experience_years
        ),
    );

    let ceiling = match record.category {
        InstitutionCategory::University => 20.0,
        InstitutionCategory::College => 15.0,
    };
    let library_pct = cohort
        .library_per_student
        .rank_of(ratios.library_per_student);
    let lab_pct = cohort.lab_per_student.rank_of(ratios.lab_per_student);
    let library = ceiling * library_pct / 100.0;
    let lab = ceiling * lab_pct / 100.0;
    score.push(
        "LL",
        library + lab,
        format!("library at P{library_pct:.0}, lab at P{lab_pct:.0} of cohort"),
    );

    let sec_notes = if record.competition_winners >= SPORTS_WINNER_THRESHOLD {
        format!(
            "{} competition winners; achievement credited in full",
            record.competition_winners
        )
    } else {
        "sports and extracurricular percentiles as reported".to_string()
    };
    score.push("SEC", sports_score(record), sec_notes);

    score
}

pub(crate) fn research_output(
    record: &InputRecord,
    ratios: &DerivedRatios,
    cohort: &CohortProfile,
) -> CategoryScore {
    let mut score = CategoryScore::new(CategoryKey::ResearchOutput);

    let publication_pct = cohort
        .publication_intensity
        .rank_of(ratios.publication_intensity());
    score.push(
        "PU",
        45.0 * (publication_pct / 100.0),
        format!("publications per faculty at P{publication_pct:.0}"),
    );

    // Citation intensity is discounted by how strong the publication record already is.
    let citation_index =
        (ratios.citations / guarded(ratios.publications)) * (publication_pct / 100.0);
    let citation_pct = cohort.citation_intensity.rank_of(citation_index);
    score.push(
        "CI",
        45.0 * (citation_pct / 100.0),
        format!("citation index {citation_index:.3} at P{citation_pct:.0}"),
    );

    let filed = 2.0
        * cohort
            .patents_filed
            .fraction_of(ratios.per_faculty(record.patents_filed));
    let granted = 4.0
        * cohort
            .patents_granted
            .fraction_of(ratios.per_faculty(record.patents_granted));
    let licensed_indicator = if record.patents_granted >= 1.0 && record.patents_licensed >= 1.0 {
        1.0
    } else {
        0.0
    };
    let licensing = 2.0 * licensed_indicator
        + 2.0
            * cohort
                .patent_revenue
                .fraction_of(ratios.per_faculty(record.patent_revenue));
    score.push(
        "IPR",
        filed + granted + licensing,
        format!(
            "{} filed, {} granted, {} licensed",
            record.patents_filed, record.patents_granted, record.patents_licensed
        ),
    );

    score
}

pub(crate) fn graduation_outcomes(record: &InputRecord, cohort: &CohortProfile) -> CategoryScore {
    let mut score = CategoryScore::new(CategoryKey::GraduationOutcomes);

    score.push(
        "UE",
        50.0 * (record.graduating_on_time_pct / GRADUATION_REFERENCE_PCT),
        format!(
            "{:.1}% graduating on time against an 80% reference",
            record.graduating_on_time_pct
        ),
    );

    let placement_pct = cohort.placement_index.rank_of(record.placement_index);
    score.push(
        "PE",
        50.0 * (placement_pct / 100.0),
        format!("placement index at P{placement_pct:.0}"),
    );

    score
}

pub(crate) fn accessibility_score(record: &InputRecord) -> f64 {
    let features = [
        (record.has_ramps, 2.0),
        (record.has_lifts, 2.0),
        (record.has_walking_aids, 2.0),
        (record.has_accessible_toilets, 1.5),
        (record.has_braille_labs, 1.0),
        (record.has_audio_visual_aids, 1.5),
    ];
    features
        .iter()
        .fold(0.0, |acc, (present, points)| acc + if *present { *points } else { 0.0 })
}

pub(crate) fn outreach_inclusivity(record: &InputRecord, cohort: &CohortProfile) -> CategoryScore {
    let mut score = CategoryScore::new(CategoryKey::OutreachInclusivity);

    let community_pct = cohort
        .community_engagement
        .rank_of(record.community_engagement);
    score.push(
        "CES",
        25.0 * (community_pct / 100.0),
        format!("community engagement at P{community_pct:.0}"),
    );

    let states = 18.0 * cohort.other_states.fraction_of(record.other_state_students);
    let countries = 7.0
        * cohort
            .other_countries
            .fraction_of(record.other_country_students);
    score.push(
        "RD",
        states + countries,
        format!(
            "{} students from other states, {} from other countries",
            record.other_state_students, record.other_country_students
        ),
    );

    let women = 8.0 * (record.women_students_pct / 50.0)
        + 8.0 * (record.women_faculty_pct / 20.0)
        + 4.0 * (record.women_leadership_pct / 2.0);
    score.push(
        "WS",
        women,
        format!(
            "women: {:.1}% students, {:.1}% faculty, {:.1}% leadership",
            record.women_students_pct, record.women_faculty_pct, record.women_leadership_pct
        ),
    );

    score.push(
        "ESCS",
        20.0 * (record.disadvantaged_pct / 50.0),
        format!(
            "{:.1}% economically and socially challenged students",
            record.disadvantaged_pct
        ),
    );

    let accessibility = accessibility_score(record);
    score.push(
        "DAP",
        accessibility,
        format!("{accessibility:.1} of 10 accessibility points"),
    );

    score
}

pub(crate) fn perception(
    record: &InputRecord,
    ratios: &DerivedRatios,
    cohort: &CohortProfile,
) -> CategoryScore {
    let mut score = CategoryScore::new(CategoryKey::Perception);

    score.push(
        "SURVEY",
        record.perception_survey,
        "peer perception survey (out of 50)".to_string(),
    );

    let anchor = cohort.application_anchor;
    // An overflowing ratio makes the anchor infinite; inf/inf would poison the total.
    let relative = if anchor.is_finite() && anchor > 0.0 {
        ratios.application_ratio / anchor
    } else {
        0.0
    };
    score.push(
        "SR",
        50.0 * relative,
        format!(
            "{:.2} applications per seat against a cohort best of {anchor:.2}",
            ratios.application_ratio
        ),
    );

    score
}
