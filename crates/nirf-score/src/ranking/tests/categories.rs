use super::common::*;
use crate::ranking::domain::{InputRecord, InstitutionCategory};
use crate::ranking::engine::rules::{
    accessibility_score, experience_score, faculty_ratio_score, phd_score, sports_score,
};
use crate::ranking::engine::CohortProfile;

#[test]
fn faculty_ratio_below_one_in_fifty_scores_nothing() {
    assert_eq!(faculty_ratio_score(0.019, InstitutionCategory::University), 0.0);
    assert_eq!(faculty_ratio_score(0.019, InstitutionCategory::College), 0.0);
    assert_eq!(faculty_ratio_score(0.0, InstitutionCategory::College), 0.0);
}

#[test]
fn faculty_ratio_multiplier_depends_on_category() {
    assert!(approx_eq(
        faculty_ratio_score(0.1, InstitutionCategory::University),
        30.0
    ));
    assert!(approx_eq(
        faculty_ratio_score(0.05, InstitutionCategory::College),
        30.0
    ));
    assert!(approx_eq(
        faculty_ratio_score(0.02, InstitutionCategory::University),
        6.0
    ));
}

#[test]
fn phd_component_saturates_at_ninety_five_percent() {
    assert_eq!(phd_score(95.0), phd_score(100.0));
    assert_eq!(phd_score(100.0), 15.0);
    assert!(approx_eq(phd_score(47.5), 7.5));
    assert_eq!(phd_score(0.0), 0.0);
}

#[test]
fn experience_component_counts_years_beyond_thirty() {
    assert_eq!(experience_score(10.0), 0.0);
    assert_eq!(experience_score(30.0), 0.0);
    assert!(approx_eq(experience_score(38.0), 8.0));
    assert!(approx_eq(experience_score(45.0), 15.0));
    assert_eq!(experience_score(60.0), 15.0);
}

#[test]
fn three_competition_winners_override_the_achievement_percentile() {
    let mut record = InputRecord {
        sports_facilities_pct: 80.0,
        sports_budget_pct: 40.0,
        sports_achievement_pct: 0.0,
        competition_winners: 2.0,
        ..InputRecord::default()
    };
    assert!(approx_eq(sports_score(&record), 5.0));

    record.competition_winners = 3.0;
    assert!(approx_eq(sports_score(&record), 7.5));
}

#[test]
fn accessibility_points_are_feature_specific() {
    let mut record = InputRecord::default();
    assert_eq!(accessibility_score(&record), 0.0);

    record.has_ramps = true;
    record.has_braille_labs = true;
    assert_eq!(accessibility_score(&record), 3.0);

    record.has_lifts = true;
    record.has_walking_aids = true;
    record.has_accessible_toilets = true;
    record.has_audio_visual_aids = true;
    assert_eq!(accessibility_score(&record), 10.0);
}

#[test]
fn zero_seats_zero_the_seat_based_ratios() {
    let mut record = sample_record("Seatless College", InstitutionCategory::College);
    record.sanctioned_seats = 0.0;
    record.sanctioned_intake = 0.0;

    let (profile, ratios) = CohortProfile::build(std::slice::from_ref(&record));
    let ratios = ratios[0];
    assert_eq!(ratios.faculty_per_seat(record.sanctioned_seats), 0.0);
    assert_eq!(ratios.library_per_student, 0.0);
    assert_eq!(ratios.lab_per_student, 0.0);
    assert_eq!(ratios.application_ratio, 0.0);
    assert_eq!(profile.application_anchor, 0.0);
}

#[test]
fn zero_faculty_degenerates_ratios_to_their_numerators() {
    let record = InputRecord {
        publications_scopus: 10.0,
        patents_filed: 4.0,
        ..InputRecord::default()
    };

    let (profile, ratios) = CohortProfile::build(std::slice::from_ref(&record));
    assert_eq!(ratios[0].effective_faculty, 0.0);
    assert!(approx_eq(profile.publication_intensity.values()[0], 5.0));
    assert!(approx_eq(profile.patents_filed.values()[0], 4.0));
    // Citations over zero publications keep the raw citation score.
    assert_eq!(profile.citation_intensity.values()[0], 0.0);
}

#[test]
fn derived_ratios_follow_the_channel_weights() {
    let record = sample_record("Channel College", InstitutionCategory::College);
    let (profile, ratios) = CohortProfile::build(std::slice::from_ref(&record));
    let ratios = ratios[0];

    assert!(approx_eq(ratios.effective_faculty, 66.0));
    assert!(approx_eq(ratios.publications, 45.0));
    assert!(approx_eq(ratios.citations, 217.0));
    assert!(approx_eq(ratios.library_per_student, 1_000.0));
    assert_eq!(ratios.lab_per_student, 800.0);
    assert!(approx_eq(ratios.application_ratio, 8.0));
    assert!(approx_eq(profile.application_anchor, 8.0));
}

#[test]
fn empty_cohort_anchor_defaults_to_one() {
    let (profile, ratios) = CohortProfile::build(&[]);
    assert!(ratios.is_empty());
    assert!(profile.is_empty());
    assert_eq!(profile.application_anchor, 1.0);
}
