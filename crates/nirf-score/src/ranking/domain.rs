use super::lenient;
use serde::{Deserialize, Serialize};

/// Ranking band an institution competes in. Several ceilings depend on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstitutionCategory {
    University,
    #[default]
    College,
}

impl InstitutionCategory {
    /// Anything other than "university" (case-insensitive) is treated as a college.
    pub fn from_label(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("university") {
            Self::University
        } else {
            Self::College
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::University => "university",
            Self::College => "college",
        }
    }
}

/// Raw per-institution metrics as collected by forms, scrapers or spreadsheets.
///
/// Field names on the wire follow the collection sheets (`F1`, `seats_N`, `PW`, ...). Every
/// numeric field decodes leniently to `0.0` and every accessibility flag to `false`, so a
/// sparse record still scores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputRecord {
    #[serde(rename = "college_name", default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(
        rename = "institution_type",
        default,
        deserialize_with = "lenient::category"
    )]
    pub category: InstitutionCategory,
    #[serde(default, deserialize_with = "lenient::text")]
    pub website_url: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub image_url: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub scraping_status: String,

    // Faculty and seats
    #[serde(rename = "F1", default, deserialize_with = "lenient::number")]
    pub full_time_faculty: f64,
    #[serde(rename = "F2", default, deserialize_with = "lenient::number")]
    pub adjusted_faculty: f64,
    #[serde(rename = "seats_N", default, deserialize_with = "lenient::number")]
    pub sanctioned_seats: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub phd_percent: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub avg_experience_years: f64,

    // Library and laboratory
    #[serde(rename = "EXLIP", default, deserialize_with = "lenient::number")]
    pub library_physical_spend: f64,
    #[serde(rename = "EXLIE", default, deserialize_with = "lenient::number")]
    pub library_electronic_spend: f64,
    #[serde(rename = "EXLB", default, deserialize_with = "lenient::number")]
    pub lab_spend: f64,

    // Sports and extracurricular
    #[serde(rename = "SEC_pA_percentile", default, deserialize_with = "lenient::number")]
    pub sports_facilities_pct: f64,
    #[serde(rename = "SEC_pB_percentile", default, deserialize_with = "lenient::number")]
    pub sports_budget_pct: f64,
    #[serde(rename = "SEC_pC_percentile", default, deserialize_with = "lenient::number")]
    pub sports_achievement_pct: f64,
    #[serde(rename = "SEC_winners_count", default, deserialize_with = "lenient::number")]
    pub competition_winners: f64,

    // Publications
    #[serde(rename = "PW", default, deserialize_with = "lenient::number")]
    pub publications_web_of_science: f64,
    #[serde(rename = "PS", default, deserialize_with = "lenient::number")]
    pub publications_scopus: f64,
    #[serde(rename = "PG", default, deserialize_with = "lenient::number")]
    pub publications_google_scholar: f64,
    #[serde(rename = "PI", default, deserialize_with = "lenient::number")]
    pub publications_indian_index: f64,

    // Citations
    #[serde(rename = "CCW", default, deserialize_with = "lenient::number")]
    pub citations_web_of_science: f64,
    #[serde(rename = "CCS", default, deserialize_with = "lenient::number")]
    pub citations_scopus: f64,
    #[serde(rename = "CCG", default, deserialize_with = "lenient::number")]
    pub citations_google_scholar: f64,
    #[serde(rename = "CCI", default, deserialize_with = "lenient::number")]
    pub citations_indian_index: f64,

    // Intellectual property
    #[serde(rename = "PF_filed", default, deserialize_with = "lenient::number")]
    pub patents_filed: f64,
    #[serde(rename = "PG_granted", default, deserialize_with = "lenient::number")]
    pub patents_granted: f64,
    #[serde(rename = "PL_licensed_count", default, deserialize_with = "lenient::number")]
    pub patents_licensed: f64,
    #[serde(rename = "EP_revenue", default, deserialize_with = "lenient::number")]
    pub patent_revenue: f64,

    // Graduation outcomes
    #[serde(
        rename = "UE_graduating_percent",
        default,
        deserialize_with = "lenient::number"
    )]
    pub graduating_on_time_pct: f64,
    #[serde(rename = "PE_index", default, deserialize_with = "lenient::number")]
    pub placement_index: f64,

    // Outreach and inclusivity
    #[serde(rename = "CES_N", default, deserialize_with = "lenient::number")]
    pub community_engagement: f64,
    #[serde(rename = "RD_other_states", default, deserialize_with = "lenient::number")]
    pub other_state_students: f64,
    #[serde(rename = "RD_other_countries", default, deserialize_with = "lenient::number")]
    pub other_country_students: f64,
    #[serde(
        rename = "WS_women_students_percent",
        default,
        deserialize_with = "lenient::number"
    )]
    pub women_students_pct: f64,
    #[serde(
        rename = "WS_women_faculty_percent",
        default,
        deserialize_with = "lenient::number"
    )]
    pub women_faculty_pct: f64,
    #[serde(
        rename = "WS_women_leadership_percent",
        default,
        deserialize_with = "lenient::number"
    )]
    pub women_leadership_pct: f64,
    #[serde(
        rename = "ESCS_disadvantaged_percent",
        default,
        deserialize_with = "lenient::number"
    )]
    pub disadvantaged_pct: f64,
    #[serde(rename = "DAP_ramps", default, deserialize_with = "lenient::flag")]
    pub has_ramps: bool,
    #[serde(rename = "DAP_lifts", default, deserialize_with = "lenient::flag")]
    pub has_lifts: bool,
    #[serde(rename = "DAP_walking_aids", default, deserialize_with = "lenient::flag")]
    pub has_walking_aids: bool,
    #[serde(rename = "DAP_toilets", default, deserialize_with = "lenient::flag")]
    pub has_accessible_toilets: bool,
    #[serde(rename = "DAP_braille_labs", default, deserialize_with = "lenient::flag")]
    pub has_braille_labs: bool,
    #[serde(rename = "DAP_av_aids", default, deserialize_with = "lenient::flag")]
    pub has_audio_visual_aids: bool,

    // Perception
    #[serde(rename = "PR_survey", default, deserialize_with = "lenient::number")]
    pub perception_survey: f64,
    #[serde(rename = "applications_A", default, deserialize_with = "lenient::number")]
    pub applications: f64,
    #[serde(rename = "sanctioned_S", default, deserialize_with = "lenient::number")]
    pub sanctioned_intake: f64,
}

impl InputRecord {
    /// A zeroed record carrying only identity, used when a collaborator could not gather data.
    pub fn named(name: impl Into<String>, category: InstitutionCategory) -> Self {
        Self {
            name: name.into(),
            category,
            ..Self::default()
        }
    }
}

/// The five weighted ranking parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryKey {
    #[serde(rename = "TLR")]
    TeachingResources,
    #[serde(rename = "RP")]
    ResearchOutput,
    #[serde(rename = "GO")]
    GraduationOutcomes,
    #[serde(rename = "OI")]
    OutreachInclusivity,
    #[serde(rename = "PR")]
    Perception,
}

impl CategoryKey {
    pub const ALL: [CategoryKey; 5] = [
        CategoryKey::TeachingResources,
        CategoryKey::ResearchOutput,
        CategoryKey::GraduationOutcomes,
        CategoryKey::OutreachInclusivity,
        CategoryKey::Perception,
    ];

    pub const fn code(self) -> &'static str {
        match self {
            Self::TeachingResources => "TLR",
            Self::ResearchOutput => "RP",
            Self::GraduationOutcomes => "GO",
            Self::OutreachInclusivity => "OI",
            Self::Perception => "PR",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::TeachingResources => "Teaching & Learning Resources",
            Self::ResearchOutput => "Research & Professional Practice",
            Self::GraduationOutcomes => "Graduation Outcomes",
            Self::OutreachInclusivity => "Outreach & Inclusivity",
            Self::Perception => "Perception",
        }
    }
}

/// Discrete contribution to a category score, kept for transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub category: CategoryKey,
    pub code: String,
    pub score: f64,
    pub notes: String,
}

/// Engine output for one institution. All scores are rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    #[serde(rename = "college_name")]
    pub name: String,
    #[serde(rename = "institution_type")]
    pub category: InstitutionCategory,
    pub image_url: String,
    pub website_url: String,
    pub scraping_status: String,
    #[serde(rename = "TLR")]
    pub teaching_resources: f64,
    #[serde(rename = "RP")]
    pub research_output: f64,
    #[serde(rename = "GO")]
    pub graduation_outcomes: f64,
    #[serde(rename = "OI")]
    pub outreach_inclusivity: f64,
    #[serde(rename = "PR")]
    pub perception: f64,
    #[serde(rename = "Total")]
    pub total: f64,
    #[serde(default)]
    pub components: Vec<ScoreComponent>,
}

impl ScoreResult {
    pub fn category_score(&self, key: CategoryKey) -> f64 {
        match key {
            CategoryKey::TeachingResources => self.teaching_resources,
            CategoryKey::ResearchOutput => self.research_output,
            CategoryKey::GraduationOutcomes => self.graduation_outcomes,
            CategoryKey::OutreachInclusivity => self.outreach_inclusivity,
            CategoryKey::Perception => self.perception,
        }
    }
}
