//! Cohort intake from JSON or CSV files.
//!
//! Intake sits outside the engine: structural problems (unreadable files, broken JSON, ragged
//! CSV) surface as [`IntakeError`], while missing or garbled field values are absorbed into
//! zeroed fields by the record decoder.

mod parser;

use crate::ranking::normalizer::normalize_name;
use crate::ranking::InputRecord;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug)]
pub enum IntakeError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Csv(csv::Error),
    InvalidShape(String),
    UnsupportedFormat(String),
}

impl std::fmt::Display for IntakeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntakeError::Io(err) => write!(f, "failed to read cohort file: {}", err),
            IntakeError::Json(err) => write!(f, "invalid cohort JSON: {}", err),
            IntakeError::Csv(err) => write!(f, "invalid cohort CSV: {}", err),
            IntakeError::InvalidShape(detail) => write!(f, "unexpected cohort layout: {}", detail),
            IntakeError::UnsupportedFormat(path) => write!(
                f,
                "unsupported cohort file '{}': expected .json or .csv",
                path
            ),
        }
    }
}

impl std::error::Error for IntakeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IntakeError::Io(err) => Some(err),
            IntakeError::Json(err) => Some(err),
            IntakeError::Csv(err) => Some(err),
            IntakeError::InvalidShape(_) | IntakeError::UnsupportedFormat(_) => None,
        }
    }
}

impl From<std::io::Error> for IntakeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for IntakeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<csv::Error> for IntakeError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CohortFormat {
    Json,
    Csv,
}

impl CohortFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

pub fn from_json_reader<R: Read>(reader: R) -> Result<Vec<InputRecord>, IntakeError> {
    parser::parse_json(reader).map(merge_records)
}

pub fn from_csv_reader<R: Read>(reader: R) -> Result<Vec<InputRecord>, IntakeError> {
    parser::parse_csv(reader).map(merge_records)
}

pub fn from_reader<R: Read>(reader: R, format: CohortFormat) -> Result<Vec<InputRecord>, IntakeError> {
    match format {
        CohortFormat::Json => from_json_reader(reader),
        CohortFormat::Csv => from_csv_reader(reader),
    }
}

pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<InputRecord>, IntakeError> {
    let path = path.as_ref();
    let format = CohortFormat::from_path(path)
        .ok_or_else(|| IntakeError::UnsupportedFormat(path.display().to_string()))?;
    let file = File::open(path)?;
    let records = from_reader(BufReader::new(file), format)?;
    info!(path = %path.display(), records = records.len(), "loaded cohort");
    Ok(records)
}

/// Later records replace earlier ones with the same normalized name, keeping the first
/// position. Unnamed records are kept as-is.
pub fn merge_records(records: Vec<InputRecord>) -> Vec<InputRecord> {
    let mut merged: Vec<InputRecord> = Vec::with_capacity(records.len());
    let mut positions: HashMap<String, usize> = HashMap::new();

    for record in records {
        let key = normalize_name(&record.name);
        if key.is_empty() {
            warn!("cohort record without an institution name; scoring it anonymously");
            merged.push(record);
            continue;
        }
        match positions.get(&key) {
            Some(&index) => {
                warn!(institution = %record.name, "duplicate institution; keeping the later record");
                merged[index] = record;
            }
            None => {
                positions.insert(key, merged.len());
                merged.push(record);
            }
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::InstitutionCategory;

    #[test]
    fn json_accepts_bare_arrays_and_wrapped_records() {
        let bare = r#"[{"college_name": "A"}, {"college_name": "B"}]"#;
        assert_eq!(from_json_reader(bare.as_bytes()).expect("bare array").len(), 2);

        let wrapped = r#"{"records": [{"college_name": "A"}]}"#;
        assert_eq!(from_json_reader(wrapped.as_bytes()).expect("wrapped").len(), 1);
    }

    #[test]
    fn json_rejects_other_shapes() {
        let err = from_json_reader(r#"{"colleges": []}"#.as_bytes()).expect_err("wrong shape");
        assert!(matches!(err, IntakeError::InvalidShape(_)));

        let err = from_json_reader("[{".as_bytes()).expect_err("broken json");
        assert!(matches!(err, IntakeError::Json(_)));
    }

    #[test]
    fn json_fields_degrade_to_zero_and_false() {
        let raw = r#"[{
            "college_name": "Hill College",
            "institution_type": "University",
            "F1": "120",
            "F2": "",
            "seats_N": "n/a",
            "phd_percent": null,
            "PW": 14,
            "DAP_ramps": "on",
            "DAP_lifts": 0,
            "DAP_toilets": "nope",
            "unknown_field": {"nested": true}
        }]"#;
        let records = from_json_reader(raw.as_bytes()).expect("lenient decode");
        let record = &records[0];
        assert_eq!(record.category, InstitutionCategory::University);
        assert_eq!(record.full_time_faculty, 120.0);
        assert_eq!(record.adjusted_faculty, 0.0);
        assert_eq!(record.sanctioned_seats, 0.0);
        assert_eq!(record.phd_percent, 0.0);
        assert_eq!(record.publications_web_of_science, 14.0);
        assert!(record.has_ramps);
        assert!(!record.has_lifts);
        assert!(!record.has_accessible_toilets);
        assert!(!record.has_braille_labs);
    }

    #[test]
    fn csv_rows_decode_with_missing_columns() {
        let csv = "college_name,institution_type,F1,seats_N,DAP_av_aids\n\
North College,college,40,200,true\n\
South University,university,,abc,\n";
        let records = from_csv_reader(csv.as_bytes()).expect("csv decodes");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].full_time_faculty, 40.0);
        assert!(records[0].has_audio_visual_aids);
        assert_eq!(records[1].category, InstitutionCategory::University);
        assert_eq!(records[1].full_time_faculty, 0.0);
        assert_eq!(records[1].sanctioned_seats, 0.0);
        assert_eq!(records[1].placement_index, 0.0);
    }

    #[test]
    fn duplicates_are_upserted_in_place() {
        let mut first = InputRecord::named("Lake College", InstitutionCategory::College);
        first.full_time_faculty = 10.0;
        let other = InputRecord::named("Ridge University", InstitutionCategory::University);
        let mut second = InputRecord::named("  lake   college ", InstitutionCategory::College);
        second.full_time_faculty = 25.0;

        let merged = merge_records(vec![first, other, second]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].full_time_faculty, 25.0);
        assert_eq!(merged[1].name, "Ridge University");
    }

    #[test]
    fn unsupported_extensions_are_rejected() {
        let err = from_path("cohort.xlsx").expect_err("unsupported");
        assert!(matches!(err, IntakeError::UnsupportedFormat(_)));
    }

    #[test]
    fn reads_cohort_files_from_disk() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("cohort.JSON");
        std::fs::write(&path, r#"[{"college_name": "Delta Institute", "F1": 12}]"#)
            .expect("write cohort");
        let records = from_path(&path).expect("reads json");
        assert_eq!(records[0].name, "Delta Institute");
    }
}
