//! Category weights and the providers that supply them.
//!
//! Weight documents are loose maps (`TLR: 30`, `RP: 30`, ...). Decoding never fails: a missing
//! or unusable key falls back to that key's default, and an unusable document falls back to the
//! full default set.

use super::domain::CategoryKey;
use super::lenient::parse_number;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const DEFAULT_TLR_WEIGHT: f64 = 30.0;
pub const DEFAULT_RP_WEIGHT: f64 = 30.0;
pub const DEFAULT_GO_WEIGHT: f64 = 20.0;
pub const DEFAULT_OI_WEIGHT: f64 = 10.0;
pub const DEFAULT_PR_WEIGHT: f64 = 10.0;

/// Percentage weights per category; they are expected, not required, to sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightConfig {
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
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            teaching_resources: DEFAULT_TLR_WEIGHT,
            research_output: DEFAULT_RP_WEIGHT,
            graduation_outcomes: DEFAULT_GO_WEIGHT,
            outreach_inclusivity: DEFAULT_OI_WEIGHT,
            perception: DEFAULT_PR_WEIGHT,
        }
    }
}

impl WeightConfig {
    pub fn weight(&self, key: CategoryKey) -> f64 {
        match key {
            CategoryKey::TeachingResources => self.teaching_resources,
            CategoryKey::ResearchOutput => self.research_output,
            CategoryKey::GraduationOutcomes => self.graduation_outcomes,
            CategoryKey::OutreachInclusivity => self.outreach_inclusivity,
            CategoryKey::Perception => self.perception,
        }
    }

    pub fn sum(&self) -> f64 {
        CategoryKey::ALL.iter().map(|key| self.weight(*key)).sum()
    }

    pub fn sums_to_hundred(&self) -> bool {
        (self.sum() - 100.0).abs() < 1e-6
    }

    /// Strict at the document level (syntax, shape), lenient per key.
    pub fn parse_yaml(raw: &str) -> Result<Self, WeightsError> {
        let document: serde_yaml::Value = serde_yaml::from_str(raw).map_err(WeightsError::Syntax)?;
        let mapping = document.as_mapping().ok_or(WeightsError::NotAMapping)?;

        let entries = mapping.iter().filter_map(|(key, value)| {
            let key = key.as_str()?;
            let value = match value {
                serde_yaml::Value::Number(number) => number.as_f64().filter(|v| v.is_finite()),
                serde_yaml::Value::String(text) => parse_number(text),
                _ => None,
            };
            Some((key, value))
        });

        Ok(Self::from_entries(entries))
    }

    /// Lenient decoding of a YAML document; any document-level failure yields the defaults.
    pub fn from_yaml_str(raw: &str) -> Self {
        Self::parse_yaml(raw).unwrap_or_default()
    }

    /// Lenient decoding of a JSON value, as found in API request bodies.
    pub fn from_json_value(value: &serde_json::Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };

        let entries = object.iter().map(|(key, value)| {
            let value = match value {
                serde_json::Value::Number(number) => number.as_f64().filter(|v| v.is_finite()),
                serde_json::Value::String(text) => parse_number(text),
                _ => None,
            };
            (key.as_str(), value)
        });

        Self::from_entries(entries)
    }

    fn from_entries<'a>(entries: impl Iterator<Item = (&'a str, Option<f64>)>) -> Self {
        let mut tlr = None;
        let mut rp = None;
        let mut rpii = None;
        let mut go = None;
        let mut oi = None;
        let mut pr = None;

        for (key, value) in entries {
            let Some(value) = value else {
                continue;
            };
            match key.trim().to_ascii_uppercase().as_str() {
                "TLR" => tlr = Some(value),
                "RP" => rp = Some(value),
                "RPII" => rpii = Some(value),
                "GO" => go = Some(value),
                "OI" => oi = Some(value),
                "PR" => pr = Some(value),
                _ => {}
            }
        }

        Self {
            teaching_resources: tlr.unwrap_or(DEFAULT_TLR_WEIGHT),
            research_output: rp.or(rpii).unwrap_or(DEFAULT_RP_WEIGHT),
            graduation_outcomes: go.unwrap_or(DEFAULT_GO_WEIGHT),
            outreach_inclusivity: oi.unwrap_or(DEFAULT_OI_WEIGHT),
            perception: pr.unwrap_or(DEFAULT_PR_WEIGHT),
        }
    }
}

#[derive(Debug)]
pub enum WeightsError {
    Syntax(serde_yaml::Error),
    NotAMapping,
}

impl fmt::Display for WeightsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightsError::Syntax(err) => write!(f, "weights document is not valid YAML: {}", err),
            WeightsError::NotAMapping => write!(f, "weights document must be a key/value mapping"),
        }
    }
}

impl std::error::Error for WeightsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WeightsError::Syntax(err) => Some(err),
            WeightsError::NotAMapping => None,
        }
    }
}

/// Source of category weights injected into the engine.
pub trait WeightProvider: Send + Sync {
    fn weights(&self) -> WeightConfig;
}

/// Fixed weights, typically the defaults or a value decoded from a request.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticWeights(pub WeightConfig);

impl WeightProvider for StaticWeights {
    fn weights(&self) -> WeightConfig {
        self.0
    }
}

/// Weights read from a YAML file on every call so edits apply without a restart.
#[derive(Debug, Clone)]
pub struct WeightsFile {
    path: PathBuf,
}

impl WeightsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WeightProvider for WeightsFile {
    fn weights(&self) -> WeightConfig {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "weights file absent; using defaults");
                return WeightConfig::default();
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "unable to read weights file; using defaults");
                return WeightConfig::default();
            }
        };

        match WeightConfig::parse_yaml(&raw) {
            Ok(weights) => weights,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "malformed weights file; using defaults");
                WeightConfig::default()
            }
        }
    }
}
