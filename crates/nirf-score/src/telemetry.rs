//! Structured logging for the CLI and the HTTP service.

use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Directives appended to the configured level; the scoring crates follow it, the HTTP stack
/// stays at warn unless asked.
const QUIET_DEPENDENCIES: &[&str] = &["hyper=warn", "tower=warn"];

#[derive(Debug)]
pub enum TelemetryError {
    InvalidFilter { directives: String, source: ParseError },
    AlreadyInstalled(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::InvalidFilter { directives, .. } => {
                write!(f, "log filter '{}' is not a valid directive list", directives)
            }
            TelemetryError::AlreadyInstalled(err) => {
                write!(f, "a global log subscriber is already installed: {err}")
            }
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::InvalidFilter { source, .. } => Some(source),
            TelemetryError::AlreadyInstalled(err) => Some(&**err),
        }
    }
}

/// Resolves the filter directives: an explicit `RUST_LOG` wins verbatim, otherwise the
/// configured level plus the dependency quieting.
pub fn filter_directives(rust_log: Option<&str>, log_level: &str) -> String {
    match rust_log.map(str::trim).filter(|value| !value.is_empty()) {
        Some(explicit) => explicit.to_string(),
        None => {
            let mut directives = vec![log_level.trim().to_string()];
            directives.extend(QUIET_DEPENDENCIES.iter().map(|d| d.to_string()));
            directives.join(",")
        }
    }
}

pub fn build_filter(directives: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(directives).map_err(|source| TelemetryError::InvalidFilter {
        directives: directives.to_string(),
        source,
    })
}

/// Installs the global subscriber, writing compact lines to stderr so stdout stays free for
/// rankings and JSON.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let directives = filter_directives(rust_log.as_deref(), &config.log_level);
    let filter = build_filter(&directives)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(TelemetryError::AlreadyInstalled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_level_quiets_the_http_stack() {
        assert_eq!(
            filter_directives(None, "debug"),
            "debug,hyper=warn,tower=warn"
        );
        assert_eq!(
            filter_directives(Some("   "), " info "),
            "info,hyper=warn,tower=warn"
        );
    }

    #[test]
    fn explicit_rust_log_wins() {
        assert_eq!(
            filter_directives(Some("nirf_score=trace"), "info"),
            "nirf_score=trace"
        );
    }

    #[test]
    fn malformed_levels_are_rejected() {
        let err = build_filter("nirf_score=loud").expect_err("invalid directive");
        assert!(matches!(err, TelemetryError::InvalidFilter { .. }));
        assert!(build_filter(&filter_directives(None, "warn")).is_ok());
    }
}
