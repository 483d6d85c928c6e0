use metrics_exporter_prometheus::PrometheusHandle;
use nirf_score::error::AppError;
use nirf_score::intake;
use nirf_score::ranking::{InputRecord, StaticWeights, WeightProvider, WeightsFile};
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) weights: Arc<dyn WeightProvider>,
}

/// File-backed weights when a path is configured, the defaults otherwise.
pub(crate) fn weight_provider(path: Option<PathBuf>) -> Arc<dyn WeightProvider> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "reading category weights from file");
            Arc::new(WeightsFile::new(path))
        }
        None => Arc::new(StaticWeights::default()),
    }
}

/// Reads a cohort file; duplicate institutions are already collapsed by intake.
pub(crate) fn load_cohort(path: &Path) -> Result<Vec<InputRecord>, AppError> {
    Ok(intake::from_path(path)?)
}

#[cfg(test)]
pub(crate) fn test_state(weights: Arc<dyn WeightProvider>) -> AppState {
    use metrics_exporter_prometheus::PrometheusBuilder;

    AppState {
        readiness: Arc::new(AtomicBool::new(true)),
        metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        weights,
    }
}
