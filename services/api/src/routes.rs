use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{DateTime, Utc};
use nirf_score::error::AppError;
use nirf_score::intake::merge_records;
use nirf_score::ranking::{
    CohortReport, ComparisonView, InputRecord, InstitutionInsights, RankingEntry, ScoreEngine,
    WeightConfig,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

#[derive(Debug, Deserialize)]
pub(crate) struct ScoreRequest {
    pub(crate) records: Vec<InputRecord>,
    #[serde(default)]
    pub(crate) weights: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScoreResponse {
    pub(crate) generated_at: DateTime<Utc>,
    pub(crate) weights: WeightConfig,
    pub(crate) rankings: Vec<RankingEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct InsightsRequest {
    pub(crate) records: Vec<InputRecord>,
    pub(crate) institution: String,
    #[serde(default)]
    pub(crate) weights: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CompareRequest {
    pub(crate) records: Vec<InputRecord>,
    pub(crate) institutions: Vec<String>,
    #[serde(default)]
    pub(crate) weights: Option<serde_json::Value>,
}

pub(crate) fn cohort_router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/cohort/score", post(score_endpoint))
        .route("/api/v1/cohort/insights", post(insights_endpoint))
        .route("/api/v1/cohort/compare", post(compare_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Request weights win over the server's provider; either way they decode leniently.
fn resolve_weights(state: &AppState, requested: Option<&serde_json::Value>) -> WeightConfig {
    match requested {
        Some(value) => WeightConfig::from_json_value(value),
        None => state.weights.weights(),
    }
}

fn score_cohort(weights: WeightConfig, records: Vec<InputRecord>) -> CohortReport {
    let cohort = merge_records(records);
    let results = ScoreEngine::new(weights).score(&cohort);
    CohortReport::from_results(results)
}

pub(crate) async fn score_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<ScoreRequest>,
) -> Json<ScoreResponse> {
    let ScoreRequest { records, weights } = payload;
    let weights = resolve_weights(&state, weights.as_ref());

    let report = score_cohort(weights, records);
    info!(cohort_size = report.len(), "scored cohort");

    Json(ScoreResponse {
        generated_at: Utc::now(),
        weights,
        rankings: report.into_entries(),
    })
}

pub(crate) async fn insights_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<InsightsRequest>,
) -> Result<Json<InstitutionInsights>, AppError> {
    let InsightsRequest {
        records,
        institution,
        weights,
    } = payload;
    let weights = resolve_weights(&state, weights.as_ref());

    let report = score_cohort(weights, records);
    report
        .insights(&institution)
        .map(Json)
        .ok_or(AppError::UnknownInstitution(institution))
}

pub(crate) async fn compare_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<CompareRequest>,
) -> Json<ComparisonView> {
    let CompareRequest {
        records,
        institutions,
        weights,
    } = payload;
    let weights = resolve_weights(&state, weights.as_ref());

    let report = score_cohort(weights, records);
    Json(report.compare(&institutions))
}
