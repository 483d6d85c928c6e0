use crate::cli::ServeArgs;
use crate::infra::{weight_provider, AppState};
use crate::routes::cohort_router;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use nirf_score::config::AppConfig;
use nirf_score::error::AppError;
use nirf_score::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(weights) = args.weights.take() {
        config.scoring.weights_path = Some(weights);
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        weights: weight_provider(config.scoring.weights_path.clone()),
    };

    let app = cohort_router()
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "cohort scoring service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
