//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (dataset is queryable)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::{DatasetSummary, HealthResponse};
use crate::api::state::AppState;

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Returns 200 if the dataset answers a trivial query.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    match state.dataset.measurement_count() {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!("Readiness check failed: {}", e);
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

/// GET /health
///
/// Full health status with a dataset coverage summary.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let summary = dataset_summary(&state);
    let dataset_ok = summary.is_some();

    Json(HealthResponse {
        status: if dataset_ok { "healthy" } else { "unhealthy" }.to_string(),
        dataset: if dataset_ok { "ok" } else { "error" }.to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        summary,
    })
}

fn dataset_summary(state: &AppState) -> Option<DatasetSummary> {
    let stations = state.dataset.stations().ok()?.len();
    let measurements = state.dataset.measurement_count().ok()?;

    Some(DatasetSummary {
        oldest: state.bounds.oldest,
        newest: state.bounds.newest,
        stations,
        measurements,
    })
}
