//! Hilo REST API
//!
//! HTTP API layer, built with Axum.
//!
//! # Endpoints
//!
//! ## Aggregations
//! - `GET /` - Plain-text route listing
//! - `GET /api/v1.0/precipitation` - Precipitation by date, trailing year
//! - `GET /api/v1.0/stations` - Station names
//! - `GET /api/v1.0/tobs` - Temperature by date, trailing year, most active station
//! - `GET /api/v1.0/:start` - `[min, avg, max]` temperature, start through newest
//! - `GET /api/v1.0/:start/:end` - `[min, avg, max]` temperature over a range
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use hilo::api::{serve, AppState};
//! use hilo::climate::DateBounds;
//! use hilo::config::ApiConfig;
//! use hilo::store::Dataset;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Arc::new(Dataset::open(Path::new("climate.sqlite"))?);
//!     let bounds = DateBounds::resolve(&dataset)?;
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(dataset, bounds, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ApiConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    // Static segments win over the date captures, so /precipitation and
    // friends are matched before /:start.
    let api_routes = Router::new()
        .route(
            "/precipitation",
            get(routes::precipitation::trailing_year_precipitation),
        )
        .route("/stations", get(routes::stations::list_stations))
        .route("/tobs", get(routes::tobs::trailing_year_tobs))
        .route("/:start", get(routes::stats::stats_from))
        .route("/:start/:end", get(routes::stats::stats_between));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::root::welcome))
        .nest("/api/v1.0", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Hilo API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Hilo API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
