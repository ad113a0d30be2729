//! Temperature Observations Route
//!
//! - GET /api/v1.0/tobs - Temperature by date over the trailing year for
//!   the most active station

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::climate::TemperatureSeries;

/// GET /api/v1.0/tobs
///
/// JSON object mapping date to temperature observation over the 365-day
/// window ending at the dataset's newest date, restricted to the station
/// with the most measurements.
pub async fn trailing_year_tobs(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<TemperatureSeries>> {
    let station = state.engine.most_active_station()?;
    let range = state.bounds.trailing_year();

    tracing::debug!(station = %station, "Serving trailing-year temperature observations");

    let series = state
        .engine
        .temperature_by_date_for_station(&station, &range)?;
    Ok(Json(series))
}
