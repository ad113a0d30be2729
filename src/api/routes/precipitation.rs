//! Precipitation Route
//!
//! - GET /api/v1.0/precipitation - Precipitation by date over the trailing
//!   year, all stations

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::climate::PrecipitationSeries;

/// GET /api/v1.0/precipitation
///
/// JSON object mapping date to precipitation over the 365-day window ending
/// at the dataset's newest date. Null precipitation readings are kept as
/// null values.
pub async fn trailing_year_precipitation(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<PrecipitationSeries>> {
    let range = state.bounds.trailing_year();
    let series = state.engine.precipitation_by_date(&range)?;
    Ok(Json(series))
}
