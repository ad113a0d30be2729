//! Temperature Statistics Routes
//!
//! - GET /api/v1.0/{start} - min/avg/max from start through the newest date
//! - GET /api/v1.0/{start}/{end} - min/avg/max over an explicit range
//!
//! Both ends are inclusive. The body is a 3-element JSON array
//! `[min, avg, max]`; an empty range yields `[null, null, null]`.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::climate::{parse_bounded_date, DateRange};

/// GET /api/v1.0/{start}
///
/// Range runs from the validated start date through the dataset's newest
/// date.
pub async fn stats_from(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> ApiResult<Json<[Option<f64>; 3]>> {
    let start = parse_bounded_date(&start, &state.bounds)?;
    let range = DateRange::new(start, state.bounds.newest)?;

    let stats = state.engine.temperature_stats(&range)?;
    Ok(Json(stats.as_triple()))
}

/// GET /api/v1.0/{start}/{end}
///
/// Both dates are validated against the bounds before the order check, so a
/// malformed or out-of-range date reports its own error rather than a range
/// error.
pub async fn stats_between(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> ApiResult<Json<[Option<f64>; 3]>> {
    let start = parse_bounded_date(&start, &state.bounds)?;
    let end = parse_bounded_date(&end, &state.bounds)?;
    let range = DateRange::new(start, end)?;

    let stats = state.engine.temperature_stats(&range)?;
    Ok(Json(stats.as_triple()))
}
