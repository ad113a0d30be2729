//! Stations Route
//!
//! - GET /api/v1.0/stations - Names of every station in the dataset

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// GET /api/v1.0/stations
///
/// JSON array of station names, in store order.
pub async fn list_stations(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<String>>> {
    let names = state
        .dataset
        .stations()?
        .into_iter()
        .map(|s| s.name)
        .collect();
    Ok(Json(names))
}
