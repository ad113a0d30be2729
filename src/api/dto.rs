//! Data Transfer Objects
//!
//! Response types for the non-aggregation endpoints. The aggregation
//! endpoints serialize core types (series maps, the stats triple) directly.

use chrono::NaiveDate;
use serde::Serialize;

/// Full health status response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "healthy" or "unhealthy"
    pub status: String,
    /// "ok" or "error"
    pub dataset: String,
    pub uptime_seconds: u64,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<DatasetSummary>,
}

/// Dataset coverage summary included in the full health response
#[derive(Debug, Serialize)]
pub struct DatasetSummary {
    pub oldest: NaiveDate,
    pub newest: NaiveDate,
    pub stations: usize,
    pub measurements: u64,
}
