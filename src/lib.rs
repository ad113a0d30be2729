//! # Hilo
//!
//! Read-only HTTP query service over a fixed climate-observation dataset:
//! weather station metadata plus daily temperature and precipitation
//! measurements stored in a single SQLite file.
//!
//! ## Features
//!
//! - **Aggregation endpoints**: precipitation history, station list, and
//!   min/avg/max temperature statistics over validated date ranges
//! - **Dataset-relative recency**: "trailing year" windows are anchored to
//!   the newest recorded date, not the wall clock
//! - **Strict date validation**: descriptive, distinct errors for malformed
//!   dates, out-of-bounds dates, and reversed ranges
//! - **Lock-free request path**: bounds are resolved once at startup and the
//!   dataset is never written, so handlers share plain read-only state
//!
//! ## Modules
//!
//! - [`store`]: typed, read-only access to the dataset file
//! - [`climate`]: bounds resolution, date validation, aggregation engine
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hilo::climate::{ClimateEngine, DateBounds};
//! use hilo::store::Dataset;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Arc::new(Dataset::open(Path::new("climate.sqlite"))?);
//!     let bounds = DateBounds::resolve(&dataset)?;
//!     let engine = ClimateEngine::new(Arc::clone(&dataset));
//!
//!     let series = engine.precipitation_by_date(&bounds.trailing_year())?;
//!     println!("{} rainy-season entries", series.len());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod climate;
pub mod config;
pub mod store;

// Re-export top-level types for convenience
pub use api::{build_router, serve, ApiError, ApiResult, AppState};
pub use climate::{
    ClimateEngine, DataError, DateBounds, DateRange, PrecipitationSeries, RangeOrderError,
    TemperatureSeries, TemperatureStats, ValidationError,
};
pub use config::{ApiConfig, Config, ConfigError};
pub use store::{Dataset, Measurement, Station, StationId, StoreError, StoreResult};
