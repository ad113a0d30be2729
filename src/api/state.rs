//! Application State
//!
//! The read-only context injected into every handler: the dataset handle,
//! the bounds resolved once at startup, and the aggregation engine built on
//! top of them. Nothing here mutates after construction, so sharing is a
//! plain `Arc` with no locking beyond the dataset's own connection guard.

use crate::climate::{ClimateEngine, DateBounds};
use crate::config::ApiConfig;
use crate::store::Dataset;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
pub struct AppState {
    /// Dataset handle (read-only)
    pub dataset: Arc<Dataset>,
    /// Aggregation engine over the dataset
    pub engine: ClimateEngine,
    /// Date coverage, resolved before the listener binds
    pub bounds: DateBounds,
    /// API configuration
    pub config: ApiConfig,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(dataset: Arc<Dataset>, bounds: DateBounds, config: ApiConfig) -> Self {
        let engine = ClimateEngine::new(Arc::clone(&dataset));
        Self {
            dataset,
            engine,
            bounds,
            config,
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
