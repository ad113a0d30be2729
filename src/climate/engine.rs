//! Aggregation engine
//!
//! Builds the per-endpoint results from the store's primitives: dated
//! precipitation and temperature dictionaries, min/avg/max temperature
//! statistics, and the most-active-station ranking. Every operation is a
//! pure function of the dataset snapshot and its arguments.

use crate::climate::bounds::DateRange;
use crate::climate::error::DataError;
use crate::store::{Dataset, StationId};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Date-keyed precipitation values. Null precipitation readings are kept,
/// with a null value, matching what the dataset records.
pub type PrecipitationSeries = BTreeMap<NaiveDate, Option<f64>>;

/// Date-keyed temperature observations.
pub type TemperatureSeries = BTreeMap<NaiveDate, f64>;

/// Min/avg/max temperature over a filtered measurement set.
///
/// All three fields are `None` when the filtered set is empty: an empty
/// range yields an empty triple, never an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TemperatureStats {
    pub min: Option<f64>,
    pub avg: Option<f64>,
    pub max: Option<f64>,
}

impl TemperatureStats {
    /// The `[min, avg, max]` array shape the API serves.
    pub fn as_triple(&self) -> [Option<f64>; 3] {
        [self.min, self.avg, self.max]
    }
}

/// Read-only aggregation queries over a dataset snapshot.
pub struct ClimateEngine {
    dataset: Arc<Dataset>,
}

impl ClimateEngine {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    /// Precipitation by date over `range`, all stations.
    ///
    /// When several stations report on the same date, the last row in store
    /// iteration order wins (dictionary overwrite, not a per-date
    /// aggregate).
    pub fn precipitation_by_date(
        &self,
        range: &DateRange,
    ) -> Result<PrecipitationSeries, DataError> {
        let rows = self
            .dataset
            .measurements_in_range(range.start, range.end, None)?;

        let mut series = PrecipitationSeries::new();
        for m in rows {
            series.insert(m.date, m.precipitation);
        }
        Ok(series)
    }

    /// Temperature observations by date over `range` for one station, with
    /// the same last-write-wins dictionary semantics.
    pub fn temperature_by_date_for_station(
        &self,
        station: &StationId,
        range: &DateRange,
    ) -> Result<TemperatureSeries, DataError> {
        let rows = self
            .dataset
            .measurements_in_range(range.start, range.end, Some(station))?;

        let mut series = TemperatureSeries::new();
        for m in rows {
            series.insert(m.date, m.temperature);
        }
        Ok(series)
    }

    /// Min, arithmetic mean and max temperature over `range`, all stations,
    /// computed in a single pass.
    pub fn temperature_stats(&self, range: &DateRange) -> Result<TemperatureStats, DataError> {
        let rows = self
            .dataset
            .measurements_in_range(range.start, range.end, None)?;

        let mut count = 0u64;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for m in &rows {
            count += 1;
            sum += m.temperature;
            min = min.min(m.temperature);
            max = max.max(m.temperature);
        }

        if count == 0 {
            return Ok(TemperatureStats::default());
        }

        Ok(TemperatureStats {
            min: Some(min),
            avg: Some(sum / count as f64),
            max: Some(max),
        })
    }

    /// The station with the highest measurement count.
    ///
    /// The store ranks activity with ties broken by ascending station id, so
    /// repeated calls against the same snapshot always agree.
    pub fn most_active_station(&self) -> Result<StationId, DataError> {
        self.dataset
            .station_activity()?
            .into_iter()
            .next()
            .map(|(id, _)| id)
            .ok_or(DataError::NoStations)
    }
}
