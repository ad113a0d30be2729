//! Typed records for the fixed dataset schema.
//!
//! The dataset file carries exactly two tables, `station` and `measurement`.
//! The schema is versioned with the file, so the records are defined
//! statically rather than discovered at runtime.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a weather station (e.g. "USC00519281").
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(pub String);

impl StationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A fixed physical weather-observation location.
///
/// Latitude, longitude and elevation are carried from the schema but not
/// used by any aggregation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub elevation: Option<f64>,
}

/// One dated observation from a station.
///
/// Precipitation is nullable in the source data; temperature is always
/// present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    pub station_id: StationId,
    pub date: NaiveDate,
    pub precipitation: Option<f64>,
    pub temperature: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_id_display() {
        let id = StationId::new("USC00519281");
        assert_eq!(id.to_string(), "USC00519281");
        assert_eq!(id.as_str(), "USC00519281");
    }

    #[test]
    fn test_station_id_ordering() {
        let a = StationId::new("USC00511918");
        let b = StationId::new("USC00519281");
        assert!(a < b);
    }
}
