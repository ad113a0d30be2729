//! Query engine error types
//!
//! Two families: `DataError` is server-side (the dataset itself is unusable
//! for the request), `ValidationError` and `RangeOrderError` are client-side
//! and carry the full human-readable explanation in their `Display` output.
//! Validation failures are ordinary return values, never panics, and never
//! abort the process.

use crate::store::StoreError;
use chrono::NaiveDate;
use thiserror::Error;

/// Server-side failures signalling a data-integrity problem.
#[derive(Error, Debug)]
pub enum DataError {
    /// No measurements exist, so no date bounds can be formed
    #[error("Dataset holds no measurements; date bounds cannot be resolved")]
    EmptyDataset,

    /// No measurements exist, so no station activity can be ranked
    #[error("Dataset holds no measurements; no most-active station exists")]
    NoStations,

    /// Underlying store query failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Client-side failures for user-supplied dates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Input does not parse as a calendar date
    #[error(
        "'{input}' is not a recognized date.\n\
         Accepted formats:\n\
           yyyy-m-d\n\
           yyyy-mm-d\n\
           yyyy-m-dd\n\
           yyyy-mm-dd"
    )]
    Malformed { input: String },

    /// Parsed date falls outside the dataset's coverage
    #[error("Date {date} is outside the dataset bounds {oldest}..{newest}")]
    OutOfRange {
        date: NaiveDate,
        oldest: NaiveDate,
        newest: NaiveDate,
    },
}

/// A two-date query where the end precedes the start.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("End date {end} precedes start date {start}; the range must run oldest to newest")]
pub struct RangeOrderError {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_malformed_lists_all_formats() {
        let err = ValidationError::Malformed {
            input: "2017-13-01".to_string(),
        };
        let msg = err.to_string();
        for variant in ["yyyy-m-d", "yyyy-mm-d", "yyyy-m-dd", "yyyy-mm-dd"] {
            assert!(msg.contains(variant), "missing {variant} in: {msg}");
        }
    }

    #[test]
    fn test_out_of_range_names_bounds() {
        let err = ValidationError::OutOfRange {
            date: date("2017-08-24"),
            oldest: date("2010-01-01"),
            newest: date("2017-08-23"),
        };
        assert!(err.to_string().contains("2010-01-01..2017-08-23"));
    }

    #[test]
    fn test_range_order_names_both_dates() {
        let err = RangeOrderError {
            start: date("2017-08-22"),
            end: date("2017-08-01"),
        };
        let msg = err.to_string();
        assert!(msg.contains("2017-08-22"));
        assert!(msg.contains("2017-08-01"));
    }
}
