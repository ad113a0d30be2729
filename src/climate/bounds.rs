//! Date bounds and ranges
//!
//! The dataset's coverage is fixed for the process lifetime, so the bounds
//! are resolved exactly once at startup and handed to every request handler
//! as plain copied data. Nothing here mutates after that.

use crate::climate::error::{DataError, RangeOrderError};
use crate::store::Dataset;
use chrono::{Days, NaiveDate};
use serde::Serialize;

/// The `[oldest, newest]` date coverage of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateBounds {
    pub oldest: NaiveDate,
    pub newest: NaiveDate,
}

impl DateBounds {
    /// Resolve the bounds from the measurement store.
    ///
    /// Fails with [`DataError::EmptyDataset`] when the store holds no
    /// measurements; the process must refuse to serve rather than accept
    /// arbitrary dates against missing bounds.
    pub fn resolve(dataset: &Dataset) -> Result<Self, DataError> {
        match dataset.date_bounds()? {
            Some((oldest, newest)) => Ok(Self { oldest, newest }),
            None => Err(DataError::EmptyDataset),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.oldest && date <= self.newest
    }

    /// The 365-day window ending at the dataset's newest date.
    ///
    /// Anchored to the data, not to the wall clock: "recent" means recent
    /// relative to what was recorded.
    pub fn trailing_year(&self) -> DateRange {
        let start = self
            .newest
            .checked_sub_days(Days::new(365))
            .unwrap_or(self.oldest);
        DateRange {
            start,
            end: self.newest,
        }
    }
}

/// An inclusive date range with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Build a range, rejecting `end < start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, RangeOrderError> {
        if end < start {
            return Err(RangeOrderError { start, end });
        }
        Ok(Self { start, end })
    }
}
