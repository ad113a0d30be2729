//! Dataset - read-only SQLite access to the climate observations
//!
//! The dataset file holds two tables:
//!
//! ```sql
//! station     (id INTEGER, station TEXT, name TEXT,
//!              latitude REAL, longitude REAL, elevation REAL)
//! measurement (id INTEGER, station TEXT, date TEXT, prcp REAL, tobs REAL)
//! ```
//!
//! Dates are stored as `YYYY-MM-DD` text, so lexicographic comparison in SQL
//! matches calendar order. The file is opened read-only and never mutated;
//! every method is a short synchronous query.

use crate::store::error::{StoreError, StoreResult};
use crate::store::records::{Measurement, Station, StationId};
use chrono::NaiveDate;
use rusqlite::{params, Connection, OpenFlags};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// Handle to the persisted climate dataset.
///
/// `Connection` is `Send` but not `Sync`, so the handle guards it with a
/// mutex. Queries are short reads; holders never block on anything but the
/// query itself.
pub struct Dataset {
    conn: Mutex<Connection>,
    path: PathBuf,
}

impl Dataset {
    /// Open a dataset file read-only.
    pub fn open(path: &Path) -> StoreResult<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| StoreError::Open {
            path: path.to_path_buf(),
            source: e,
        })?;

        conn.execute_batch("PRAGMA query_only = ON;")?;

        Ok(Self {
            conn: Mutex::new(conn),
            path: path.to_path_buf(),
        })
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| StoreError::Lock(e.to_string()))
    }

    /// Earliest and latest measurement date across all stations.
    ///
    /// Returns `None` when the measurement table is empty.
    pub fn date_bounds(&self) -> StoreResult<Option<(NaiveDate, NaiveDate)>> {
        let conn = self.lock()?;
        let bounds: (Option<NaiveDate>, Option<NaiveDate>) = conn.query_row(
            "SELECT MIN(date), MAX(date) FROM measurement",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;

        match bounds {
            (Some(oldest), Some(newest)) => Ok(Some((oldest, newest))),
            _ => Ok(None),
        }
    }

    /// All station records, in store order.
    pub fn stations(&self) -> StoreResult<Vec<Station>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare_cached(
            "SELECT station, name, latitude, longitude, elevation FROM station",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(Station {
                id: StationId(row.get(0)?),
                name: row.get(1)?,
                latitude: row.get(2)?,
                longitude: row.get(3)?,
                elevation: row.get(4)?,
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(StoreError::from)
    }

    /// Measurements with `start <= date <= end`, optionally restricted to a
    /// single station. Rows come back in store iteration order.
    pub fn measurements_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        station: Option<&StationId>,
    ) -> StoreResult<Vec<Measurement>> {
        let conn = self.lock()?;

        fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Measurement> {
            Ok(Measurement {
                station_id: StationId(row.get(0)?),
                date: row.get(1)?,
                precipitation: row.get(2)?,
                temperature: row.get(3)?,
            })
        }

        let rows = match station {
            Some(id) => {
                let mut stmt = conn.prepare_cached(
                    "SELECT station, date, prcp, tobs FROM measurement
                     WHERE date BETWEEN ?1 AND ?2 AND station = ?3",
                )?;
                let rows = stmt.query_map(params![start, end, id.as_str()], map_row)?;
                rows.collect::<Result<Vec<_>, _>>()?
            }
            None => {
                let mut stmt = conn.prepare_cached(
                    "SELECT station, date, prcp, tobs FROM measurement
                     WHERE date BETWEEN ?1 AND ?2",
                )?;
                let rows = stmt.query_map(params![start, end], map_row)?;
                rows.collect::<Result<Vec<_>, _>>()?
            }
        };

        Ok(rows)
    }

    /// Measurement counts grouped by station, most active first.
    ///
    /// Ties are broken by ascending station id so repeated calls against the
    /// same snapshot always come back in the same order.
    pub fn station_activity(&self) -> StoreResult<Vec<(StationId, u64)>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare_cached(
            "SELECT station, COUNT(*) AS observations FROM measurement
             GROUP BY station
             ORDER BY observations DESC, station ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok((StationId(row.get(0)?), row.get::<_, u64>(1)?))
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(StoreError::from)
    }

    /// Total number of measurement rows.
    pub fn measurement_count(&self) -> StoreResult<u64> {
        let conn = self.lock()?;
        let count: u64 = conn.query_row("SELECT COUNT(*) FROM measurement", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Path the dataset was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Create a small dataset file with the fixed two-table schema.
    fn create_fixture(path: &Path, rows: &[(&str, &str, Option<f64>, f64)]) {
        let conn = Connection::open(path).unwrap();
        conn.execute_batch(
            "CREATE TABLE station (
                id INTEGER PRIMARY KEY,
                station TEXT NOT NULL,
                name TEXT NOT NULL,
                latitude REAL, longitude REAL, elevation REAL
             );
             CREATE TABLE measurement (
                id INTEGER PRIMARY KEY,
                station TEXT NOT NULL,
                date TEXT NOT NULL,
                prcp REAL,
                tobs REAL NOT NULL
             );
             INSERT INTO station (station, name, latitude, longitude, elevation) VALUES
                ('USC00519397', 'WAIKIKI 717.2, HI US', 21.2716, -157.8168, 3.0),
                ('USC00519281', 'WAIHEE 837.5, HI US', 21.4517, -157.8489, 32.9);",
        )
        .unwrap();

        for (station, date, prcp, tobs) in rows {
            conn.execute(
                "INSERT INTO measurement (station, date, prcp, tobs) VALUES (?1, ?2, ?3, ?4)",
                params![station, date, prcp, tobs],
            )
            .unwrap();
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempdir().unwrap();
        let result = Dataset::open(&dir.path().join("nope.sqlite"));
        assert!(matches!(result, Err(StoreError::Open { .. })));
    }

    #[test]
    fn test_date_bounds() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("climate.sqlite");
        create_fixture(
            &path,
            &[
                ("USC00519397", "2016-01-05", Some(0.1), 71.0),
                ("USC00519281", "2017-08-23", None, 79.0),
                ("USC00519397", "2010-01-01", Some(0.0), 65.0),
            ],
        );

        let dataset = Dataset::open(&path).unwrap();
        let (oldest, newest) = dataset.date_bounds().unwrap().unwrap();
        assert_eq!(oldest, date("2010-01-01"));
        assert_eq!(newest, date("2017-08-23"));
    }

    #[test]
    fn test_date_bounds_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("climate.sqlite");
        create_fixture(&path, &[]);

        let dataset = Dataset::open(&path).unwrap();
        assert!(dataset.date_bounds().unwrap().is_none());
    }

    #[test]
    fn test_stations() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("climate.sqlite");
        create_fixture(&path, &[]);

        let dataset = Dataset::open(&path).unwrap();
        let stations = dataset.stations().unwrap();
        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].id.as_str(), "USC00519397");
        assert_eq!(stations[0].name, "WAIKIKI 717.2, HI US");
        assert_eq!(stations[1].latitude, Some(21.4517));
    }

    #[test]
    fn test_measurements_in_range_inclusive() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("climate.sqlite");
        create_fixture(
            &path,
            &[
                ("USC00519397", "2017-08-01", Some(0.0), 78.0),
                ("USC00519397", "2017-08-02", Some(0.05), 77.0),
                ("USC00519397", "2017-08-03", None, 79.0),
                ("USC00519397", "2017-08-04", Some(0.1), 80.0),
            ],
        );

        let dataset = Dataset::open(&path).unwrap();
        let rows = dataset
            .measurements_in_range(date("2017-08-02"), date("2017-08-03"), None)
            .unwrap();

        // Both endpoints included
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, date("2017-08-02"));
        assert_eq!(rows[1].precipitation, None);
    }

    #[test]
    fn test_measurements_in_range_by_station() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("climate.sqlite");
        create_fixture(
            &path,
            &[
                ("USC00519397", "2017-08-01", Some(0.0), 78.0),
                ("USC00519281", "2017-08-01", Some(0.3), 74.0),
            ],
        );

        let dataset = Dataset::open(&path).unwrap();
        let station = StationId::new("USC00519281");
        let rows = dataset
            .measurements_in_range(date("2017-08-01"), date("2017-08-31"), Some(&station))
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].station_id, station);
        assert_eq!(rows[0].temperature, 74.0);
    }

    #[test]
    fn test_station_activity_ordering() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("climate.sqlite");
        create_fixture(
            &path,
            &[
                ("USC00519397", "2017-08-01", None, 78.0),
                ("USC00519281", "2017-08-01", None, 74.0),
                ("USC00519281", "2017-08-02", None, 75.0),
            ],
        );

        let dataset = Dataset::open(&path).unwrap();
        let activity = dataset.station_activity().unwrap();
        assert_eq!(activity.len(), 2);
        assert_eq!(activity[0].0.as_str(), "USC00519281");
        assert_eq!(activity[0].1, 2);
    }

    #[test]
    fn test_station_activity_tie_break() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("climate.sqlite");
        // Equal counts: the lower station id must come first
        create_fixture(
            &path,
            &[
                ("USC00519397", "2017-08-01", None, 78.0),
                ("USC00519281", "2017-08-01", None, 74.0),
            ],
        );

        let dataset = Dataset::open(&path).unwrap();
        let activity = dataset.station_activity().unwrap();
        assert_eq!(activity[0].0.as_str(), "USC00519281");
        assert_eq!(activity[1].0.as_str(), "USC00519397");
    }

    #[test]
    fn test_measurement_count() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("climate.sqlite");
        create_fixture(
            &path,
            &[
                ("USC00519397", "2017-08-01", None, 78.0),
                ("USC00519281", "2017-08-01", None, 74.0),
            ],
        );

        let dataset = Dataset::open(&path).unwrap();
        assert_eq!(dataset.measurement_count().unwrap(), 2);
    }
}
