//! Measurement store
//!
//! Read-only access to the persisted climate dataset. The schema is fixed
//! and versioned with the dataset file, so records are statically typed and
//! nothing is discovered at runtime. The store exposes the small set of
//! filter/group/aggregate primitives the query engine is built on.

pub mod dataset;
pub mod error;
pub mod records;

pub use dataset::Dataset;
pub use error::{StoreError, StoreResult};
pub use records::{Measurement, Station, StationId};
