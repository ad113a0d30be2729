//! Climate query core
//!
//! The self-contained query/aggregation logic behind every endpoint:
//!
//! - [`bounds`]: dataset date coverage, resolved once at startup
//! - [`validate`]: user-supplied date parsing against those bounds
//! - [`engine`]: aggregation queries and most-active-station selection
//!
//! Nothing in this module performs I/O beyond reading the store, and nothing
//! mutates shared state after startup, so concurrent requests need no
//! locking of their own.

pub mod bounds;
pub mod engine;
pub mod error;
pub mod validate;

pub use bounds::{DateBounds, DateRange};
pub use engine::{ClimateEngine, PrecipitationSeries, TemperatureSeries, TemperatureStats};
pub use error::{DataError, RangeOrderError, ValidationError};
pub use validate::parse_bounded_date;
