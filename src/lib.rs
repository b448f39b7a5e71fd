//! Vernier - numeric formatting and time-series unit scaling.
//!
//! Vernier is the small, deterministic value-presentation layer of a
//! data-visualization frontend: abbreviated, percentage, and rate formatting
//! for raw numbers, plus unit rescaling for time series of durations, sizes,
//! and rates.
//!
//! # Features
//!
//! - Abbreviated number formatting (1500 -> "1.5k") with configurable
//!   significant-digit caps
//! - Percentage and rate formatting with floor indicators for near-zero values
//! - Closed duration/size/rate unit families pivoting through canonical
//!   base units
//! - Time-series scaling that never converts missing samples and never
//!   silently mangles an invalid conversion
//!
//! # Example
//!
//! ```
//! use vernier::format::format_abbreviated_number;
//! use vernier::timeseries::{scale_time_series_data, Sample, TimeSeries, TimeSeriesMeta};
//! use vernier::units::{DurationUnit, Unit, ValueType};
//!
//! assert_eq!(format_abbreviated_number(1500.0, None, false), "1.5k");
//!
//! let series = TimeSeries::new(
//!     vec![Sample::new(0, Some(1000.0)), Sample::new(1, None)],
//!     TimeSeriesMeta {
//!         value_type: Some(ValueType::Duration),
//!         value_unit: Some(Unit::Duration(DurationUnit::Millisecond)),
//!     },
//! );
//! let scaled = scale_time_series_data(series, Unit::Duration(DurationUnit::Second));
//! assert_eq!(scaled.values[0].value, Some(1.0));
//! assert_eq!(scaled.values[1].value, None);
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod error;
pub mod format;
pub mod timeseries;
pub mod units;

pub use error::{Result, VernierError};
