//! Time-series representation and unit scaling.
//!
//! This module holds the sample/series data model and the scaler that
//! rewrites a series from its source unit into a destination unit.

mod scale;
mod series;

pub use scale::{
    scale_time_series_data, scale_time_series_data_with, AnomalyReporter, ScalerConfig,
    TracingReporter,
};
pub use series::{Sample, TimeSeries, TimeSeriesMeta};
