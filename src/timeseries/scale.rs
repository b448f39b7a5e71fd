//! Unit scaling for time series.

use crate::error::VernierError;
use crate::timeseries::TimeSeries;
use crate::units::{
    convert_duration, convert_rate, convert_size, DurationUnit, RateUnit, SizeUnit, Unit,
    ValueType,
};

/// Receives non-fatal diagnostics from the scaler.
pub trait AnomalyReporter {
    /// Record one diagnostic message.
    fn report(&self, message: &str);
}

/// Default reporter; forwards to the `tracing` error stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl AnomalyReporter for TracingReporter {
    fn report(&self, message: &str) {
        tracing::error!("{message}");
    }
}

/// Fallbacks applied when a series is missing type or unit metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalerConfig {
    /// Type assumed when `meta.value_type` is absent.
    pub fallback_type: ValueType,
    /// Source unit assumed for a duration series without one.
    pub fallback_duration_unit: DurationUnit,
    /// Source unit assumed for a size series without one.
    pub fallback_size_unit: SizeUnit,
    /// Source unit assumed for a rate series without one.
    pub fallback_rate_unit: RateUnit,
}

impl Default for ScalerConfig {
    fn default() -> Self {
        Self {
            fallback_type: ValueType::Number,
            fallback_duration_unit: DurationUnit::Millisecond,
            fallback_size_unit: SizeUnit::Byte,
            fallback_rate_unit: RateUnit::PerSecond,
        }
    }
}

/// Scale a time series into `destination` with the default fallbacks and
/// the `tracing` reporter.
pub fn scale_time_series_data(series: TimeSeries, destination: Unit) -> TimeSeries {
    scale_time_series_data_with(series, destination, &ScalerConfig::default(), &TracingReporter)
}

/// Scale a time series into `destination`.
///
/// A series that does not carry unit-convertible values, or that is already
/// in the destination unit, comes back untouched without allocation. A
/// destination from the wrong unit family is reported through `reporter` and
/// the series also comes back untouched: the conversion is skipped, never
/// silently wrong. Missing samples stay missing and timestamps are
/// unchanged; on success `meta.value_unit` becomes the destination unit.
pub fn scale_time_series_data_with(
    series: TimeSeries,
    destination: Unit,
    config: &ScalerConfig,
    reporter: &dyn AnomalyReporter,
) -> TimeSeries {
    let source_type = series.meta.value_type.unwrap_or(config.fallback_type);

    // Counts, dates, and other non-measurements are left alone.
    if !source_type.is_unit_convertible() {
        return series;
    }

    let source_unit = series.meta.value_unit;
    if source_unit == Some(destination) {
        return series;
    }

    // One converter per call, bound to source and destination units. A
    // source unit from the wrong family falls back to the family default.
    let convert: Box<dyn Fn(f64) -> f64> = match (source_type, destination) {
        (ValueType::Duration, Unit::Duration(to)) => {
            let from = match source_unit {
                Some(Unit::Duration(unit)) => unit,
                _ => config.fallback_duration_unit,
            };
            Box::new(move |value| convert_duration(value, from, to))
        }
        (ValueType::Size, Unit::Size(to)) => {
            let from = match source_unit {
                Some(Unit::Size(unit)) => unit,
                _ => config.fallback_size_unit,
            };
            Box::new(move |value| convert_size(value, from, to))
        }
        (ValueType::Rate, Unit::Rate(to)) => {
            let from = match source_unit {
                Some(Unit::Rate(unit)) => unit,
                _ => config.fallback_rate_unit,
            };
            Box::new(move |value| convert_rate(value, from, to))
        }
        _ => {
            let error = VernierError::InvalidConversion {
                source_type: source_type.to_string(),
                source_unit: source_unit.map_or_else(|| "none".to_string(), |unit| unit.to_string()),
                destination_unit: destination.to_string(),
            };
            reporter.report(&error.to_string());
            return series;
        }
    };

    let mut series = series;
    for sample in &mut series.values {
        sample.value = sample.value.map(&convert);
    }
    series.meta.value_type = Some(source_type);
    series.meta.value_unit = Some(destination);
    series
}
