//! Time-series data model.

use serde::{Deserialize, Serialize};

use crate::units::{Unit, ValueType};

/// A single observation in a time series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Epoch timestamp in milliseconds.
    pub timestamp: i64,
    /// Observed value; `None` is a missing sample.
    pub value: Option<f64>,
}

impl Sample {
    /// Create a new sample.
    pub fn new(timestamp: i64, value: Option<f64>) -> Self {
        Self { timestamp, value }
    }
}

/// Metadata describing what the sample values measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesMeta {
    /// Kind of value the series carries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<ValueType>,
    /// Unit of the values; meaningful for duration/size/rate series and
    /// expected to belong to the family `value_type` implies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_unit: Option<Unit>,
}

/// An ordered sequence of samples plus value metadata.
///
/// Samples are ordered by timestamp ascending; spacing need not be even.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TimeSeries {
    /// Samples, ordered by timestamp ascending.
    pub values: Vec<Sample>,
    /// Value metadata.
    #[serde(default)]
    pub meta: TimeSeriesMeta,
}

impl TimeSeries {
    /// Create a new time series.
    pub fn new(values: Vec<Sample>, meta: TimeSeriesMeta) -> Self {
        Self { values, meta }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::units::DurationUnit;

    #[test]
    fn deserializes_the_upstream_json_shape() {
        let series: TimeSeries = serde_json::from_str(
            r#"{
                "values": [
                    {"timestamp": 0, "value": 1000.0},
                    {"timestamp": 1, "value": null}
                ],
                "meta": {"valueType": "duration", "valueUnit": "millisecond"}
            }"#,
        )
        .unwrap();

        assert_eq!(series.values, vec![Sample::new(0, Some(1000.0)), Sample::new(1, None)]);
        assert_eq!(series.meta.value_type, Some(ValueType::Duration));
        assert_eq!(series.meta.value_unit, Some(Unit::Duration(DurationUnit::Millisecond)));
    }

    #[test]
    fn missing_meta_defaults_to_none() {
        let series: TimeSeries = serde_json::from_str(r#"{"values": []}"#).unwrap();
        assert_eq!(series.meta, TimeSeriesMeta::default());
    }
}
