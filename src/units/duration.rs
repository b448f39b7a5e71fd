//! Duration units.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::VernierError;

/// A duration unit.
///
/// The canonical base unit is the millisecond; all conversions pivot
/// through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DurationUnit {
    /// One billionth of a second.
    Nanosecond,
    /// One millionth of a second.
    Microsecond,
    /// One thousandth of a second.
    Millisecond,
    /// One second.
    Second,
    /// Sixty seconds.
    Minute,
    /// Sixty minutes.
    Hour,
    /// Twenty-four hours.
    Day,
    /// Seven days.
    Week,
    /// The average Gregorian month (30.4375 days).
    Month,
}

impl DurationUnit {
    /// All duration units, smallest first.
    pub const ALL: [Self; 9] = [
        Self::Nanosecond,
        Self::Microsecond,
        Self::Millisecond,
        Self::Second,
        Self::Minute,
        Self::Hour,
        Self::Day,
        Self::Week,
        Self::Month,
    ];

    /// Milliseconds per one of this unit.
    pub fn factor(self) -> f64 {
        match self {
            Self::Nanosecond => 1e-6,
            Self::Microsecond => 1e-3,
            Self::Millisecond => 1.0,
            Self::Second => 1_000.0,
            Self::Minute => 60_000.0,
            Self::Hour => 3_600_000.0,
            Self::Day => 86_400_000.0,
            Self::Week => 604_800_000.0,
            Self::Month => 2_629_800_000.0,
        }
    }

    /// Canonical unit string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Nanosecond => "nanosecond",
            Self::Microsecond => "microsecond",
            Self::Millisecond => "millisecond",
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

impl std::fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DurationUnit {
    type Err = VernierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|unit| unit.as_str() == s)
            .ok_or_else(|| VernierError::unknown_unit("duration unit", s))
    }
}

impl Serialize for DurationUnit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DurationUnit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Convert a duration value between units, pivoting through milliseconds.
pub fn convert_duration(value: f64, from: DurationUnit, to: DurationUnit) -> f64 {
    value * (from.factor() / to.factor())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn milliseconds_to_seconds() {
        assert_eq!(convert_duration(1_000.0, DurationUnit::Millisecond, DurationUnit::Second), 1.0);
        assert_eq!(convert_duration(500.0, DurationUnit::Millisecond, DurationUnit::Second), 0.5);
    }

    #[test]
    fn pivots_through_base_unit() {
        assert_eq!(convert_duration(2.0, DurationUnit::Hour, DurationUnit::Minute), 120.0);
        assert_eq!(convert_duration(1.0, DurationUnit::Week, DurationUnit::Day), 7.0);
    }

    #[test]
    fn round_trip_stays_within_tolerance() {
        let value = 1234.5678;
        let there = convert_duration(value, DurationUnit::Millisecond, DurationUnit::Month);
        let back = convert_duration(there, DurationUnit::Month, DurationUnit::Millisecond);
        assert!((value - back).abs() < 1e-9);
    }

    #[test]
    fn parses_unit_strings() {
        assert_eq!("minute".parse::<DurationUnit>().unwrap(), DurationUnit::Minute);
        assert!("lightyear".parse::<DurationUnit>().is_err());
    }
}
