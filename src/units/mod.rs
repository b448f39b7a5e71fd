//! Measurement unit families and conversions.
//!
//! Three independent, closed families — duration, size, and rate — each
//! pivot through a canonical base unit with a fixed multiplicative factor.
//! A conversion is always `value * (factor(from) / factor(to))`, never a
//! direct unit-to-unit table.

mod duration;
mod rate;
mod size;

pub use duration::{convert_duration, DurationUnit};
pub use rate::{convert_rate, RateUnit};
pub use size::{convert_size, SizeUnit};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::VernierError;

/// Kind of value a time series carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// Elapsed time; values carry a [`DurationUnit`].
    Duration,
    /// Data size; values carry a [`SizeUnit`].
    Size,
    /// Quantity per time; values carry a [`RateUnit`].
    Rate,
    /// Plain numbers (counts, scores); no unit.
    Number,
    /// Anything else (dates, strings, percentages); never converted.
    Other,
}

impl ValueType {
    /// Whether series of this type can be rescaled between units.
    pub fn is_unit_convertible(self) -> bool {
        matches!(self, Self::Duration | Self::Size | Self::Rate)
    }

    /// Canonical type string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Duration => "duration",
            Self::Size => "size",
            Self::Rate => "rate",
            Self::Number => "number",
            Self::Other => "other",
        }
    }

    /// Parse a type string; anything unrecognized maps to [`Self::Other`].
    pub fn from_name(s: &str) -> Self {
        match s {
            "duration" => Self::Duration,
            "size" => Self::Size,
            "rate" => Self::Rate,
            "number" => Self::Number,
            _ => Self::Other,
        }
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ValueType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ValueType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_name(&s))
    }
}

/// A unit from any of the convertible families.
///
/// Unit strings are disjoint across families, so a bare string like
/// `"millisecond"` or `"1/minute"` identifies its family on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// A duration unit.
    Duration(DurationUnit),
    /// A size unit.
    Size(SizeUnit),
    /// A rate unit.
    Rate(RateUnit),
}

impl Unit {
    /// Canonical unit string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Duration(unit) => unit.as_str(),
            Self::Size(unit) => unit.as_str(),
            Self::Rate(unit) => unit.as_str(),
        }
    }

    /// The value type this unit belongs to.
    pub fn value_type(self) -> ValueType {
        match self {
            Self::Duration(_) => ValueType::Duration,
            Self::Size(_) => ValueType::Size,
            Self::Rate(_) => ValueType::Rate,
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Unit {
    type Err = VernierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(unit) = s.parse::<DurationUnit>() {
            return Ok(Self::Duration(unit));
        }
        if let Ok(unit) = s.parse::<SizeUnit>() {
            return Ok(Self::Size(unit));
        }
        if let Ok(unit) = s.parse::<RateUnit>() {
            return Ok(Self::Rate(unit));
        }
        Err(VernierError::unknown_unit("unit", s))
    }
}

impl Serialize for Unit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_string_identifies_family() {
        assert_eq!("millisecond".parse::<Unit>().unwrap(), Unit::Duration(DurationUnit::Millisecond));
        assert_eq!("gibibyte".parse::<Unit>().unwrap(), Unit::Size(SizeUnit::Gibibyte));
        assert_eq!("1/hour".parse::<Unit>().unwrap(), Unit::Rate(RateUnit::PerHour));
        assert!("furlong".parse::<Unit>().is_err());
    }

    #[test]
    fn unit_round_trips_through_serde() {
        for s in ["second", "kilobyte", "1/second"] {
            let unit: Unit = serde_json::from_str(&format!("\"{s}\"")).unwrap();
            assert_eq!(serde_json::to_string(&unit).unwrap(), format!("\"{s}\""));
        }
    }

    #[test]
    fn unknown_value_type_maps_to_other() {
        assert_eq!(ValueType::from_name("date"), ValueType::Other);
        assert_eq!(ValueType::from_name("duration"), ValueType::Duration);
        assert!(!ValueType::Other.is_unit_convertible());
        assert!(ValueType::Rate.is_unit_convertible());
    }
}
