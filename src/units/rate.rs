//! Rate units.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::VernierError;

/// A rate unit (quantity per time).
///
/// The canonical base unit is per-second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RateUnit {
    /// Events per second.
    PerSecond,
    /// Events per minute.
    PerMinute,
    /// Events per hour.
    PerHour,
}

impl RateUnit {
    /// All rate units, fastest first.
    pub const ALL: [Self; 3] = [Self::PerSecond, Self::PerMinute, Self::PerHour];

    /// Events-per-second equivalent of one of this unit.
    pub fn factor(self) -> f64 {
        match self {
            Self::PerSecond => 1.0,
            Self::PerMinute => 1.0 / 60.0,
            Self::PerHour => 1.0 / 3_600.0,
        }
    }

    /// Canonical unit string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PerSecond => "1/second",
            Self::PerMinute => "1/minute",
            Self::PerHour => "1/hour",
        }
    }

    /// Short display label, appended verbatim to formatted values.
    pub fn label(self) -> &'static str {
        match self {
            Self::PerSecond => "/s",
            Self::PerMinute => "/min",
            Self::PerHour => "/hr",
        }
    }
}

impl std::fmt::Display for RateUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RateUnit {
    type Err = VernierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|unit| unit.as_str() == s)
            .ok_or_else(|| VernierError::unknown_unit("rate unit", s))
    }
}

impl Serialize for RateUnit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RateUnit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Convert a rate value between units, pivoting through per-second.
pub fn convert_rate(value: f64, from: RateUnit, to: RateUnit) -> f64 {
    value * (from.factor() / to.factor())
}
