//! Size units.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::VernierError;

/// A size unit.
///
/// The canonical base unit is the byte. The power-of-2 family (kibibyte,
/// mebibyte, ...) and the power-of-10 family (kilobyte, megabyte, ...) are
/// distinct units and never aliased to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeUnit {
    /// One eighth of a byte.
    Bit,
    /// One byte.
    Byte,
    /// 2^10 bytes.
    Kibibyte,
    /// 10^3 bytes.
    Kilobyte,
    /// 2^20 bytes.
    Mebibyte,
    /// 10^6 bytes.
    Megabyte,
    /// 2^30 bytes.
    Gibibyte,
    /// 10^9 bytes.
    Gigabyte,
    /// 2^40 bytes.
    Tebibyte,
    /// 10^12 bytes.
    Terabyte,
    /// 2^50 bytes.
    Pebibyte,
    /// 10^15 bytes.
    Petabyte,
    /// 2^60 bytes.
    Exbibyte,
    /// 10^18 bytes.
    Exabyte,
}

impl SizeUnit {
    /// All size units, smallest first within each family.
    pub const ALL: [Self; 14] = [
        Self::Bit,
        Self::Byte,
        Self::Kibibyte,
        Self::Kilobyte,
        Self::Mebibyte,
        Self::Megabyte,
        Self::Gibibyte,
        Self::Gigabyte,
        Self::Tebibyte,
        Self::Terabyte,
        Self::Pebibyte,
        Self::Petabyte,
        Self::Exbibyte,
        Self::Exabyte,
    ];

    /// Bytes per one of this unit.
    pub fn factor(self) -> f64 {
        match self {
            Self::Bit => 0.125,
            Self::Byte => 1.0,
            Self::Kibibyte => 1_024.0,
            Self::Kilobyte => 1e3,
            Self::Mebibyte => 1_048_576.0,
            Self::Megabyte => 1e6,
            Self::Gibibyte => 1_073_741_824.0,
            Self::Gigabyte => 1e9,
            Self::Tebibyte => 1_099_511_627_776.0,
            Self::Terabyte => 1e12,
            Self::Pebibyte => 1_125_899_906_842_624.0,
            Self::Petabyte => 1e15,
            Self::Exbibyte => 1_152_921_504_606_846_976.0,
            Self::Exabyte => 1e18,
        }
    }

    /// Canonical unit string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bit => "bit",
            Self::Byte => "byte",
            Self::Kibibyte => "kibibyte",
            Self::Kilobyte => "kilobyte",
            Self::Mebibyte => "mebibyte",
            Self::Megabyte => "megabyte",
            Self::Gibibyte => "gibibyte",
            Self::Gigabyte => "gigabyte",
            Self::Tebibyte => "tebibyte",
            Self::Terabyte => "terabyte",
            Self::Pebibyte => "pebibyte",
            Self::Petabyte => "petabyte",
            Self::Exbibyte => "exbibyte",
            Self::Exabyte => "exabyte",
        }
    }
}

impl std::fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SizeUnit {
    type Err = VernierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|unit| unit.as_str() == s)
            .ok_or_else(|| VernierError::unknown_unit("size unit", s))
    }
}

impl Serialize for SizeUnit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SizeUnit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Convert a size value between units, pivoting through bytes.
pub fn convert_size(value: f64, from: SizeUnit, to: SizeUnit) -> f64 {
    value * (from.factor() / to.factor())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_to_binary_multiples() {
        assert_eq!(convert_size(2_048.0, SizeUnit::Byte, SizeUnit::Kibibyte), 2.0);
        assert_eq!(convert_size(1.0, SizeUnit::Gibibyte, SizeUnit::Mebibyte), 1_024.0);
    }

    #[test]
    fn binary_and_decimal_families_stay_distinct() {
        assert_eq!(convert_size(1.0, SizeUnit::Kibibyte, SizeUnit::Kilobyte), 1.024);
    }

    #[test]
    fn bits_to_bytes() {
        assert_eq!(convert_size(8.0, SizeUnit::Bit, SizeUnit::Byte), 1.0);
    }

    #[test]
    fn parses_unit_strings() {
        assert_eq!("mebibyte".parse::<SizeUnit>().unwrap(), SizeUnit::Mebibyte);
        assert!("parsec".parse::<SizeUnit>().is_err());
    }
}
