//! Error types for Vernier.
//!
//! This module provides a unified error handling approach using `thiserror`.

use thiserror::Error;

/// Result type alias for Vernier operations.
pub type Result<T> = std::result::Result<T, VernierError>;

/// Errors that can occur in Vernier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VernierError {
    /// A unit string did not match any unit in the family.
    #[error("Unknown {family} unit: {unit}")]
    UnknownUnit {
        family: &'static str,
        unit: String,
    },

    /// A time series was asked to convert into a unit from the wrong family.
    ///
    /// This is never raised to the caller; the scaler formats it through the
    /// anomaly reporter and returns the series unchanged.
    #[error("Attempted invalid time series conversion from {source_type} in {source_unit} to {destination_unit}")]
    InvalidConversion {
        source_type: String,
        source_unit: String,
        destination_unit: String,
    },
}

impl VernierError {
    /// Create an UnknownUnit error.
    pub fn unknown_unit(family: &'static str, unit: impl Into<String>) -> Self {
        Self::UnknownUnit {
            family,
            unit: unit.into(),
        }
    }
}
