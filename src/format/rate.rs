//! Rate formatting.

use crate::format::precision::{
    format_grouped_exact, format_non_finite, format_plain, fraction_digits_for, to_precision,
    ABBREVIATION_STEPS,
};
use crate::units::RateUnit;

/// Options for [`format_rate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateFormatOptions {
    /// Floor below which values display as `"<{minimum_value}{label}"`.
    pub minimum_value: f64,
    /// Significant digits to display, trailing zeros kept.
    pub significant_digits: u32,
}

impl Default for RateFormatOptions {
    fn default() -> Self {
        Self {
            minimum_value: 0.0,
            significant_digits: 3,
        }
    }
}

/// Format a throughput value with its rate-unit label, e.g. "1.50k/min".
///
/// Rate labels like "/min" are not part of any numeral system, so the label
/// is concatenated verbatim after compact-notation formatting. Zero is
/// special and renders as `"0"` plus the label; values at or below
/// `minimum_value` render as a floor indicator.
pub fn format_rate(value: f64, unit: RateUnit, options: RateFormatOptions) -> String {
    let label = unit.label();

    if value == 0.0 {
        return format!("0{label}");
    }
    if value <= options.minimum_value {
        return format!("<{}{label}", format_plain(options.minimum_value));
    }

    format!("{}{label}", format_compact(value, options.significant_digits))
}

/// Compact notation with a fixed significant-digit count.
fn format_compact(value: f64, significant_digits: u32) -> String {
    if !value.is_finite() {
        return format_non_finite(value);
    }

    let (scaled, suffix) = ABBREVIATION_STEPS
        .iter()
        .find(|(step, _)| value.abs() >= *step)
        .map_or((value, ""), |(step, suffix)| (value / step, *suffix));

    let capped = to_precision(scaled, significant_digits);
    format!(
        "{}{suffix}",
        format_grouped_exact(capped, fraction_digits_for(capped, significant_digits))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_special() {
        assert_eq!(format_rate(0.0, RateUnit::PerSecond, RateFormatOptions::default()), "0/s");
        assert_eq!(format_rate(0.0, RateUnit::PerHour, RateFormatOptions::default()), "0/hr");
    }

    #[test]
    fn fixed_significant_digits_keep_trailing_zeros() {
        assert_eq!(format_rate(0.5, RateUnit::PerSecond, RateFormatOptions::default()), "0.500/s");
        assert_eq!(format_rate(1.5, RateUnit::PerMinute, RateFormatOptions::default()), "1.50/min");
        assert_eq!(format_rate(740.0, RateUnit::PerSecond, RateFormatOptions::default()), "740/s");
    }

    #[test]
    fn compact_notation_above_a_thousand() {
        assert_eq!(format_rate(1_234.5, RateUnit::PerMinute, RateFormatOptions::default()), "1.23k/min");
        assert_eq!(format_rate(2_500_000.0, RateUnit::PerSecond, RateFormatOptions::default()), "2.50m/s");
    }

    #[test]
    fn floor_indicator_below_minimum() {
        let options = RateFormatOptions {
            minimum_value: 0.01,
            significant_digits: 3,
        };
        assert_eq!(format_rate(0.0001, RateUnit::PerSecond, options), "<0.01/s");
    }

    #[test]
    fn significant_digit_count_is_configurable() {
        let options = RateFormatOptions {
            minimum_value: 0.0,
            significant_digits: 2,
        };
        assert_eq!(format_rate(0.5, RateUnit::PerSecond, options), "0.50/s");
    }
}
