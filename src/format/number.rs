//! Abbreviated and dynamic-precision number formatting.

use crate::format::precision::{
    format_grouped, format_non_finite, format_plain, fraction_digits_for, round_to_places,
    to_precision, ABBREVIATION_STEPS,
};

/// Format a number with a magnitude abbreviation, e.g. 1500 -> "1.5k".
///
/// `maximum_significant_digits` caps how many significant digits survive
/// rounding. With `include_decimals` set, the formatted number keeps its
/// non-trailing-zero decimal places instead of collapsing to a truncated
/// quotient.
///
/// Total over `f64`: non-finite input renders as `"NaN"` / `"+Inf"` /
/// `"-Inf"`, zero renders as `"0"`, and nothing panics.
pub fn format_abbreviated_number(
    number: f64,
    maximum_significant_digits: Option<u32>,
    include_decimals: bool,
) -> String {
    if !number.is_finite() {
        return format_non_finite(number);
    }

    let prefix = if number < 0.0 { "-" } else { "" };
    let abs = number.abs();

    for (step, suffix) in ABBREVIATION_STEPS {
        let short_value = (abs / step).floor();
        if short_value <= 0.0 {
            continue;
        }
        let fits_bound = abs % step == 0.0;

        if !include_decimals && (short_value > 10.0 || fits_bound) {
            let rendered = match maximum_significant_digits {
                Some(digits) => format_plain(to_precision(short_value, digits)),
                None => format_plain(short_value),
            };
            return format!("{prefix}{rendered}{suffix}");
        }

        let places = maximum_significant_digits.unwrap_or(1).max(1);
        let mut scaled = round_to_places(abs / step, places);
        if let Some(digits) = maximum_significant_digits {
            scaled = to_precision(scaled, digits);
        }
        return format!("{prefix}{}{suffix}", format_grouped(scaled, places));
    }

    // Below the smallest step there is no suffix.
    match maximum_significant_digits {
        Some(digits) => {
            let capped = to_precision(number, digits);
            format_grouped(capped, fraction_digits_for(capped, digits))
        }
        None => format_grouped(number, 3),
    }
}

/// Format a number with an abbreviation and a significant-digit budget
/// derived from its order of magnitude, so small numbers keep more decimal
/// precision and large numbers keep fewer. E.g. 1000 -> "1k", 1234 -> "1.23k".
pub fn format_abbreviated_number_with_dynamic_precision(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return format_non_finite(value);
    }

    let log10 = value.abs().log10();
    // numbers less than 1 have a negative log10
    let num_digits = if log10 < 0.0 { 1 } else { log10.floor() as i64 + 1 };

    let max_step = ABBREVIATION_STEPS[0].0;

    // Above the largest step the budget tracks how far past it the value
    // sits; below, it tracks the digit count within the current step.
    let formatted_digits = if value > max_step {
        (value / max_step).log10().floor() as i64
    } else if num_digits % 3 == 0 {
        3
    } else {
        num_digits % 3
    };

    let maximum_significant_digits = (formatted_digits.max(0) + 2) as u32;
    format_abbreviated_number(value, Some(maximum_significant_digits), true)
}

/// Round to `max_fraction_digits` fraction digits (pass 2 for the usual
/// display) without forcing trailing zeros, widening the cap for values
/// below 1 so they keep at least one significant digit.
/// E.g. 0.0001234 -> "0.00012".
pub fn format_number_with_dynamic_decimal_points(value: f64, max_fraction_digits: u32) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return format_non_finite(value);
    }

    let exponent = value.abs().log10().floor() as i64;
    let maximum_fraction_digits = if exponent >= 0 {
        max_fraction_digits
    } else {
        exponent.unsigned_abs() as u32 + 1
    };

    format_grouped(value, maximum_fraction_digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_tracks_magnitude() {
        assert_eq!(format_abbreviated_number(999.0, None, false), "999");
        assert_eq!(format_abbreviated_number(1_000.0, None, false), "1k");
        assert_eq!(format_abbreviated_number(1_000_000.0, None, false), "1m");
        assert_eq!(format_abbreviated_number(1_000_000_000.0, None, false), "1b");
    }

    #[test]
    fn keeps_one_decimal_place_by_default() {
        assert_eq!(format_abbreviated_number(1_500.0, None, false), "1.5k");
        assert_eq!(format_abbreviated_number(2_340_000.0, None, false), "2.3m");
    }

    #[test]
    fn truncates_large_quotients() {
        assert_eq!(format_abbreviated_number(12_345.0, None, false), "12k");
        assert_eq!(format_abbreviated_number(1_239_000_000.0, None, false), "1.2b");
    }

    #[test]
    fn sign_is_a_leading_prefix() {
        assert_eq!(format_abbreviated_number(-1_500.0, None, false), "-1.5k");
        let positive = format_abbreviated_number(1_500.0, None, false);
        assert_eq!(format_abbreviated_number(-1_500.0, None, false), format!("-{positive}"));
    }

    #[test]
    fn zero_falls_through_all_steps() {
        assert_eq!(format_abbreviated_number(0.0, None, false), "0");
        assert_eq!(format_abbreviated_number(0.0, Some(3), true), "0");
    }

    #[test]
    fn significant_digit_cap_applies() {
        assert_eq!(format_abbreviated_number(1_234.0, Some(3), true), "1.23k");
        assert_eq!(format_abbreviated_number(999.1234, Some(2), false), "1,000");
    }

    #[test]
    fn non_finite_input_never_panics() {
        assert_eq!(format_abbreviated_number(f64::NAN, None, false), "NaN");
        assert_eq!(format_abbreviated_number(f64::INFINITY, Some(2), true), "+Inf");
        assert_eq!(format_abbreviated_number(f64::NEG_INFINITY, None, false), "-Inf");
    }

    #[test]
    fn dynamic_precision_scales_with_magnitude() {
        assert_eq!(format_abbreviated_number_with_dynamic_precision(0.0), "0");
        assert_eq!(format_abbreviated_number_with_dynamic_precision(1_000.0), "1k");
        assert_eq!(format_abbreviated_number_with_dynamic_precision(1_234.0), "1.23k");
        assert_eq!(format_abbreviated_number_with_dynamic_precision(0.1234), "0.123");
    }

    #[test]
    fn dynamic_precision_accepts_extremes() {
        assert_eq!(format_abbreviated_number_with_dynamic_precision(-1_500.0), "-1.5k");
        // Only asserts totality for very large input.
        let huge = format_abbreviated_number_with_dynamic_precision(1.5e18);
        assert!(huge.ends_with('b'));
    }

    #[test]
    fn dynamic_decimal_points_sentinels() {
        assert_eq!(format_number_with_dynamic_decimal_points(0.0, 2), "0");
        assert_eq!(format_number_with_dynamic_decimal_points(f64::INFINITY, 2), "+Inf");
        assert_eq!(format_number_with_dynamic_decimal_points(f64::NEG_INFINITY, 2), "-Inf");
        assert_eq!(format_number_with_dynamic_decimal_points(f64::NAN, 2), "NaN");
    }

    #[test]
    fn dynamic_decimal_points_widen_below_one() {
        assert_eq!(format_number_with_dynamic_decimal_points(0.0001234, 2), "0.00012");
        assert_eq!(format_number_with_dynamic_decimal_points(0.5, 2), "0.5");
    }

    #[test]
    fn dynamic_decimal_points_cap_above_one() {
        assert_eq!(format_number_with_dynamic_decimal_points(1234.5678, 2), "1,234.57");
        assert_eq!(format_number_with_dynamic_decimal_points(3.0, 2), "3");
    }
}
