//! Percentage formatting.

use crate::format::precision::{format_grouped, format_non_finite, format_plain, to_precision};

/// Format a fraction (conceptually in [0, 1]) as a percentage.
///
/// Exactly zero renders as `"0%"`. A nonzero value whose magnitude is at or
/// below `minimum_value` renders as a floor indicator, e.g. `"<0.01%"`, so
/// near-zero values never display with misleading precision. Pass 0.0 for
/// `minimum_value` to disable the floor. Everything else is `value * 100`
/// rounded to `places` fraction digits.
pub fn format_percentage(value: f64, places: u32, minimum_value: f64) -> String {
    if value == 0.0 {
        return "0%".to_string();
    }
    if !value.is_finite() {
        return format!("{}%", format_non_finite(value));
    }
    if value.abs() <= minimum_value {
        return format!("<{}%", format_plain(to_precision(minimum_value * 100.0, 12)));
    }

    format!("{}%", format_grouped(value * 100.0, places))
}
