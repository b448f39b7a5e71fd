//! Rounding and digit-grouping helpers shared by the formatters.

/// Magnitude steps for abbreviated display, largest first.
pub(crate) const ABBREVIATION_STEPS: [(f64, &str); 3] = [(1e9, "b"), (1e6, "m"), (1e3, "k")];

/// Render a non-finite value.
pub(crate) fn format_non_finite(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_sign_positive() {
        "+Inf".to_string()
    } else {
        "-Inf".to_string()
    }
}

/// Plain rendering without grouping (f64 `Display`).
pub(crate) fn format_plain(value: f64) -> String {
    value.to_string()
}

/// Round to `places` fraction digits, half away from zero.
///
/// When the shifted value leaves the integer-exact range of `f64`, rounding
/// would only add noise, so the value comes back unchanged.
pub(crate) fn round_to_places(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    let shifted = value * factor;
    if !shifted.is_finite() || shifted.abs() >= 2f64.powi(53) {
        return value;
    }
    shifted.round() / factor
}

/// Round to `digits` significant digits.
pub(crate) fn to_precision(value: f64, digits: u32) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    let digits = digits.max(1) as usize;
    format!("{:.*e}", digits - 1, value).parse().unwrap_or(value)
}

/// Fraction digits needed to show `digits` significant digits of `value`.
pub(crate) fn fraction_digits_for(value: f64, digits: u32) -> u32 {
    if value == 0.0 || !value.is_finite() {
        return 0;
    }
    let exponent = value.abs().log10().floor() as i64;
    (i64::from(digits.max(1)) - 1 - exponent).max(0) as u32
}

/// Format with thousands separators and at most `max_fraction_digits`
/// fraction digits, trailing zeros trimmed.
pub(crate) fn format_grouped(value: f64, max_fraction_digits: u32) -> String {
    grouped(value, max_fraction_digits, true)
}

/// Format with thousands separators and exactly `fraction_digits` fraction
/// digits, trailing zeros kept.
pub(crate) fn format_grouped_exact(value: f64, fraction_digits: u32) -> String {
    grouped(value, fraction_digits, false)
}

fn grouped(value: f64, fraction_digits: u32, trim: bool) -> String {
    if !value.is_finite() {
        return format_non_finite(value);
    }

    let rounded = round_to_places(value, fraction_digits);
    let unsigned = format!("{:.*}", fraction_digits as usize, rounded.abs());
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, if trim { frac_part.trim_end_matches('0') } else { frac_part }),
        None => (unsigned.as_str(), ""),
    };

    let mut out = String::new();
    if rounded < 0.0 {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Insert thousands separators into a digit string.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.chars().rev().collect()
}
