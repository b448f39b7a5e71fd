//! Number, percentage, and rate formatting.
//!
//! All formatters are total over `f64`: non-finite sentinels render as
//! `"NaN"` / `"+Inf"` / `"-Inf"`, and no input panics or errors.

mod number;
mod percentage;
mod precision;
mod rate;

pub use number::{
    format_abbreviated_number, format_abbreviated_number_with_dynamic_precision,
    format_number_with_dynamic_decimal_points,
};
pub use percentage::format_percentage;
pub use rate::{format_rate, RateFormatOptions};
