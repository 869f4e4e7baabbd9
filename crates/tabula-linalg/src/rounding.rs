//! Decimal rounding used to suppress floating-point noise.

/// Number of decimal digits kept when rounding away elimination noise.
pub const ROUNDING_DIGIT_CUTOFF: u32 = 8;

/// Rounds `value` to `digits` decimal places, ties to even.
///
/// Values whose scaled form is not finite are returned unchanged; at that
/// magnitude an `f64` carries no fractional digits anyway. A result of
/// negative zero is normalized to positive zero.
#[must_use]
pub fn round_to_digits(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(i32::try_from(digits).unwrap_or(i32::MAX));
    let scaled = value * factor;
    if !scaled.is_finite() || !factor.is_finite() {
        return value;
    }
    let rounded = scaled.round_ties_even() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
