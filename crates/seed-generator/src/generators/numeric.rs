//! Numeric, boolean and choice generators.

use rand::Rng;
use rust_decimal::Decimal;

/// Random integer in `[min, max]`; `min` when the range is empty.
pub fn generate_int_range<R: Rng>(rng: &mut R, min: i64, max: i64) -> i64 {
    if min >= max {
        return min;
    }
    rng.random_range(min..=max)
}

/// Random decimal in `[min, max]` with exactly `scale` fractional digits.
///
/// Drawn as an integer number of `10^-scale` units, so the result is exact.
pub fn generate_decimal_range<R: Rng>(rng: &mut R, min: f64, max: f64, scale: u32) -> Decimal {
    let factor = 10f64.powi(scale as i32);
    let low = (min * factor).ceil() as i64;
    let high = (max * factor).floor() as i64;
    Decimal::new(generate_int_range(rng, low, high.max(low)), scale)
}

/// Boolean that is true with probability `true_weight` (clamped to `[0, 1]`).
pub fn weighted_bool<R: Rng>(rng: &mut R, true_weight: f64) -> bool {
    rng.random_bool(true_weight.clamp(0.0, 1.0))
}

/// Random entry of `values`; empty string when there are none.
pub fn one_of<R: Rng>(rng: &mut R, values: &[String]) -> String {
    if values.is_empty() {
        return String::new();
    }
    values[rng.random_range(0..values.len())].clone()
}
