//! Integer arithmetic helpers used across the project.
//!
//! Simulation state is integral and must stay identical on every replica, so
//! products are formed in `i64` and truncated towards zero before being
//! saturated back into the `i32` domain.

use crate::{COLOR_CHANNEL_MAX, PERCENT_SCALE};

/// Clamp a widened value into the `i32` domain.
#[expect(
    clippy::cast_possible_truncation,
    reason = "The value is clamped to the i32 bounds before casting."
)]
#[must_use]
pub const fn saturate_i32(value: i64) -> i32 {
    let clamped = if value > i32::MAX as i64 {
        i32::MAX as i64
    } else if value < i32::MIN as i64 {
        i32::MIN as i64
    } else {
        value
    };
    clamped as i32
}

/// Take `percent` percent of `value`, truncating towards zero.
///
/// ```
/// use thermal::numeric::percent_of;
/// assert_eq!(percent_of(250, 10), 25);
/// assert_eq!(percent_of(-7, 50), -3);
/// ```
#[must_use]
pub const fn percent_of(value: i32, percent: i32) -> i32 {
    saturate_i32(value as i64 * percent as i64 / PERCENT_SCALE)
}

/// Apply a chain of percentage modifiers in order.
///
/// Each step multiplies by the modifier and divides by 100 with truncation,
/// so the result depends on the order of `modifiers`. Callers must supply
/// them in a stable order.
#[must_use]
pub fn apply_percentage_modifiers(value: i32, modifiers: &[i32]) -> i32 {
    let widened = modifiers.iter().fold(i64::from(value), |acc, &modifier| {
        acc.saturating_mul(i64::from(modifier)) / PERCENT_SCALE
    });
    saturate_i32(widened)
}

/// Unsigned ratio `|numerator| / denominator` for presentation purposes.
///
/// Returns `0.0` when `denominator` is not positive. The result never feeds
/// back into simulation state.
#[expect(
    clippy::cast_precision_loss,
    reason = "Presentation ratios tolerate f32 rounding for large magnitudes."
)]
#[must_use]
pub fn magnitude_ratio(numerator: i32, denominator: i32) -> f32 {
    if denominator <= 0 {
        return 0.0;
    }
    numerator.unsigned_abs() as f32 / denominator as f32
}

/// Normalise an 8-bit colour channel into `0.0..=1.0`.
#[must_use]
pub fn normalize_channel(channel: u8) -> f32 {
    f32::from(channel) / COLOR_CHANNEL_MAX
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case::within_range(42, 42)]
    #[case::above(i64::from(i32::MAX) + 10, i32::MAX)]
    #[case::below(i64::from(i32::MIN) - 10, i32::MIN)]
    fn saturate_clamps_into_i32(#[case] input: i64, #[case] expected: i32) {
        assert_eq!(saturate_i32(input), expected);
    }

    #[rstest]
    fn percent_of_widens_before_dividing() {
        assert_eq!(percent_of(i32::MAX, 100), i32::MAX);
        assert_eq!(percent_of(i32::MAX, 200), i32::MAX);
    }

    #[rstest]
    #[case::none(&[], 1000)]
    #[case::neutral(&[100], 1000)]
    #[case::boost(&[150], 1500)]
    #[case::chained(&[150, 50], 750)]
    fn modifiers_apply_in_order(#[case] modifiers: &[i32], #[case] expected: i32) {
        assert_eq!(apply_percentage_modifiers(1000, modifiers), expected);
    }

    #[rstest]
    fn modifiers_truncate_each_step() {
        // 7 * 150 / 100 = 10, then 10 * 150 / 100 = 15 (not 15.75).
        assert_eq!(apply_percentage_modifiers(7, &[150, 150]), 15);
    }

    #[rstest]
    fn magnitude_ratio_ignores_sign() {
        assert_relative_eq!(magnitude_ratio(-25, 100), 0.25);
        assert_relative_eq!(magnitude_ratio(25, 100), 0.25);
    }

    #[rstest]
    fn magnitude_ratio_of_empty_range_is_zero() {
        assert_relative_eq!(magnitude_ratio(10, 0), 0.0);
    }

    #[rstest]
    fn channel_normalisation_spans_unit_range() {
        assert_relative_eq!(normalize_channel(0), 0.0);
        assert_relative_eq!(normalize_channel(255), 1.0);
    }
}
