/// Converts an `f64` to `i64` if and only if the conversion is exact.
///
/// Succeeds when the value is finite, equals its own truncation, and lies
/// within the `i64` range. Everything else — fractional values, infinities,
/// `NaN`, and magnitudes beyond `i64` — returns `None`.
///
/// ## Parameters
/// - `value`: The floating-point value to convert.
///
/// ## Returns
/// - `Some(i64)`: The converted value if the conversion loses nothing.
/// - `None`: If the value is fractional, non-finite, or out of range.
///
/// ## Example
/// ```
/// use shunta::util::num::f64_to_i64_exact;
///
/// assert_eq!(f64_to_i64_exact(42.0), Some(42));
/// assert_eq!(f64_to_i64_exact(-3.0), Some(-3));
///
/// // Fractional and non-finite values are not integers.
/// assert_eq!(f64_to_i64_exact(1.5), None);
/// assert_eq!(f64_to_i64_exact(f64::INFINITY), None);
///
/// // Integral, but too large for i64.
/// assert_eq!(f64_to_i64_exact(1e30), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn f64_to_i64_exact(value: f64) -> Option<i64> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    // i64::MAX rounds up to 2^63 as f64, so the upper bound is exclusive;
    // i64::MIN is -2^63 exactly and stays inclusive.
    if value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return None;
    }
    Some(value as i64)
}
