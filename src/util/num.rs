/// Converts an `i64` to the nearest `f64`.
///
/// Values up to `2^53` in magnitude convert exactly; larger values round to
/// the nearest representable real, which is the promotion rule used whenever
/// an integer meets a real operand.
///
/// ## Example
/// ```
/// use safecalc::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(-7), -7.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Converts a non-negative `i64` to `u32` if and only if it fits.
///
/// Used for integer exponents: `i64::checked_pow` takes a `u32`.
///
/// ## Example
/// ```
/// use safecalc::util::num::i64_to_u32_checked;
///
/// assert_eq!(i64_to_u32_checked(45), Some(45));
/// assert_eq!(i64_to_u32_checked(-1), None);
/// assert_eq!(i64_to_u32_checked(i64::MAX), None);
/// ```
#[must_use]
pub fn i64_to_u32_checked(value: i64) -> Option<u32> {
    u32::try_from(value).ok()
}

/// Returns `true` if `a` and `b` are close under a relative and an absolute
/// tolerance.
///
/// The values are close when their difference is within `rel_tol` times the
/// larger magnitude, or within `abs_tol`. Infinities are only close to
/// themselves.
///
/// ## Example
/// ```
/// use safecalc::util::num::is_close;
///
/// assert!(is_close(0.1 + 0.2, 0.3, 1e-9, 1e-9));
/// assert!(is_close(1e-12, 0.0, 1e-9, 1e-9));
/// assert!(!is_close(1.0, 1.001, 1e-9, 1e-9));
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn is_close(a: f64, b: f64, rel_tol: f64, abs_tol: f64) -> bool {
    if a == b {
        return true;
    }
    if a.is_infinite() || b.is_infinite() {
        return false;
    }

    let diff = (b - a).abs();
    diff <= (rel_tol * b).abs() || diff <= (rel_tol * a).abs() || diff <= abs_tol
}
