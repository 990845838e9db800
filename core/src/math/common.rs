//! Common

use num_traits::Num;
use std::ops::{Add, Mul, Neg};

/// Use 64-bit precision for floating point numbers.
pub type Float = f64;

/// PI (π)
pub const PI: Float = std::f64::consts::PI;

/// PI/2 (π/2)
pub const PI_OVER_TWO: Float = PI * 0.5;

/// Tolerance used when deciding whether a grid end point lies on a step.
pub const GRID_EPSILON: Float = 1e-9;

/// Upper bound on the number of points generated for a grid or boundary.
pub const MAX_GRID_POINTS: usize = 50_000_000;

/// Returns the absolute value of a number.
///
/// * `n` - The number.
#[inline(always)]
pub fn abs<T>(n: T) -> T
where
    T: Num + Neg<Output = T> + PartialOrd + Copy,
{
    if n < T::zero() {
        -n
    } else {
        n
    }
}

/// Returns the minimum of 2 numbers.
///
/// * `a` - First number.
/// * `b` - Second number.
#[inline(always)]
pub fn min<T>(a: T, b: T) -> T
where
    T: PartialOrd + Copy,
{
    if a < b {
        a
    } else {
        b
    }
}

/// Returns the maximum of 2 numbers.
///
/// * `a` - First number.
/// * `b` - Second number.
#[inline(always)]
pub fn max<T>(a: T, b: T) -> T
where
    T: PartialOrd + Copy,
{
    if a > b {
        a
    } else {
        b
    }
}

/// Clamps a value to the range [low, high].
///
/// * `val`  - The value to clamp.
/// * `low`  - Lower bound.
/// * `high` - Upper bound.
#[inline(always)]
pub fn clamp<T>(val: T, low: T, high: T) -> T
where
    T: PartialOrd + Copy,
{
    if val < low {
        low
    } else if val > high {
        high
    } else {
        val
    }
}

/// Linearly interpolate between two values for parameters in [0, 1] and
/// extrapolate for parameters outside that interval.
///
/// * `t`  - Parameter.
/// * `p0` - Value at t=0.
/// * `p1` - Value at t=1.
#[inline(always)]
pub fn lerp<P>(t: Float, p0: P, p1: P) -> P
where
    Float: Mul<P, Output = P>,
    P: Add<P, Output = P>,
{
    (1.0 - t) * p0 + t * p1
}

/// Number of evenly spaced samples on the closed interval `[0, extent]`
/// stepping by `spacing`. The end point counts when it lies on a step.
///
/// Returns `None` when the count is not finite or does not fit in `usize`.
///
/// * `extent`  - Length of the interval.
/// * `spacing` - Step size (must be positive).
#[inline]
pub fn closed_step_count(extent: Float, spacing: Float) -> Option<usize> {
    let steps = (extent / spacing + GRID_EPSILON).floor();
    if steps >= 0.0 && steps < usize::MAX as Float {
        (steps as usize).checked_add(1)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;
    use proptest::prelude::*;

    #[test]
    fn closed_step_count_includes_end_point() {
        assert_eq!(closed_step_count(10.0, 2.0), Some(6));
        assert_eq!(closed_step_count(10.0, 3.0), Some(4));
        assert_eq!(closed_step_count(1.0, 0.1), Some(11));
        assert_eq!(closed_step_count(0.5, 2.0), Some(1));
    }

    #[test]
    fn closed_step_count_rejects_unrepresentable_counts() {
        assert_eq!(closed_step_count(1e300, 2.0), None);
        assert_eq!(closed_step_count(Float::INFINITY, 2.0), None);
        assert_eq!(closed_step_count(Float::NAN, 2.0), None);
        assert_eq!(closed_step_count(10.0, 0.0), None);
    }

    proptest! {
        #[test]
        fn clamp_stays_in_range(v in -1000.0..1000.0f64, lo in -10.0..0.0f64, hi in 0.0..10.0f64) {
            let c = clamp(v, lo, hi);
            prop_assert!(c >= lo && c <= hi);
        }

        #[test]
        fn lerp_edge_cases(a in -100.0..100.0f64, b in -100.0..100.0f64) {
            prop_assert_eq!(lerp(0.0, a, b), a);
            prop_assert!(approx_eq!(f64, lerp(1.0, a, b), b, epsilon = 1e-9));
        }

        #[test]
        fn min_max_agree_with_std(a in -100.0..100.0f64, b in -100.0..100.0f64) {
            prop_assert_eq!(min(a, b), a.min(b));
            prop_assert_eq!(max(a, b), a.max(b));
            prop_assert_eq!(abs(a), a.abs());
        }
    }
}
