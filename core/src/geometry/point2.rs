//! 2-D Points

use crate::math::*;
use num_traits::{Num, Zero};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A 2-D point containing numeric values.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point2<T> {
    /// X-coordinate.
    pub x: T,

    /// Y-coordinate.
    pub y: T,
}

/// 2-D point containing `Float` values.
pub type Point2f = Point2<Float>;

impl<T: Num> Point2<T> {
    /// Creates a new 2-D point.
    ///
    /// * `x` - X-coordinate.
    /// * `y` - Y-coordinate.
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Creates a new 2-D zero point.
    pub fn zero() -> Self
    where
        T: Zero,
    {
        Self::new(T::zero(), T::zero())
    }

    /// Returns true if either coordinate is NaN.
    pub fn has_nans(&self) -> bool
    where
        T: num_traits::Float,
    {
        self.x.is_nan() || self.y.is_nan()
    }

    /// Returns the distance to another point.
    ///
    /// * `other` - The other point.
    pub fn distance(self, other: Self) -> T
    where
        T: num_traits::Float,
    {
        self.distance_squared(other).sqrt()
    }

    /// Returns the square of the distance to another point.
    ///
    /// * `other` - The other point.
    pub fn distance_squared(self, other: Self) -> T
    where
        T: Copy,
    {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Returns the bearing in radians from this point towards another point,
    /// measured counter-clockwise from the +x axis in the range [-π, π].
    ///
    /// * `other` - The other point.
    pub fn bearing(self, other: Self) -> T
    where
        T: num_traits::Float,
    {
        (other.y - self.y).atan2(other.x - self.x)
    }
}

impl<T: Num> Add for Point2<T> {
    type Output = Self;

    /// Adds the given point and returns the result.
    ///
    /// * `other` - The point to add.
    fn add(self, other: Self) -> Self::Output {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl<T: Num> Sub for Point2<T> {
    type Output = Self;

    /// Subtracts the given point and returns the offset as a point.
    ///
    /// * `other` - The point to subtract.
    fn sub(self, other: Self) -> Self::Output {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl<T: Num + Copy> Mul<T> for Point2<T> {
    type Output = Self;

    /// Scale the point.
    ///
    /// * `f` - The scaling factor.
    fn mul(self, f: T) -> Self::Output {
        Self::new(self.x * f, self.y * f)
    }
}

impl Mul<Point2f> for Float {
    type Output = Point2f;

    /// Scale the point.
    ///
    /// * `p` - The point.
    fn mul(self, p: Point2f) -> Self::Output {
        p * self
    }
}

impl<T: fmt::Display> fmt::Display for Point2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

#[cfg(test)]
#[macro_use]
mod tests {
    use super::*;
    use float_cmp::*;
    use proptest::prelude::*;

    #[test]
    fn zero_point() {
        assert!(Point2::new(0, 0) == Point2::zero());
        assert!(Point2::new(0.0, 0.0) == Point2::zero());
    }

    #[test]
    fn has_nans() {
        assert!(!Point2::new(0.0, 0.0).has_nans());
        assert!(Point2::new(f64::NAN, 1.0).has_nans());
    }

    #[test]
    fn bearing_of_cardinal_directions() {
        let o = Point2f::zero();
        assert_eq!(o.bearing(Point2::new(1.0, 0.0)), 0.0);
        assert!(approx_eq!(f64, o.bearing(Point2::new(0.0, 1.0)), PI_OVER_TWO, ulps = 2));
        assert!(approx_eq!(f64, o.bearing(Point2::new(-1.0, 0.0)), PI, ulps = 2));
        assert_eq!(o.bearing(o), 0.0);
    }

    // Define some properties for tests.
    prop_range!(range_f64, f64, -100.0..100.0f64);
    prop_point2!(point2_f64, f64, -100.0..100.0f64, -100.0..100.0f64);

    proptest! {
        #[test]
        fn distance_squared_f64(p1 in point2_f64(), p2 in point2_f64()) {
            let expected = (p1.x - p2.x) * (p1.x - p2.x) + (p1.y - p2.y) * (p1.y - p2.y);
            prop_assert!(approx_eq!(f64, p1.distance_squared(p2), expected, epsilon = 1e-9));
        }

        #[test]
        fn distance_is_symmetric(p1 in point2_f64(), p2 in point2_f64()) {
            prop_assert_eq!(p1.distance(p2), p2.distance(p1));
        }

        #[test]
        fn bearing_in_range(p1 in point2_f64(), p2 in point2_f64()) {
            let b = p1.bearing(p2);
            prop_assert!((-PI..=PI).contains(&b));
        }

        #[test]
        fn add_sub_f64(p1 in point2_f64(), p2 in point2_f64()) {
            prop_assert_eq!(p1 + p2, Point2::new(p1.x + p2.x, p1.y + p2.y));
            prop_assert_eq!(p1 - p2, Point2::new(p1.x - p2.x, p1.y - p2.y));
        }

        #[test]
        fn mul_f64(p in point2_f64(), f in range_f64()) {
            let expected = Point2::new(p.x * f, p.y * f);
            prop_assert_eq!(p * f, expected);
            prop_assert_eq!(f * p, expected);
        }
    }
}
