//! 3-D Points

use super::Point2;
use crate::math::*;
use num_traits::{Num, Zero};
use std::fmt;
use std::ops::{Add, Sub};

/// A 3-D point containing numeric values. The z-coordinate is height above
/// the reference ground plane.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point3<T> {
    /// X-coordinate.
    pub x: T,

    /// Y-coordinate.
    pub y: T,

    /// Z-coordinate (height).
    pub z: T,
}

/// 3-D point containing `Float` values.
pub type Point3f = Point3<Float>;

impl<T: Num> Point3<T> {
    /// Creates a new 3-D point.
    ///
    /// * `x` - X-coordinate.
    /// * `y` - Y-coordinate.
    /// * `z` - Z-coordinate.
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Creates a new 3-D zero point.
    pub fn zero() -> Self
    where
        T: Zero,
    {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Returns true if any coordinate is NaN.
    pub fn has_nans(&self) -> bool
    where
        T: num_traits::Float,
    {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Returns the projection of the point onto the ground plane.
    pub fn xy(&self) -> Point2<T>
    where
        T: Copy,
    {
        Point2::new(self.x, self.y)
    }

    /// Returns the horizontal distance to another point, ignoring height.
    ///
    /// * `other` - The other point.
    pub fn planar_distance(self, other: Self) -> T
    where
        T: num_traits::Float,
    {
        self.xy().distance(other.xy())
    }

    /// Returns the distance to another point.
    ///
    /// * `other` - The other point.
    pub fn distance(self, other: Self) -> T
    where
        T: num_traits::Float,
    {
        let dz = self.z - other.z;
        (self.xy().distance_squared(other.xy()) + dz * dz).sqrt()
    }
}

impl<T: Num> Add for Point3<T> {
    type Output = Self;

    /// Adds the given point and returns the result.
    ///
    /// * `other` - The point to add.
    fn add(self, other: Self) -> Self::Output {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl<T: Num> Sub for Point3<T> {
    type Output = Self;

    /// Subtracts the given point and returns the offset as a point.
    ///
    /// * `other` - The point to subtract.
    fn sub(self, other: Self) -> Self::Output {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T: Num> From<(Point2<T>, T)> for Point3<T> {
    /// Lift a ground-plane point to the given height.
    ///
    /// * `p` - Tuple containing the planar point and height.
    fn from(p: (Point2<T>, T)) -> Self {
        let (xy, z) = p;
        Self::new(xy.x, xy.y, z)
    }
}

impl<T: fmt::Display> fmt::Display for Point3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
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
        assert!(Point3::new(0, 0, 0) == Point3::zero());
        assert!(Point3::new(0.0, 0.0, 0.0) == Point3::zero());
    }

    #[test]
    fn pythagorean_distance() {
        let a = Point3f::new(0.0, 0.0, 0.0);
        let b = Point3f::new(3.0, 4.0, 12.0);
        assert_eq!(a.planar_distance(b), 5.0);
        assert_eq!(a.distance(b), 13.0);
    }

    #[test]
    fn lift_planar_point() {
        let p = Point3::from((Point2::new(1.0, 2.0), 3.0));
        assert_eq!(p, Point3f::new(1.0, 2.0, 3.0));
    }

    prop_point3!(
        point3_f64,
        f64,
        -100.0..100.0f64,
        -100.0..100.0f64,
        -100.0..100.0f64
    );

    proptest! {
        #[test]
        fn distance_not_less_than_planar(p1 in point3_f64(), p2 in point3_f64()) {
            prop_assert!(p1.distance(p2) + 1e-9 >= p1.planar_distance(p2));
        }

        #[test]
        fn distance_ignores_height_when_level(p1 in point3_f64(), p2 in point3_f64()) {
            let level = Point3::new(p2.x, p2.y, p1.z);
            prop_assert!(approx_eq!(f64, p1.distance(level), p1.planar_distance(level), epsilon = 1e-9));
        }

        #[test]
        fn add_sub_roundtrip(p1 in point3_f64(), p2 in point3_f64()) {
            let p = (p1 + p2) - p2;
            prop_assert!(approx_eq!(f64, p.x, p1.x, epsilon = 1e-9));
            prop_assert!(approx_eq!(f64, p.y, p1.y, epsilon = 1e-9));
            prop_assert!(approx_eq!(f64, p.z, p1.z, epsilon = 1e-9));
        }
    }
}
