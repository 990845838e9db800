//! Illuminance Fields

use crate::area::*;
use crate::geometry::*;
use crate::math::*;

mod cancel;
mod grid;
mod parallel;

// Re-export
pub use cancel::*;
pub use grid::*;

/// A sampled point on the calculation plane.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SamplePoint {
    /// Location of the sample.
    pub p: Point3f,

    /// Illuminance in lux; never negative.
    pub illuminance: Float,
}

impl SamplePoint {
    /// Returns a new `SamplePoint`. Negative illuminance is clamped to zero.
    ///
    /// * `p`           - Location of the sample.
    /// * `illuminance` - Illuminance in lux.
    pub fn new(p: Point3f, illuminance: Float) -> Self {
        Self {
            p,
            illuminance: max(illuminance, 0.0),
        }
    }
}

/// Sampled illuminance over an area. Recomputed on request; never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct IlluminanceField {
    /// Samples in x-major order.
    pub points: Vec<SamplePoint>,

    /// The sampled area.
    pub area: Area,
}

impl IlluminanceField {
    /// Returns a new `IlluminanceField`.
    ///
    /// * `points` - Samples in x-major order.
    /// * `area`   - The sampled area.
    pub fn new(points: Vec<SamplePoint>, area: Area) -> Self {
        Self { points, area }
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if there are no samples.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns an iterator over the illuminance values.
    pub fn values(&self) -> impl Iterator<Item = Float> + '_ {
        self.points.iter().map(|s| s.illuminance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_point_clamps_negative_values() {
        assert_eq!(SamplePoint::new(Point3f::zero(), -3.0).illuminance, 0.0);
        assert_eq!(SamplePoint::new(Point3f::zero(), 3.0).illuminance, 3.0);
    }

    #[test]
    fn field_exposes_values_in_order() {
        let area = Area::new(0.0, 0.0, 1.0, 1.0);
        let field = IlluminanceField::new(
            vec![
                SamplePoint::new(Point3f::new(0.0, 0.0, 0.0), 1.0),
                SamplePoint::new(Point3f::new(0.0, 1.0, 0.0), 2.0),
            ],
            area,
        );
        assert_eq!(field.len(), 2);
        assert!(!field.is_empty());
        assert_eq!(field.values().collect::<Vec<_>>(), vec![1.0, 2.0]);
    }
}
