//! Calculation Area

use crate::error::*;
use crate::geometry::*;
use crate::math::*;

/// An axis-aligned rectangular calculation area on a horizontal plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Area {
    /// Corner with the smallest x and y coordinates.
    pub origin: Point2f,

    /// Extent along x in metres.
    pub width: Float,

    /// Extent along y in metres.
    pub height: Float,

    /// Height of the calculation plane.
    pub elevation: Float,
}

impl Area {
    /// Returns a new `Area` on the ground plane. The area is not validated
    /// here; operations that sample it call `validate()` first.
    ///
    /// * `x`      - Origin x-coordinate.
    /// * `y`      - Origin y-coordinate.
    /// * `width`  - Extent along x.
    /// * `height` - Extent along y.
    pub fn new(x: Float, y: Float, width: Float, height: Float) -> Self {
        Self {
            origin: Point2::new(x, y),
            width,
            height,
            elevation: 0.0,
        }
    }

    /// Set the elevation of the calculation plane.
    ///
    /// * `z` - Elevation in metres.
    pub fn with_elevation(mut self, z: Float) -> Self {
        self.elevation = z;
        self
    }

    /// Returns an error unless width and height are both positive and finite.
    pub fn validate(&self) -> Result<()> {
        let valid = |v: Float| v > 0.0 && v.is_finite();
        if valid(self.width) && valid(self.height) {
            Ok(())
        } else {
            Err(CalcError::InvalidArea {
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Returns the surface area in square metres.
    pub fn size(&self) -> Float {
        self.width * self.height
    }

    /// Returns true if the planar point lies inside or on the rectangle.
    ///
    /// * `p` - The point.
    pub fn contains(&self, p: &Point2f) -> bool {
        p.x >= self.origin.x
            && p.x <= self.origin.x + self.width
            && p.y >= self.origin.y
            && p.y <= self.origin.y + self.height
    }

    /// Returns points along the perimeter, walked counter-clockwise from the
    /// origin corner, at most `spacing` apart and pushed `offset` metres
    /// outward. Corners are included once each.
    ///
    /// * `spacing` - Maximum distance between consecutive points.
    /// * `offset`  - Outward offset from the boundary.
    pub fn boundary_points(&self, spacing: Float, offset: Float) -> Result<Vec<Point3f>> {
        self.validate()?;
        if !(spacing > 0.0 && spacing.is_finite()) {
            return Err(CalcError::InvalidSpacing(spacing));
        }

        let x0 = self.origin.x - offset;
        let y0 = self.origin.y - offset;
        let x1 = self.origin.x + self.width + offset;
        let y1 = self.origin.y + self.height + offset;
        let corners = [
            Point2::new(x0, y0),
            Point2::new(x1, y0),
            Point2::new(x1, y1),
            Point2::new(x0, y1),
        ];

        let mut points = Vec::new();
        for (i, &start) in corners.iter().enumerate() {
            let end = corners[(i + 1) % corners.len()];
            let length = start.distance(end);
            let n = (length / spacing - GRID_EPSILON).ceil();
            if !(n <= MAX_GRID_POINTS as Float) {
                return Err(CalcError::GridTooLarge {
                    width: self.width,
                    height: self.height,
                    spacing,
                });
            }
            let n = max(n as usize, 1);
            for k in 0..n {
                let t = k as Float / n as Float;
                let p = start + (end - start) * t;
                points.push(Point3::from((p, self.elevation)));
            }
        }
        Ok(points)
    }
}
