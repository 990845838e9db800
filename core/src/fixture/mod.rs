//! Fixtures

use crate::geometry::*;
use crate::math::*;
use std::sync::Arc;

mod photometry;
mod spec;

// Re-export
pub use photometry::*;
pub use spec::*;

/// A luminaire model: specifications plus photometry. Validation happens when
/// the contained `FixtureSpec` is built, so a `FixtureType` is always usable by
/// the calculation kernel.
#[derive(Clone, Debug, PartialEq)]
pub struct FixtureType {
    /// Unique identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Specifications.
    pub spec: FixtureSpec,

    /// Photometric data.
    pub photometry: Photometry,

    /// Peak intensity in candela resolved at creation time.
    peak_intensity: Float,
}

/// Atomic reference counted `FixtureType`.
pub type ArcFixtureType = Arc<FixtureType>;

impl FixtureType {
    /// Returns a new `FixtureType`. When no positive peak intensity is given it
    /// defaults to lumens / π.
    ///
    /// * `id`         - Unique identifier.
    /// * `name`       - Display name.
    /// * `spec`       - Validated specifications.
    /// * `photometry` - Photometric data.
    pub fn new(id: &str, name: &str, spec: FixtureSpec, photometry: Photometry) -> Self {
        let peak_intensity = match photometry.peak_intensity {
            Some(cd) if cd > 0.0 => cd,
            _ => {
                warn!("Fixture type '{id}' has no peak intensity; using lumens / π");
                spec.lumens / PI
            }
        };

        Self {
            id: id.to_owned(),
            name: name.to_owned(),
            spec,
            photometry,
            peak_intensity,
        }
    }

    /// Returns the peak luminous intensity in candela.
    pub fn peak_intensity(&self) -> Float {
        self.peak_intensity
    }
}

/// Aim direction of a placed fixture, in degrees.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Orientation {
    /// Rotation about the vertical axis, counter-clockwise from +x.
    pub rotation: Float,

    /// Tilt added to the vertical angle of the aim direction. 0 aims
    /// horizontally; -90 aims straight down.
    pub tilt: Float,
}

impl Orientation {
    /// Returns a new `Orientation`.
    ///
    /// * `rotation` - Rotation in degrees.
    /// * `tilt`     - Tilt in degrees.
    pub fn new(rotation: Float, tilt: Float) -> Self {
        Self { rotation, tilt }
    }
}

/// A fixture placed in the design.
#[derive(Clone, Debug)]
pub struct Fixture {
    /// Unique identifier of the placement.
    pub id: String,

    /// Position; z is mounting height.
    pub position: Point3f,

    /// Aim direction.
    pub orientation: Orientation,

    /// The luminaire model.
    pub fixture_type: ArcFixtureType,
}

impl Fixture {
    /// Returns a new `Fixture`.
    ///
    /// * `id`           - Unique identifier of the placement.
    /// * `fixture_type` - The luminaire model.
    /// * `position`     - Position; z is mounting height.
    /// * `orientation`  - Aim direction.
    pub fn new(
        id: &str,
        fixture_type: ArcFixtureType,
        position: Point3f,
        orientation: Orientation,
    ) -> Self {
        Self {
            id: id.to_owned(),
            position,
            orientation,
            fixture_type: Arc::clone(&fixture_type),
        }
    }

    /// Returns the fixture's specifications.
    pub fn spec(&self) -> &FixtureSpec {
        &self.fixture_type.spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;

    fn spec(lumens: Float) -> FixtureSpec {
        FixtureSpec::new(
            1000.0,
            lumens,
            BeamAngle::new(60.0, 40.0).unwrap(),
            MountingRange::new(12.0, 35.0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn peak_intensity_from_photometry() {
        let t = FixtureType::new(
            "flood",
            "Flood",
            spec(140000.0),
            Photometry::with_peak_intensity(92500.0),
        );
        assert_eq!(t.peak_intensity(), 92500.0);
    }

    #[test]
    fn peak_intensity_defaults_to_lumens_over_pi() {
        let t = FixtureType::new("flood", "Flood", spec(140000.0), Photometry::default());
        assert!(approx_eq!(f64, t.peak_intensity(), 140000.0 / PI, ulps = 2));

        let t = FixtureType::new(
            "flood",
            "Flood",
            spec(140000.0),
            Photometry::with_peak_intensity(0.0),
        );
        assert!(approx_eq!(f64, t.peak_intensity(), 140000.0 / PI, ulps = 2));
    }

    #[test]
    fn placed_fixtures_share_the_type() {
        let t = Arc::new(FixtureType::new("f", "F", spec(1000.0), Photometry::default()));
        let a = Fixture::new("a", Arc::clone(&t), Point3f::new(0.0, 0.0, 20.0), Orientation::default());
        let b = Fixture::new("b", Arc::clone(&t), Point3f::new(5.0, 0.0, 20.0), Orientation::new(90.0, 10.0));
        assert!(Arc::ptr_eq(&a.fixture_type, &b.fixture_type));
        assert_eq!(b.spec().lumens, 1000.0);
        assert_eq!(Arc::strong_count(&t), 3);
    }
}
