//! Photometric Solver
//!
//! Direct illuminance from a single fixture treated as a point source with a
//! rectangular (horizontal x vertical) beam. Angles are measured from the
//! fixture: the horizontal bearing counter-clockwise from +x and the vertical
//! angle downward from the horizontal plane through the fixture.

use crate::fixture::*;
use crate::geometry::*;
use crate::math::*;

/// Angles from a fixture towards a point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AimAngles {
    /// Horizontal bearing in radians.
    pub horizontal: Float,

    /// Vertical angle below horizontal in radians.
    pub vertical: Float,
}

/// Returns the horizontal bearing and vertical angle from the fixture to the
/// point, together with the slant distance between them.
///
/// * `fixture` - The fixture.
/// * `point`   - The point being lit.
pub fn aim_angles(fixture: &Fixture, point: &Point3f) -> (AimAngles, Float) {
    let from = fixture.position;
    let planar = from.planar_distance(*point);
    let height_diff = from.z - point.z;
    let slant = (planar * planar + height_diff * height_diff).sqrt();

    let angles = AimAngles {
        horizontal: from.xy().bearing(point.xy()),
        vertical: height_diff.atan2(planar),
    };
    (angles, slant)
}

/// Returns the direct illuminance in lux that `fixture` produces at `point`.
///
/// Contributions outside the beam are exactly zero; there is no soft falloff
/// at the beam edge. A fixture coincident with the point contributes zero.
///
/// * `fixture` - The fixture.
/// * `point`   - The point being lit.
pub fn contribution_at(fixture: &Fixture, point: &Point3f) -> Float {
    let (angles, slant) = aim_angles(fixture, point);
    if slant == 0.0 {
        return 0.0;
    }

    // Angles relative to the aim direction.
    let relative_h = angles.horizontal - fixture.orientation.rotation.to_radians();
    let relative_v = angles.vertical + fixture.orientation.tilt.to_radians();

    let beam = &fixture.spec().beam;
    let half_h = beam.half_horizontal();
    let half_v = beam.half_vertical();
    if abs(relative_h) > half_h || abs(relative_v) > half_v {
        return 0.0;
    }

    let intensity = fixture.fixture_type.peak_intensity()
        * distribution_factor(relative_h, half_h)
        * distribution_factor(relative_v, half_v);

    // E = I cos(θ) / d²
    let illuminance = intensity * angles.vertical.cos() / (slant * slant);
    max(illuminance, 0.0)
}

/// Returns the summed direct illuminance from all fixtures at `point`.
///
/// * `fixtures` - The fixtures.
/// * `point`    - The point being lit.
pub fn direct_illuminance(fixtures: &[Fixture], point: &Point3f) -> Float {
    fixtures.iter().map(|f| contribution_at(f, point)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;
    use proptest::prelude::*;
    use std::sync::Arc;

    fn fixture_type(h_beam: Float, v_beam: Float, peak: Option<Float>) -> ArcFixtureType {
        let spec = FixtureSpec::new(
            1000.0,
            140000.0,
            BeamAngle::new(h_beam, v_beam).unwrap(),
            MountingRange::new(0.0, 100.0).unwrap(),
        )
        .unwrap();
        let photometry = Photometry {
            peak_intensity: peak,
            ..Default::default()
        };
        Arc::new(FixtureType::new("t", "Test", spec, photometry))
    }

    fn fixture_at(p: Point3f, orientation: Orientation, t: &ArcFixtureType) -> Fixture {
        Fixture::new("f", Arc::clone(t), p, orientation)
    }

    #[test]
    fn zero_distance_contributes_nothing() {
        let t = fixture_type(360.0, 360.0, Some(1000.0));
        let f = fixture_at(Point3f::new(1.0, 2.0, 3.0), Orientation::default(), &t);
        assert_eq!(contribution_at(&f, &Point3f::new(1.0, 2.0, 3.0)), 0.0);
    }

    #[test]
    fn horizontally_aimed_fixture_leaves_point_below_dark() {
        let t = fixture_type(60.0, 40.0, Some(185000.0));
        let f = fixture_at(Point3f::new(0.0, 0.0, 20.0), Orientation::default(), &t);
        assert_eq!(contribution_at(&f, &Point3f::zero()), 0.0);
    }

    #[test]
    fn downward_tilt_at_nadir_vanishes_by_incidence_term() {
        // Vertical angle to the point is +90°; tilting by -90° aims straight down.
        let t = fixture_type(60.0, 40.0, Some(1000.0));
        let f = fixture_at(
            Point3f::new(0.0, 0.0, 10.0),
            Orientation::new(0.0, -90.0),
            &t,
        );
        let e = contribution_at(&f, &Point3f::zero());
        // cos(90°) of the incidence term makes this vanish numerically.
        assert!(e >= 0.0 && e < 1e-9);
    }

    #[test]
    fn on_axis_value_matches_hand_calculation() {
        // Fixture 10 m above and 10 m away: vertical angle 45°, inside a 100°
        // vertical beam once tilted by -45°.
        let t = fixture_type(60.0, 100.0, Some(1000.0));
        let f = fixture_at(
            Point3f::new(0.0, 0.0, 10.0),
            Orientation::new(0.0, -45.0),
            &t,
        );
        let e = contribution_at(&f, &Point3f::new(10.0, 0.0, 0.0));
        let expected = 1000.0 * (PI / 4.0).cos() / 200.0;
        assert!(approx_eq!(f64, e, expected, epsilon = 1e-9));
    }

    #[test]
    fn rotation_selects_direction() {
        let t = fixture_type(60.0, 100.0, Some(1000.0));
        let north = fixture_at(
            Point3f::new(0.0, 0.0, 10.0),
            Orientation::new(90.0, -45.0),
            &t,
        );
        assert_eq!(contribution_at(&north, &Point3f::new(10.0, 0.0, 0.0)), 0.0);
        assert!(contribution_at(&north, &Point3f::new(0.0, 10.0, 0.0)) > 0.0);
    }

    #[test]
    fn default_peak_intensity_is_used() {
        let t = fixture_type(60.0, 100.0, None);
        let f = fixture_at(
            Point3f::new(0.0, 0.0, 10.0),
            Orientation::new(0.0, -45.0),
            &t,
        );
        let e = contribution_at(&f, &Point3f::new(10.0, 0.0, 0.0));
        let expected = (140000.0 / PI) * (PI / 4.0).cos() / 200.0;
        assert!(approx_eq!(f64, e, expected, epsilon = 1e-6));
    }

    #[test]
    fn direct_illuminance_sums_fixtures() {
        let t = fixture_type(60.0, 100.0, Some(1000.0));
        let f = fixture_at(
            Point3f::new(0.0, 0.0, 10.0),
            Orientation::new(0.0, -45.0),
            &t,
        );
        let p = Point3f::new(10.0, 0.0, 0.0);
        let single = contribution_at(&f, &p);
        let fixtures = vec![f.clone(), f.clone(), f];
        assert!(approx_eq!(f64, direct_illuminance(&fixtures, &p), 3.0 * single, epsilon = 1e-9));
        assert_eq!(direct_illuminance(&[], &p), 0.0);
    }

    crate::prop_point3!(point3_f64, f64, -50.0..50.0f64, -50.0..50.0f64, -10.0..30.0f64);

    proptest! {
        #[test]
        fn outside_horizontal_beam_is_exactly_zero(
            h_beam in 10.0..170.0f64,
            excess in 0.5..10.0f64,
            dist in 1.0..100.0f64,
        ) {
            // Point lies level with the fixture, `excess` degrees past the edge.
            let t = fixture_type(h_beam, 40.0, Some(1000.0));
            let f = fixture_at(Point3f::new(0.0, 0.0, 5.0), Orientation::default(), &t);
            let bearing = (h_beam * 0.5 + excess).to_radians();
            let p = Point3f::new(dist * bearing.cos(), dist * bearing.sin(), 5.0);
            prop_assert_eq!(contribution_at(&f, &p), 0.0);
        }

        #[test]
        fn outside_vertical_beam_is_exactly_zero(
            v_beam in 10.0..170.0f64,
            excess in 0.5..5.0f64,
            dist in 1.0..100.0f64,
        ) {
            let t = fixture_type(60.0, v_beam, Some(1000.0));
            let f = fixture_at(Point3f::new(0.0, 0.0, 0.0), Orientation::default(), &t);
            let angle = (v_beam * 0.5 + excess).min(89.0).to_radians();
            prop_assume!(angle > (v_beam * 0.5).to_radians());
            // Point below the fixture at the given depression angle.
            let p = Point3f::new(dist * angle.cos(), 0.0, -dist * angle.sin());
            prop_assert_eq!(contribution_at(&f, &p), 0.0);
        }

        #[test]
        fn inverse_square_law(
            d in 1.0..50.0f64,
            depression in 1.0..40.0f64,
            bearing in -25.0..25.0f64,
        ) {
            let t = fixture_type(60.0, 90.0, Some(50000.0));
            let f = fixture_at(Point3f::new(0.0, 0.0, 0.0), Orientation::default(), &t);
            let (b, v) = (bearing.to_radians(), depression.to_radians());
            let dir = (v.cos() * b.cos(), v.cos() * b.sin(), -v.sin());
            let near = Point3f::new(d * dir.0, d * dir.1, d * dir.2);
            let far = Point3f::new(2.0 * d * dir.0, 2.0 * d * dir.1, 2.0 * d * dir.2);
            let e_near = contribution_at(&f, &near);
            let e_far = contribution_at(&f, &far);
            prop_assert!(e_near > 0.0);
            prop_assert!(approx_eq!(f64, e_far, e_near / 4.0, epsilon = e_near * 1e-9));
        }

        #[test]
        fn contribution_is_never_negative(
            p in point3_f64(),
            rot in -360.0..360.0f64,
            tilt in -90.0..90.0f64,
        ) {
            let t = fixture_type(120.0, 90.0, Some(25000.0));
            let f = fixture_at(Point3f::new(0.0, 0.0, 12.0), Orientation::new(rot, tilt), &t);
            let e = contribution_at(&f, &p);
            prop_assert!(e >= 0.0 && e.is_finite());
        }
    }
}
