//! Glare Rating
//!
//! A simplified discomfort glare estimate. This is not a CIE 112 or UGR
//! calculation.

use crate::fixture::*;
use crate::geometry::*;
use crate::math::*;

/// Luminance used when a fixture's housing dimensions are unknown.
pub const DEFAULT_LUMINANCE: Float = 10_000.0;

/// Returns the glare rating seen by an observer looking along a horizontal
/// direction. Fixtures at the observer's planar position are skipped.
///
/// * `fixtures`       - Placed fixtures.
/// * `observer`       - Observer position.
/// * `view_direction` - Horizontal view direction in degrees.
pub fn glare_rating(fixtures: &[Fixture], observer: &Point3f, view_direction: Float) -> Float {
    let view = view_direction.to_radians();

    let sum: Float = fixtures
        .iter()
        .filter_map(|fixture| {
            let distance = observer.planar_distance(fixture.position);
            if distance == 0.0 {
                return None;
            }

            let angle = observer.xy().bearing(fixture.position.xy()) - view;
            let luminance = luminance(fixture.spec());
            let position_index = angle.sin() * angle.sin();
            Some(luminance * position_index / (distance * distance))
        })
        .sum();

    if sum > 0.0 {
        max(10.0 * sum.log10(), 0.0)
    } else {
        0.0
    }
}

/// Average luminance of the fixture face: lumens over face area.
fn luminance(spec: &FixtureSpec) -> Float {
    match spec.dimensions.map(|d| d.face_area()) {
        Some(area) if area > 0.0 => spec.lumens / area,
        _ => DEFAULT_LUMINANCE,
    }
}
