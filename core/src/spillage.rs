//! Light Spillage

use crate::fixture::*;
use crate::geometry::*;
use crate::math::*;
use crate::solver::*;
use ordered_float::OrderedFloat;

/// Default spill threshold in lux.
pub const DEFAULT_SPILL_THRESHOLD: Float = 1.0;

/// Default distance of the evaluation boundary outside the area in metres.
pub const DEFAULT_SPILL_OFFSET: Float = 5.0;

/// Light reaching points outside the intended area.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpillageResult {
    /// Boundary points whose direct illuminance exceeds the threshold.
    pub points: Vec<(Point3f, Float)>,

    /// Highest retained illuminance; 0 if none.
    pub max_spillage: Float,

    /// Mean retained illuminance; 0 if none.
    pub average_spillage: Float,
}

impl SpillageResult {
    /// Returns true if no boundary point exceeds the threshold.
    pub fn is_clean(&self) -> bool {
        self.points.is_empty()
    }
}

/// Evaluate direct illuminance at boundary points. The diffuse term is not
/// included.
///
/// * `fixtures`  - Placed fixtures.
/// * `boundary`  - Points to evaluate.
/// * `threshold` - Points must exceed this illuminance in lux to be retained.
pub fn evaluate(fixtures: &[Fixture], boundary: &[Point3f], threshold: Float) -> SpillageResult {
    let points: Vec<(Point3f, Float)> = boundary
        .iter()
        .map(|p| (*p, direct_illuminance(fixtures, p)))
        .filter(|(_, e)| *e > threshold)
        .collect();

    if points.is_empty() {
        return SpillageResult::default();
    }

    let max_spillage = points
        .iter()
        .map(|(_, e)| OrderedFloat(*e))
        .max()
        .map_or(0.0, |e| e.into_inner());
    let average_spillage = points.iter().map(|(_, e)| e).sum::<Float>() / points.len() as Float;

    debug!(
        "{} of {} boundary points above {} lux",
        points.len(),
        boundary.len(),
        threshold
    );

    SpillageResult {
        points,
        max_spillage,
        average_spillage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::*;
    use float_cmp::approx_eq;
    use std::sync::Arc;

    fn downlight(x: Float, y: Float) -> Fixture {
        let spec = FixtureSpec::new(
            500.0,
            50_000.0,
            BeamAngle::new(120.0, 120.0).unwrap(),
            MountingRange::new(5.0, 20.0).unwrap(),
        )
        .unwrap();
        let fixture_type = Arc::new(FixtureType::new("d", "Downlight", spec, Photometry::default()));
        Fixture::new("f1", fixture_type, Point3f::new(x, y, 10.0), Orientation::new(0.0, -90.0))
    }

    #[test]
    fn no_fixtures_no_spill() {
        let boundary = Area::new(0.0, 0.0, 10.0, 10.0).boundary_points(2.0, 1.0).unwrap();
        let result = evaluate(&[], &boundary, DEFAULT_SPILL_THRESHOLD);
        assert!(result.is_clean());
        assert_eq!(result.max_spillage, 0.0);
        assert_eq!(result.average_spillage, 0.0);
    }

    #[test]
    fn retains_points_above_threshold_only() {
        let fixtures = [downlight(0.0, 0.0)];
        let boundary = [
            Point3f::new(3.0, 0.0, 0.0),
            Point3f::new(5.0, 0.0, 0.0),
            Point3f::new(500.0, 0.0, 0.0),
        ];
        let result = evaluate(&fixtures, &boundary, DEFAULT_SPILL_THRESHOLD);
        assert_eq!(result.points.len(), 2);

        let e0 = direct_illuminance(&fixtures, &boundary[0]);
        let e1 = direct_illuminance(&fixtures, &boundary[1]);
        assert!(approx_eq!(f64, result.max_spillage, e0.max(e1), ulps = 4));
        assert!(approx_eq!(f64, result.average_spillage, (e0 + e1) / 2.0, ulps = 4));
    }

    #[test]
    fn threshold_is_exclusive() {
        let fixtures = [downlight(0.0, 0.0)];
        let p = Point3f::new(5.0, 0.0, 0.0);
        let e = direct_illuminance(&fixtures, &p);
        assert!(evaluate(&fixtures, &[p], e).is_clean());
        assert!(!evaluate(&fixtures, &[p], e - 1.0).is_clean());
    }
}
