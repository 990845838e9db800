//! Layout Optimizer

use crate::area::*;
use crate::error::*;
use crate::fixture::*;
use crate::geometry::*;
use crate::math::*;

/// Light loss factor applied to the required lumens.
pub const EFFICIENCY_FACTOR: Float = 0.7;

/// Default target average illuminance in lux.
pub const DEFAULT_TARGET_ILLUMINANCE: Float = 200.0;

/// Default target uniformity ratio.
pub const DEFAULT_TARGET_UNIFORMITY: Float = 0.4;

/// Default mounting height in metres.
pub const DEFAULT_MOUNTING_HEIGHT: Float = 20.0;

/// Largest number of fixtures a plan may contain.
pub const MAX_LAYOUT_FIXTURES: usize = 100_000;

/// What the layout should achieve.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutRequirements {
    /// Target average illuminance in lux.
    pub target_illuminance: Float,

    /// Target uniformity ratio. Informational only.
    pub target_uniformity: Float,

    /// Mounting height in metres.
    pub mounting_height: Float,
}

impl Default for LayoutRequirements {
    fn default() -> Self {
        Self {
            target_illuminance: DEFAULT_TARGET_ILLUMINANCE,
            target_uniformity: DEFAULT_TARGET_UNIFORMITY,
            mounting_height: DEFAULT_MOUNTING_HEIGHT,
        }
    }
}

/// A suggested fixture layout.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutPlan {
    /// The selected fixture type.
    pub fixture_type: ArcFixtureType,

    /// Number of fixtures.
    pub count: usize,

    /// Fixture positions; z is the mounting height.
    pub placements: Vec<Point3f>,

    /// Recommended spacing from the injected spacing function.
    pub spacing: Float,

    /// The target illuminance the plan was sized for.
    pub estimated_illuminance: Float,

    /// Efficacy of the selected fixture in lm/W.
    pub efficacy: Float,
}

impl LayoutPlan {
    /// Returns placed fixtures for the plan. Identifiers are `<type id>_<n>`
    /// starting at 1.
    ///
    /// * `orientation` - Aim direction applied to every fixture.
    pub fn fixtures(&self, orientation: Orientation) -> Vec<Fixture> {
        self.placements
            .iter()
            .enumerate()
            .map(|(i, p)| {
                Fixture::new(
                    &format!("{}_{}", self.fixture_type.id, i + 1),
                    self.fixture_type.clone(),
                    *p,
                    orientation,
                )
            })
            .collect()
    }
}

/// Size and place a grid of fixtures for an area.
///
/// The candidate with the highest efficacy whose mounting range contains the
/// requested mounting height is selected; on ties the first one wins.
///
/// * `area`         - Area to light.
/// * `requirements` - Layout requirements.
/// * `candidates`   - Fixture types to choose from.
/// * `spacing_fn`   - Returns the recommended spacing for a fixture type,
///                    target illuminance and mounting height.
pub fn optimize<F>(
    area: &Area,
    requirements: &LayoutRequirements,
    candidates: &[ArcFixtureType],
    spacing_fn: F,
) -> Result<LayoutPlan>
where
    F: Fn(&FixtureType, Float, Float) -> Float,
{
    area.validate()?;

    let height = requirements.mounting_height;
    let selected = candidates
        .iter()
        .filter(|c| c.spec.mounting_height.contains(height))
        .fold(None, |best: Option<&ArcFixtureType>, c| match best {
            Some(b) if b.spec.efficacy >= c.spec.efficacy => Some(b),
            _ => Some(c),
        })
        .ok_or(CalcError::NoSuitableFixture {
            mounting_height: height,
        })?;

    let target = requirements.target_illuminance;
    let required_lumens = target * area.size() / EFFICIENCY_FACTOR;
    let required = (required_lumens / selected.spec.lumens).ceil();
    if !(required <= MAX_LAYOUT_FIXTURES as Float) {
        return Err(CalcError::TooManyFixtures {
            required,
            limit: MAX_LAYOUT_FIXTURES,
        });
    }
    let count = max(required, 0.0) as usize;

    info!(
        "Selected '{}' ({:.1} lm/W): {} fixture(s) for {:.0} lm",
        selected.id, selected.spec.efficacy, count, required_lumens
    );

    if count == 0 {
        warn!("Target of {} lux needs no fixtures", target);
    }

    let spacing = spacing_fn(selected.as_ref(), target, height);
    let placements = fixture_grid(area, count, height);

    Ok(LayoutPlan {
        fixture_type: selected.clone(),
        count,
        placements,
        spacing,
        estimated_illuminance: target,
        efficacy: selected.spec.efficacy,
    })
}

/// Returns `count` positions on an evenly spaced interior grid, filled row by
/// row.
///
/// * `area`   - Area to cover.
/// * `count`  - Number of positions.
/// * `height` - z coordinate of each position.
pub fn fixture_grid(area: &Area, count: usize, height: Float) -> Vec<Point3f> {
    if count == 0 {
        return vec![];
    }

    let cols = max((count as Float * area.width / area.height).sqrt().ceil() as usize, 1);
    let rows = count.div_ceil(cols);
    let dx = area.width / (cols as Float + 1.0);
    let dy = area.height / (rows as Float + 1.0);

    (0..rows)
        .flat_map(|row| (0..cols).map(move |col| (row, col)))
        .take(count)
        .map(|(row, col)| {
            Point3f::new(
                area.origin.x + dx * (col + 1) as Float,
                area.origin.y + dy * (row + 1) as Float,
                height,
            )
        })
        .collect()
}
