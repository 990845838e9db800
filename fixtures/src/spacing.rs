//! Fixture Spacing

use lux_core::fixture::*;
use lux_core::math::*;

/// Light loss factor applied to rated lumens.
pub const LIGHT_LOSS_FACTOR: Float = 0.7;

/// Fraction of the light circle diameter used as spacing.
pub const SPACING_RATIO: Float = 0.7;

/// Spacing estimate for a fixture type.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SpacingInfo {
    /// Recommended distance between fixtures in metres.
    pub spacing: Float,

    /// Area one fixture can light to the target in m².
    pub area: Float,

    /// Diameter of the beam footprint in metres.
    pub light_circle_diameter: Float,
}

/// Estimate fixture spacing from the horizontal beam angle and mounting
/// height. Beams of 180° or wider have no finite footprint and give zero
/// spacing.
///
/// * `fixture`         - The fixture type.
/// * `target_lux`      - Target illuminance in lux.
/// * `mounting_height` - Mounting height in metres.
pub fn calculate_fixture_spacing(
    fixture: &FixtureType,
    target_lux: Float,
    mounting_height: Float,
) -> SpacingInfo {
    let usable_lumens = fixture.spec.lumens * LIGHT_LOSS_FACTOR;
    let area = if target_lux > 0.0 {
        usable_lumens / target_lux
    } else {
        0.0
    };

    let half_beam = fixture.spec.beam.half_horizontal();
    let light_circle_diameter = if half_beam < PI_OVER_TWO {
        2.0 * mounting_height * half_beam.tan()
    } else {
        debug!(
            "'{}' has a {}° beam; no finite footprint",
            fixture.id, fixture.spec.beam.horizontal
        );
        0.0
    };

    SpacingInfo {
        spacing: light_circle_diameter * SPACING_RATIO,
        area,
        light_circle_diameter,
    }
}

/// Returns only the recommended spacing. Suitable as the spacing function
/// for `lux_core::layout::optimize`.
///
/// * `fixture`         - The fixture type.
/// * `target_lux`      - Target illuminance in lux.
/// * `mounting_height` - Mounting height in metres.
pub fn beam_spacing(fixture: &FixtureType, target_lux: Float, mounting_height: Float) -> Float {
    calculate_fixture_spacing(fixture, target_lux, mounting_height).spacing
}
