//! Fixture Specifications

use crate::error::*;
use crate::math::*;

/// Angular width of a fixture's light cone, in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BeamAngle {
    /// Horizontal beam angle in degrees.
    pub horizontal: Float,

    /// Vertical beam angle in degrees.
    pub vertical: Float,
}

impl BeamAngle {
    /// Returns a new validated `BeamAngle`. Both angles must lie in (0, 360].
    ///
    /// * `horizontal` - Horizontal beam angle in degrees.
    /// * `vertical`   - Vertical beam angle in degrees.
    pub fn new(horizontal: Float, vertical: Float) -> Result<Self> {
        for (axis, angle) in [("horizontal", horizontal), ("vertical", vertical)] {
            if !(angle > 0.0 && angle <= 360.0) {
                return Err(CalcError::invalid_fixture(format!(
                    "{axis} beam angle {angle} must be in (0, 360]"
                )));
            }
        }
        Ok(Self {
            horizontal,
            vertical,
        })
    }

    /// Returns half the horizontal beam angle in radians.
    pub fn half_horizontal(&self) -> Float {
        (self.horizontal * 0.5).to_radians()
    }

    /// Returns half the vertical beam angle in radians.
    pub fn half_vertical(&self) -> Float {
        (self.vertical * 0.5).to_radians()
    }
}

/// Range of heights at which a fixture may be mounted, in metres.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MountingRange {
    /// Minimum mounting height.
    pub min: Float,

    /// Maximum mounting height.
    pub max: Float,

    /// Manufacturer recommended mounting height.
    pub recommended: Option<Float>,
}

impl MountingRange {
    /// Returns a new validated `MountingRange`.
    ///
    /// * `min` - Minimum mounting height.
    /// * `max` - Maximum mounting height.
    pub fn new(min: Float, max: Float) -> Result<Self> {
        if !(min <= max) {
            return Err(CalcError::invalid_fixture(format!(
                "mounting height range [{min}, {max}] is empty"
            )));
        }
        Ok(Self {
            min,
            max,
            recommended: None,
        })
    }

    /// Set the recommended mounting height.
    ///
    /// * `height` - Recommended height.
    pub fn with_recommended(mut self, height: Float) -> Self {
        self.recommended = Some(height);
        self
    }

    /// Returns true if the inclusive range covers the given height.
    ///
    /// * `height` - Mounting height.
    pub fn contains(&self, height: Float) -> bool {
        height >= self.min && height <= self.max
    }
}

/// Housing dimensions in millimetres.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Dimensions {
    pub width: Float,
    pub height: Float,
    pub depth: Float,
}

impl Dimensions {
    /// Returns new housing dimensions.
    ///
    /// * `width`  - Width in mm.
    /// * `height` - Height in mm.
    /// * `depth`  - Depth in mm.
    pub fn new(width: Float, height: Float, depth: Float) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Returns the luminous face area in square metres.
    pub fn face_area(&self) -> Float {
        self.width * self.height / 1_000_000.0
    }
}

/// Electrical and optical specification of a fixture type.
#[derive(Clone, Debug, PartialEq)]
pub struct FixtureSpec {
    /// Power draw in watts.
    pub power: Float,

    /// Luminous flux in lumens.
    pub lumens: Float,

    /// Luminous efficacy in lumens per watt.
    pub efficacy: Float,

    /// Beam angles.
    pub beam: BeamAngle,

    /// Allowed mounting heights.
    pub mounting_height: MountingRange,

    /// Correlated colour temperature in kelvin.
    pub color_temperature: Option<Float>,

    /// Colour rendering index.
    pub cri: Option<Float>,

    /// Housing dimensions.
    pub dimensions: Option<Dimensions>,
}

impl FixtureSpec {
    /// Returns a new validated `FixtureSpec`. Efficacy defaults to
    /// lumens / power.
    ///
    /// * `power`           - Power draw in watts.
    /// * `lumens`          - Luminous flux in lumens.
    /// * `beam`            - Beam angles.
    /// * `mounting_height` - Allowed mounting heights.
    pub fn new(
        power: Float,
        lumens: Float,
        beam: BeamAngle,
        mounting_height: MountingRange,
    ) -> Result<Self> {
        if !(power.is_finite() && power > 0.0) {
            return Err(CalcError::invalid_fixture(format!(
                "power {power} W must be positive"
            )));
        }
        if !(lumens.is_finite() && lumens > 0.0) {
            return Err(CalcError::invalid_fixture(format!(
                "luminous flux {lumens} lm must be positive"
            )));
        }

        Ok(Self {
            power,
            lumens,
            efficacy: lumens / power,
            beam,
            mounting_height,
            color_temperature: None,
            cri: None,
            dimensions: None,
        })
    }

    /// Override the efficacy with a rated value.
    ///
    /// * `efficacy` - Rated efficacy in lm/W.
    pub fn with_efficacy(mut self, efficacy: Float) -> Self {
        self.efficacy = efficacy;
        self
    }

    /// Set the colour temperature.
    ///
    /// * `kelvin` - Correlated colour temperature.
    pub fn with_color_temperature(mut self, kelvin: Float) -> Self {
        self.color_temperature = Some(kelvin);
        self
    }

    /// Set the colour rendering index.
    ///
    /// * `cri` - Colour rendering index.
    pub fn with_cri(mut self, cri: Float) -> Self {
        self.cri = Some(cri);
        self
    }

    /// Set the housing dimensions.
    ///
    /// * `dimensions` - Housing dimensions in mm.
    pub fn with_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = Some(dimensions);
        self
    }
}
