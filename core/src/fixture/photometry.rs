//! Photometry

use crate::math::*;
use std::fmt;
use std::str::FromStr;

/// IESNA lateral light distribution type.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DistributionType {
    TypeI,
    TypeII,
    TypeIII,
    TypeIV,
    TypeV,
}

impl FromStr for DistributionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "type1" => Ok(Self::TypeI),
            "type2" => Ok(Self::TypeII),
            "type3" => Ok(Self::TypeIII),
            "type4" => Ok(Self::TypeIV),
            "type5" => Ok(Self::TypeV),
            _ => Err(format!("unknown distribution type '{s}'")),
        }
    }
}

impl fmt::Display for DistributionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::TypeI => "type1",
            Self::TypeII => "type2",
            Self::TypeIII => "type3",
            Self::TypeIV => "type4",
            Self::TypeV => "type5",
        };
        write!(f, "{s}")
    }
}

/// Optional photometric data for a fixture type.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Photometry {
    /// Peak luminous intensity in candela.
    pub peak_intensity: Option<Float>,

    /// Cutoff angle in degrees.
    pub cutoff_angle: Option<Float>,

    /// Field angle in degrees.
    pub field_angle: Option<Float>,

    /// Lateral distribution type.
    pub distribution: Option<DistributionType>,
}

impl Photometry {
    /// Returns photometry with only a peak intensity.
    ///
    /// * `candela` - Peak luminous intensity.
    pub fn with_peak_intensity(candela: Float) -> Self {
        Self {
            peak_intensity: Some(candela),
            ..Default::default()
        }
    }
}

/// Returns the relative intensity at `angle` off the beam axis using a
/// cosine-squared distribution with a hard cutoff at `half_angle`. Both
/// arguments are in radians.
///
/// The cos² shape and the hard edge are legacy model constants kept for
/// compatibility with existing designs.
///
/// * `angle`      - Angle off the beam axis.
/// * `half_angle` - Half the beam angle.
#[inline]
pub fn distribution_factor(angle: Float, half_angle: Float) -> Float {
    if abs(angle) > half_angle {
        return 0.0;
    }
    let c = angle.cos();
    c * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn distribution_type_parses_catalog_names() {
        assert_eq!("type2".parse::<DistributionType>(), Ok(DistributionType::TypeII));
        assert_eq!("TYPE5".parse::<DistributionType>(), Ok(DistributionType::TypeV));
        assert!("type9".parse::<DistributionType>().is_err());
        assert_eq!(DistributionType::TypeIII.to_string(), "type3");
    }

    #[test]
    fn factor_is_one_on_axis() {
        assert_eq!(distribution_factor(0.0, 0.5), 1.0);
    }

    #[test]
    fn factor_has_hard_edge() {
        let half = 20.0_f64.to_radians();
        assert!(distribution_factor(half, half) > 0.8);
        assert_eq!(distribution_factor(half + 1e-9, half), 0.0);
        assert_eq!(distribution_factor(-half - 1e-9, half), 0.0);
    }

    proptest! {
        #[test]
        fn factor_is_symmetric_and_bounded(angle in -3.0..3.0f64, half in 0.01..3.0f64) {
            let f = distribution_factor(angle, half);
            prop_assert_eq!(f, distribution_factor(-angle, half));
            prop_assert!((0.0..=1.0).contains(&f));
        }
    }
}
