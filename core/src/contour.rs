//! Isolux Contours

use crate::field::*;
use crate::math::*;
use std::fmt;

/// Default contour levels in lux.
pub const DEFAULT_CONTOUR_LEVELS: [Float; 8] = [1.0, 5.0, 10.0, 20.0, 50.0, 100.0, 200.0, 500.0];

/// Colour ramp from dark blue through blue, cyan, green, yellow and orange
/// to red.
const COLOR_STOPS: [Rgb; 7] = [
    Rgb::new(0, 0, 128),
    Rgb::new(0, 100, 255),
    Rgb::new(0, 255, 255),
    Rgb::new(0, 255, 0),
    Rgb::new(255, 255, 0),
    Rgb::new(255, 100, 0),
    Rgb::new(255, 0, 0),
];

/// An 8-bit RGB colour.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Returns a new `Rgb`.
    ///
    /// * `r` - Red.
    /// * `g` - Green.
    /// * `b` - Blue.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear interpolation between two colours, rounded per channel.
    ///
    /// * `t`     - Parameter in [0, 1].
    /// * `other` - Colour at `t = 1`.
    pub fn lerp(&self, t: Float, other: &Self) -> Self {
        let channel = |a: u8, b: u8| -> u8 { clamp(lerp(t, a as Float, b as Float).round(), 0.0, 255.0) as u8 };
        Self::new(
            channel(self.r, other.r),
            channel(self.g, other.g),
            channel(self.b, other.b),
        )
    }

    /// Returns the ramp colour for a parameter in [0, 1]. Values outside
    /// the range are clamped.
    ///
    /// * `t` - Normalized position along the ramp.
    pub fn ramp(t: Float) -> Self {
        let index = clamp(t, 0.0, 1.0) * (COLOR_STOPS.len() - 1) as Float;
        let lower = index.floor() as usize;
        let upper = index.ceil() as usize;
        if lower == upper {
            COLOR_STOPS[lower]
        } else {
            COLOR_STOPS[lower].lerp(index - lower as Float, &COLOR_STOPS[upper])
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Samples at or above an illuminance level.
#[derive(Clone, Debug, PartialEq)]
pub struct Contour {
    /// Illuminance level in lux.
    pub level: Float,

    /// Samples with illuminance >= `level`, in field order.
    pub points: Vec<SamplePoint>,

    /// Display colour.
    pub color: Rgb,
}

/// Generate contours for each level in the order given. Levels without any
/// qualifying sample are omitted. Colours are taken from the level's
/// position between the first and last entry of `levels`.
///
/// * `field`  - The sampled field.
/// * `levels` - Illuminance levels in lux, normally ascending.
pub fn generate(field: &IlluminanceField, levels: &[Float]) -> Vec<Contour> {
    let (first, last) = match (levels.first(), levels.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => return vec![],
    };
    let range = last - first;

    levels
        .iter()
        .filter_map(|&level| {
            let points: Vec<SamplePoint> = field
                .points
                .iter()
                .filter(|s| s.illuminance >= level)
                .copied()
                .collect();
            if points.is_empty() {
                return None;
            }

            let t = if range == 0.0 { 0.0 } else { (level - first) / range };
            Some(Contour {
                level,
                points,
                color: Rgb::ramp(t),
            })
        })
        .collect()
}
