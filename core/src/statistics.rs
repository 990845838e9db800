//! Statistics Aggregator

use crate::field::*;
use crate::math::*;
use itertools::{Itertools, MinMaxResult};
use std::fmt;

/// Summary statistics of a sampled illuminance field.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Statistics {
    /// Mean illuminance in lux.
    pub average: Float,

    /// Lowest sampled illuminance in lux.
    pub minimum: Float,

    /// Highest sampled illuminance in lux.
    pub maximum: Float,

    /// minimum / average; 0 when the average is 0.
    pub uniformity_ratio: Float,

    /// Population standard deviation in lux.
    pub standard_deviation: Float,

    /// Number of samples.
    pub count: usize,
}

impl Statistics {
    /// Reduces a list of illuminance values. An empty list yields all zeros.
    ///
    /// * `values` - Illuminance values in lux.
    pub fn from_values(values: &[Float]) -> Self {
        let (minimum, maximum) = match values.iter().copied().minmax() {
            MinMaxResult::NoElements => return Self::default(),
            MinMaxResult::OneElement(v) => (v, v),
            MinMaxResult::MinMax(lo, hi) => (lo, hi),
        };

        let count = values.len();
        let n = count as Float;
        let average = values.iter().sum::<Float>() / n;
        let variance = values
            .iter()
            .map(|v| (v - average) * (v - average))
            .sum::<Float>()
            / n;

        let uniformity_ratio = if average > 0.0 {
            minimum / average
        } else {
            0.0
        };

        Self {
            average,
            minimum,
            maximum,
            uniformity_ratio,
            standard_deviation: variance.sqrt(),
            count,
        }
    }

    /// Reduces a sampled field.
    ///
    /// * `field` - The field.
    pub fn reduce(field: &IlluminanceField) -> Self {
        let values: Vec<Float> = field.values().collect();
        Self::from_values(&values)
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "avg {:.1} lux, min {:.1} lux, max {:.1} lux, uniformity {:.3} : 1, std dev {:.1} lux ({} points)",
            self.average,
            self.minimum,
            self.maximum,
            self.uniformity_ratio,
            self.standard_deviation,
            self.count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::*;
    use crate::geometry::*;
    use float_cmp::*;
    use proptest::prelude::*;

    #[test]
    fn empty_values_are_all_zero() {
        let s = Statistics::from_values(&[]);
        assert_eq!(s, Statistics::default());
        assert_eq!(s.uniformity_ratio, 0.0);
    }

    #[test]
    fn all_dark_field_has_zero_uniformity() {
        let s = Statistics::from_values(&[0.0, 0.0, 0.0]);
        assert_eq!(s.average, 0.0);
        assert_eq!(s.uniformity_ratio, 0.0);
        assert!(!s.uniformity_ratio.is_nan());
        assert_eq!(s.count, 3);
    }

    #[test]
    fn known_values() {
        let s = Statistics::from_values(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_eq!(s.average, 5.0);
        assert_eq!(s.minimum, 2.0);
        assert_eq!(s.maximum, 9.0);
        assert_eq!(s.standard_deviation, 2.0);
        assert!(approx_eq!(f64, s.uniformity_ratio, 0.4, ulps = 2));
    }

    #[test]
    fn reduce_uses_field_values() {
        let field = IlluminanceField::new(
            vec![
                SamplePoint::new(Point3f::zero(), 10.0),
                SamplePoint::new(Point3f::new(1.0, 0.0, 0.0), 30.0),
            ],
            Area::new(0.0, 0.0, 1.0, 1.0),
        );
        let s = Statistics::reduce(&field);
        assert_eq!(s.average, 20.0);
        assert_eq!(s.uniformity_ratio, 0.5);
        assert_eq!(s.standard_deviation, 10.0);
    }

    #[test]
    fn display_uses_fixed_precision() {
        let s = Statistics::from_values(&[100.0, 200.0, 300.0]);
        let text = s.to_string();
        assert!(text.contains("avg 200.0 lux"));
        assert!(text.contains("uniformity 0.500 : 1"));
    }

    proptest! {
        #[test]
        fn uniformity_in_unit_interval(values in prop::collection::vec(0.0..1000.0f64, 0..50)) {
            let s = Statistics::from_values(&values);
            prop_assert!(s.uniformity_ratio >= 0.0 && s.uniformity_ratio <= 1.0 + 1e-12);
            prop_assert!(s.minimum <= s.maximum);
            prop_assert!(s.standard_deviation >= 0.0);
            prop_assert_eq!(s.count, values.len());
        }
    }
}
