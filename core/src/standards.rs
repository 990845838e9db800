//! Lighting Standards

use crate::math::*;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// A quantity a standard places requirements on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Metric {
    /// Mean horizontal illuminance (lux).
    AverageIlluminance,

    /// Minimum / average illuminance.
    UniformityRatio,

    /// Mean vertical illuminance (lux).
    VerticalIlluminance,

    /// Correlated colour temperature (K).
    ColorTemperature,

    /// Colour rendering index.
    Cri,

    /// Glare rating (GR).
    GlareRating,
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::AverageIlluminance => "Average illuminance",
            Self::UniformityRatio => "Uniformity ratio",
            Self::VerticalIlluminance => "Vertical illuminance",
            Self::ColorTemperature => "Colour temperature",
            Self::Cri => "CRI",
            Self::GlareRating => "Glare rating",
        };
        write!(f, "{s}")
    }
}

/// Threshold for a single metric.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Requirement {
    /// Lowest acceptable value.
    pub min: Option<Float>,

    /// Recommended value.
    pub recommended: Option<Float>,

    /// Highest acceptable value.
    pub max: Option<Float>,

    /// Unit symbol.
    pub unit: Option<&'static str>,
}

impl Requirement {
    /// Returns a requirement with a minimum and a recommended value.
    ///
    /// * `min`         - Lowest acceptable value.
    /// * `recommended` - Recommended value.
    pub fn at_least(min: Float, recommended: Float) -> Self {
        Self {
            min: Some(min),
            recommended: Some(recommended),
            ..Default::default()
        }
    }

    /// Returns a requirement bounded on both sides.
    ///
    /// * `min` - Lowest acceptable value.
    /// * `max` - Highest acceptable value.
    pub fn between(min: Float, max: Float) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            ..Default::default()
        }
    }

    /// Returns a requirement with only an upper bound.
    ///
    /// * `max` - Highest acceptable value.
    pub fn at_most(max: Float) -> Self {
        Self {
            max: Some(max),
            ..Default::default()
        }
    }

    /// Set the unit symbol.
    ///
    /// * `unit` - Unit symbol.
    pub fn with_unit(mut self, unit: &'static str) -> Self {
        self.unit = Some(unit);
        self
    }
}

/// Reference dimensions associated with a standard, e.g. a playing field.
#[derive(Clone, Debug, PartialEq)]
pub struct ReferenceArea {
    pub name: String,
    pub width: Float,
    pub height: Float,
}

/// A named set of requirements.
#[derive(Clone, Debug, PartialEq)]
pub struct Standard {
    /// Display name.
    pub name: String,

    /// Requirements keyed by metric.
    pub requirements: BTreeMap<Metric, Requirement>,

    /// Reference areas.
    pub reference_areas: Vec<ReferenceArea>,
}

impl Standard {
    /// Returns a new `Standard` without requirements.
    ///
    /// * `name` - Display name.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            requirements: BTreeMap::new(),
            reference_areas: vec![],
        }
    }

    /// Add or replace a requirement.
    ///
    /// * `metric`      - The metric.
    /// * `requirement` - The threshold.
    pub fn require(mut self, metric: Metric, requirement: Requirement) -> Self {
        self.requirements.insert(metric, requirement);
        self
    }

    /// Add a reference area.
    ///
    /// * `name`   - Name of the area.
    /// * `width`  - Width in metres.
    /// * `height` - Height in metres.
    pub fn with_reference_area(mut self, name: &str, width: Float, height: Float) -> Self {
        self.reference_areas.push(ReferenceArea {
            name: name.to_owned(),
            width,
            height,
        });
        self
    }

    /// Returns the requirement for a metric.
    ///
    /// * `metric` - The metric.
    pub fn requirement(&self, metric: Metric) -> Option<&Requirement> {
        self.requirements.get(&metric)
    }
}

/// Immutable lookup of standards by identifier. Built once and passed to
/// whatever needs it.
#[derive(Clone, Debug, Default)]
pub struct StandardsCatalog {
    standards: HashMap<String, Standard>,
}

impl StandardsCatalog {
    /// Returns a catalog from (identifier, standard) pairs.
    ///
    /// * `standards` - The standards.
    pub fn new<I>(standards: I) -> Self
    where
        I: IntoIterator<Item = (String, Standard)>,
    {
        Self {
            standards: standards.into_iter().collect(),
        }
    }

    /// Returns the catalog of built-in standards: `fifa`, `uefa`, `ies` and
    /// `custom`.
    pub fn builtin() -> Self {
        use Metric::*;

        let sports = |name: &str, avg: (Float, Float), u: (Float, Float), v: (Float, Float), cri: (Float, Float)| {
            Standard::new(name)
                .require(AverageIlluminance, Requirement::at_least(avg.0, avg.1).with_unit("lux"))
                .require(UniformityRatio, Requirement::at_least(u.0, u.1))
                .require(VerticalIlluminance, Requirement::at_least(v.0, v.1).with_unit("lux"))
                .require(ColorTemperature, Requirement::between(5000.0, 6500.0).with_unit("K"))
                .require(Cri, Requirement::at_least(cri.0, cri.1))
                .require(GlareRating, Requirement::at_most(50.0).with_unit("GR"))
                .with_reference_area("Playing field", 105.0, 68.0)
                .with_reference_area("Total area", 125.0, 88.0)
        };

        let fifa = sports(
            "FIFA Football Standards",
            (200.0, 500.0),
            (0.5, 0.7),
            (150.0, 200.0),
            (65.0, 80.0),
        );
        let uefa = sports(
            "UEFA Standards",
            (500.0, 800.0),
            (0.7, 0.8),
            (400.0, 600.0),
            (80.0, 90.0),
        );
        let ies = Standard::new("IES Industrial Standards")
            .require(AverageIlluminance, Requirement::at_least(50.0, 200.0).with_unit("lux"))
            .require(UniformityRatio, Requirement::at_least(0.25, 0.4))
            .require(VerticalIlluminance, Requirement::at_least(25.0, 100.0).with_unit("lux"))
            .require(ColorTemperature, Requirement::between(3000.0, 6500.0).with_unit("K"))
            .require(Cri, Requirement::at_least(65.0, 80.0))
            .require(GlareRating, Requirement::at_most(55.0).with_unit("GR"));
        let custom = Standard::new("Custom Requirements")
            .require(AverageIlluminance, Requirement::at_least(100.0, 300.0).with_unit("lux"))
            .require(UniformityRatio, Requirement::at_least(0.4, 0.6))
            .require(VerticalIlluminance, Requirement::at_least(50.0, 150.0).with_unit("lux"))
            .require(ColorTemperature, Requirement::between(3000.0, 6500.0).with_unit("K"))
            .require(Cri, Requirement::at_least(70.0, 80.0))
            .require(GlareRating, Requirement::at_most(50.0).with_unit("GR"));

        Self::new([
            ("fifa".to_owned(), fifa),
            ("uefa".to_owned(), uefa),
            ("ies".to_owned(), ies),
            ("custom".to_owned(), custom),
        ])
    }

    /// Returns the standard with the given identifier.
    ///
    /// * `id` - Standard identifier.
    pub fn get(&self, id: &str) -> Option<&Standard> {
        self.standards.get(id)
    }

    /// Returns the identifiers in sorted order.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.standards.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_four_standards() {
        let catalog = StandardsCatalog::builtin();
        assert_eq!(catalog.ids(), vec!["custom", "fifa", "ies", "uefa"]);
        assert!(catalog.get("nba").is_none());
    }

    #[test]
    fn fifa_thresholds() {
        let catalog = StandardsCatalog::builtin();
        let fifa = catalog.get("fifa").unwrap();
        assert_eq!(fifa.name, "FIFA Football Standards");

        let avg = fifa.requirement(Metric::AverageIlluminance).unwrap();
        assert_eq!(avg.min, Some(200.0));
        assert_eq!(avg.recommended, Some(500.0));
        assert_eq!(avg.unit, Some("lux"));

        let glare = fifa.requirement(Metric::GlareRating).unwrap();
        assert_eq!(glare.min, None);
        assert_eq!(glare.max, Some(50.0));

        let cct = fifa.requirement(Metric::ColorTemperature).unwrap();
        assert_eq!((cct.min, cct.max), (Some(5000.0), Some(6500.0)));
        assert_eq!(fifa.reference_areas.len(), 2);
    }

    #[test]
    fn industrial_standard_has_no_reference_areas() {
        let catalog = StandardsCatalog::builtin();
        let ies = catalog.get("ies").unwrap();
        assert!(ies.reference_areas.is_empty());
        assert_eq!(ies.requirement(Metric::UniformityRatio).unwrap().min, Some(0.25));
        assert_eq!(ies.requirement(Metric::GlareRating).unwrap().max, Some(55.0));
    }

    #[test]
    fn custom_catalogs_can_be_injected() {
        let catalog = StandardsCatalog::new([(
            "parking".to_owned(),
            Standard::new("Parking").require(Metric::AverageIlluminance, Requirement::at_least(10.0, 20.0)),
        )]);
        assert_eq!(catalog.ids(), vec!["parking"]);
        assert_eq!(Metric::Cri.to_string(), "CRI");
    }
}
