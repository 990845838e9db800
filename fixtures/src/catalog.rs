//! Catalog Entries

use lux_core::fixture::*;
use lux_core::math::*;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Catalog section a fixture belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Sports,
    Industrial,
    Custom,
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sports" => Ok(Self::Sports),
            "industrial" => Ok(Self::Industrial),
            "custom" => Ok(Self::Custom),
            _ => Err(format!("unknown fixture category '{s}'")),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Sports => "sports",
            Self::Industrial => "industrial",
            Self::Custom => "custom",
        };
        write!(f, "{s}")
    }
}

/// A fixture type together with its catalog metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogEntry {
    /// The fixture type used by calculations.
    pub fixture_type: ArcFixtureType,

    /// Catalog section.
    pub category: Category,

    /// Product family, e.g. "flood" or "highbay".
    pub kind: String,

    /// Typical applications.
    pub applications: Vec<String>,

    /// Manufacturer name.
    pub manufacturer: Option<String>,

    /// Model number.
    pub model: Option<String>,

    /// Unit price.
    pub price: Option<Float>,

    /// Weight in kg.
    pub weight: Option<Float>,
}

impl CatalogEntry {
    /// Returns a new `CatalogEntry` without product metadata.
    ///
    /// * `fixture_type` - The fixture type.
    /// * `category`     - Catalog section.
    pub fn new(fixture_type: ArcFixtureType, category: Category) -> Self {
        Self {
            fixture_type,
            category,
            kind: String::new(),
            applications: vec![],
            manufacturer: None,
            model: None,
            price: None,
            weight: None,
        }
    }

    /// Returns the fixture type identifier.
    pub fn id(&self) -> &str {
        &self.fixture_type.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.fixture_type.name
    }
}

/// Static description of a built-in fixture. Built-in values are known to be
/// valid so the spec is assembled directly.
pub(crate) struct Builtin {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: &'static str,
    pub power: Float,
    pub lumens: Float,
    pub efficacy: Float,
    pub beam: (Float, Float),
    pub color_temperature: Float,
    pub cri: Float,
    pub mounting: (Float, Float, Float),
    pub dimensions: (Float, Float, Float),
    pub weight: Float,
    pub peak_intensity: Float,
    pub distribution: DistributionType,
    pub cutoff_angle: Float,
    pub field_angle: Float,
    pub applications: &'static [&'static str],
    pub manufacturer: &'static str,
    pub model: &'static str,
    pub price: Float,
}

impl Builtin {
    /// Convert to a catalog entry in the given category.
    ///
    /// * `category` - Catalog section.
    pub fn entry(&self, category: Category) -> CatalogEntry {
        let (width, height, depth) = self.dimensions;
        let (min, max, recommended) = self.mounting;

        let spec = FixtureSpec {
            power: self.power,
            lumens: self.lumens,
            efficacy: self.efficacy,
            beam: BeamAngle {
                horizontal: self.beam.0,
                vertical: self.beam.1,
            },
            mounting_height: MountingRange {
                min,
                max,
                recommended: Some(recommended),
            },
            color_temperature: Some(self.color_temperature),
            cri: Some(self.cri),
            dimensions: Some(Dimensions::new(width, height, depth)),
        };
        let photometry = Photometry {
            peak_intensity: Some(self.peak_intensity),
            cutoff_angle: Some(self.cutoff_angle),
            field_angle: Some(self.field_angle),
            distribution: Some(self.distribution),
        };

        CatalogEntry {
            fixture_type: Arc::new(FixtureType::new(self.id, self.name, spec, photometry)),
            category,
            kind: self.kind.to_owned(),
            applications: self.applications.iter().map(|s| s.to_string()).collect(),
            manufacturer: Some(self.manufacturer.to_owned()),
            model: Some(self.model.to_owned()),
            price: Some(self.price),
            weight: Some(self.weight),
        }
    }
}
