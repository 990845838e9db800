//! Fixture Library

use crate::catalog::*;
use crate::industrial::*;
use crate::sports::*;
use lux_core::error::*;
use lux_core::fixture::*;
use lux_core::math::*;
use std::sync::Arc;

/// Lowest power density in W/m² a recommended fixture may have.
pub const MIN_POWER_DENSITY: Float = 0.5;

/// Highest power density in W/m² a recommended fixture may have.
pub const MAX_POWER_DENSITY: Float = 50.0;

/// The built-in catalog plus user defined fixtures.
#[derive(Clone, Debug)]
pub struct FixtureLibrary {
    sports: Vec<CatalogEntry>,
    industrial: Vec<CatalogEntry>,
    custom: Vec<CatalogEntry>,

    /// Sequence number for generated custom identifiers.
    next_custom: usize,
}

impl Default for FixtureLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureLibrary {
    /// Returns a library containing the built-in fixtures.
    pub fn new() -> Self {
        Self {
            sports: SPORTS_FIXTURES.clone(),
            industrial: INDUSTRIAL_FIXTURES.clone(),
            custom: vec![],
            next_custom: 1,
        }
    }

    /// Returns the fixtures in a category.
    ///
    /// * `category` - Catalog section.
    pub fn by_category(&self, category: Category) -> &[CatalogEntry] {
        match category {
            Category::Sports => &self.sports,
            Category::Industrial => &self.industrial,
            Category::Custom => &self.custom,
        }
    }

    /// Returns all fixtures: sports, industrial then custom.
    pub fn all(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.sports
            .iter()
            .chain(self.industrial.iter())
            .chain(self.custom.iter())
    }

    /// Returns the fixture with the given identifier.
    ///
    /// * `id` - Fixture type identifier.
    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.all().find(|e| e.id() == id)
    }

    /// Returns the fixture types of all entries, for use as layout
    /// candidates.
    pub fn fixture_types(&self) -> Vec<ArcFixtureType> {
        self.all().map(|e| Arc::clone(&e.fixture_type)).collect()
    }

    /// Returns fixtures suited to an application, most efficient first. A
    /// fixture qualifies when one of its applications contains `application`
    /// (case-insensitive), `mounting_height` lies in its mounting range and
    /// its power over `area` is within `MIN_POWER_DENSITY..=MAX_POWER_DENSITY`.
    /// Equal efficacies keep library order.
    ///
    /// * `application`     - Application to search for, e.g. "football".
    /// * `area`            - Area to light in m².
    /// * `mounting_height` - Intended mounting height in metres.
    pub fn recommendations(
        &self,
        application: &str,
        area: Float,
        mounting_height: Float,
    ) -> Vec<&CatalogEntry> {
        let application = application.to_lowercase();
        let mut matches: Vec<&CatalogEntry> = self
            .all()
            .filter(|e| {
                e.applications
                    .iter()
                    .any(|a| a.to_lowercase().contains(&application))
            })
            .filter(|e| e.fixture_type.spec.mounting_height.contains(mounting_height))
            .filter(|e| {
                let density = e.fixture_type.spec.power / area;
                (MIN_POWER_DENSITY..=MAX_POWER_DENSITY).contains(&density)
            })
            .collect();

        matches.sort_by(|a, b| {
            b.fixture_type
                .spec
                .efficacy
                .total_cmp(&a.fixture_type.spec.efficacy)
        });
        debug!(
            "{} fixture(s) recommended for '{}' at {} m",
            matches.len(),
            application,
            mounting_height
        );
        matches
    }

    /// Add a user defined fixture and return its identifier. When `id` is
    /// `None` one of the form `custom_<n>` is generated.
    ///
    /// * `id`         - Optional identifier; must not already exist.
    /// * `name`       - Display name; must not be empty.
    /// * `spec`       - Validated specifications.
    /// * `photometry` - Photometric data.
    pub fn add_custom(
        &mut self,
        id: Option<&str>,
        name: &str,
        spec: FixtureSpec,
        photometry: Photometry,
    ) -> Result<String> {
        if name.trim().is_empty() {
            return Err(CalcError::invalid_fixture("name must not be empty"));
        }

        let id = match id {
            Some(id) if self.get(id).is_some() => {
                return Err(CalcError::invalid_fixture(format!(
                    "fixture '{id}' already exists"
                )))
            }
            Some(id) => id.to_owned(),
            None => self.generate_id(),
        };

        let fixture_type = Arc::new(FixtureType::new(&id, name, spec, photometry));
        self.custom.push(CatalogEntry::new(fixture_type, Category::Custom));
        info!("Added custom fixture '{id}'");

        Ok(id)
    }

    /// Remove a user defined fixture. Returns false if no custom fixture has
    /// the identifier; built-in fixtures cannot be removed.
    ///
    /// * `id` - Fixture type identifier.
    pub fn remove_custom(&mut self, id: &str) -> bool {
        match self.custom.iter().position(|e| e.id() == id) {
            Some(index) => {
                self.custom.remove(index);
                info!("Removed custom fixture '{id}'");
                true
            }
            None => false,
        }
    }

    fn generate_id(&mut self) -> String {
        loop {
            let id = format!("custom_{}", self.next_custom);
            self.next_custom += 1;
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}
