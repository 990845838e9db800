//! Scene

use crate::area::*;
use crate::fixture::*;
use crate::math::*;

/// The design being calculated: placed fixtures and calculation areas.
/// Kernel operations only read from it.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    /// Placed fixtures.
    pub fixtures: Vec<Fixture>,

    /// Calculation areas in the order they were added.
    pub areas: Vec<Area>,
}

impl Scene {
    /// Creates a new `Scene`.
    ///
    /// * `fixtures` - Placed fixtures.
    /// * `areas`    - Calculation areas.
    pub fn new(fixtures: Vec<Fixture>, areas: Vec<Area>) -> Self {
        Self { fixtures, areas }
    }

    /// Returns the area used for calculations. When several areas exist the
    /// first one is used.
    pub fn calculation_area(&self) -> Option<&Area> {
        if self.areas.len() > 1 {
            debug!("{} areas defined; using the first", self.areas.len());
        }
        self.areas.first()
    }

    /// Returns the combined electrical power of all fixtures in W.
    pub fn total_power(&self) -> Float {
        self.fixtures.iter().map(|f| f.spec().power).sum()
    }
}
