//! Grid Sampler

use super::*;
use crate::error::*;
use crate::fixture::*;
use crate::solver::*;

/// Default distance between grid samples in metres.
pub const DEFAULT_SPACING: Float = 2.0;

/// Default reflectance of the calculation surface.
pub const DEFAULT_SURFACE_REFLECTANCE: Float = 0.2;

/// Fraction of reflected light added back as diffuse illuminance. Legacy
/// model constant; it has no physical derivation.
pub const DIFFUSE_FACTOR: Float = 0.1;

/// Returns total illuminance at a point: direct contributions from all fixtures
/// plus the diffuse reflection term.
///
/// * `fixtures`            - The fixtures.
/// * `point`               - The point being lit.
/// * `surface_reflectance` - Reflectance of the surface.
pub fn total_illuminance(fixtures: &[Fixture], point: &Point3f, surface_reflectance: Float) -> Float {
    let direct = direct_illuminance(fixtures, point);
    let diffuse = direct * surface_reflectance * DIFFUSE_FACTOR;
    max(direct + diffuse, 0.0)
}

/// Samples illuminance on an evenly spaced grid over an area.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridSampler {
    /// Distance between samples along both axes.
    pub spacing: Float,

    /// Reflectance used for the diffuse term.
    pub surface_reflectance: Float,
}

impl Default for GridSampler {
    fn default() -> Self {
        Self::new(DEFAULT_SPACING)
    }
}

impl GridSampler {
    /// Returns a new `GridSampler` with the default surface reflectance.
    ///
    /// * `spacing` - Distance between samples in metres.
    pub fn new(spacing: Float) -> Self {
        Self {
            spacing,
            surface_reflectance: DEFAULT_SURFACE_REFLECTANCE,
        }
    }

    /// Set the surface reflectance.
    ///
    /// * `reflectance` - Reflectance of the calculation surface.
    pub fn with_surface_reflectance(mut self, reflectance: Float) -> Self {
        self.surface_reflectance = reflectance;
        self
    }

    /// Validates the inputs and returns a scan that has not started yet, so
    /// the caller can signal that work is pending before it blocks.
    ///
    /// * `fixtures` - The fixtures.
    /// * `area`     - The area to sample.
    pub fn prepare<'a>(&self, fixtures: &'a [Fixture], area: &Area) -> Result<GridScan<'a>> {
        area.validate()?;
        if !(self.spacing > 0.0 && self.spacing.is_finite()) {
            return Err(CalcError::InvalidSpacing(self.spacing));
        }

        let too_large = || CalcError::GridTooLarge {
            width: area.width,
            height: area.height,
            spacing: self.spacing,
        };
        let nx = closed_step_count(area.width, self.spacing).ok_or_else(too_large)?;
        let ny = closed_step_count(area.height, self.spacing).ok_or_else(too_large)?;
        match nx.checked_mul(ny) {
            Some(n) if n <= MAX_GRID_POINTS => {}
            _ => return Err(too_large()),
        }
        let xs = (0..nx)
            .map(|i| area.origin.x + i as Float * self.spacing)
            .collect();
        let ys = (0..ny)
            .map(|j| area.origin.y + j as Float * self.spacing)
            .collect();

        Ok(GridScan {
            fixtures,
            area: *area,
            xs,
            ys,
            surface_reflectance: self.surface_reflectance,
        })
    }

    /// Samples the area and returns the resulting field.
    ///
    /// * `fixtures` - The fixtures.
    /// * `area`     - The area to sample.
    pub fn sample(&self, fixtures: &[Fixture], area: &Area) -> Result<IlluminanceField> {
        self.prepare(fixtures, area)?
            .run(&CancelToken::new(), |_, _| {})
    }
}

/// A validated grid scan waiting to run.
pub struct GridScan<'a> {
    /// The fixtures.
    pub(super) fixtures: &'a [Fixture],

    /// The sampled area.
    pub(super) area: Area,

    /// Sample x-coordinates; one row per value.
    pub(super) xs: Vec<Float>,

    /// Sample y-coordinates within each row.
    pub(super) ys: Vec<Float>,

    /// Reflectance used for the diffuse term.
    pub(super) surface_reflectance: Float,
}

impl<'a> GridScan<'a> {
    /// Returns the number of rows (distinct x-coordinates).
    pub fn row_count(&self) -> usize {
        self.xs.len()
    }

    /// Returns the total number of samples the scan will produce. Bounded by
    /// `MAX_GRID_POINTS`.
    pub fn point_count(&self) -> usize {
        self.xs.len() * self.ys.len()
    }

    /// Samples one row of the grid.
    ///
    /// * `row` - Row index.
    pub(super) fn sample_row(&self, row: usize) -> Vec<SamplePoint> {
        let x = self.xs[row];
        self.ys
            .iter()
            .map(|&y| {
                let p = Point3f::new(x, y, self.area.elevation);
                let e = total_illuminance(self.fixtures, &p, self.surface_reflectance);
                SamplePoint::new(p, e)
            })
            .collect()
    }

    /// Runs the scan on the calling thread.
    ///
    /// * `cancel`   - Polled once per row; a cancelled scan returns
    ///                `CalcError::Cancelled`.
    /// * `progress` - Called with (rows done, total rows) after each row.
    pub fn run<P>(self, cancel: &CancelToken, mut progress: P) -> Result<IlluminanceField>
    where
        P: FnMut(usize, usize),
    {
        let n_rows = self.row_count();
        info!(
            "Sampling {}x{} grid ({} points) for {} fixtures",
            self.xs.len(),
            self.ys.len(),
            self.point_count(),
            self.fixtures.len()
        );

        let mut points = Vec::with_capacity(self.point_count());
        for row in 0..n_rows {
            if cancel.is_cancelled() {
                warn!("Grid scan cancelled after {row} of {n_rows} rows");
                return Err(CalcError::Cancelled);
            }
            points.extend(self.sample_row(row));
            debug!("Sampled row {row} at x = {}", self.xs[row]);
            progress(row + 1, n_rows);
        }

        Ok(IlluminanceField::new(points, self.area))
    }
}
