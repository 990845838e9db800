//! Error types for calculation operations.

use crate::math::Float;
use thiserror::Error;

/// Result type alias for calculation operations.
pub type Result<T> = std::result::Result<T, CalcError>;

/// Errors surfaced to the caller. Per-point numeric degeneracies never end up
/// here; they resolve to zero values where they occur.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CalcError {
    /// Area width or height is not positive and finite.
    #[error("invalid area: width {width} and height {height} must both be positive and finite")]
    InvalidArea { width: Float, height: Float },

    /// Grid spacing is not positive and finite.
    #[error("invalid grid spacing {0}: must be positive and finite")]
    InvalidSpacing(Float),

    /// Sampling the area at the given spacing needs too many points.
    #[error("grid over {width} x {height} m at {spacing} m spacing has too many points")]
    GridTooLarge {
        width: Float,
        height: Float,
        spacing: Float,
    },

    /// The layout needs more fixtures than can be placed.
    #[error("layout needs {required} fixtures, more than the limit of {limit}")]
    TooManyFixtures { required: Float, limit: usize },

    /// No candidate fixture can be mounted at the requested height.
    #[error("no suitable fixtures found for mounting height {mounting_height} m")]
    NoSuitableFixture { mounting_height: Float },

    /// Fixture configuration failed validation.
    #[error("invalid fixture: {0}")]
    InvalidFixture(String),

    /// The caller cancelled a grid scan.
    #[error("calculation cancelled")]
    Cancelled,

    /// A worker thread panicked during a parallel scan.
    #[error("calculation worker failed")]
    WorkerFailed,
}

impl CalcError {
    /// Create an invalid fixture error.
    pub fn invalid_fixture(details: impl Into<String>) -> Self {
        Self::InvalidFixture(details.into())
    }
}
