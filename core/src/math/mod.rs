//! Numeric types and helpers

mod common;
mod units;

// Re-export
pub use common::*;
pub use units::*;
