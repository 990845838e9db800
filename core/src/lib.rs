//! Core
//!
//! Photometric calculation kernel for outdoor lighting designs.

#[macro_use]
extern crate log;

// Re-export.
pub mod area;
pub mod compliance;
pub mod contour;
pub mod energy;
pub mod error;
pub mod field;
pub mod fixture;
pub mod geometry;
pub mod glare;
pub mod layout;
pub mod math;
pub mod scene;
pub mod solver;
pub mod spillage;
pub mod standards;
pub mod statistics;
