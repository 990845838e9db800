//! Fixture Catalog

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

mod catalog;
mod industrial;
mod library;
mod spacing;
mod sports;

// Re-export.
pub use catalog::*;
pub use industrial::*;
pub use library::*;
pub use spacing::*;
pub use sports::*;
