//! Map model for RAMPART.
//!
//! Grid cell states, enemy path derivation, and the map catalog
//! (built-in maps plus JSON-defined ones).

pub use rampart_core as core;

pub mod catalog;
pub mod error;
pub mod grid;
pub mod path;

// Re-export key types for convenience.
pub use catalog::{LoadedMap, MapCatalog, MapDefinition};
pub use error::MapError;
pub use grid::Grid;
pub use path::Path;
