//! Balance rules for RAMPART.
//!
//! Enemy profiles and per-wave scaling, tower stat and upgrade tables,
//! and wave composition formulas. Pure functions over plain data with
//! no ECS dependency.

pub mod enemy_profiles;
pub mod tower_tables;
pub mod waves;

pub use rampart_core as core;

#[cfg(test)]
mod tests;
