//! Simulation engine for RAMPART.
//!
//! Owns the hecs ECS world, runs systems once per tick, handles player
//! actions, and produces GameStateSnapshots for the front end.

pub mod combat;
pub mod components;
pub mod engine;
pub mod feedback;
pub mod placement;
pub mod run_state;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use rampart_core as core;
pub use rampart_map as map;
