//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only)
//! plus whatever engine bookkeeping they touch.

pub mod cleanup;
pub mod enemy_movement;
pub mod explosions;
pub mod fire_control;
pub mod projectiles;
pub mod snapshot;
pub mod wave_spawner;
