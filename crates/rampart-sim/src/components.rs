//! Components that hold entity handles.
//!
//! These live beside the ECS rather than in `rampart-core`, which has no
//! hecs dependency.

use hecs::Entity;

use rampart_core::components::OnHitEffect;

/// A shot in flight, homing on one enemy.
#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    /// Generation-checked handle; a despawned or dead target makes the shot fizzle.
    pub target: Entity,
    /// Pixels per tick.
    pub speed: f64,
    pub damage: f64,
    pub splash_radius: f64,
    pub on_hit: Option<OnHitEffect>,
    pub color: &'static str,
}
