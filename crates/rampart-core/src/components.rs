//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{GridCoord, TowerId};

/// An enemy walking the path. Position is the enemy's center.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    /// Movement speed in pixels per tick before slows.
    pub speed: f64,
    /// Scaled maximum health.
    pub max_health: f64,
    /// Current health. Only ever decreases.
    pub health: f64,
    /// Money paid when killed.
    pub reward: u32,
    /// Score awarded when killed.
    pub score_value: u32,
    /// Lives lost when this enemy reaches the end of the path.
    pub life_damage: u32,
    /// Sprite edge length in pixels.
    pub size: f64,
    /// Index of the waypoint this enemy is walking toward.
    pub path_index: usize,
    pub phase: EnemyPhase,
    /// Monotonic spawn counter, used to break targeting ties.
    pub spawn_seq: u64,
}

/// Active slow on an enemy. Factor 1.0 with zero ticks means "not slowed".
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SlowEffect {
    pub factor: f64,
    pub remaining_ticks: u32,
}

impl Default for SlowEffect {
    fn default() -> Self {
        Self {
            factor: crate::constants::NEUTRAL_SLOW_FACTOR,
            remaining_ticks: 0,
        }
    }
}

/// A placed tower. Stats are looked up from `(kind, level)` on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tower {
    pub id: TowerId,
    pub kind: TowerKind,
    /// Current level, 1-based.
    pub level: u8,
    /// Ticks until the tower may fire again.
    pub cooldown: u32,
    /// Purchase price plus every upgrade paid so far.
    pub total_invested: u32,
    pub cell: GridCoord,
}

/// Side effect applied to each enemy a projectile damages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OnHitEffect {
    Slow { factor: f64, duration_ticks: u32 },
}

/// Purely cosmetic burst left where an enemy died.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Explosion {
    pub radius: f64,
    /// Remaining life, 1.0 at spawn; removed at or below 0.
    pub life: f64,
}
