//! Enemy stat profiles and wave scaling.
//!
//! Base stats per kind, plus the per-wave multipliers applied once when an
//! enemy spawns.

use rampart_core::constants::*;
use rampart_core::enums::EnemyKind;

/// Stats for one enemy, before or after scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyProfile {
    /// Pixels per tick.
    pub speed: f64,
    pub max_health: f64,
    pub reward: u32,
    pub score_value: u32,
    pub life_damage: u32,
    /// Sprite edge length in pixels.
    pub size: f64,
}

/// Base (wave 1) profile for a kind.
pub fn get_profile(kind: EnemyKind) -> EnemyProfile {
    match kind {
        EnemyKind::Basic => EnemyProfile {
            speed: 0.85,
            max_health: 14.0,
            reward: 14,
            score_value: 8,
            life_damage: 1,
            size: 30.0,
        },
        EnemyKind::Fast => EnemyProfile {
            speed: 1.4,
            max_health: 9.0,
            reward: 16,
            score_value: 12,
            life_damage: 1,
            size: 26.0,
        },
        EnemyKind::Tank => EnemyProfile {
            speed: 0.55,
            max_health: 36.0,
            reward: 35,
            score_value: 26,
            life_damage: 2,
            size: 36.0,
        },
        EnemyKind::Swarm => EnemyProfile {
            speed: 1.1,
            max_health: 6.0,
            reward: 8,
            score_value: 8,
            life_damage: 1,
            size: 24.0,
        },
        EnemyKind::Boss => EnemyProfile {
            speed: 0.42,
            max_health: 140.0,
            reward: 140,
            score_value: 80,
            life_damage: 3,
            size: 44.0,
        },
    }
}

/// Difficulty multiplier used when scaling a freshly spawned enemy.
/// Bosses scale more gently since their base stats are already large.
pub fn spawn_multiplier(kind: EnemyKind) -> f64 {
    match kind {
        EnemyKind::Boss => BOSS_SCALING_MULTIPLIER,
        _ => 1.0,
    }
}

/// Display color.
pub fn color(kind: EnemyKind) -> &'static str {
    match kind {
        EnemyKind::Basic => "#ef5350",
        EnemyKind::Fast => "#29b6f6",
        EnemyKind::Tank => "#8d6e63",
        EnemyKind::Swarm => "#ffa726",
        EnemyKind::Boss => "#7e57c2",
    }
}

impl EnemyProfile {
    /// Apply wave scaling.
    ///
    /// With `level = max(0, wave - 1)`, health grows by `level * 0.12 * m`,
    /// reward by `level * 0.05 * m` and score by `level * 0.04 * m`. Each
    /// result is rounded; reward and score never fall below 5.
    pub fn scaled(&self, wave: u32, multiplier: f64) -> EnemyProfile {
        let level = wave.saturating_sub(1) as f64;
        let health_scale = 1.0 + level * HEALTH_SCALE_PER_WAVE * multiplier;
        let reward_scale = 1.0 + level * REWARD_SCALE_PER_WAVE * multiplier;
        let score_scale = 1.0 + level * SCORE_SCALE_PER_WAVE * multiplier;

        EnemyProfile {
            max_health: (self.max_health * health_scale).round(),
            reward: scale_amount(self.reward, reward_scale),
            score_value: scale_amount(self.score_value, score_scale),
            ..*self
        }
    }
}

/// Profile for an enemy of `kind` spawned during `wave`.
pub fn spawn_profile(kind: EnemyKind, wave: u32) -> EnemyProfile {
    get_profile(kind).scaled(wave, spawn_multiplier(kind))
}

fn scale_amount(base: u32, scale: f64) -> u32 {
    let scaled = (base as f64 * scale).round() as u32;
    scaled.max(MIN_REWARD_AND_SCORE)
}
