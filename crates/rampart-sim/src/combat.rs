//! Combat resolution rules on plain components.
//!
//! Damage, slows, and target priority. Systems apply the side effects
//! (payouts, explosions, events) based on what these return.

use rampart_core::components::{Enemy, OnHitEffect, SlowEffect};
use rampart_core::constants::NEUTRAL_SLOW_FACTOR;
use rampart_core::enums::EnemyPhase;
use rampart_core::types::Position;

/// Result of applying damage to an enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// The enemy was already dead or had leaked; nothing changed.
    Ignored,
    Wounded,
    /// This hit took the enemy to zero health.
    Killed,
}

/// Subtract `amount` from a walking enemy's health. Health never rises.
pub fn take_damage(enemy: &mut Enemy, amount: f64) -> DamageOutcome {
    if !enemy.phase.is_alive() {
        return DamageOutcome::Ignored;
    }
    enemy.health -= amount.max(0.0);
    if enemy.health <= 0.0 {
        enemy.phase = EnemyPhase::Killed;
        DamageOutcome::Killed
    } else {
        DamageOutcome::Wounded
    }
}

/// Slows do not stack: the strongest factor wins and the longest timer wins.
pub fn apply_slow(slow: &mut SlowEffect, factor: f64, duration_ticks: u32) {
    if factor < slow.factor {
        slow.factor = factor;
    }
    slow.remaining_ticks = slow.remaining_ticks.max(duration_ticks);
}

/// Count a slow down by one tick, restoring full speed when it runs out.
pub fn tick_slow(slow: &mut SlowEffect) {
    if slow.remaining_ticks > 0 {
        slow.remaining_ticks -= 1;
        if slow.remaining_ticks == 0 {
            slow.factor = NEUTRAL_SLOW_FACTOR;
        }
    }
}

pub fn apply_on_hit(slow: &mut SlowEffect, effect: OnHitEffect) {
    match effect {
        OnHitEffect::Slow {
            factor,
            duration_ticks,
        } => apply_slow(slow, factor, duration_ticks),
    }
}

/// Targeting score: further along the path first, then healthier.
pub fn target_priority(enemy: &Enemy) -> f64 {
    enemy.path_index as f64 + enemy.health / enemy.max_health
}

/// A targetable enemy as seen by the towers this tick.
#[derive(Debug, Clone, Copy)]
pub struct TargetCandidate {
    pub entity: hecs::Entity,
    pub position: Position,
    pub priority: f64,
    pub spawn_seq: u64,
}

/// Pick the best candidate within `range` of `origin`. Ties go to the
/// earliest-spawned enemy.
pub fn acquire_target(
    origin: &Position,
    range: f64,
    candidates: &[TargetCandidate],
) -> Option<hecs::Entity> {
    candidates
        .iter()
        .filter(|c| origin.distance_to(&c.position) <= range)
        .max_by(|a, b| {
            a.priority
                .total_cmp(&b.priority)
                .then_with(|| b.spawn_seq.cmp(&a.spawn_seq))
        })
        .map(|c| c.entity)
}
