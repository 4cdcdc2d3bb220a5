//! Projectile system: homing flight, impact, and kill payouts.

use hecs::{Entity, World};
use tracing::trace;

use rampart_core::components::{Enemy, SlowEffect};
use rampart_core::enums::SoundCue;
use rampart_core::events::GameEvent;
use rampart_core::types::Position;

use crate::combat::{apply_on_hit, take_damage, DamageOutcome};
use crate::components::Projectile;
use crate::feedback::Feedback;
use crate::run_state::RunState;
use crate::world_setup;

/// Move every projectile toward its target and resolve impacts.
///
/// Projectiles are processed one at a time, so a kill by an earlier shot
/// makes later shots at the same enemy fizzle within the same tick.
/// Spent projectiles are despawned before returning.
pub fn run(
    world: &mut World,
    run: &mut RunState,
    feedback: &mut Feedback,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    let in_flight: Vec<(Entity, Projectile)> = world
        .query::<&Projectile>()
        .iter()
        .map(|(entity, projectile)| (entity, *projectile))
        .collect();

    let mut blasts = Vec::new();
    for (entity, projectile) in in_flight {
        let Some(target_pos) = live_position(world, projectile.target) else {
            despawn_buffer.push(entity);
            continue;
        };

        let arrived = match world.get::<&mut Position>(entity) {
            Ok(mut pos) => pos.step_towards(&target_pos, projectile.speed),
            Err(_) => continue,
        };
        if !arrived {
            continue;
        }

        impact(world, &projectile, target_pos, run, feedback, &mut blasts);
        despawn_buffer.push(entity);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    for position in blasts {
        world_setup::spawn_explosion(world, position);
        feedback.emit(GameEvent::ExplosionSpawned { position });
    }
}

/// Center of `target` if it still exists and is walking.
fn live_position(world: &World, target: Entity) -> Option<Position> {
    let mut query = world.query_one::<(&Position, &Enemy)>(target).ok()?;
    let (pos, enemy) = query.get()?;
    enemy.phase.is_alive().then_some(*pos)
}

/// Apply a projectile's damage at `point`, the target's center.
fn impact(
    world: &mut World,
    projectile: &Projectile,
    point: Position,
    run: &mut RunState,
    feedback: &mut Feedback,
    blasts: &mut Vec<Position>,
) {
    let victims = if projectile.splash_radius > 0.0 {
        splash_victims(world, point, projectile.splash_radius)
    } else {
        vec![projectile.target]
    };

    for victim in victims {
        let Ok((pos, enemy, slow)) =
            world.query_one_mut::<(&Position, &mut Enemy, &mut SlowEffect)>(victim)
        else {
            continue;
        };

        match take_damage(enemy, projectile.damage) {
            DamageOutcome::Ignored => {}
            DamageOutcome::Wounded => {
                if let Some(effect) = projectile.on_hit {
                    apply_on_hit(slow, effect);
                }
            }
            DamageOutcome::Killed => {
                run.money += enemy.reward;
                run.score += enemy.score_value;
                trace!(kind = ?enemy.kind, reward = enemy.reward, "enemy killed");

                feedback.sound(SoundCue::Explosion);
                feedback.emit(GameEvent::EnemyKilled {
                    kind: enemy.kind,
                    reward: enemy.reward,
                    score: enemy.score_value,
                });
                blasts.push(*pos);
            }
        }
    }
}

/// Walking enemies within `radius` of `point`, earliest spawned first.
fn splash_victims(world: &World, point: Position, radius: f64) -> Vec<Entity> {
    let mut hits: Vec<(u64, Entity)> = world
        .query::<(&Position, &Enemy)>()
        .iter()
        .filter(|(_, (pos, enemy))| enemy.phase.is_alive() && pos.distance_to(&point) <= radius)
        .map(|(entity, (_, enemy))| (enemy.spawn_seq, entity))
        .collect();
    hits.sort_by_key(|(seq, _)| *seq);
    hits.into_iter().map(|(_, entity)| entity).collect()
}
