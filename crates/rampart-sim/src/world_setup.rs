//! Entity spawn factories.
//!
//! Builds the component bundles for enemies, towers, projectiles, and
//! explosions.

use hecs::{Entity, World};

use rampart_core::components::*;
use rampart_core::constants::*;
use rampart_core::enums::{EnemyKind, EnemyPhase, TowerKind};
use rampart_core::types::{GridCoord, Position, TowerId};
use rampart_rules::enemy_profiles::spawn_profile;
use rampart_rules::tower_tables::{self, LevelStats};

use crate::components::Projectile;

/// Spawn an enemy of `kind`, scaled for `wave`, at the path start.
/// It walks toward waypoint 1 first.
pub fn spawn_enemy(
    world: &mut World,
    kind: EnemyKind,
    wave: u32,
    start: Position,
    spawn_seq: u64,
) -> Entity {
    let profile = spawn_profile(kind, wave);
    let enemy = Enemy {
        kind,
        speed: profile.speed,
        max_health: profile.max_health,
        health: profile.max_health,
        reward: profile.reward,
        score_value: profile.score_value,
        life_damage: profile.life_damage,
        size: profile.size,
        path_index: 1,
        phase: EnemyPhase::Walking,
        spawn_seq,
    };
    world.spawn((start, enemy, SlowEffect::default()))
}

/// Spawn a level 1 tower centered on `cell`. Ready to fire immediately.
pub fn spawn_tower(world: &mut World, id: TowerId, kind: TowerKind, cell: GridCoord) -> Entity {
    let tower = Tower {
        id,
        kind,
        level: 1,
        cooldown: 0,
        total_invested: tower_tables::cost(kind),
        cell,
    };
    world.spawn((cell.center(), tower))
}

/// Spawn a projectile at `origin` homing on `target` with the firing level's stats.
pub fn spawn_projectile(
    world: &mut World,
    origin: Position,
    target: Entity,
    stats: &LevelStats,
    color: &'static str,
) -> Entity {
    let projectile = Projectile {
        target,
        speed: stats.projectile_speed,
        damage: stats.damage,
        splash_radius: stats.splash_radius,
        on_hit: stats.on_hit,
        color,
    };
    world.spawn((origin, projectile))
}

pub fn spawn_explosion(world: &mut World, position: Position) -> Entity {
    world.spawn((
        position,
        Explosion {
            radius: EXPLOSION_START_RADIUS,
            life: 1.0,
        },
    ))
}
