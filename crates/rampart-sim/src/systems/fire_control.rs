//! Fire control system: tower cooldowns, target acquisition, and firing.

use hecs::{Entity, World};

use rampart_core::components::{Enemy, Tower};
use rampart_core::enums::SoundCue;
use rampart_core::types::Position;
use rampart_rules::tower_tables::{self, LevelStats};

use crate::combat::{acquire_target, target_priority, TargetCandidate};
use crate::feedback::Feedback;
use crate::world_setup;

/// A shot decided this tick, spawned once the tower query is released.
struct Shot {
    origin: Position,
    target: Entity,
    stats: LevelStats,
    color: &'static str,
}

/// Run fire control for every tower, in tower id order.
pub fn run(world: &mut World, feedback: &mut Feedback) {
    let candidates = collect_candidates(world);

    let mut shots = Vec::new();
    let mut towers: Vec<(&Position, &mut Tower)> = world
        .query_mut::<(&Position, &mut Tower)>()
        .into_iter()
        .map(|(_, item)| item)
        .collect();
    towers.sort_by_key(|(_, tower)| tower.id);

    for (origin, tower) in towers {
        tower.cooldown = tower.cooldown.saturating_sub(1);
        if tower.cooldown > 0 {
            continue;
        }

        let stats = tower_tables::level_stats(tower.kind, tower.level);
        let Some(target) = acquire_target(origin, stats.range, &candidates) else {
            continue;
        };

        tower.cooldown = stats.fire_rate_ticks;
        shots.push(Shot {
            origin: *origin,
            target,
            stats,
            color: tower_tables::get_spec(tower.kind).projectile_color,
        });
    }

    for shot in shots {
        world_setup::spawn_projectile(world, shot.origin, shot.target, &shot.stats, shot.color);
        feedback.sound(SoundCue::Shoot);
    }
}

/// Every walking enemy with its targeting score.
fn collect_candidates(world: &World) -> Vec<TargetCandidate> {
    world
        .query::<(&Position, &Enemy)>()
        .iter()
        .filter(|(_, (_, enemy))| enemy.phase.is_alive())
        .map(|(entity, (pos, enemy))| TargetCandidate {
            entity,
            position: *pos,
            priority: target_priority(enemy),
            spawn_seq: enemy.spawn_seq,
        })
        .collect()
}
