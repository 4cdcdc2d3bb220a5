//! Enemy movement system: walks enemies along the path and handles leaks.

use hecs::World;
use tracing::debug;

use rampart_core::components::{Enemy, SlowEffect};
use rampart_core::constants::STATUS_MEDIUM_TICKS;
use rampart_core::enums::EnemyPhase;
use rampart_core::events::GameEvent;
use rampart_core::types::Position;
use rampart_map::Path;

use crate::combat::tick_slow;
use crate::feedback::Feedback;
use crate::run_state::RunState;

/// Advance every walking enemy by one tick.
///
/// The slow timer counts down before moving. An enemy that lands on the
/// last waypoint (or has no waypoint left) reaches the goal.
pub fn run(world: &mut World, path: &Path, run: &mut RunState, feedback: &mut Feedback) {
    for (_entity, (pos, enemy, slow)) in
        world.query_mut::<(&mut Position, &mut Enemy, &mut SlowEffect)>()
    {
        if !enemy.phase.is_alive() {
            continue;
        }

        tick_slow(slow);

        let Some(waypoint) = path.waypoint(enemy.path_index) else {
            reach_goal(enemy, run, feedback);
            continue;
        };

        let step = enemy.speed * slow.factor;
        if pos.step_towards(&waypoint, step) {
            enemy.path_index += 1;
            if enemy.path_index >= path.len() {
                reach_goal(enemy, run, feedback);
            }
        }
    }
}

fn reach_goal(enemy: &mut Enemy, run: &mut RunState, feedback: &mut Feedback) {
    enemy.phase = EnemyPhase::ReachedGoal;
    run.lose_lives(enemy.life_damage);

    debug!(kind = ?enemy.kind, lives = run.lives, "enemy reached the base");
    feedback.status("An enemy reached the base!", STATUS_MEDIUM_TICKS);
    feedback.emit(GameEvent::EnemyLeaked {
        kind: enemy.kind,
        life_damage: enemy.life_damage,
    });
}
