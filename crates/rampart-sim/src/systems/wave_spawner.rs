//! Wave spawning system: releases queued enemies one at a time.

use hecs::World;
use tracing::trace;

use rampart_core::events::GameEvent;
use rampart_core::types::Position;
use rampart_rules::waves::spawn_interval;

use crate::feedback::Feedback;
use crate::run_state::WaveState;
use crate::world_setup;

/// Count the spawn cooldown down and spawn the next queued enemy when it
/// reaches zero.
pub fn run(
    world: &mut World,
    waves: &mut WaveState,
    wave_number: u32,
    start: Position,
    next_spawn_seq: &mut u64,
    feedback: &mut Feedback,
) {
    waves.spawn_cooldown = waves.spawn_cooldown.saturating_sub(1);
    if waves.spawn_cooldown > 0 {
        return;
    }
    let Some(kind) = waves.queue.pop_front() else {
        return;
    };

    let seq = *next_spawn_seq;
    *next_spawn_seq += 1;
    world_setup::spawn_enemy(world, kind, wave_number, start, seq);
    waves.spawn_cooldown = spawn_interval(wave_number);

    trace!(?kind, seq, remaining = waves.queue.len(), "enemy spawned");
    feedback.emit(GameEvent::EnemySpawned { kind });
}
