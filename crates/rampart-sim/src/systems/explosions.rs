//! Explosion system: grows and fades cosmetic explosions.

use hecs::{Entity, World};

use rampart_core::components::Explosion;
use rampart_core::constants::{EXPLOSION_DECAY_PER_TICK, EXPLOSION_GROWTH_PER_TICK};

pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, explosion) in world.query_mut::<&mut Explosion>() {
        explosion.radius += EXPLOSION_GROWTH_PER_TICK;
        explosion.life -= EXPLOSION_DECAY_PER_TICK;
        if explosion.life <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
