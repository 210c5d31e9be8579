//! Cleanup system: despawns the fruit marked during the slicing pass.

use hecs::{Entity, World};

/// Despawn every entity collected in the buffer and leave it empty.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
