//! Spawn system: one Bernoulli trial per frame.
//!
//! The rate is per frame, not per second, so it scales with the display
//! refresh rate. There is no cap on fruit in flight.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use fruitblade_core::config::SpawnConfig;
use fruitblade_core::events::GameEvent;

use crate::score::ScoreState;

/// Roll once and spawn a fruit on success. Returns whether a fruit spawned.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    spawn: &SpawnConfig,
    next_fruit_id: &mut u32,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
) -> bool {
    if !rng.gen_bool(spawn.probability) {
        return false;
    }

    let fruit_id = *next_fruit_id;
    *next_fruit_id = next_fruit_id.wrapping_add(1);

    let (_entity, shape) = crate::world_setup::spawn_fruit(world, rng, spawn, fruit_id);
    score.spawned = score.spawned.saturating_add(1);
    trace!(fruit_id, ?shape, "fruit spawned");
    events.push(GameEvent::FruitSpawned { fruit_id, shape });
    true
}
