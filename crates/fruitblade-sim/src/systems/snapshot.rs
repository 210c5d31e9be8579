//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use fruitblade_core::components::{Fruit, Sword};
use fruitblade_core::enums::GamePhase;
use fruitblade_core::events::GameEvent;
use fruitblade_core::state::*;
use fruitblade_core::types::{Position, Rotation, SimTime};

use crate::score::ScoreState;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    score: &ScoreState,
    hud: HudView,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    let fruits = build_fruits(world);
    GameStateSnapshot {
        time: *time,
        phase,
        score: ScoreView {
            score: score.score,
            spawned: score.spawned,
            sliced: score.sliced,
            missed: score.missed,
            in_flight: fruits.len() as u32,
        },
        fruits,
        swords: build_swords(world),
        hud,
        events,
    }
}

/// Fruit in flight, ordered by spawn id.
fn build_fruits(world: &World) -> Vec<FruitView> {
    let mut fruits: Vec<FruitView> = world
        .query::<(&Fruit, &Position, &Rotation)>()
        .iter()
        .map(|(_, (fruit, pos, rotation))| FruitView {
            fruit_id: fruit.id,
            shape: fruit.shape,
            color: fruit.color,
            radius: fruit.radius,
            position: *pos,
            rotation: *rotation,
        })
        .collect();
    fruits.sort_by_key(|f| f.fruit_id);
    fruits
}

/// Swords ordered by hand.
fn build_swords(world: &World) -> Vec<SwordView> {
    let mut swords: Vec<SwordView> = world
        .query::<(&Sword, &Position)>()
        .iter()
        .map(|(_, (sword, pos))| SwordView {
            hand: sword.hand,
            position: *pos,
            active: sword.active,
        })
        .collect();
    swords.sort_by_key(|s| s.hand);
    swords
}
