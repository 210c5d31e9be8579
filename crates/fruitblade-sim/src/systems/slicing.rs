//! Slicing system: sword hit tests and the depth cull, in one pass.
//!
//! The pass only marks: fruit to remove are collected into the despawn
//! buffer and removed afterwards by the cleanup system, so removing one
//! fruit never causes another to be skipped. A hit is checked before the
//! depth bound, and each fruit resolves at most once even when both swords
//! reach it in the same frame.

use hecs::World;
use tracing::debug;

use fruitblade_core::components::{Fruit, Sword};
use fruitblade_core::config::PlayRules;
use fruitblade_core::enums::{FruitOutcome, Hand};
use fruitblade_core::events::GameEvent;
use fruitblade_core::types::Position;

use crate::score::ScoreState;

/// Outcome of one fruit this frame.
#[derive(Debug, Clone, Copy)]
struct Resolution {
    entity: hecs::Entity,
    fruit_id: u32,
    outcome: FruitOutcome,
    hand: Option<Hand>,
    position: Position,
}

/// Hit-test every fruit against every active sword, then the depth bound.
pub fn run(
    world: &World,
    rules: &PlayRules,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<hecs::Entity>,
) {
    let swords: Vec<(Hand, Position)> = world
        .query::<(&Sword, &Position)>()
        .iter()
        .filter(|(_, (sword, _))| sword.active)
        .map(|(_, (sword, pos))| (sword.hand, *pos))
        .collect();

    let mut resolved: Vec<Resolution> = world
        .query::<(&Fruit, &Position)>()
        .iter()
        .filter_map(|(entity, (fruit, pos))| {
            if let Some(hand) = first_hit(&swords, pos, rules.hit_radius) {
                return Some(Resolution {
                    entity,
                    fruit_id: fruit.id,
                    outcome: FruitOutcome::Sliced,
                    hand: Some(hand),
                    position: *pos,
                });
            }
            if pos.depth() > rules.cull_depth {
                return Some(Resolution {
                    entity,
                    fruit_id: fruit.id,
                    outcome: FruitOutcome::Missed,
                    hand: None,
                    position: *pos,
                });
            }
            None
        })
        .collect();

    // Stable event order regardless of archetype layout.
    resolved.sort_by_key(|r| r.fruit_id);

    for r in resolved {
        match (r.outcome, r.hand) {
            (FruitOutcome::Sliced, Some(hand)) => {
                score.record_slice();
                debug!(fruit_id = r.fruit_id, ?hand, score = score.score, "fruit sliced");
                events.push(GameEvent::FruitSliced {
                    fruit_id: r.fruit_id,
                    hand,
                    position: r.position,
                });
            }
            _ => {
                score.record_miss();
                events.push(GameEvent::FruitMissed {
                    fruit_id: r.fruit_id,
                });
            }
        }
        despawn_buffer.push(r.entity);
    }
}

/// First sword (in hand order) strictly within `radius` of the fruit.
fn first_hit(swords: &[(Hand, Position)], fruit: &Position, radius: f32) -> Option<Hand> {
    swords
        .iter()
        .filter(|(_, sword)| sword.distance_to(fruit) < radius)
        .map(|(hand, _)| *hand)
        .min()
}
