//! Entity spawn factories for setting up the game world.
//!
//! Creates controllers, swords, and fruit entities with
//! appropriate component bundles.

use glam::Vec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use fruitblade_core::components::*;
use fruitblade_core::config::{SpawnConfig, SwordConfig};
use fruitblade_core::enums::*;
use fruitblade_core::types::{Pose, Position, Rgb, Rotation, Velocity};

/// Set up the initial world: one controller (with its sword) per hand.
pub fn setup_world(world: &mut World, sword: &SwordConfig) {
    for hand in Hand::BOTH {
        spawn_controller(world, hand, sword);
    }
}

/// Spawn a controller with its sword attached.
/// Controllers start disconnected; the sword stays inactive until a pose arrives.
pub fn spawn_controller(world: &mut World, hand: Hand, sword: &SwordConfig) -> hecs::Entity {
    world.spawn((
        Controller {
            hand,
            pose: Pose::IDENTITY,
            connected: false,
            tracked: false,
        },
        Sword {
            hand,
            offset: sword.offset,
            active: false,
        },
        Position::default(),
    ))
}

/// Roll a new fruit at the spawn line.
pub fn spawn_fruit(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    spawn: &SpawnConfig,
    id: u32,
) -> (hecs::Entity, FruitShape) {
    let half = spawn.lateral_spread / 2.0;
    let x = if half > 0.0 {
        rng.gen_range(-half..half)
    } else {
        0.0
    };
    let position = Position::new(x, spawn.height, spawn.depth);
    let velocity = Velocity(spawn.velocity);

    let shape = pick_shape(rng, &spawn.shapes);
    let color = pick_color(rng, &spawn.palette);
    let fruit = Fruit {
        id,
        shape,
        color,
        radius: spawn.radius,
    };

    let entity = if spawn.max_spin > 0.0 {
        let m = spawn.max_spin;
        let spin = Spin(Vec3::new(
            rng.gen_range(-m..=m),
            rng.gen_range(-m..=m),
            rng.gen_range(-m..=m),
        ));
        world.spawn((fruit, position, velocity, Rotation::default(), spin))
    } else {
        world.spawn((fruit, position, velocity, Rotation::default()))
    };
    (entity, shape)
}

/// Place a fruit with an explicit position and velocity, using the configured look.
pub fn spawn_fruit_at(
    world: &mut World,
    spawn: &SpawnConfig,
    id: u32,
    position: Position,
    velocity: Velocity,
) -> hecs::Entity {
    let fruit = Fruit {
        id,
        shape: spawn.shapes.first().copied().unwrap_or_default(),
        color: spawn.palette.first().copied().unwrap_or(Rgb::WHITE),
        radius: spawn.radius,
    };
    world.spawn((fruit, position, velocity, Rotation::default()))
}

/// Despawn every fruit. Returns how many were removed.
pub fn clear_fruit(world: &mut World, despawn_buffer: &mut Vec<hecs::Entity>) -> usize {
    despawn_buffer.clear();
    despawn_buffer.extend(world.query::<&Fruit>().iter().map(|(entity, _)| entity));
    let count = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    count
}

fn pick_shape(rng: &mut ChaCha8Rng, shapes: &[FruitShape]) -> FruitShape {
    match shapes.len() {
        0 => FruitShape::default(),
        1 => shapes[0],
        n => shapes[rng.gen_range(0..n)],
    }
}

fn pick_color(rng: &mut ChaCha8Rng, palette: &[Rgb]) -> Rgb {
    match palette.len() {
        0 => Rgb::from_u32(rng.gen::<u32>()),
        1 => palette[0],
        n => palette[rng.gen_range(0..n)],
    }
}
