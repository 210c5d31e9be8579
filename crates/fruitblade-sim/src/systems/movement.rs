//! Kinematic integration system.
//!
//! Updates Position from Velocity each frame: position += velocity * dt,
//! and spins fruit that carry a `Spin`.

use hecs::World;

use fruitblade_core::components::{Fruit, Spin};
use fruitblade_core::types::{Position, Rotation, Velocity};

/// Run kinematic integration for all fruit.
pub fn run(world: &mut World, dt: f32) {
    for (_entity, (_fruit, pos, vel)) in world.query_mut::<(&Fruit, &mut Position, &Velocity)>() {
        pos.0 += vel.0 * dt;
    }

    for (_entity, (rotation, spin)) in world.query_mut::<(&mut Rotation, &Spin)>() {
        rotation.0 += spin.0 * dt;
        rotation.0 = wrap_angles(rotation.0);
    }
}

/// Keep Euler angles within [-π, π) so they never lose precision.
fn wrap_angles(v: glam::Vec3) -> glam::Vec3 {
    use std::f32::consts::{PI, TAU};
    glam::Vec3::new(
        (v.x + PI).rem_euclid(TAU) - PI,
        (v.y + PI).rem_euclid(TAU) - PI,
        (v.z + PI).rem_euclid(TAU) - PI,
    )
}
