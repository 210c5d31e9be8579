//! Sword system: recomputes each sword's world-space hit point from its controller pose.

use hecs::World;

use fruitblade_core::components::{Controller, Sword};
use fruitblade_core::types::Position;

/// Update every sword's `Position` and whether it may slice this frame.
pub fn run(world: &mut World) {
    for (_entity, (controller, sword, pos)) in
        world.query_mut::<(&Controller, &mut Sword, &mut Position)>()
    {
        sword.active = controller.connected && controller.tracked;
        if sword.active {
            pos.0 = controller.pose.transform_point(sword.offset);
        }
    }
}
