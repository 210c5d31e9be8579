//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{Pose, Rgb};

/// A collidable target flying toward the player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Fruit {
    /// Monotonic spawn id, unique for the lifetime of the engine.
    pub id: u32,
    pub shape: FruitShape,
    pub color: Rgb,
    /// Visual radius (meters). Hit testing uses the configured hit radius, not this.
    pub radius: f32,
}

/// Angular rate applied to `Rotation` each frame (rad/s per Euler axis).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Spin(pub Vec3);

/// A tracked controller.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Controller {
    pub hand: Hand,
    /// Latest pose reported by the runtime.
    pub pose: Pose,
    /// False until the runtime reports the controller, and after it disconnects.
    pub connected: bool,
    /// Whether a pose has been received since the controller connected.
    pub tracked: bool,
}

/// A sword rigidly attached to the controller of the same hand.
/// Its `Position` is the world-space hit point, recomputed every frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Sword {
    pub hand: Hand,
    /// Hit point in controller space.
    pub offset: Vec3,
    /// Whether the sword participates in hit testing this frame.
    pub active: bool,
}
