//! Controller pose sources.
//!
//! On a headset the XR runtime reports controller poses every frame. Without
//! one, a scripted source swings both swords through the fruit's flight path
//! so the whole loop can run headless.

use glam::{Quat, Vec3};

use fruitblade_core::enums::Hand;
use fruitblade_core::types::Pose;

/// Something that reports controller poses once per frame.
pub trait PoseSource: Send {
    /// Poses for the frame at `time_secs`. Hands missing from the result keep their last pose.
    fn poses(&mut self, time_secs: f64) -> Vec<(Hand, Pose)>;
}

/// Reports nothing; swords stay inactive.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoInput;

impl PoseSource for NoInput {
    fn poses(&mut self, _time_secs: f64) -> Vec<(Hand, Pose)> {
        Vec::new()
    }
}

/// Both controllers sweep side to side across the flight path, out of phase.
#[derive(Debug, Clone, Copy)]
pub struct ScriptedSweep {
    /// Center of the sweep for the sword hit point (world space).
    pub center: Vec3,
    /// Half-width of the lateral swing (meters).
    pub amplitude: f32,
    /// Swings per second.
    pub frequency: f32,
    /// Hit point in controller space, so the controller can be placed above it.
    pub sword_offset: Vec3,
}

impl Default for ScriptedSweep {
    fn default() -> Self {
        Self {
            // One third of a second into a default fruit's flight.
            center: Vec3::new(0.0, 1.4, -1.0),
            amplitude: 0.6,
            frequency: 0.5,
            sword_offset: Vec3::new(0.0, -0.25, 0.0),
        }
    }
}

impl ScriptedSweep {
    fn pose_at(&self, hand: Hand, time_secs: f64) -> Pose {
        let phase = match hand {
            Hand::Left => 0.0,
            Hand::Right => std::f64::consts::PI,
        };
        let angle = std::f64::consts::TAU * self.frequency as f64 * time_secs + phase;
        let x = self.amplitude * angle.sin() as f32;
        let hit_point = self.center + Vec3::new(x, 0.0, 0.0);
        // Tilt the blade a little into the swing direction.
        let orientation = Quat::from_rotation_z(0.3 * angle.cos() as f32);
        Pose::new(hit_point - orientation * self.sword_offset, orientation)
    }
}

impl PoseSource for ScriptedSweep {
    fn poses(&mut self, time_secs: f64) -> Vec<(Hand, Pose)> {
        Hand::BOTH
            .into_iter()
            .map(|hand| (hand, self.pose_at(hand, time_secs)))
            .collect()
    }
}
