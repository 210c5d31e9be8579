//! Game state snapshot: the complete visible state handed to the renderer each frame.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Position, Rgb, Rotation, SimTime};

/// Complete game state produced after each frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub fruits: Vec<FruitView>,
    pub swords: Vec<SwordView>,
    pub score: ScoreView,
    pub hud: HudView,
    pub events: Vec<GameEvent>,
}

/// A fruit in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FruitView {
    pub fruit_id: u32,
    pub shape: FruitShape,
    pub color: Rgb,
    pub radius: f32,
    pub position: Position,
    pub rotation: Rotation,
}

/// A sword hit point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwordView {
    pub hand: Hand,
    pub position: Position,
    /// False while the controller is disconnected or untracked.
    pub active: bool,
}

/// Running score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: u32,
    pub spawned: u32,
    pub sliced: u32,
    pub missed: u32,
    pub in_flight: u32,
}

/// What the score overlay should currently show.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HudView {
    pub text: String,
    /// Bumped every time the text is regenerated; the host rebuilds the
    /// mesh or repaints the canvas when this changes.
    pub revision: u64,
    pub color: Rgb,
    pub geometry: HudGeometry,
}

/// Style-specific drawing parameters for the overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "style")]
pub enum HudGeometry {
    TextMesh {
        position: Vec3,
        size: f32,
        depth: f32,
        /// Font family the mesh is built from.
        font: String,
    },
    CanvasSprite {
        position: Vec3,
        canvas_width: u32,
        canvas_height: u32,
        font_px: u32,
        /// World-space sprite size (meters).
        scale: [f32; 2],
        font: String,
    },
}

impl Default for HudGeometry {
    fn default() -> Self {
        HudGeometry::TextMesh {
            position: Vec3::ZERO,
            size: 0.0,
            depth: 0.0,
            font: String::new(),
        }
    }
}
