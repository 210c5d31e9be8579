//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Which hand a controller (and its sword) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    pub const BOTH: [Hand; 2] = [Hand::Left, Hand::Right];
}

/// Geometry the host should build for a fruit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FruitShape {
    #[default]
    Sphere,
    Cube,
    Tetrahedron,
    Octahedron,
    Dodecahedron,
    Icosahedron,
    /// Instance of the configured static model file.
    Model,
}

impl FruitShape {
    /// Every primitive shape (everything except `Model`).
    pub const PRIMITIVES: [FruitShape; 6] = [
        FruitShape::Sphere,
        FruitShape::Cube,
        FruitShape::Tetrahedron,
        FruitShape::Octahedron,
        FruitShape::Dodecahedron,
        FruitShape::Icosahedron,
    ];
}

/// How the score HUD is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HudStyle {
    /// Extruded 3D text mesh rebuilt from the loaded font.
    #[default]
    TextMesh,
    /// Canvas texture on a camera-facing sprite, repainted in place.
    CanvasSprite,
}

/// Named configurations replacing the individual prototypes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Preset {
    /// Green spheres on black with a text-mesh score.
    #[default]
    Classic,
    /// Random shapes, colours and spin.
    Spinning,
    /// Classic spawning with a canvas-sprite score.
    CanvasHud,
    /// Fruit drawn from a static 3D model file.
    Model,
    /// Light background with a coloured palette.
    Daylight,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::Classic,
        Preset::Spinning,
        Preset::CanvasHud,
        Preset::Model,
        Preset::Daylight,
    ];

    /// Lowercase name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Preset::Classic => "classic",
            Preset::Spinning => "spinning",
            Preset::CanvasHud => "canvas-hud",
            Preset::Model => "model",
            Preset::Daylight => "daylight",
        }
    }

    pub fn from_name(name: &str) -> Option<Preset> {
        Preset::ALL.into_iter().find(|p| p.name() == name)
    }
}

/// Top-level session phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the player to enter the XR session.
    #[default]
    Idle,
    Active,
    Paused,
}

/// How a fruit left play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FruitOutcome {
    Sliced,
    Missed,
}
