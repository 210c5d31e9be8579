//! Game configuration.
//!
//! One `GameConfig` drives spawning, hit rules, the HUD and the scene. The
//! named presets cover the variations the game ships with; anything can be
//! overridden from a JSON file since every section is `#[serde(default)]`.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::*;
use crate::types::Rgb;

/// Complete configuration for one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed. Same seed and same inputs = same game.
    pub seed: u64,
    pub spawn: SpawnConfig,
    pub rules: PlayRules,
    pub sword: SwordConfig,
    pub hud: HudConfig,
    pub scene: SceneConfig,
    /// Frame deltas above this are clamped (seconds).
    pub max_frame_delta: f32,
}

/// Fruit spawning policy: one Bernoulli trial per frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    pub probability: f64,
    /// Width of the lateral spawn band (meters).
    pub lateral_spread: f32,
    pub height: f32,
    pub depth: f32,
    pub velocity: Vec3,
    pub radius: f32,
    /// Shapes to draw from. A single entry means every fruit has that shape.
    pub shapes: Vec<FruitShape>,
    /// Colours to draw from. Empty means a random 24-bit colour per fruit.
    pub palette: Vec<Rgb>,
    /// Upper bound of the per-axis spin rate (rad/s). Zero disables spin.
    pub max_spin: f32,
    /// Model file used for `FruitShape::Model`.
    pub model_path: Option<String>,
}

/// Hit and cull thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayRules {
    pub hit_radius: f32,
    pub cull_depth: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwordConfig {
    /// Hit point in controller space.
    pub offset: Vec3,
    pub size: Vec3,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    pub style: HudStyle,
    pub label: String,
    pub position: Vec3,
    pub color: Rgb,
    pub text_size: f32,
    pub text_depth: f32,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub canvas_font_px: u32,
    pub sprite_width: f32,
    pub font_path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub background: Rgb,
    pub floor_color: Rgb,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            spawn: SpawnConfig::default(),
            rules: PlayRules::default(),
            sword: SwordConfig::default(),
            hud: HudConfig::default(),
            scene: SceneConfig::default(),
            max_frame_delta: MAX_FRAME_DELTA,
        }
    }
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            probability: SPAWN_PROBABILITY,
            lateral_spread: SPAWN_LATERAL_SPREAD,
            height: SPAWN_HEIGHT,
            depth: SPAWN_DEPTH,
            velocity: Vec3::from_array(FRUIT_LAUNCH_VELOCITY),
            radius: FRUIT_RADIUS,
            shapes: vec![FruitShape::Sphere],
            palette: vec![Rgb(FRUIT_COLOR)],
            max_spin: 0.0,
            model_path: None,
        }
    }
}

impl Default for PlayRules {
    fn default() -> Self {
        Self {
            hit_radius: HIT_RADIUS,
            cull_depth: CULL_DEPTH,
        }
    }
}

impl Default for SwordConfig {
    fn default() -> Self {
        Self {
            offset: Vec3::from_array(SWORD_OFFSET),
            size: Vec3::from_array(SWORD_SIZE),
            color: Rgb(SWORD_COLOR),
        }
    }
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            style: HudStyle::TextMesh,
            label: HUD_LABEL.to_string(),
            position: Vec3::from_array(HUD_POSITION),
            color: Rgb(HUD_COLOR),
            text_size: HUD_TEXT_SIZE,
            text_depth: HUD_TEXT_DEPTH,
            canvas_width: HUD_CANVAS_WIDTH,
            canvas_height: HUD_CANVAS_HEIGHT,
            canvas_font_px: HUD_CANVAS_FONT_PX,
            sprite_width: HUD_SPRITE_WIDTH,
            font_path: DEFAULT_FONT_PATH.to_string(),
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            background: Rgb(BACKGROUND_COLOR),
            floor_color: Rgb(FLOOR_COLOR),
        }
    }
}

impl GameConfig {
    /// Build the configuration for a named preset.
    pub fn preset(preset: Preset) -> Self {
        let mut config = Self::default();
        match preset {
            Preset::Classic => {}
            Preset::Spinning => {
                config.spawn.shapes = FruitShape::PRIMITIVES.to_vec();
                config.spawn.palette = Vec::new();
                config.spawn.max_spin = MAX_SPIN_RATE;
            }
            Preset::CanvasHud => {
                config.hud.style = HudStyle::CanvasSprite;
            }
            Preset::Model => {
                config.spawn.shapes = vec![FruitShape::Model];
                config.spawn.palette = vec![Rgb::WHITE];
                config.spawn.max_spin = MAX_SPIN_RATE / 2.0;
                config.spawn.model_path = Some("assets/models/fruit.glb".to_string());
            }
            Preset::Daylight => {
                config.scene.background = Rgb(DAYLIGHT_BACKGROUND_COLOR);
                config.scene.floor_color = Rgb(0x3a5f0b);
                config.spawn.palette = vec![
                    Rgb(0xff3b30),
                    Rgb(0xffcc00),
                    Rgb(0x34c759),
                    Rgb(0xff9500),
                    Rgb(0xaf52de),
                ];
                config.hud.color = Rgb(0x1c1c1e);
            }
        }
        config
    }

    /// Check the configuration for values the simulation cannot work with.
    pub fn validate(&self) -> Result<(), String> {
        let spawn = &self.spawn;
        if !(0.0..=1.0).contains(&spawn.probability) {
            return Err(format!(
                "spawn probability must be within [0, 1], got {}",
                spawn.probability
            ));
        }
        if !(spawn.lateral_spread.is_finite() && spawn.lateral_spread >= 0.0) {
            return Err(format!(
                "lateral spread must be finite and non-negative, got {}",
                spawn.lateral_spread
            ));
        }
        if !(spawn.height.is_finite() && spawn.depth.is_finite()) {
            return Err(format!(
                "spawn point must be finite, got height {} depth {}",
                spawn.height, spawn.depth
            ));
        }
        if !spawn.velocity.is_finite() {
            return Err("fruit velocity must be finite".into());
        }
        // Fruit must head toward the cull depth to ever leave the world.
        if !(spawn.velocity.z > 0.0) {
            return Err(format!(
                "fruit must travel toward the player (velocity z > 0), got {}",
                spawn.velocity.z
            ));
        }
        if !(spawn.radius > 0.0) {
            return Err(format!("fruit radius must be positive, got {}", spawn.radius));
        }
        if spawn.shapes.is_empty() {
            return Err("at least one fruit shape is required".into());
        }
        if spawn.shapes.contains(&FruitShape::Model) && spawn.model_path.is_none() {
            return Err("model shape requires spawn.model_path".into());
        }
        if !(spawn.max_spin.is_finite() && spawn.max_spin >= 0.0) {
            return Err(format!("max spin must be non-negative, got {}", spawn.max_spin));
        }
        if !(self.rules.hit_radius > 0.0) {
            return Err(format!(
                "hit radius must be positive, got {}",
                self.rules.hit_radius
            ));
        }
        if !self.rules.cull_depth.is_finite() || self.rules.cull_depth <= spawn.depth {
            return Err(format!(
                "cull depth {} must lie beyond the spawn depth {}",
                self.rules.cull_depth, spawn.depth
            ));
        }
        if !(self.max_frame_delta > 0.0) {
            return Err(format!(
                "max frame delta must be positive, got {}",
                self.max_frame_delta
            ));
        }
        if self.hud.style == HudStyle::CanvasSprite
            && (self.hud.canvas_width == 0 || self.hud.canvas_height == 0)
        {
            return Err("canvas HUD needs a non-empty texture".into());
        }
        Ok(())
    }
}
