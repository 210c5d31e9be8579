//! Gameplay constants and tuning defaults.
//!
//! These are the defaults behind `GameConfig`; presets override a subset.

// --- Frame timing ---

/// Nominal display refresh rate used by the headless frame loop (Hz).
pub const DEFAULT_FRAME_RATE: u32 = 72;

/// Largest frame delta fed to the simulation (seconds).
/// A stalled frame is integrated as this much time instead of jumping fruit past swords.
pub const MAX_FRAME_DELTA: f32 = 0.1;

// --- Spawning ---

/// Per-frame probability of spawning one fruit.
pub const SPAWN_PROBABILITY: f64 = 0.03;

/// Width of the lateral band fruit spawn in (meters, centered on x = 0).
pub const SPAWN_LATERAL_SPREAD: f32 = 1.5;

/// Spawn height (meters).
pub const SPAWN_HEIGHT: f32 = 1.0;

/// Spawn depth (meters, negative = in front of the player).
pub const SPAWN_DEPTH: f32 = -2.0;

/// Initial fruit velocity: upward and toward the player (m/s).
pub const FRUIT_LAUNCH_VELOCITY: [f32; 3] = [0.0, 1.2, 3.0];

/// Fruit sphere radius (meters).
pub const FRUIT_RADIUS: f32 = 0.1;

/// Sphere tessellation used by the host (width and height segments).
pub const FRUIT_SPHERE_SEGMENTS: u32 = 16;

/// Default fruit colour.
pub const FRUIT_COLOR: u32 = 0x00ff00;

/// Upper bound of the random spin rate per axis (rad/s) for spinning presets.
pub const MAX_SPIN_RATE: f32 = 3.0;

// --- Play bounds ---

/// Sword-to-fruit distance below which the fruit counts as sliced (meters).
pub const HIT_RADIUS: f32 = 0.15;

/// Fruit whose depth exceeds this have flown past the player (meters).
pub const CULL_DEPTH: f32 = 1.5;

// --- Sword ---

/// Sword hit point relative to the controller origin (meters, controller space).
pub const SWORD_OFFSET: [f32; 3] = [0.0, -0.25, 0.0];

/// Sword box dimensions (meters).
pub const SWORD_SIZE: [f32; 3] = [0.02, 0.5, 0.02];

pub const SWORD_COLOR: u32 = 0xff0000;

// --- HUD ---

pub const HUD_LABEL: &str = "Points";

/// HUD anchor in world space (meters).
pub const HUD_POSITION: [f32; 3] = [-0.5, 2.0, -1.0];

/// Text mesh glyph height (meters).
pub const HUD_TEXT_SIZE: f32 = 0.1;

/// Text mesh extrusion depth (meters).
pub const HUD_TEXT_DEPTH: f32 = 0.01;

pub const HUD_COLOR: u32 = 0xffffff;

/// Canvas sprite texture size (pixels).
pub const HUD_CANVAS_WIDTH: u32 = 512;
pub const HUD_CANVAS_HEIGHT: u32 = 128;

/// Canvas sprite font size (pixels).
pub const HUD_CANVAS_FONT_PX: u32 = 64;

/// Canvas sprite world-space width (meters); height follows the texture aspect.
pub const HUD_SPRITE_WIDTH: f32 = 1.0;

pub const DEFAULT_FONT_PATH: &str = "assets/fonts/helvetiker_regular.typeface.json";

// --- Scene ---

pub const BACKGROUND_COLOR: u32 = 0x000000;

/// Background used by the daylight preset.
pub const DAYLIGHT_BACKGROUND_COLOR: u32 = 0x87ceeb;

pub const CAMERA_FOV_DEGREES: f32 = 70.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_POSITION: [f32; 3] = [0.0, 1.6, 3.0];

pub const LIGHT_SKY_COLOR: u32 = 0xffffff;
pub const LIGHT_GROUND_COLOR: u32 = 0x444444;

/// Floor plane edge length (meters).
pub const FLOOR_SIZE: f32 = 4.0;
pub const FLOOR_COLOR: u32 = 0x111111;
