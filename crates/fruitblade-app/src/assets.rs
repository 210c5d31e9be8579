//! Asset loading: the HUD font and the optional fruit model.
//!
//! Both are loaded once, before the first frame. A missing or malformed
//! asset never stops the game: the font falls back to a built-in family and
//! the model falls back to the sphere primitive, with a warning.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use fruitblade_core::config::GameConfig;
use fruitblade_core::enums::FruitShape;
use fruitblade_sim::hud::FALLBACK_FONT_FAMILY;

/// Binary glTF magic: ASCII "glTF" read as a little-endian u32.
const GLB_MAGIC: u32 = 0x4654_6C67;
const GLB_HEADER_LEN: usize = 12;

/// A typeface font, as produced by the usual JSON typeface converters.
#[derive(Debug, Clone, PartialEq)]
pub struct FontAsset {
    pub family_name: String,
    /// Font units per em.
    pub resolution: u32,
    pub glyph_count: usize,
    /// False when this is the built-in fallback.
    pub loaded: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TypefaceFile {
    family_name: String,
    #[serde(default = "default_resolution")]
    resolution: u32,
    glyphs: serde_json::Map<String, serde_json::Value>,
}

fn default_resolution() -> u32 {
    1000
}

impl FontAsset {
    pub fn fallback() -> Self {
        Self {
            family_name: FALLBACK_FONT_FAMILY.to_string(),
            resolution: default_resolution(),
            glyph_count: 0,
            loaded: false,
        }
    }
}

/// Container format of a model file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormat {
    /// Binary glTF.
    Glb,
    /// JSON glTF.
    Gltf,
}

/// A static model file checked for a usable header.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelAsset {
    pub path: String,
    pub format: ModelFormat,
    pub byte_len: usize,
}

/// Parse a typeface JSON document.
pub fn parse_font(json: &str) -> Result<FontAsset, String> {
    let file: TypefaceFile =
        serde_json::from_str(json).map_err(|e| format!("Failed to parse typeface: {e}"))?;
    if file.glyphs.is_empty() {
        return Err("Typeface has no glyphs".into());
    }
    // The HUD needs digits at the very least.
    if let Some(missing) = ('0'..='9').find(|c| !file.glyphs.contains_key(&c.to_string())) {
        return Err(format!("Typeface is missing glyph '{missing}'"));
    }
    Ok(FontAsset {
        family_name: file.family_name,
        resolution: file.resolution,
        glyph_count: file.glyphs.len(),
        loaded: true,
    })
}

pub fn load_font(path: &Path) -> Result<FontAsset, String> {
    let json = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read font {}: {e}", path.display()))?;
    parse_font(&json)
}

/// Load the HUD font, falling back to the built-in family on any failure.
pub fn load_font_or_fallback(path: &Path) -> FontAsset {
    match load_font(path) {
        Ok(font) => {
            info!(family = %font.family_name, glyphs = font.glyph_count, "font loaded");
            font
        }
        Err(e) => {
            warn!(error = %e, fallback = FALLBACK_FONT_FAMILY, "font unavailable, using fallback");
            FontAsset::fallback()
        }
    }
}

/// Identify a model file from its bytes.
pub fn parse_model(path: &str, bytes: &[u8]) -> Result<ModelAsset, String> {
    if bytes.len() >= GLB_HEADER_LEN {
        let magic = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        if magic == GLB_MAGIC {
            let version = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
            let declared = u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]) as usize;
            if version != 2 {
                return Err(format!("Unsupported GLB version {version}"));
            }
            if declared > bytes.len() {
                return Err(format!(
                    "Truncated GLB: header declares {declared} bytes, file has {}",
                    bytes.len()
                ));
            }
            return Ok(ModelAsset {
                path: path.to_string(),
                format: ModelFormat::Glb,
                byte_len: bytes.len(),
            });
        }
    }

    let json: serde_json::Value = serde_json::from_slice(bytes)
        .map_err(|e| format!("Not a GLB and not valid glTF JSON: {e}"))?;
    if json.get("asset").is_none() {
        return Err("glTF JSON has no \"asset\" block".into());
    }
    Ok(ModelAsset {
        path: path.to_string(),
        format: ModelFormat::Gltf,
        byte_len: bytes.len(),
    })
}

pub fn load_model(path: &Path) -> Result<ModelAsset, String> {
    let bytes =
        fs::read(path).map_err(|e| format!("Failed to read model {}: {e}", path.display()))?;
    parse_model(&path.display().to_string(), &bytes)
}

/// Load the fruit model if the config uses one. On failure, swap `Model` for
/// `Sphere` in the shape set so the game still has something to throw.
pub fn prepare_model(config: &mut GameConfig) -> Option<ModelAsset> {
    if !config.spawn.shapes.contains(&FruitShape::Model) {
        return None;
    }
    let result = match config.spawn.model_path.as_deref() {
        Some(path) => load_model(Path::new(path)),
        None => Err("no model path configured".to_string()),
    };
    match result {
        Ok(model) => {
            info!(path = %model.path, format = ?model.format, bytes = model.byte_len, "model loaded");
            Some(model)
        }
        Err(e) => {
            warn!(error = %e, "model unavailable, falling back to spheres");
            let mut shapes: Vec<FruitShape> = Vec::with_capacity(config.spawn.shapes.len());
            for shape in config.spawn.shapes.drain(..) {
                let shape = match shape {
                    FruitShape::Model => FruitShape::Sphere,
                    other => other,
                };
                // Each shape once; duplicates would bias the shape draw.
                if !shapes.contains(&shape) {
                    shapes.push(shape);
                }
            }
            config.spawn.shapes = shapes;
            config.spawn.model_path = None;
            None
        }
    }
}
