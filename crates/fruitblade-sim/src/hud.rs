//! Score HUD model.
//!
//! The overlay is regenerated only when the score changes. Each regeneration
//! bumps `revision`; the host rebuilds its text mesh or repaints its canvas
//! when it sees a new revision. The font is resolved once, when the HUD is
//! created or the host reports the loaded family, never per update.

use fruitblade_core::config::HudConfig;
use fruitblade_core::enums::HudStyle;
use fruitblade_core::state::{HudGeometry, HudView};
use fruitblade_core::types::Rgb;

/// Family used until the host reports a loaded font.
pub const FALLBACK_FONT_FAMILY: &str = "sans-serif";

#[derive(Debug, Clone)]
pub struct ScoreHud {
    style: HudStyle,
    label: String,
    color: Rgb,
    geometry: HudGeometry,
    score: u32,
    text: String,
    revision: u64,
}

impl ScoreHud {
    /// Create the HUD showing a score of zero.
    pub fn new(config: &HudConfig, font_family: Option<&str>) -> Self {
        let font = font_family.unwrap_or(FALLBACK_FONT_FAMILY).to_string();
        Self {
            style: config.style,
            label: config.label.clone(),
            color: config.color,
            geometry: geometry_for(config, font),
            score: 0,
            text: format_score(&config.label, 0),
            revision: 0,
        }
    }

    /// Swap in the loaded font family. Counts as a regeneration.
    pub fn set_font(&mut self, family: String) {
        let changed = match &mut self.geometry {
            HudGeometry::TextMesh { font, .. } | HudGeometry::CanvasSprite { font, .. } => {
                if *font == family {
                    false
                } else {
                    *font = family;
                    true
                }
            }
        };
        if changed {
            self.revision += 1;
        }
    }

    /// Regenerate the text if `score` differs from what is shown.
    /// Returns true when the overlay changed.
    pub fn update(&mut self, score: u32) -> bool {
        if score == self.score {
            return false;
        }
        self.score = score;
        self.text = format_score(&self.label, score);
        self.revision += 1;
        true
    }

    pub fn style(&self) -> HudStyle {
        self.style
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn view(&self) -> HudView {
        HudView {
            text: self.text.clone(),
            revision: self.revision,
            color: self.color,
            geometry: self.geometry.clone(),
        }
    }
}

fn format_score(label: &str, score: u32) -> String {
    format!("{label}: {score}")
}

fn geometry_for(config: &HudConfig, font: String) -> HudGeometry {
    match config.style {
        HudStyle::TextMesh => HudGeometry::TextMesh {
            position: config.position,
            size: config.text_size,
            depth: config.text_depth,
            font,
        },
        HudStyle::CanvasSprite => {
            let aspect = config.canvas_height as f32 / config.canvas_width.max(1) as f32;
            HudGeometry::CanvasSprite {
                position: config.position,
                canvas_width: config.canvas_width,
                canvas_height: config.canvas_height,
                font_px: config.canvas_font_px,
                scale: [config.sprite_width, config.sprite_width * aspect],
                font,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_text() {
        let hud = ScoreHud::new(&HudConfig::default(), None);
        assert_eq!(hud.text(), "Points: 0");
        assert_eq!(hud.revision(), 0);
        assert_eq!(hud.style(), HudStyle::TextMesh);
    }

    #[test]
    fn test_update_only_on_change() {
        let mut hud = ScoreHud::new(&HudConfig::default(), Some("helvetiker"));
        assert!(!hud.update(0));
        assert_eq!(hud.revision(), 0);

        assert!(hud.update(1));
        assert_eq!(hud.text(), "Points: 1");
        assert_eq!(hud.revision(), 1);

        assert!(!hud.update(1));
        assert_eq!(hud.revision(), 1);

        assert!(hud.update(3));
        assert_eq!(hud.text(), "Points: 3");
        assert_eq!(hud.revision(), 2);
    }

    #[test]
    fn test_custom_label() {
        let config = HudConfig {
            label: "Puntos".into(),
            ..Default::default()
        };
        let mut hud = ScoreHud::new(&config, None);
        hud.update(7);
        assert_eq!(hud.text(), "Puntos: 7");
    }

    #[test]
    fn test_canvas_geometry_keeps_aspect() {
        let config = HudConfig {
            style: HudStyle::CanvasSprite,
            canvas_width: 512,
            canvas_height: 128,
            sprite_width: 1.0,
            ..Default::default()
        };
        let hud = ScoreHud::new(&config, None);
        match hud.view().geometry {
            HudGeometry::CanvasSprite { scale, font, .. } => {
                assert_eq!(scale, [1.0, 0.25]);
                assert_eq!(font, FALLBACK_FONT_FAMILY);
            }
            other => panic!("expected canvas sprite, got {:?}", other),
        }
    }

    #[test]
    fn test_set_font_bumps_revision_once() {
        let mut hud = ScoreHud::new(&HudConfig::default(), None);
        hud.set_font("helvetiker".into());
        assert_eq!(hud.revision(), 1);
        hud.set_font("helvetiker".into());
        assert_eq!(hud.revision(), 1);
        match hud.view().geometry {
            HudGeometry::TextMesh { font, size, .. } => {
                assert_eq!(font, "helvetiker");
                assert_eq!(size, 0.1);
            }
            other => panic!("expected text mesh, got {:?}", other),
        }
    }
}
