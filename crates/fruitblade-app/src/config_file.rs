//! Configuration resolution: preset, then config file, then command-line overrides.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context};
use tracing::info;

use fruitblade_core::config::GameConfig;
use fruitblade_core::enums::Preset;

/// Overrides that win over both the preset and the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub seed: Option<u64>,
    pub spawn_probability: Option<f64>,
    pub font_path: Option<String>,
    pub model_path: Option<String>,
}

/// Read a JSON `GameConfig`. Missing fields take their defaults.
pub fn load_config(path: &Path) -> anyhow::Result<GameConfig> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: GameConfig = serde_json::from_str(&json)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    Ok(config)
}

/// Build the effective configuration and validate it.
pub fn resolve_config(
    preset: Preset,
    file: Option<&Path>,
    overrides: &ConfigOverrides,
) -> anyhow::Result<GameConfig> {
    let mut config = match file {
        Some(path) => {
            info!(path = %path.display(), "loading config file");
            load_config(path)?
        }
        None => GameConfig::preset(preset),
    };

    if let Some(seed) = overrides.seed {
        config.seed = seed;
    }
    if let Some(p) = overrides.spawn_probability {
        config.spawn.probability = p;
    }
    if let Some(path) = &overrides.font_path {
        config.hud.font_path = path.clone();
    }
    if let Some(path) = &overrides.model_path {
        config.spawn.model_path = Some(path.clone());
    }

    config
        .validate()
        .map_err(|e| anyhow!("invalid configuration: {e}"))?;
    Ok(config)
}
