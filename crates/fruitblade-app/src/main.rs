//! FRUITBLADE - headless driver for the fruit slicing game.
//!
//! Runs the game loop with a scripted pair of swords (or no input at all)
//! and reports the result. A VR host embeds the same loop through `control`.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use clap::Parser;
use tracing::info;

use fruitblade_app::assets;
use fruitblade_app::config_file::{self, ConfigOverrides};
use fruitblade_app::control;
use fruitblade_app::game_loop::LoopOptions;
use fruitblade_app::pose_source::{NoInput, PoseSource, ScriptedSweep};
use fruitblade_app::state::AppState;
use fruitblade_core::commands::PlayerCommand;
use fruitblade_core::constants::DEFAULT_FRAME_RATE;
use fruitblade_core::enums::Preset;
use fruitblade_core::scene::SceneDescription;
use fruitblade_sim::engine::SimulationEngine;

#[derive(Parser, Debug)]
#[command(name = "fruitblade", about = "VR fruit slicing game, headless driver")]
struct Cli {
    /// JSON game config. Replaces the preset.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Variant to play: classic, spinning, canvas-hud, model, daylight.
    ///
    /// Every preset reads the HUD font from
    /// assets/fonts/helvetiker_regular.typeface.json (see --font). The model
    /// preset also reads assets/models/fruit.glb (see --model). Missing files
    /// fall back to a built-in font family and to sphere fruit.
    #[arg(long, default_value = "classic")]
    preset: String,

    /// Typeface JSON font for the score HUD
    #[arg(long)]
    font: Option<String>,

    /// glTF or GLB fruit model, used by shapes set to Model
    #[arg(long)]
    model: Option<String>,

    /// RNG seed for fruit spawning
    #[arg(long)]
    seed: Option<u64>,

    /// Number of frames to run
    #[arg(long, default_value_t = DEFAULT_FRAME_RATE as u64 * 60)]
    frames: u64,

    /// Display refresh rate (Hz)
    #[arg(long, default_value_t = DEFAULT_FRAME_RATE)]
    fps: u32,

    /// Pace frames on the wall clock instead of a fixed step
    #[arg(long)]
    realtime: bool,

    /// Run without the scripted swords
    #[arg(long)]
    no_input: bool,

    /// Write the final snapshot as JSON
    #[arg(long)]
    dump_snapshot: Option<PathBuf>,

    /// Print the scene description as JSON and exit
    #[arg(long)]
    print_scene: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fruitblade_app=info,fruitblade_sim=info".into()),
        )
        .init();

    info!("fruitblade v{} starting", env!("CARGO_PKG_VERSION"));

    let preset = Preset::from_name(&cli.preset).ok_or_else(|| {
        let names: Vec<_> = Preset::ALL.iter().map(|p| p.name()).collect();
        anyhow!("unknown preset {:?}, expected one of: {}", cli.preset, names.join(", "))
    })?;
    let overrides = ConfigOverrides {
        seed: cli.seed,
        font_path: cli.font.clone(),
        model_path: cli.model.clone(),
        ..Default::default()
    };
    let mut config = config_file::resolve_config(preset, cli.config.as_deref(), &overrides)?;

    let scene = SceneDescription::from_config(&config);
    if cli.print_scene {
        println!("{}", serde_json::to_string_pretty(&scene)?);
        return Ok(());
    }

    let model = assets::prepare_model(&mut config);
    let font = assets::load_font_or_fallback(Path::new(&config.hud.font_path));
    info!(
        preset = preset.name(),
        seed = config.seed,
        background = %config.scene.background.to_hex(),
        shapes = ?config.spawn.shapes,
        model = model.as_ref().map(|m| m.path.as_str()).unwrap_or("none"),
        font = %font.family_name,
        font_loaded = font.loaded,
        hud = ?config.hud.style,
        "scene ready"
    );

    let sword_offset = config.sword.offset;
    let mut engine = SimulationEngine::new(config).map_err(|e| anyhow!(e))?;
    engine.set_hud_font(font.family_name);
    // Queued before the loop starts so the first frame is already in play.
    engine.queue_command(PlayerCommand::StartSession);

    let pose_source: Box<dyn PoseSource> = if cli.no_input {
        Box::new(NoInput)
    } else {
        Box::new(ScriptedSweep {
            sword_offset,
            ..Default::default()
        })
    };
    let options = LoopOptions {
        frame_rate: cli.fps,
        max_frames: Some(cli.frames),
        realtime: cli.realtime,
    };

    let state = AppState::new();
    control::start_game(&state, engine, pose_source, options).map_err(|e| anyhow!(e))?;
    let summary = control::join_game(&state).map_err(|e| anyhow!(e))?;

    info!(
        frames = summary.frames,
        score = summary.score.score,
        spawned = summary.score.spawned,
        sliced = summary.score.sliced,
        missed = summary.score.missed,
        in_flight = summary.score.in_flight,
        "game over"
    );
    if let Some(snapshot) = &summary.final_snapshot {
        println!("{}", snapshot.hud.text);
    }

    if let Some(path) = &cli.dump_snapshot {
        let snapshot = summary
            .final_snapshot
            .as_ref()
            .ok_or_else(|| anyhow!("no frames were run"))?;
        let json = serde_json::to_string_pretty(snapshot)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write snapshot to {}", path.display()))?;
        info!(path = %path.display(), "snapshot written");
    }

    Ok(())
}
