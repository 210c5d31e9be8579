//! Game loop thread: advances the simulation once per display frame.
//!
//! The engine is moved into this thread and owned there. Commands arrive via
//! an `mpsc` channel; the latest snapshot is stored in shared state for
//! polling. In realtime mode the frame delta comes from a wall clock, the way
//! a host animation loop measures it; otherwise every frame is exactly
//! `1 / frame_rate` seconds, which keeps headless runs reproducible.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info, trace};

use fruitblade_core::commands::PlayerCommand;
use fruitblade_core::constants::DEFAULT_FRAME_RATE;
use fruitblade_core::events::GameEvent;
use fruitblade_core::state::{GameStateSnapshot, ScoreView};
use fruitblade_sim::engine::SimulationEngine;

use crate::pose_source::PoseSource;
use crate::state::GameLoopCommand;

/// How the loop is paced and when it stops.
///
/// The default is paced on the wall clock and runs until shutdown, which is
/// what an embedding host wants. `headless` gives an unpaced, bounded run.
#[derive(Debug, Clone, Copy)]
pub struct LoopOptions {
    pub frame_rate: u32,
    /// Stop after this many frames. `None` runs until shutdown.
    pub max_frames: Option<u64>,
    /// Sleep to the frame rate and measure real deltas.
    pub realtime: bool,
}

impl Default for LoopOptions {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
            max_frames: None,
            realtime: true,
        }
    }
}

impl LoopOptions {
    /// Fixed-step frames as fast as possible, stopping after `frames`.
    pub fn headless(frames: u64) -> Self {
        Self {
            max_frames: Some(frames),
            realtime: false,
            ..Default::default()
        }
    }

    /// Nominal duration of one frame.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / self.frame_rate.max(1) as u64)
    }
}

/// What the loop did, returned when the thread finishes.
#[derive(Debug, Clone, Default)]
pub struct LoopSummary {
    pub frames: u64,
    pub score: ScoreView,
    pub final_snapshot: Option<GameStateSnapshot>,
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    engine: SimulationEngine,
    pose_source: Box<dyn PoseSource>,
    options: LoopOptions,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> std::io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<LoopSummary>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("fruitblade-game-loop".into())
        .spawn(move || run_game_loop(engine, pose_source, options, cmd_rx, &latest_snapshot))?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown, channel disconnect, or the frame limit.
pub fn run_game_loop(
    mut engine: SimulationEngine,
    mut pose_source: Box<dyn PoseSource>,
    options: LoopOptions,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) -> LoopSummary {
    let frame_duration = options.frame_duration();
    let fixed_dt = frame_duration.as_secs_f32();
    let mut summary = LoopSummary::default();
    let mut last_frame = Instant::now();
    let mut next_frame_time = last_frame;

    info!(
        frame_rate = options.frame_rate,
        realtime = options.realtime,
        "game loop started"
    );

    loop {
        if options.max_frames.is_some_and(|max| summary.frames >= max) {
            break;
        }

        // 1. Drain all pending commands
        let mut shutdown = false;
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    shutdown = true;
                    break;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }
        if shutdown {
            break;
        }

        // 2. Controller poses for this frame
        let now_secs = engine.time().elapsed_secs;
        engine.queue_commands(
            pose_source
                .poses(now_secs)
                .into_iter()
                .map(|(hand, pose)| PlayerCommand::UpdateControllerPose { hand, pose }),
        );

        // 3. Advance one frame
        let dt = if options.realtime {
            let now = Instant::now();
            let dt = (now - last_frame).as_secs_f32();
            last_frame = now;
            dt
        } else {
            fixed_dt
        };
        let snapshot = engine.tick(dt);
        summary.frames += 1;
        log_events(&snapshot.events);

        // 4. Store latest snapshot for polling
        summary.score = snapshot.score;
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot.clone());
        }
        summary.final_snapshot = Some(snapshot);

        // 5. Sleep until the next frame
        if options.realtime {
            next_frame_time += frame_duration;
            let now = Instant::now();
            if next_frame_time > now {
                std::thread::sleep(next_frame_time - now);
            } else if now - next_frame_time > frame_duration * 2 {
                // Too far behind, reset instead of catching up
                next_frame_time = now;
            }
        }
    }

    info!(
        frames = summary.frames,
        score = summary.score.score,
        spawned = summary.score.spawned,
        missed = summary.score.missed,
        "game loop stopped"
    );
    summary
}

fn log_events(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::ScoreChanged { score } => info!(score, "score"),
            GameEvent::PhaseChanged { phase } => debug!(?phase, "phase"),
            GameEvent::FruitSliced { fruit_id, hand, .. } => debug!(fruit_id, ?hand, "sliced"),
            GameEvent::FruitMissed { fruit_id } => trace!(fruit_id, "missed"),
            GameEvent::FruitSpawned { fruit_id, shape } => trace!(fruit_id, ?shape, "spawned"),
        }
    }
}
