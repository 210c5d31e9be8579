//! Control surface for a running game.
//!
//! These functions are what an embedding host (a VR shell, a test harness)
//! calls to start the loop, forward input, and poll state. They bridge to
//! the game loop thread through the channel and shared state in `AppState`.

use fruitblade_core::commands::PlayerCommand;
use fruitblade_core::state::GameStateSnapshot;
use fruitblade_sim::engine::SimulationEngine;

use crate::game_loop::{self, LoopOptions, LoopSummary};
use crate::pose_source::PoseSource;
use crate::state::{AppState, GameLoopCommand};

/// Start the game loop thread. Fails if one is already running.
pub fn start_game(
    state: &AppState,
    engine: SimulationEngine,
    pose_source: Box<dyn PoseSource>,
    options: LoopOptions,
) -> Result<(), String> {
    let mut handle_lock = state.loop_handle.lock().map_err(|e| e.to_string())?;
    if handle_lock.is_some() {
        return Err("Game already running".into());
    }

    let (cmd_tx, handle) =
        game_loop::spawn_game_loop(engine, pose_source, options, state.latest_snapshot.clone())
            .map_err(|e| format!("Failed to spawn game loop: {e}"))?;

    let mut tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;
    *tx_lock = Some(cmd_tx);
    *handle_lock = Some(handle);
    Ok(())
}

/// Send a command to the running game.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), String> {
    let tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(GameLoopCommand::PlayerCommand(command))
            .map_err(|e| format!("Failed to send command: {}", e)),
        None => Err("Game not started".into()),
    }
}

/// Get the latest snapshot synchronously.
pub fn get_snapshot(state: &AppState) -> Result<Option<GameStateSnapshot>, String> {
    let lock = state.latest_snapshot.lock().map_err(|e| e.to_string())?;
    Ok(lock.clone())
}

/// Wait for the loop to finish (frame limit reached or shutdown sent).
pub fn join_game(state: &AppState) -> Result<LoopSummary, String> {
    let handle = state
        .loop_handle
        .lock()
        .map_err(|e| e.to_string())?
        .take()
        .ok_or_else(|| "Game not started".to_string())?;
    let summary = handle
        .join()
        .map_err(|_| "Game loop thread panicked".to_string())?;
    if let Ok(mut tx) = state.command_tx.lock() {
        *tx = None;
    }
    Ok(summary)
}

/// Ask the loop to stop and wait for it.
pub fn stop_game(state: &AppState) -> Result<LoopSummary, String> {
    {
        let tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;
        if let Some(tx) = tx_lock.as_ref() {
            // The loop may already have exited on its frame limit.
            let _ = tx.send(GameLoopCommand::Shutdown);
        }
    }
    join_game(state)
}
