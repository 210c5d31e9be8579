//! Application state shared between the control surface and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use fruitblade_core::commands::PlayerCommand;
use fruitblade_core::state::GameStateSnapshot;

use crate::game_loop::LoopSummary;

/// Commands sent from the control surface to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// - `mpsc::Sender` is wrapped in a `Mutex` so the state can be shared across threads.
/// - `Mutex<Option<...>>` holds state that does not exist before `start_game`.
/// - The latest snapshot is `Arc<Mutex<...>>`, shared with the game loop thread.
pub struct AppState {
    /// Channel sender to forward commands to the game loop thread.
    /// `None` before `start_game` is called.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot for synchronous polling. Updated after each frame.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    /// Handle of the running loop thread, taken when the game is joined.
    pub loop_handle: Mutex<Option<JoinHandle<LoopSummary>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            loop_handle: Mutex::new(None),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the game loop has been started and not yet joined.
    pub fn is_running(&self) -> bool {
        self.loop_handle
            .lock()
            .map(|handle| handle.is_some())
            .unwrap_or(false)
    }
}
