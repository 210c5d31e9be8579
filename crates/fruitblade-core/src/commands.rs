//! Player and runtime commands sent to the simulation.
//!
//! Commands are queued and processed at the next frame boundary.

use serde::{Deserialize, Serialize};

use crate::enums::Hand;
use crate::types::Pose;

/// All inputs the host can feed into the simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Session ---
    /// The player pressed "Enter VR" and the XR session began.
    StartSession,
    /// The XR session ended. Fruit in flight are cleared; the score is kept.
    EndSession,
    Pause,
    Resume,

    // --- Controllers ---
    /// The runtime reported a controller for this hand.
    ControllerConnected { hand: Hand },
    /// The runtime lost the controller for this hand.
    ControllerDisconnected { hand: Hand },
    /// Latest tracked pose for this hand's controller.
    UpdateControllerPose { hand: Hand, pose: Pose },
}
