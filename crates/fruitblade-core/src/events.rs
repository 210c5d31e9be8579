//! Events emitted by the simulation for audio, haptics and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// Something that happened during a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A fruit entered play.
    FruitSpawned { fruit_id: u32, shape: FruitShape },
    /// A sword cut a fruit.
    FruitSliced {
        fruit_id: u32,
        hand: Hand,
        position: Position,
    },
    /// A fruit flew past the player.
    FruitMissed { fruit_id: u32 },
    /// The score counter changed.
    ScoreChanged { score: u32 },
    /// The session phase changed.
    PhaseChanged { phase: GamePhase },
}
