//! Player commands sent from the embedding UI to the simulation.
//!
//! Commands are validated and queued for processing at the next tick
//! boundary, so a command never observes mid-tick state.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start (or restart) a defense session with the engine's config.
    StartDefense,
    /// Pause the simulation.
    Pause,
    /// Resume a paused simulation.
    Resume,
    /// Click at field coordinates, attempting to destroy a drone.
    Strike { x: f64, y: f64 },
    /// Return to the main menu after a session ends.
    ReturnToMenu,
}
