//! Events emitted by the simulation for UI and audio feedback.

use serde::{Deserialize, Serialize};

/// One-shot gameplay events, drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A new drone entered the field.
    DroneSpawned { id: u32 },
    /// Two drones collided and chained together.
    LinkFormed { a: u32, b: u32 },
    /// The player destroyed a drone and earned points.
    DroneDestroyed { id: u32, points: i64 },
    /// The spawner exhausted its placement attempts this cycle.
    SpawnExhausted,
    /// The nexus hull reached zero; the session is over.
    HullBreached { final_score: i64 },
}
