//! Game state snapshot — the complete visible state sent to the UI each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{DroneClass, GamePhase, Heading, HullStatus};
use crate::events::GameEvent;
use crate::types::{Color, SimTime};

/// Complete game state published to the embedding UI after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// Display name of the defended nexus.
    pub nexus_name: String,
    /// Remaining nexus hull (clamped at zero).
    pub hull: f64,
    /// Accumulated player score.
    pub score: f64,
    /// Cosmetic severity tier derived from the hull.
    pub hull_status: HullStatus,
    pub drones: Vec<DroneView>,
    pub effects: Vec<EffectView>,
    /// Events that fired during this tick.
    pub events: Vec<GameEvent>,
}

/// A visible drone on the field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DroneView {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub class: DroneClass,
    pub heading: Heading,
    pub half_extent: f64,
    pub moving: bool,
    pub lifespan_ms: f64,
    /// Ids of the drones this one is chained to.
    pub links: Vec<u32>,
}

/// A transient visual effect, ready for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EffectView {
    /// One frame of the explosion sheet animation, selected by elapsed time.
    Explosion {
        x: f64,
        y: f64,
        frame_col: u32,
        frame_row: u32,
    },
    /// Floating reward text rising from a destroyed drone.
    ScoreText {
        x: f64,
        y: f64,
        text: String,
        color: Color,
    },
}
