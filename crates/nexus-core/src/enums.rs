//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::{HULL_CAUTION_FLOOR, HULL_NOMINAL_FLOOR, HULL_WARNING_FLOOR};

/// Travel direction of a drone. Drones move along a single axis at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    /// The reflected direction along the same axis (bounce).
    pub fn opposite(self) -> Heading {
        match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }
}

/// Drone class — the two variants differ only in movement speed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DroneClass {
    #[default]
    Normal,
    Fast,
}

impl DroneClass {
    /// Movement speed in pixels per millisecond.
    pub fn speed(self) -> f64 {
        match self {
            DroneClass::Normal => crate::constants::NORMAL_SPEED,
            DroneClass::Fast => crate::constants::FAST_SPEED,
        }
    }
}

/// Session difficulty preset. Smaller spawn interval = harder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Insane,
}

impl Difficulty {
    /// Spawn interval in milliseconds.
    pub fn spawn_interval_ms(self) -> f64 {
        match self {
            Difficulty::Easy => 2_000.0,
            Difficulty::Medium => 1_000.0,
            Difficulty::Hard => 500.0,
            Difficulty::Insane => 250.0,
        }
    }
}

/// Cosmetic hull severity tier for UI feedback. Not gameplay-affecting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HullStatus {
    #[default]
    Nominal,
    Caution,
    Warning,
    Critical,
}

impl HullStatus {
    /// Classify a hull value into its severity tier.
    pub fn classify(hull: f64) -> HullStatus {
        if hull >= HULL_NOMINAL_FLOOR {
            HullStatus::Nominal
        } else if hull >= HULL_CAUTION_FLOOR {
            HullStatus::Caution
        } else if hull >= HULL_WARNING_FLOOR {
            HullStatus::Warning
        } else {
            HullStatus::Critical
        }
    }
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Active,
    Paused,
    GameOver,
}

/// Identifiers for the sprites the session loads once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteId {
    DroneNormalMoving,
    DroneFastMoving,
    DroneNormalStill,
    DroneFastStill,
    BackgroundNexus,
    NexusPortrait,
    ExplosionSheet,
}

impl SpriteId {
    /// Every sprite the session requires, in load order.
    pub const ALL: [SpriteId; 7] = [
        SpriteId::DroneNormalMoving,
        SpriteId::DroneFastMoving,
        SpriteId::DroneNormalStill,
        SpriteId::DroneFastStill,
        SpriteId::BackgroundNexus,
        SpriteId::NexusPortrait,
        SpriteId::ExplosionSheet,
    ];
}
