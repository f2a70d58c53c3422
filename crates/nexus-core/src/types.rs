//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 2D position in field space (pixels). Origin is the top-left corner,
/// x grows to the right, y grows downward. Positions mark drone centers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box overlap test between two drone footprints.
/// Centers are within range when both the x and y distances are at most
/// the sum of the half-extents (box overlap, not circular).
pub fn boxes_overlap(a: &Position, a_half: f64, b: &Position, b_half: f64) -> bool {
    let reach = a_half + b_half;
    (a.x - b.x).abs() <= reach && (a.y - b.y).abs() <= reach
}

/// Point-in-box test against a drone footprint, for click hit-testing.
pub fn box_contains(center: &Position, half: f64, x: f64, y: f64) -> bool {
    (center.x - x).abs() <= half && (center.y - y).abs() <= half
}

/// Logical dimensions of the play field (pixels).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldSize {
    pub width: f64,
    pub height: f64,
}

impl Default for FieldSize {
    fn default() -> Self {
        Self {
            width: crate::constants::FIELD_WIDTH,
            height: crate::constants::FIELD_HEIGHT,
        }
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in milliseconds.
    pub elapsed_ms: f64,
}

impl SimTime {
    /// Advance by one tick of measured duration `delta_ms`.
    pub fn advance(&mut self, delta_ms: f64) {
        self.tick += 1;
        self.elapsed_ms += delta_ms;
    }
}

/// RGBA color handed to the render target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Score text color.
    pub const CYAN: Color = Color::rgba(0, 255, 255, 255);

    /// Translucent pink used for chain link lines.
    pub const LINK_LINE: Color = Color::rgba(255, 156, 255, 50);
}
