//! Score and hull ledger — the running totals the session is played for.
//!
//! Stored in `SimulationEngine`, not as an ECS entity.

use nexus_core::constants::STARTING_HULL;
use nexus_core::enums::HullStatus;

/// Accumulates hull damage and player score, and signals the breach.
#[derive(Debug, Clone)]
pub struct Ledger {
    hull: f64,
    score: f64,
    breached: bool,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            hull: STARTING_HULL,
            score: 0.0,
            breached: false,
        }
    }
}

impl Ledger {
    /// Subtract damage from the hull, clamping at zero.
    ///
    /// Returns true exactly once: on the tick the hull first reaches zero.
    pub fn apply_damage(&mut self, amount: f64) -> bool {
        self.hull -= amount;
        if self.hull <= 0.0 {
            self.hull = 0.0;
            if !self.breached {
                self.breached = true;
                return true;
            }
        }
        false
    }

    /// Add points to the player's score.
    pub fn apply_reward(&mut self, points: f64) {
        self.score += points;
    }

    pub fn hull(&self) -> f64 {
        self.hull
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn is_breached(&self) -> bool {
        self.breached
    }

    /// Cosmetic severity tier of the current hull.
    pub fn status(&self) -> HullStatus {
        HullStatus::classify(self.hull)
    }
}
