//! Simulation engine for Nexus Defender.
//!
//! Owns the hecs ECS world, runs systems each tick with a measured delta,
//! and produces GameStateSnapshots for the embedding UI.

pub mod effects;
pub mod engine;
pub mod ledger;
pub mod links;
pub mod systems;

pub use engine::{SimConfig, SimulationEngine};
pub use nexus_core as core;
