//! Core types and definitions for the Nexus Defender simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, and constants.
//! It has no dependency on any runtime framework or rendering stack.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
