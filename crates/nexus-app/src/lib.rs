//! Nexus Defender embedding layer.
//!
//! This crate wires the simulation engine to an embedding UI: the
//! game-loop thread, the session sprite atlas, and the render-primitive
//! interface the UI implements to draw the scene.

pub mod game_loop;
pub mod render;
pub mod sprites;

pub use nexus_core as core;
