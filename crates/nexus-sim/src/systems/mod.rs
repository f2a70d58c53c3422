//! Systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` when
//! read-only). They do not own state — persistent state lives in
//! components or in the engine.

pub mod collision;
pub mod damage;
pub mod movement;
pub mod snapshot;
pub mod spawner;
