//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! Logic lives in the simulation systems, not here.

use serde::{Deserialize, Serialize};

use crate::enums::{DroneClass, Heading};

/// Marks an entity as an enemy drone.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Drone;

/// Physical state of a drone.
///
/// `half_extent` and `moving` are derived from the link count and must be
/// recomputed whenever the entity's `LinkSet` changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DroneBody {
    /// Stable identity used in snapshots and link references.
    pub id: u32,
    pub class: DroneClass,
    pub heading: Heading,
    /// Half the side length of the bounding box (pixels).
    pub half_extent: f64,
    /// False once the drone has accumulated `MAX_LINKS` links.
    pub moving: bool,
    /// Age in milliseconds; drives the link-line stroke animation.
    pub lifespan_ms: f64,
}

/// The drone ids this drone is chained to.
///
/// The link relation is symmetric: if a's set contains b, then b's set
/// contains a. Links are stored as ids, not entity handles, so the
/// component stays plain serializable data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkSet {
    pub partners: Vec<u32>,
}

impl LinkSet {
    pub fn contains(&self, id: u32) -> bool {
        self.partners.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.partners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partners.is_empty()
    }
}
