//! Snapshot system: queries the ECS world and builds a GameStateSnapshot.
//!
//! Read-only — it never modifies the world.

use hecs::World;

use nexus_core::components::{DroneBody, LinkSet};
use nexus_core::enums::GamePhase;
use nexus_core::events::GameEvent;
use nexus_core::state::{DroneView, GameStateSnapshot};
use nexus_core::types::{Position, SimTime};

use crate::effects::EffectManager;
use crate::ledger::Ledger;

/// Build a complete snapshot from the current simulation state.
pub fn build(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    nexus_name: &str,
    ledger: &Ledger,
    effects: &EffectManager,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        nexus_name: nexus_name.to_owned(),
        hull: ledger.hull(),
        score: ledger.score(),
        hull_status: ledger.status(),
        drones: build_drones(world),
        effects: effects.views(),
        events,
    }
}

/// Build DroneView list, sorted by id for stable output.
fn build_drones(world: &World) -> Vec<DroneView> {
    let mut query = world.query::<(&Position, &DroneBody, &LinkSet)>();
    let mut drones: Vec<DroneView> = query
        .iter()
        .map(|(_, (pos, body, links))| DroneView {
            id: body.id,
            x: pos.x,
            y: pos.y,
            class: body.class,
            heading: body.heading,
            half_extent: body.half_extent,
            moving: body.moving,
            lifespan_ms: body.lifespan_ms,
            links: links.partners.clone(),
        })
        .collect();
    drones.sort_by_key(|view| view.id);
    drones
}
