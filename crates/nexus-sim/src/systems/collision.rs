//! Pairwise collision resolution between drones.
//!
//! Each unordered pair is considered once, in id order for determinism.
//! On overlap the response order is observable and fixed: both drones
//! bounce, both receive a separation nudge through the ordinary movement
//! routine, and only then is the pair linked.

use hecs::{Entity, World};

use nexus_core::components::DroneBody;
use nexus_core::constants::SEPARATION_NUDGE_MS;
use nexus_core::events::GameEvent;
use nexus_core::types::{boxes_overlap, FieldSize, Position};

use crate::links;
use crate::systems::movement;

/// Run the collision scan over all live drones.
pub fn run(world: &mut World, field: FieldSize, events: &mut Vec<GameEvent>) {
    let drones = drones_in_id_order(world);

    for i in 0..drones.len() {
        for j in (i + 1)..drones.len() {
            let (a, a_id) = drones[i];
            let (b, b_id) = drones[j];

            // Positions and extents are read live: an earlier pair's
            // response this tick affects later pair checks.
            if !currently_overlapping(world, a, b) {
                continue;
            }

            bounce(world, a);
            bounce(world, b);

            nudge_apart(world, a, field);
            nudge_apart(world, b, field);

            if links::link(world, a, b) {
                events.push(GameEvent::LinkFormed { a: a_id, b: b_id });
            }
        }
    }
}

/// Stable id-ordered list of drone entities for deterministic iteration.
pub fn drones_in_id_order(world: &World) -> Vec<(Entity, u32)> {
    let mut query = world.query::<&DroneBody>();
    let mut drones: Vec<(Entity, u32)> = query
        .iter()
        .map(|(entity, body)| (entity, body.id))
        .collect();
    drones.sort_by_key(|&(_, id)| id);
    drones
}

fn currently_overlapping(world: &World, a: Entity, b: Entity) -> bool {
    let (pa, ha) = match footprint(world, a) {
        Some(f) => f,
        None => return false,
    };
    let (pb, hb) = match footprint(world, b) {
        Some(f) => f,
        None => return false,
    };
    boxes_overlap(&pa, ha, &pb, hb)
}

fn footprint(world: &World, entity: Entity) -> Option<(Position, f64)> {
    let pos = world.get::<&Position>(entity).ok().map(|p| *p)?;
    let half = world.get::<&DroneBody>(entity).ok().map(|b| b.half_extent)?;
    Some((pos, half))
}

fn bounce(world: &mut World, entity: Entity) {
    if let Ok(mut body) = world.get::<&mut DroneBody>(entity) {
        body.heading = body.heading.opposite();
    }
}

/// Push a drone along its (just reflected) heading by the fixed
/// separation pseudo-delta, with normal boundary handling.
fn nudge_apart(world: &mut World, entity: Entity, field: FieldSize) {
    // The nudge moves only mobile drones, same as a regular tick; a pinned
    // cluster member stays put and its partner does the separating.
    if let Ok((pos, body)) = world.query_one_mut::<(&mut Position, &mut DroneBody)>(entity) {
        movement::advance_drone(pos, body, field, SEPARATION_NUDGE_MS);
    }
}
