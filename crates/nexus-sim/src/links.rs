//! Link graph operations over drone entities.
//!
//! Links are stored as symmetric id sets in each drone's `LinkSet`.
//! Every mutation here maintains the symmetry invariant and recomputes
//! the derived size/mobility state on both ends.

use hecs::{Entity, World};

use nexus_core::components::{DroneBody, LinkSet};
use nexus_core::constants::{BASE_HALF_EXTENT, HALF_EXTENT_SCALING, LINK_SIZE_CAP, MAX_LINKS};

/// Find the entity carrying the given drone id.
pub fn find_by_id(world: &World, id: u32) -> Option<Entity> {
    let mut query = world.query::<&DroneBody>();
    query
        .iter()
        .find(|(_, body)| body.id == id)
        .map(|(entity, _)| entity)
}

/// The drone id of an entity, if it is a drone.
pub fn drone_id(world: &World, entity: Entity) -> Option<u32> {
    world.get::<&DroneBody>(entity).ok().map(|body| body.id)
}

/// Current link count of an entity.
pub fn link_count(world: &World, entity: Entity) -> usize {
    world
        .get::<&LinkSet>(entity)
        .map(|links| links.len())
        .unwrap_or(0)
}

/// Whether `a` is linked to `b`.
pub fn is_linked(world: &World, a: Entity, b: Entity) -> bool {
    let b_id = match drone_id(world, b) {
        Some(id) => id,
        None => return false,
    };
    world
        .get::<&LinkSet>(a)
        .map(|links| links.contains(b_id))
        .unwrap_or(false)
}

/// Chain two drones together. Idempotent: linking an already-linked pair
/// changes nothing. Returns true if a new edge was formed.
pub fn link(world: &mut World, a: Entity, b: Entity) -> bool {
    if a == b {
        return false;
    }
    let (a_id, b_id) = match (drone_id(world, a), drone_id(world, b)) {
        (Some(a_id), Some(b_id)) => (a_id, b_id),
        _ => return false,
    };

    let already = world
        .get::<&LinkSet>(a)
        .map(|links| links.contains(b_id))
        .unwrap_or(true);

    let formed = if already {
        false
    } else {
        if let Ok(mut links) = world.get::<&mut LinkSet>(a) {
            links.partners.push(b_id);
        }
        if let Ok(mut links) = world.get::<&mut LinkSet>(b) {
            links.partners.push(a_id);
        }
        true
    };

    recompute_derived(world, a);
    recompute_derived(world, b);
    formed
}

/// Remove the mutual edge between two drones. No-op if not linked.
pub fn unlink(world: &mut World, a: Entity, b: Entity) {
    let (a_id, b_id) = match (drone_id(world, a), drone_id(world, b)) {
        (Some(a_id), Some(b_id)) => (a_id, b_id),
        _ => return,
    };

    if let Ok(mut links) = world.get::<&mut LinkSet>(a) {
        links.partners.retain(|&id| id != b_id);
    }
    if let Ok(mut links) = world.get::<&mut LinkSet>(b) {
        links.partners.retain(|&id| id != a_id);
    }

    recompute_derived(world, a);
    recompute_derived(world, b);
}

/// Detach a drone from every partner, in preparation for destruction.
///
/// The partner list is copied first: the set being severed must never be
/// the set being iterated. Returns the number of links removed.
pub fn sever_all(world: &mut World, entity: Entity) -> usize {
    let partner_ids: Vec<u32> = match world.get::<&LinkSet>(entity) {
        Ok(links) => links.partners.clone(),
        Err(_) => return 0,
    };

    for partner_id in &partner_ids {
        if let Some(partner) = find_by_id(world, *partner_id) {
            unlink(world, entity, partner);
        }
    }

    partner_ids.len()
}

/// Recompute the derived size and mobility state from the link count.
/// A pure function of min(link_count, cap): too many links immobilize
/// the drone; the footprint grows two pixels per link up to three links.
pub fn recompute_derived(world: &mut World, entity: Entity) {
    let count = link_count(world, entity);
    if let Ok(mut body) = world.get::<&mut DroneBody>(entity) {
        body.moving = count < MAX_LINKS;
        body.half_extent =
            BASE_HALF_EXTENT + HALF_EXTENT_SCALING * count.min(LINK_SIZE_CAP) as f64;
    }
}
