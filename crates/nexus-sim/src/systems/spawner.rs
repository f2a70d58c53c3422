//! Drone spawner — stochastic placement with bounded retry.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use nexus_core::components::{Drone, DroneBody, LinkSet};
use nexus_core::constants::{BASE_HALF_EXTENT, INITIAL_SPAWN_CREDITS, MAX_SPAWN_TRIALS};
use nexus_core::enums::{DroneClass, Heading};
use nexus_core::events::GameEvent;
use nexus_core::types::{boxes_overlap, FieldSize, Position};

/// Accumulates elapsed time against the configured spawn interval.
///
/// At most one spawn fires per tick; surplus credit carries over so a
/// large delta catches up across the following ticks.
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    interval_ms: f64,
    credit_ms: f64,
}

impl SpawnTimer {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            credit_ms: 0.0,
        }
    }

    /// A session-start timer pre-credited with `INITIAL_SPAWN_CREDITS`
    /// intervals, so the field populates over the first few ticks.
    pub fn with_initial_burst(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            credit_ms: interval_ms * INITIAL_SPAWN_CREDITS as f64,
        }
    }
}

/// Advance the spawn timer; when it crosses the interval, attempt one
/// spawn and pay the interval back.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    timer: &mut SpawnTimer,
    field: FieldSize,
    next_id: &mut u32,
    delta_ms: f64,
    events: &mut Vec<GameEvent>,
) {
    timer.credit_ms += delta_ms;
    if timer.credit_ms < timer.interval_ms {
        return;
    }
    timer.credit_ms -= timer.interval_ms;

    match try_spawn(world, rng, field, next_id) {
        Some(id) => events.push(GameEvent::DroneSpawned { id }),
        None => events.push(GameEvent::SpawnExhausted),
    }
}

/// Attempt to place a new drone at a random non-colliding position.
///
/// Up to `MAX_SPAWN_TRIALS` candidates are tried; a candidate overlapping
/// any live drone is discarded. Exhaustion (or a field too small to hold
/// a drone at all) skips the cycle — never fatal.
pub fn try_spawn(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    field: FieldSize,
    next_id: &mut u32,
) -> Option<u32> {
    let half = BASE_HALF_EXTENT;
    if field.width <= 2.0 * half || field.height <= 2.0 * half {
        log::warn!(
            "field {}x{} too small to place a drone; skipping spawn",
            field.width,
            field.height
        );
        return None;
    }

    for _trial in 0..MAX_SPAWN_TRIALS {
        // Inset by the base half-extent so the drone starts fully on-field.
        let candidate = Position::new(
            rng.gen_range(half..field.width - half),
            rng.gen_range(half..field.height - half),
        );

        let blocked = {
            let mut query = world.query::<(&Position, &DroneBody)>();
            query
                .iter()
                .any(|(_, (pos, body))| boxes_overlap(&candidate, half, pos, body.half_extent))
        };
        if blocked {
            continue;
        }

        let heading = random_heading(rng);
        let class = random_class(rng);

        let id = *next_id;
        *next_id += 1;

        world.spawn((
            Drone,
            candidate,
            DroneBody {
                id,
                class,
                heading,
                half_extent: half,
                moving: true,
                lifespan_ms: 0.0,
            },
            LinkSet::default(),
        ));
        return Some(id);
    }

    log::warn!(
        "spawner exhausted {} placement attempts; skipping this cycle",
        MAX_SPAWN_TRIALS
    );
    None
}

fn random_heading(rng: &mut ChaCha8Rng) -> Heading {
    match rng.gen_range(0..4) {
        0 => Heading::Up,
        1 => Heading::Down,
        2 => Heading::Left,
        _ => Heading::Right,
    }
}

fn random_class(rng: &mut ChaCha8Rng) -> DroneClass {
    match rng.gen_range(0..2) {
        0 => DroneClass::Normal,
        _ => DroneClass::Fast,
    }
}
