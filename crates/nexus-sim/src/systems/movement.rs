//! Drone movement integration and field boundary handling.

use hecs::World;

use nexus_core::components::DroneBody;
use nexus_core::enums::Heading;
use nexus_core::types::{FieldSize, Position};

/// Advance every drone by the tick delta.
pub fn run(world: &mut World, field: FieldSize, delta_ms: f64) {
    for (_entity, (pos, body)) in world.query_mut::<(&mut Position, &mut DroneBody)>() {
        advance_drone(pos, body, field, delta_ms);
    }
}

/// Advance one drone: age it, move it along its heading if it is mobile,
/// then keep it inside the field.
///
/// Also used by the collision system with a fixed pseudo-delta to push a
/// colliding pair apart after they bounce.
pub fn advance_drone(pos: &mut Position, body: &mut DroneBody, field: FieldSize, delta_ms: f64) {
    body.lifespan_ms += delta_ms;

    if body.moving {
        let distance = body.class.speed() * delta_ms;
        match body.heading {
            Heading::Up => pos.y -= distance,
            Heading::Down => pos.y += distance,
            Heading::Left => pos.x -= distance,
            Heading::Right => pos.x += distance,
        }
    }

    // Clamp into the field, flipping the heading only when it points at the
    // struck boundary — a drone already reflected by a collision this tick
    // must not flip back.
    let half = body.half_extent;

    if pos.x - half <= 0.0 {
        pos.x = half;
        if body.heading == Heading::Left {
            body.heading = Heading::Right;
        }
    }
    if pos.x + half >= field.width {
        pos.x = field.width - half;
        if body.heading == Heading::Right {
            body.heading = Heading::Left;
        }
    }
    if pos.y - half <= 0.0 {
        pos.y = half;
        if body.heading == Heading::Up {
            body.heading = Heading::Down;
        }
    }
    if pos.y + half >= field.height {
        pos.y = field.height - half;
        if body.heading == Heading::Down {
            body.heading = Heading::Up;
        }
    }
}
