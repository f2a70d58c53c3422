//! Damage accrual — every live drone chips at the nexus hull each tick.

use hecs::World;

use nexus_core::components::LinkSet;
use nexus_core::constants::PER_MS_DAMAGE;

use crate::ledger::Ledger;

/// Apply this tick's cumulative damage to the ledger.
///
/// Each drone contributes `PER_MS_DAMAGE * 2^links * delta`: damage grows
/// exponentially with chain size, so large clusters must be cleared first.
/// Returns true on the tick the hull first reaches zero.
pub fn run(world: &World, ledger: &mut Ledger, delta_ms: f64) -> bool {
    let mut damage = 0.0;
    let mut query = world.query::<&LinkSet>();
    for (_entity, links) in query.iter() {
        damage += PER_MS_DAMAGE * 2f64.powi(links.len() as i32) * delta_ms;
    }
    ledger.apply_damage(damage)
}
