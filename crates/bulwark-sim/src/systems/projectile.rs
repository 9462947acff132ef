//! Projectile system: launches shots and flies them to their captured point.
//!
//! A projectile is purely visual: it reads the target's position once at
//! launch, travels in a straight line for its flight time, then removes
//! itself. It never re-targets and never deals damage.

use hecs::Entity;
use log::trace;

use bulwark_core::components::{Orientation, Projectile};
use bulwark_core::constants::TIMER_EPSILON;
use bulwark_core::events::CombatEvent;
use bulwark_core::types::Position;

use crate::context::SimContext;

/// Launch a projectile from `origin` toward the target's current position.
pub fn spawn(
    ctx: &mut SimContext,
    origin: Position,
    destination: Position,
    flight_secs: f64,
    source: Entity,
    target: Entity,
) -> Entity {
    let projectile = Projectile {
        origin,
        destination,
        flight_secs,
        elapsed_secs: 0.0,
        source: source.to_bits().get(),
        target: target.to_bits().get(),
    };
    let orientation = Orientation {
        degrees: origin.bearing_to(&destination),
    };
    let entity = ctx.projectiles.add((projectile, origin, orientation));
    trace!("projectile {entity:?} launched from {origin:?} toward {destination:?}");
    entity
}

/// Advance every projectile by `dt` and remove the ones that arrived.
pub fn run(ctx: &mut SimContext, dt: f64) {
    let mut landed: Vec<(Entity, Position)> = Vec::new();

    for (entity, (projectile, pos)) in ctx
        .projectiles
        .world_mut()
        .query_mut::<(&mut Projectile, &mut Position)>()
    {
        projectile.elapsed_secs += dt;
        *pos = projectile.position_now();
        if projectile.elapsed_secs + TIMER_EPSILON >= projectile.flight_secs {
            landed.push((entity, *pos));
        }
    }

    for (entity, position) in landed {
        if ctx.projectiles.remove(entity) {
            ctx.emit(CombatEvent::ProjectileLanded {
                projectile: entity.to_bits().get(),
                position,
            });
        }
    }
}
