//! Movement driver.
//!
//! Integrates Position from Velocity for every driven hostile, one unit at a
//! time, broadcasting each move before the next unit is advanced. A unit
//! with a driver broadcasts every tick, even at zero speed; a unit without
//! one (no `Velocity`) never does.

use hecs::Entity;

use bulwark_core::components::Hostile;
use bulwark_core::types::{Position, Velocity};

use crate::context::SimContext;
use crate::dispatch::{self, UnitMoved};
use crate::systems::damage;

/// Run one movement step of `dt` seconds.
pub fn run(ctx: &mut SimContext, dt: f64) {
    let movers: Vec<Entity> = ctx
        .units
        .world()
        .query::<(&Hostile, &Velocity)>()
        .iter()
        .map(|(entity, _)| entity)
        .collect();

    for unit in movers {
        if step_unit(ctx, unit, dt) {
            dispatch::broadcast(ctx, UnitMoved { unit });
        }
    }
}

/// Move one unit by its velocity. Returns `false` if it is dead or gone.
fn step_unit(ctx: &SimContext, unit: Entity, dt: f64) -> bool {
    let world = ctx.units.world();
    if !damage::is_alive(world, unit) {
        return false;
    }
    let (Ok(mut pos), Ok(vel)) = (
        world.get::<&mut Position>(unit),
        world.get::<&Velocity>(unit),
    ) else {
        return false;
    };
    pos.x += vel.x * dt;
    pos.y += vel.y * dt;
    true
}

/// Set a unit's position from outside the tick and broadcast the move.
/// Returns `false` if the unit is not a live hostile.
pub fn relocate(ctx: &mut SimContext, unit: Entity, position: Position) -> bool {
    {
        let world = ctx.units.world();
        if world.get::<&Hostile>(unit).is_err() || !damage::is_alive(world, unit) {
            return false;
        }
        match world.get::<&mut Position>(unit) {
            Ok(mut pos) => *pos = position,
            Err(_) => return false,
        }
    }
    dispatch::broadcast(ctx, UnitMoved { unit });
    true
}
