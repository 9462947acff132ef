//! Entity spawn factories for setting up the simulation world.
//!
//! Creates defenders and hostile units with their component bundles and
//! wires defenders into the "unit moved" dispatcher.

use hecs::Entity;
use log::debug;

use bulwark_core::components::{Health, Hostile, Orientation};
use bulwark_core::config::{DefenderProfile, FieldConfig, HostileProfile};
use bulwark_core::types::{Position, Velocity};

use crate::attack::AttackCycle;
use crate::context::SimContext;

/// Set up the initial mission world: one defender at the field centre.
/// Hostiles are spawned by the wave scheduler system.
pub fn setup_mission(ctx: &mut SimContext, field: &FieldConfig, profile: &DefenderProfile) -> Entity {
    spawn_defender(ctx, field.center(), profile)
}

/// Place a defender and subscribe it to unit movement.
pub fn spawn_defender(ctx: &mut SimContext, position: Position, profile: &DefenderProfile) -> Entity {
    let defender = ctx.units.add((
        profile.to_component(),
        position,
        Orientation::default(),
        AttackCycle::default(),
    ));
    ctx.dispatcher.subscribe(defender);
    debug!(
        "defender {defender:?} placed at ({:.1}, {:.1}), radius {}",
        position.x, position.y, profile.attack_radius
    );
    defender
}

/// Remove a defender and its subscription.
pub fn remove_defender(ctx: &mut SimContext, defender: Entity) -> bool {
    ctx.dispatcher.unsubscribe(defender);
    ctx.units.remove(defender)
}

/// Spawn a hostile unit at full health, driven by `velocity`.
pub fn spawn_hostile(
    ctx: &mut SimContext,
    position: Position,
    velocity: Velocity,
    profile: &HostileProfile,
) -> Entity {
    let heading = if velocity.speed() > 0.0 {
        velocity.x.atan2(velocity.y).to_degrees()
    } else {
        0.0
    };
    let unit = ctx.units.add((
        Hostile,
        position,
        Orientation { degrees: heading },
        Health::full(profile.max_hit_points),
        velocity,
    ));
    ctx.score.hostiles_spawned += 1;
    unit
}
