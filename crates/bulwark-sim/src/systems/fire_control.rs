//! Fire control system: target acquisition and the timed fire sub-sequence.
//!
//! Two entry points:
//! - [`on_unit_moved`] runs for each (defender, moved unit) pair delivered
//!   by the dispatcher: acquire, face, and start a fire sub-sequence.
//! - [`run`] advances every running sub-sequence by one tick: when the
//!   cadence wait elapses it applies damage, finishes the cycle, and drops
//!   the target if it is dead or gone.

use hecs::{Entity, World};
use log::{debug, error};

use bulwark_core::components::{Defender, Orientation};
use bulwark_core::events::CombatEvent;
use bulwark_core::types::Position;

use crate::attack::{AttackCycle, CombatError};
use crate::context::SimContext;
use crate::systems::{damage, projectile};

/// Evaluate one defender against one unit that just moved.
pub fn on_unit_moved(ctx: &mut SimContext, defender: Entity, unit: Entity) {
    let Some(unit_pos) = damage::live_position(ctx.units.world(), unit) else {
        return;
    };
    let Some((def_pos, stats, mut cycle)) = read_defender(ctx.units.world(), defender) else {
        return;
    };

    // Both triggers require the *moving* unit to be in range.
    if !def_pos.is_within_range(&unit_pos, stats.attack_radius) {
        return;
    }

    let defender_id = defender.to_bits().get();

    // A target that died or vanished since the last cycle is gone.
    if let Some(target) = cycle.engaged_target {
        if !cycle.is_firing() && !damage::is_alive(ctx.units.world(), target) {
            cycle.clear_target();
            debug!("defender {defender:?} dropped stale target {target:?}");
            ctx.emit(CombatEvent::TargetCleared {
                defender: defender_id,
                unit: target.to_bits().get(),
            });
        }
    }

    if cycle.engaged_target.is_none() {
        cycle.engaged_target = Some(unit);
        debug!("defender {defender:?} acquired {unit:?}");
        ctx.emit(CombatEvent::TargetAcquired {
            defender: defender_id,
            unit: unit.to_bits().get(),
        });
    }

    let Some(target) = cycle.engaged_target else {
        return;
    };
    let target_pos = damage::live_position(ctx.units.world(), target);

    if let Some(target_pos) = target_pos {
        if let Ok(mut orientation) = ctx.units.world().get::<&mut Orientation>(defender) {
            orientation.degrees = def_pos.bearing_to(&target_pos);
        }
    }

    if !cycle.is_firing() {
        if let Some(target_pos) = target_pos {
            cycle.begin_fire(stats.attack_cadence_secs);
            let shot = projectile::spawn(
                ctx,
                def_pos,
                target_pos,
                stats.projectile_flight_secs,
                defender,
                target,
            );
            ctx.score.shots_fired += 1;
            ctx.emit(CombatEvent::ShotFired {
                defender: defender_id,
                unit: target.to_bits().get(),
                projectile: shot.to_bits().get(),
                destination: target_pos,
            });
        }
    }

    write_cycle(ctx.units.world(), defender, cycle);
}

/// Advance every defender's running sub-sequence by `dt`, in subscription order.
pub fn run(ctx: &mut SimContext, dt: f64) {
    let defenders: Vec<Entity> = ctx.dispatcher.subscribers().to_vec();
    for defender in defenders {
        if let Err(e) = advance_cycle(ctx, defender, dt) {
            error!("{e}; resetting its attack cycle");
            write_cycle(ctx.units.world(), defender, AttackCycle::default());
        }
    }
}

fn advance_cycle(ctx: &mut SimContext, defender: Entity, dt: f64) -> Result<(), CombatError> {
    let Some((_, stats, mut cycle)) = read_defender(ctx.units.world(), defender) else {
        return Ok(());
    };

    if !cycle.advance(dt) {
        write_cycle(ctx.units.world(), defender, cycle);
        return Ok(());
    }

    let target = cycle
        .engaged_target
        .ok_or(CombatError::FiringWithoutTarget {
            defender: defender.to_bits().get(),
        })?;

    // Damage lands whether or not the projectile has arrived.
    damage::apply_to_unit(ctx, defender, target, stats.power);
    cycle.finish();

    if !damage::is_alive(ctx.units.world(), target) {
        cycle.clear_target();
        debug!("defender {defender:?} released {target:?}");
        ctx.emit(CombatEvent::TargetCleared {
            defender: defender.to_bits().get(),
            unit: target.to_bits().get(),
        });
    }

    write_cycle(ctx.units.world(), defender, cycle);
    Ok(())
}

fn read_defender(world: &World, defender: Entity) -> Option<(Position, Defender, AttackCycle)> {
    let pos = *world.get::<&Position>(defender).ok()?;
    let stats = *world.get::<&Defender>(defender).ok()?;
    let cycle = *world.get::<&AttackCycle>(defender).ok()?;
    Some((pos, stats, cycle))
}

fn write_cycle(world: &World, defender: Entity, cycle: AttackCycle) {
    if let Ok(mut slot) = world.get::<&mut AttackCycle>(defender) {
        *slot = cycle;
    }
}
