//! Unit health model: damage application and the death transition.

use hecs::{Entity, World};
use log::{info, trace};

use bulwark_core::components::Health;
use bulwark_core::enums::DamageOutcome;
use bulwark_core::events::CombatEvent;
use bulwark_core::types::Position;

use crate::context::SimContext;

/// Subtract `power` from `health`, flooring at zero, and flip `is_dead`
/// the first time it reaches zero. A dead unit is left untouched.
pub fn apply_damage(health: &mut Health, power: f64) -> DamageOutcome {
    if health.is_dead {
        return DamageOutcome::Ignored;
    }

    let new_hp = health.current - power;
    health.current = if new_hp <= 0.0 { 0.0 } else { new_hp };

    if health.current <= 0.0 {
        health.is_dead = true;
        DamageOutcome::Killed
    } else {
        DamageOutcome::Damaged
    }
}

/// Damage a unit by handle. A unit that no longer resolves, or is already
/// dead, is ignored. A killing blow removes the unit from the unit layer
/// in the same call.
pub fn apply_to_unit(
    ctx: &mut SimContext,
    source: Entity,
    unit: Entity,
    power: f64,
) -> DamageOutcome {
    let (outcome, remaining, position) = {
        let world = ctx.units.world();
        let Ok(mut health) = world.get::<&mut Health>(unit) else {
            trace!("damage from {source:?} on vanished unit {unit:?} ignored");
            return DamageOutcome::Ignored;
        };
        let outcome = apply_damage(&mut health, power);
        let position = world
            .get::<&Position>(unit)
            .map(|p| *p)
            .unwrap_or_default();
        (outcome, health.current, position)
    };

    match outcome {
        DamageOutcome::Ignored => {
            trace!("damage from {source:?} on dead unit {unit:?} ignored");
        }
        DamageOutcome::Damaged => {
            trace!("{source:?} hit {unit:?} for {power}, {remaining} left");
            ctx.emit(CombatEvent::DamageApplied {
                defender: source.to_bits().get(),
                unit: unit.to_bits().get(),
                power,
                remaining,
            });
        }
        DamageOutcome::Killed => {
            ctx.emit(CombatEvent::DamageApplied {
                defender: source.to_bits().get(),
                unit: unit.to_bits().get(),
                power,
                remaining,
            });
            if ctx.units.remove(unit) {
                ctx.score.hostiles_killed += 1;
                info!(
                    "unit {unit:?} killed by {source:?} at ({:.1}, {:.1})",
                    position.x, position.y
                );
                ctx.emit(CombatEvent::UnitKilled {
                    unit: unit.to_bits().get(),
                    position,
                });
            }
        }
    }

    outcome
}

/// Whether `unit` resolves to a live hostile.
pub fn is_alive(world: &World, unit: Entity) -> bool {
    world
        .get::<&Health>(unit)
        .map(|h| !h.is_dead)
        .unwrap_or(false)
}

/// Position of `unit` if it resolves to a live hostile.
pub fn live_position(world: &World, unit: Entity) -> Option<Position> {
    if !is_alive(world, unit) {
        return None;
    }
    world.get::<&Position>(unit).ok().map(|p| *p)
}
