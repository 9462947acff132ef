//! Cleanup system: removes hostiles that walked off the field.
//!
//! Dead units are not handled here; the damage path removes them the
//! moment they die.

use hecs::Entity;
use log::debug;

use bulwark_core::components::Hostile;
use bulwark_core::config::FieldConfig;
use bulwark_core::events::CombatEvent;
use bulwark_core::types::Position;

use crate::context::SimContext;

/// Remove hostiles outside the field (plus margin) and count them as leaked.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(ctx: &mut SimContext, field: &FieldConfig, despawn_buffer: &mut Vec<(Entity, Position)>) {
    despawn_buffer.clear();

    for (entity, (pos, _hostile)) in ctx.units.world_mut().query_mut::<(&Position, &Hostile)>() {
        if !field.contains(pos) {
            despawn_buffer.push((entity, *pos));
        }
    }

    for (unit, position) in despawn_buffer.drain(..) {
        if ctx.units.remove(unit) {
            ctx.score.hostiles_leaked += 1;
            debug!("unit {unit:?} leaked at ({:.1}, {:.1})", position.x, position.y);
            ctx.emit(CombatEvent::UnitLeaked {
                unit: unit.to_bits().get(),
                position,
            });
        }
    }
}
