//! Snapshot system: queries the layers and builds a complete SimSnapshot.
//!
//! This system is read-only; it never modifies the world.

use bulwark_core::components::*;
use bulwark_core::enums::GamePhase;
use bulwark_core::events::CombatEvent;
use bulwark_core::state::*;
use bulwark_core::types::{Position, SimTime};

use crate::attack::AttackCycle;
use crate::context::SimContext;

/// Build a complete SimSnapshot from the current context.
pub fn build_snapshot(
    ctx: &SimContext,
    time: &SimTime,
    phase: GamePhase,
    events: Vec<CombatEvent>,
) -> SimSnapshot {
    SimSnapshot {
        time: *time,
        phase,
        defenders: build_defenders(ctx),
        hostiles: build_hostiles(ctx),
        projectiles: build_projectiles(ctx),
        events,
        score: ScoreView {
            hostiles_spawned: ctx.score.hostiles_spawned,
            hostiles_killed: ctx.score.hostiles_killed,
            hostiles_leaked: ctx.score.hostiles_leaked,
            shots_fired: ctx.score.shots_fired,
            mission_time_secs: time.elapsed_secs,
        },
    }
}

/// Defenders in subscription order.
fn build_defenders(ctx: &SimContext) -> Vec<DefenderView> {
    let world = ctx.units.world();
    ctx.dispatcher
        .subscribers()
        .iter()
        .filter_map(|&entity| {
            let pos = *world.get::<&Position>(entity).ok()?;
            let stats = *world.get::<&Defender>(entity).ok()?;
            let cycle = *world.get::<&AttackCycle>(entity).ok()?;
            let rotation = world
                .get::<&Orientation>(entity)
                .map(|o| o.degrees)
                .unwrap_or_default();
            Some(DefenderView {
                id: entity.to_bits().get(),
                position: pos,
                rotation,
                attack_radius: stats.attack_radius,
                phase: cycle.phase(),
                engaged_target: cycle.engaged_target.map(|t| t.to_bits().get()),
            })
        })
        .collect()
}

fn build_hostiles(ctx: &SimContext) -> Vec<HostileView> {
    let mut query = ctx
        .units
        .world()
        .query::<(&Hostile, &Position, &Orientation, &Health)>();
    query
        .iter()
        .filter(|(_, (_, _, _, health))| !health.is_dead)
        .map(|(entity, (_, pos, orientation, health))| HostileView {
            id: entity.to_bits().get(),
            position: *pos,
            rotation: orientation.degrees,
            hit_points: health.current,
            max_hit_points: health.max,
        })
        .collect()
}

fn build_projectiles(ctx: &SimContext) -> Vec<ProjectileView> {
    let mut query = ctx
        .projectiles
        .world()
        .query::<(&Projectile, &Position, &Orientation)>();
    query
        .iter()
        .map(|(entity, (projectile, pos, orientation))| ProjectileView {
            id: entity.to_bits().get(),
            position: *pos,
            rotation: orientation.degrees,
            destination: projectile.destination,
        })
        .collect()
}
