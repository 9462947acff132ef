//! Tick-boundary consistency checks over the simulation context.
//!
//! Run by tests directly and, in debug builds, by the engine after every
//! tick. A violation is reported, never panicked on.

use thiserror::Error;

use bulwark_core::components::{Health, Hostile};

use crate::attack::AttackCycle;
use crate::context::SimContext;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvariantViolation {
    #[error("defender {defender:#x} is firing without an engaged target")]
    FiringWithoutTarget { defender: u64 },
    #[error("unit {unit:#x} has {current} hp of {max}")]
    HealthOutOfBounds { unit: u64, current: f64, max: f64 },
    #[error("dead unit {unit:#x} is still in the unit layer")]
    DeadUnitPresent { unit: u64 },
    #[error("idle defender {defender:#x} still holds dead unit {unit:#x}")]
    StaleTarget { defender: u64, unit: u64 },
}

/// Collect every violated invariant. An empty vector means the context is
/// consistent.
pub fn check(ctx: &SimContext) -> Vec<InvariantViolation> {
    let world = ctx.units.world();
    let mut violations = Vec::new();

    for (entity, cycle) in world.query::<&AttackCycle>().iter() {
        let defender = entity.to_bits().get();
        match cycle.engaged_target {
            None if cycle.is_firing() => {
                violations.push(InvariantViolation::FiringWithoutTarget { defender });
            }
            Some(target) if !cycle.is_firing() => {
                let dead = world
                    .get::<&Health>(target)
                    .map(|h| h.is_dead)
                    .unwrap_or(false);
                if dead {
                    violations.push(InvariantViolation::StaleTarget {
                        defender,
                        unit: target.to_bits().get(),
                    });
                }
            }
            _ => {}
        }
    }

    for (entity, (_, health)) in world.query::<(&Hostile, &Health)>().iter() {
        let unit = entity.to_bits().get();
        if health.is_dead {
            violations.push(InvariantViolation::DeadUnitPresent { unit });
        } else if health.current < 0.0 || health.current > health.max {
            violations.push(InvariantViolation::HealthOutOfBounds {
                unit,
                current: health.current,
                max: health.max,
            });
        }
    }

    violations
}
