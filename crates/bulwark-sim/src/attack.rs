//! Attack cycle data model: the per-defender fire state machine.
//!
//! Stored as a component on each defender entity. A fire sub-sequence
//! (launch, wait one cadence, damage, finish, re-check the target) is a
//! single `FireStep` with a countdown, driven by the fire-control system.

use hecs::Entity;
use thiserror::Error;

use bulwark_core::constants::TIMER_EPSILON;
use bulwark_core::enums::CyclePhase;

/// Pending step of the fire sub-sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum FireStep {
    /// No sub-sequence running.
    #[default]
    Ready,
    /// Projectile launched; damage lands when the countdown reaches zero.
    Cooldown { remaining_secs: f64 },
}

/// Attack cycle of one defender.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AttackCycle {
    /// Handle into the unit layer. Not ownership: re-resolved on every use.
    pub engaged_target: Option<Entity>,
    pub step: FireStep,
}

/// Broken attack-cycle invariants. Fatal to that defender's cycle only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CombatError {
    #[error("defender {defender:#x} reached its damage step with no engaged target")]
    FiringWithoutTarget { defender: u64 },
}

impl AttackCycle {
    pub fn is_firing(&self) -> bool {
        matches!(self.step, FireStep::Cooldown { .. })
    }

    pub fn phase(&self) -> CyclePhase {
        match (self.engaged_target, self.is_firing()) {
            (_, true) => CyclePhase::Firing,
            (Some(_), false) => CyclePhase::Engaged,
            (None, false) => CyclePhase::Idle,
        }
    }

    /// Start the cadence countdown. Callers must hold a target.
    pub fn begin_fire(&mut self, cadence_secs: f64) {
        self.step = FireStep::Cooldown {
            remaining_secs: cadence_secs,
        };
    }

    /// Advance the countdown by `dt`. Returns `true` once the wait has
    /// elapsed; the step stays `Cooldown` until [`AttackCycle::finish`].
    pub fn advance(&mut self, dt: f64) -> bool {
        match &mut self.step {
            FireStep::Ready => false,
            FireStep::Cooldown { remaining_secs } => {
                *remaining_secs -= dt;
                *remaining_secs <= TIMER_EPSILON
            }
        }
    }

    /// End the sub-sequence (the defender may fire again).
    pub fn finish(&mut self) {
        self.step = FireStep::Ready;
    }

    /// Forget the target, returning it.
    pub fn clear_target(&mut self) -> Option<Entity> {
        self.engaged_target.take()
    }
}
