//! Events emitted by the simulation for UI feedback and logging.
//!
//! Entity references are carried as raw entity bits so this crate stays
//! independent of the ECS.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Combat feedback drained into every snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CombatEvent {
    /// A defender locked onto a unit.
    TargetAcquired { defender: u64, unit: u64 },
    /// A defender let go of its target (dead or gone).
    TargetCleared { defender: u64, unit: u64 },
    /// A fire sub-sequence started and launched a projectile.
    ShotFired {
        defender: u64,
        unit: u64,
        projectile: u64,
        destination: Position,
    },
    /// A projectile reached its captured destination and was removed.
    ProjectileLanded { projectile: u64, position: Position },
    /// Damage step of a fire cycle hit a live unit.
    DamageApplied {
        defender: u64,
        unit: u64,
        power: f64,
        remaining: f64,
    },
    /// A unit's hit points reached zero; it has been removed.
    UnitKilled { unit: u64, position: Position },
    /// A unit left the field alive.
    UnitLeaked { unit: u64, position: Position },
    /// A wave spawned.
    WaveSpawned { index: usize, count: u32 },
}
