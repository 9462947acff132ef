//! ECS components for hecs entities.
//!
//! Components are plain data structs. Game logic lives in systems, not
//! components; the few helpers here only read their own fields.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Marks an entity as a hostile unit (a valid target).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hostile;

/// Facing of a positioned entity, in degrees (0 = sprite default, clockwise).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    pub degrees: f64,
}

/// Hit points of a hostile unit.
///
/// `current` stays within `[0, max]`; `is_dead` only ever goes false → true.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub current: f64,
    pub max: f64,
    pub is_dead: bool,
}

impl Health {
    pub fn full(max: f64) -> Self {
        Self {
            current: max,
            max,
            is_dead: false,
        }
    }
}

/// Stationary defender stats.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Defender {
    /// Engagement radius (inclusive).
    pub attack_radius: f64,
    /// Wait between projectile spawn and damage, and between cycles (seconds).
    pub attack_cadence_secs: f64,
    /// Damage per hit.
    pub power: f64,
    /// Flight time of each projectile (seconds). Independent of the cadence.
    pub projectile_flight_secs: f64,
}

/// A projectile in flight. Origin and destination are fixed at launch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub origin: Position,
    /// Target position captured at spawn. Never updated.
    pub destination: Position,
    pub flight_secs: f64,
    pub elapsed_secs: f64,
    /// Entity bits of the defender that fired.
    pub source: u64,
    /// Entity bits of the unit aimed at.
    pub target: u64,
}

impl Projectile {
    /// Position along the straight flight path at the current elapsed time.
    pub fn position_now(&self) -> Position {
        if self.flight_secs <= 0.0 {
            return self.destination;
        }
        self.origin
            .lerp(&self.destination, self.elapsed_secs / self.flight_secs)
    }
}
