//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position on the playing field (field units, y grows upward).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity (field units per second).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn range_to(&self, other: &Position) -> f64 {
        self.as_dvec2().distance(other.as_dvec2())
    }

    /// Whether `other` lies within `radius` of this position (inclusive).
    pub fn is_within_range(&self, other: &Position, radius: f64) -> bool {
        self.range_to(other) <= radius
    }

    /// Facing angle in degrees (0 = sprite default, clockwise on screen)
    /// that turns an entity at `self` toward `target`.
    ///
    /// A zero axis delta is replaced by 1 instead of dividing by zero, so
    /// targets straight above or below come out a fraction of a degree off
    /// the vertical. That offset is expected.
    pub fn bearing_to(&self, target: &Position) -> f64 {
        let mut dx = self.x - target.x;
        let mut dy = self.y - target.y;
        if dx == 0.0 {
            dx = 1.0;
        }
        if dy == 0.0 {
            dy = 1.0;
        }
        let mut degrees = 90.0 - (dy / dx).atan().to_degrees();
        if target.x <= self.x {
            degrees += 180.0;
        }
        degrees
    }

    /// Linear interpolation toward `other`; `t` is clamped to `[0, 1]`.
    pub fn lerp(&self, other: &Position, t: f64) -> Position {
        self.as_dvec2()
            .lerp(other.as_dvec2(), t.clamp(0.0, 1.0))
            .into()
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Velocity of `speed` along a heading in degrees (0 = up, clockwise).
    pub fn from_heading(heading_deg: f64, speed: f64) -> Self {
        let rad = heading_deg.to_radians();
        Self {
            x: rad.sin() * speed,
            y: rad.cos() * speed,
        }
    }

    /// Speed magnitude.
    pub fn speed(&self) -> f64 {
        DVec2::new(self.x, self.y).length()
    }
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
