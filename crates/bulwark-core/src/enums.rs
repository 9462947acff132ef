//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Derived state of a defender's attack cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CyclePhase {
    /// No engaged target, not firing.
    #[default]
    Idle,
    /// Target locked, waiting for the next qualifying movement broadcast.
    Engaged,
    /// A fire sub-sequence is in progress.
    Firing,
}

/// Result of applying damage to a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageOutcome {
    /// Hit points reduced, unit still alive.
    Damaged,
    /// This hit brought the unit to zero.
    Killed,
    /// Unit was already dead or gone; nothing changed.
    Ignored,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Active,
    Paused,
    MissionComplete,
}
