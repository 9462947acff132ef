//! Simulation snapshot: the complete visible state handed to a frontend each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::CombatEvent;
use crate::types::{Position, SimTime};

/// Complete simulation state after one tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub defenders: Vec<DefenderView>,
    pub hostiles: Vec<HostileView>,
    pub projectiles: Vec<ProjectileView>,
    /// Combat events since the previous snapshot, oldest first.
    pub events: Vec<CombatEvent>,
    pub score: ScoreView,
}

/// A defender as drawn: position, facing, range ring and cycle state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefenderView {
    pub id: u64,
    pub position: Position,
    /// Facing in degrees (0 = sprite default, clockwise).
    pub rotation: f64,
    pub attack_radius: f64,
    pub phase: CyclePhase,
    pub engaged_target: Option<u64>,
}

/// A live hostile unit with its health bar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostileView {
    pub id: u64,
    pub position: Position,
    pub rotation: f64,
    pub hit_points: f64,
    pub max_hit_points: f64,
}

/// A projectile in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u64,
    pub position: Position,
    pub rotation: f64,
    pub destination: Position,
}

/// Running score for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub hostiles_spawned: u32,
    pub hostiles_killed: u32,
    pub hostiles_leaked: u32,
    pub shots_fired: u32,
    pub mission_time_secs: f64,
}
