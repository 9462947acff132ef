//! Player commands sent from a frontend to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Placement ---
    /// Place a defender with the configured profile.
    PlaceDefender { position: Position },
    /// Spawn a single hostile heading along `heading_deg` (0 = up, clockwise).
    SpawnHostile { position: Position, heading_deg: f64 },

    // --- Simulation control ---
    /// Set time scale, clamped to [0, 4] (1.0 = normal, 2.0 = double, 0.0 = frozen).
    SetTimeScale { scale: f64 },
    /// Start a new mission with the default wave schedule.
    StartMission,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
