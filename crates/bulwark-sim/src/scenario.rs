//! Scenario definitions: hardcoded mission wave schedules.

use bulwark_core::constants::{TICK_RATE, WAVE_COLUMN_SPACING};
use bulwark_core::types::Position;

use crate::systems::wave_spawner::{WaveEntry, WaveSchedule};

/// The default mission.
/// Wave 1 (t=0): three hostiles in a row at y=100, heading north past the
/// centre defender. Wave 2 (t=10s): four jittered hostiles a little to the
/// right of the first column.
pub fn default_mission() -> WaveSchedule {
    WaveSchedule {
        waves: vec![
            WaveEntry::column(0, 3, Position::new(200.0, 100.0), WAVE_COLUMN_SPACING),
            WaveEntry::column(
                secs_to_ticks(10.0),
                4,
                Position::new(240.0, 20.0),
                WAVE_COLUMN_SPACING,
            )
            .with_jitter(10.0),
        ],
    }
}

/// Convert seconds to ticks.
pub fn secs_to_ticks(secs: f64) -> u64 {
    (secs * TICK_RATE as f64) as u64
}
