//! Wave spawning system: spawns hostile columns at scheduled ticks.

use log::debug;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use bulwark_core::config::HostileProfile;
use bulwark_core::events::CombatEvent;
use bulwark_core::types::{Position, Velocity};

use crate::context::SimContext;
use crate::world_setup;

/// A single wave definition: a row of `count` hostiles starting at
/// `origin`, `spacing` apart along x, all heading `heading_deg`.
#[derive(Debug, Clone)]
pub struct WaveEntry {
    /// Tick at which this wave spawns.
    pub spawn_at_tick: u64,
    pub count: u32,
    pub origin: Position,
    pub spacing: f64,
    /// Heading in degrees (0 = up, clockwise).
    pub heading_deg: f64,
    /// Max random offset applied to each spawn position on both axes.
    pub jitter: f64,
    /// Whether this wave has already been spawned.
    pub spawned: bool,
}

/// The complete wave schedule for a mission.
#[derive(Debug, Clone, Default)]
pub struct WaveSchedule {
    pub waves: Vec<WaveEntry>,
}

impl WaveEntry {
    pub fn column(spawn_at_tick: u64, count: u32, origin: Position, spacing: f64) -> Self {
        Self {
            spawn_at_tick,
            count,
            origin,
            spacing,
            heading_deg: 0.0,
            jitter: 0.0,
            spawned: false,
        }
    }

    pub fn with_jitter(mut self, jitter: f64) -> Self {
        self.jitter = jitter;
        self
    }
}

impl WaveSchedule {
    /// Total number of hostiles across all waves.
    pub fn total_hostiles(&self) -> u32 {
        self.waves.iter().map(|w| w.count).sum()
    }

    /// Whether every wave has been spawned.
    pub fn is_exhausted(&self) -> bool {
        self.waves.iter().all(|w| w.spawned)
    }
}

/// Check schedule and spawn any due waves.
pub fn run(
    ctx: &mut SimContext,
    rng: &mut ChaCha8Rng,
    schedule: &mut WaveSchedule,
    profile: &HostileProfile,
    current_tick: u64,
) {
    for (index, wave) in schedule.waves.iter_mut().enumerate() {
        if wave.spawned || current_tick < wave.spawn_at_tick {
            continue;
        }
        for i in 0..wave.count {
            let mut position = Position::new(
                wave.origin.x + f64::from(i) * wave.spacing,
                wave.origin.y,
            );
            if wave.jitter > 0.0 {
                position.x += rng.gen_range(-wave.jitter..=wave.jitter);
                position.y += rng.gen_range(-wave.jitter..=wave.jitter);
            }
            let velocity = Velocity::from_heading(wave.heading_deg, profile.speed);
            world_setup::spawn_hostile(ctx, position, velocity, profile);
        }
        wave.spawned = true;
        debug!("wave {index} spawned {} hostiles", wave.count);
        ctx.emit(CombatEvent::WaveSpawned {
            index,
            count: wave.count,
        });
    }
}
