//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Countdown timers at or below this value count as elapsed.
pub const TIMER_EPSILON: f64 = 1e-9;

/// Upper bound of the time scale; the lower bound is 0 (frozen).
pub const MAX_TIME_SCALE: f64 = 4.0;

// --- Field ---

/// Default playing field width.
pub const FIELD_WIDTH: f64 = 600.0;

/// Default playing field height.
pub const FIELD_HEIGHT: f64 = 600.0;

/// Distance beyond the field edge a hostile may travel before it counts as leaked.
pub const FIELD_MARGIN: f64 = 50.0;

// --- Defenders ---

/// Default attack radius.
pub const DEFENDER_ATTACK_RADIUS: f64 = 115.0;

/// Default time between shots (seconds).
pub const DEFENDER_ATTACK_CADENCE_SECS: f64 = 0.2;

/// Damage per hit per second of cadence. Power = cadence × this.
pub const DEFENDER_POWER_PER_CADENCE_SEC: f64 = 70.0;

// --- Hostiles ---

/// Default hit points of a hostile unit.
pub const HOSTILE_MAX_HIT_POINTS: f64 = 100.0;

/// Default hostile movement speed (field units per second).
pub const HOSTILE_SPEED: f64 = 50.0;

/// Horizontal gap between hostiles spawned in one wave column.
pub const WAVE_COLUMN_SPACING: f64 = 30.0;

// --- Events ---

/// Upper bound on combat events retained between snapshots.
pub const MAX_PENDING_EVENTS: usize = 4096;
