//! Simulation configuration.
//!
//! Every field has a default matching the reference tower and unit, and
//! every struct is `#[serde(default)]`, so a JSON file only needs to name
//! the values it overrides.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::components::Defender;
use crate::constants::*;
use crate::error::ConfigError;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
    pub field: FieldConfig,
    pub defender: DefenderProfile,
    pub hostile: HostileProfile,
}

/// Playing field bounds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub width: f64,
    pub height: f64,
    /// Hostiles further than this outside the field are leaked.
    pub margin: f64,
}

/// Stats applied to every placed defender.
///
/// When a config omits `power` or `projectile_flight_secs`, they are
/// derived from the (possibly overridden) cadence, as in [`Self::with_cadence`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(from = "DefenderProfileSpec")]
pub struct DefenderProfile {
    pub attack_radius: f64,
    pub attack_cadence_secs: f64,
    pub power: f64,
    pub projectile_flight_secs: f64,
}

/// On-disk shape of [`DefenderProfile`]: cadence-derived fields are optional.
#[derive(Deserialize)]
#[serde(default)]
struct DefenderProfileSpec {
    attack_radius: f64,
    attack_cadence_secs: f64,
    power: Option<f64>,
    projectile_flight_secs: Option<f64>,
}

impl Default for DefenderProfileSpec {
    fn default() -> Self {
        Self {
            attack_radius: DEFENDER_ATTACK_RADIUS,
            attack_cadence_secs: DEFENDER_ATTACK_CADENCE_SECS,
            power: None,
            projectile_flight_secs: None,
        }
    }
}

impl From<DefenderProfileSpec> for DefenderProfile {
    fn from(spec: DefenderProfileSpec) -> Self {
        let derived = Self::with_cadence(spec.attack_cadence_secs);
        Self {
            attack_radius: spec.attack_radius,
            attack_cadence_secs: spec.attack_cadence_secs,
            power: spec.power.unwrap_or(derived.power),
            projectile_flight_secs: spec
                .projectile_flight_secs
                .unwrap_or(derived.projectile_flight_secs),
        }
    }
}

/// Stats applied to every spawned hostile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct HostileProfile {
    pub max_hit_points: f64,
    pub speed: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            field: FieldConfig::default(),
            defender: DefenderProfile::default(),
            hostile: HostileProfile::default(),
        }
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            margin: FIELD_MARGIN,
        }
    }
}

impl Default for DefenderProfile {
    fn default() -> Self {
        Self::with_cadence(DEFENDER_ATTACK_CADENCE_SECS)
    }
}

impl Default for HostileProfile {
    fn default() -> Self {
        Self {
            max_hit_points: HOSTILE_MAX_HIT_POINTS,
            speed: HOSTILE_SPEED,
        }
    }
}

impl DefenderProfile {
    /// Profile for a given cadence: power scales with the cadence and the
    /// projectile flies for exactly one cadence.
    pub fn with_cadence(cadence_secs: f64) -> Self {
        Self {
            attack_radius: DEFENDER_ATTACK_RADIUS,
            attack_cadence_secs: cadence_secs,
            power: cadence_secs * DEFENDER_POWER_PER_CADENCE_SEC,
            projectile_flight_secs: cadence_secs,
        }
    }

    /// The component stamped onto a spawned defender.
    pub fn to_component(&self) -> Defender {
        Defender {
            attack_radius: self.attack_radius,
            attack_cadence_secs: self.attack_cadence_secs,
            power: self.power,
            projectile_flight_secs: self.projectile_flight_secs,
        }
    }
}

impl FieldConfig {
    /// Centre of the field (where the reference mission places its tower).
    pub fn center(&self) -> crate::types::Position {
        crate::types::Position::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether `pos` is inside the field extended by the margin.
    pub fn contains(&self, pos: &crate::types::Position) -> bool {
        pos.x >= -self.margin
            && pos.y >= -self.margin
            && pos.x <= self.width + self.margin
            && pos.y <= self.height + self.margin
    }
}

impl SimConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
            ConfigError::Invalid {
                field,
                reason: reason.into(),
            }
        }

        if !(self.time_scale >= 0.0 && self.time_scale <= MAX_TIME_SCALE) {
            return Err(invalid("time_scale", "must be within [0, 4]"));
        }
        if !(self.field.width > 0.0 && self.field.height > 0.0) {
            return Err(invalid("field", "width and height must be > 0"));
        }
        if !(self.field.margin >= 0.0) {
            return Err(invalid("field.margin", "must be >= 0"));
        }
        if !(self.defender.attack_radius >= 0.0) {
            return Err(invalid("defender.attack_radius", "must be >= 0"));
        }
        if !(self.defender.attack_cadence_secs > 0.0) {
            return Err(invalid("defender.attack_cadence_secs", "must be > 0"));
        }
        if !(self.defender.power >= 0.0) {
            return Err(invalid("defender.power", "must be >= 0"));
        }
        if !(self.defender.projectile_flight_secs >= 0.0) {
            return Err(invalid("defender.projectile_flight_secs", "must be >= 0"));
        }
        if !(self.hostile.max_hit_points > 0.0) {
            return Err(invalid("hostile.max_hit_points", "must be > 0"));
        }
        if !(self.hostile.speed >= 0.0) {
            return Err(invalid("hostile.speed", "must be >= 0"));
        }
        Ok(())
    }
}
