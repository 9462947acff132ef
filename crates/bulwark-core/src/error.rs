//! Error types shared by the simulation and its drivers.

use std::io;

use thiserror::Error;

/// Failure loading or validating a [`crate::config::SimConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Errors returned by the engine's external driver API.
#[derive(Debug, Error)]
pub enum SimError {
    /// The handle does not resolve to a live entity in the unit layer.
    #[error("unknown unit {id:#x}")]
    UnknownUnit { id: u64 },
    /// The handle resolves, but not to a hostile unit.
    #[error("entity {id:#x} is not a hostile unit")]
    NotHostile { id: u64 },
    #[error(transparent)]
    Config(#[from] ConfigError),
}
