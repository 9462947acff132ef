//! Simulation engine for BULWARK.
//!
//! Owns the unit and projectile layers, runs systems at a fixed tick
//! rate, and produces SimSnapshots for any frontend.

pub mod attack;
pub mod context;
pub mod dispatch;
pub mod engine;
pub mod invariants;
pub mod scenario;
pub mod systems;
pub mod world_setup;

pub use bulwark_core as core;
pub use engine::SimulationEngine;
