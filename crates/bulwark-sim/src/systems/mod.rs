//! Systems that operate on the simulation context each tick.
//!
//! Systems are plain functions over `&mut SimContext` (or `&SimContext` for
//! read-only). They do not own state. All state lives in components and
//! in the context.

pub mod cleanup;
pub mod damage;
pub mod fire_control;
pub mod movement;
pub mod projectile;
pub mod snapshot;
pub mod wave_spawner;
