//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the simulation context, processes player
//! commands, runs all systems, and produces `SimSnapshot`s. Completely
//! headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::Entity;
use log::{error, info, trace, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use bulwark_core::commands::PlayerCommand;
use bulwark_core::components::{Health, Hostile};
use bulwark_core::config::SimConfig;
use bulwark_core::constants::MAX_TIME_SCALE;
use bulwark_core::enums::GamePhase;
use bulwark_core::error::SimError;
use bulwark_core::state::SimSnapshot;
use bulwark_core::types::{Position, SimTime, Velocity};

use crate::attack::AttackCycle;
use crate::context::{ScoreState, SimContext};
use crate::dispatch::{self, UnitMoved};
use crate::invariants;
use crate::scenario;
use crate::systems;
use crate::systems::wave_spawner::WaveSchedule;
use crate::world_setup;

/// The simulation engine. Owns the context and all sim state.
pub struct SimulationEngine {
    ctx: SimContext,
    config: SimConfig,
    time: SimTime,
    phase: GamePhase,
    time_scale: f64,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<(Entity, Position)>,
    wave_schedule: WaveSchedule,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            ctx: SimContext::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            time_scale: config.time_scale,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            wave_schedule: WaveSchedule::default(),
            config,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> SimSnapshot {
        self.process_commands();

        // A time scale of 0 freezes the mission without pausing it.
        if self.phase == GamePhase::Active && self.time_scale > 0.0 {
            self.run_systems();
            self.time.advance();
            self.check_mission_complete();
        }

        if cfg!(debug_assertions) {
            for violation in invariants::check(&self.ctx) {
                error!("tick {}: {violation}", self.time.tick);
            }
        }

        self.snapshot()
    }

    /// Build a snapshot of the current state without advancing, draining
    /// pending events into it.
    pub fn snapshot(&mut self) -> SimSnapshot {
        let events = self.ctx.drain_events();
        systems::snapshot::build_snapshot(&self.ctx, &self.time, self.phase, events)
    }

    /// Enter `Active` with a custom wave schedule, keeping whatever is
    /// already on the field. An empty schedule never completes.
    pub fn start_with_schedule(&mut self, schedule: WaveSchedule) {
        self.wave_schedule = schedule;
        self.phase = GamePhase::Active;
        self.time = SimTime::default();
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the simulation context.
    pub fn context(&self) -> &SimContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut SimContext {
        &mut self.ctx
    }

    pub fn score(&self) -> &ScoreState {
        &self.ctx.score
    }

    /// Place a defender with the configured profile.
    pub fn spawn_defender(&mut self, position: Position) -> Entity {
        world_setup::spawn_defender(&mut self.ctx, position, &self.config.defender)
    }

    /// Spawn a hostile with the configured hit points, driven by `velocity`.
    pub fn spawn_hostile(&mut self, position: Position, velocity: Velocity) -> Entity {
        world_setup::spawn_hostile(&mut self.ctx, position, velocity, &self.config.hostile)
    }

    /// Move a unit from outside the tick and notify every defender.
    pub fn move_unit(&mut self, unit: Entity, position: Position) -> Result<(), SimError> {
        self.resolve_hostile(unit)?;
        if systems::movement::relocate(&mut self.ctx, unit, position) {
            Ok(())
        } else {
            Err(SimError::UnknownUnit {
                id: unit.to_bits().get(),
            })
        }
    }

    /// Detach a unit's movement driver. It stays in place and stops
    /// broadcasting until moved externally.
    pub fn halt_unit(&mut self, unit: Entity) -> Result<(), SimError> {
        self.resolve_hostile(unit)?;
        match self.ctx.units.world_mut().remove_one::<Velocity>(unit) {
            Ok(_) => trace!("unit {unit:?} halted"),
            Err(_) => trace!("unit {unit:?} already halted"),
        }
        Ok(())
    }

    /// Re-deliver a "unit moved" notification without moving the unit.
    pub fn broadcast_unit_moved(&mut self, unit: Entity) -> Result<(), SimError> {
        self.resolve_hostile(unit)?;
        dispatch::broadcast(&mut self.ctx, UnitMoved { unit });
        Ok(())
    }

    /// Attack cycle of a defender, if it exists.
    pub fn defender_cycle(&self, defender: Entity) -> Option<AttackCycle> {
        self.ctx
            .units
            .world()
            .get::<&AttackCycle>(defender)
            .ok()
            .map(|c| *c)
    }

    /// Health of a unit, if it is still on the field.
    pub fn unit_health(&self, unit: Entity) -> Option<Health> {
        self.ctx.units.world().get::<&Health>(unit).ok().map(|h| *h)
    }

    fn resolve_hostile(&self, unit: Entity) -> Result<(), SimError> {
        let id = unit.to_bits().get();
        if !self.ctx.units.contains(unit) {
            return Err(SimError::UnknownUnit { id });
        }
        if self.ctx.units.world().get::<&Hostile>(unit).is_err() {
            return Err(SimError::NotHostile { id });
        }
        Ok(())
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartMission => {
                if self.phase == GamePhase::MainMenu {
                    self.ctx.clear();
                    world_setup::setup_mission(
                        &mut self.ctx,
                        &self.config.field,
                        &self.config.defender,
                    );
                    self.wave_schedule = scenario::default_mission();
                    self.phase = GamePhase::Active;
                    self.time = SimTime::default();
                    info!(
                        "mission started: {} waves, {} hostiles, seed {}",
                        self.wave_schedule.waves.len(),
                        self.wave_schedule.total_hostiles(),
                        self.config.seed
                    );
                } else {
                    warn!("StartMission ignored in phase {:?}", self.phase);
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::SetTimeScale { scale } => {
                if scale.is_nan() {
                    warn!("SetTimeScale ignored: scale is NaN");
                } else {
                    self.time_scale = scale.clamp(0.0, MAX_TIME_SCALE);
                }
            }
            PlayerCommand::PlaceDefender { position } => {
                // StartMission clears the field, so placement waits for it.
                if matches!(self.phase, GamePhase::MainMenu | GamePhase::MissionComplete) {
                    warn!("PlaceDefender ignored in phase {:?}", self.phase);
                } else if !self.config.field.contains(&position) {
                    warn!(
                        "PlaceDefender ignored: ({:.1}, {:.1}) is off the field",
                        position.x, position.y
                    );
                } else {
                    self.spawn_defender(position);
                }
            }
            PlayerCommand::SpawnHostile {
                position,
                heading_deg,
            } => {
                if matches!(self.phase, GamePhase::MainMenu | GamePhase::MissionComplete) {
                    warn!("SpawnHostile ignored in phase {:?}", self.phase);
                } else if !self.config.field.contains(&position) {
                    warn!(
                        "SpawnHostile ignored: ({:.1}, {:.1}) is off the field",
                        position.x, position.y
                    );
                } else {
                    let velocity = Velocity::from_heading(heading_deg, self.config.hostile.speed);
                    self.spawn_hostile(position, velocity);
                }
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let dt = self.time.dt();
        // 1. Wave spawning
        systems::wave_spawner::run(
            &mut self.ctx,
            &mut self.rng,
            &mut self.wave_schedule,
            &self.config.hostile,
            self.time.tick,
        );
        // 2. Attack-cycle timers (damage, finish, target check)
        systems::fire_control::run(&mut self.ctx, dt);
        // 3. Projectile flight
        systems::projectile::run(&mut self.ctx, dt);
        // 4. Movement integration + per-unit broadcast
        systems::movement::run(&mut self.ctx, dt);
        // 5. Cleanup (units that left the field)
        systems::cleanup::run(&mut self.ctx, &self.config.field, &mut self.despawn_buffer);
    }

    fn check_mission_complete(&mut self) {
        if self.wave_schedule.waves.is_empty() || !self.wave_schedule.is_exhausted() {
            return;
        }
        let remaining = self.ctx.units.world().query::<&Hostile>().iter().count();
        if remaining == 0 {
            self.phase = GamePhase::MissionComplete;
            let score = &self.ctx.score;
            info!(
                "mission complete at {:.2}s: {} killed, {} leaked of {} spawned",
                self.time.elapsed_secs,
                score.hostiles_killed,
                score.hostiles_leaked,
                score.hostiles_spawned
            );
        }
    }
}
