//! Simulation context: the layers, the dispatcher and the pending events
//! that every system is handed.
//!
//! A [`Layer`] is a container of entities backed by its own hecs world.
//! The unit layer doubles as the unit registry: defender handles are
//! `hecs::Entity` values into it, so a removed unit simply stops resolving.

use std::collections::VecDeque;

use hecs::{DynamicBundle, Entity, World};
use log::{trace, warn};

use bulwark_core::constants::MAX_PENDING_EVENTS;
use bulwark_core::events::CombatEvent;

use crate::dispatch::Dispatcher;

/// A container of positioned entities.
pub struct Layer {
    name: &'static str,
    world: World,
}

impl Layer {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            world: World::new(),
        }
    }

    /// Add an entity to the layer.
    pub fn add(&mut self, components: impl DynamicBundle) -> Entity {
        self.world.spawn(components)
    }

    /// Remove an entity. Removing one that is not present is not an error;
    /// it returns `false`.
    pub fn remove(&mut self, entity: Entity) -> bool {
        match self.world.despawn(entity) {
            Ok(()) => true,
            Err(_) => {
                trace!("{}: remove of absent entity {entity:?} ignored", self.name);
                false
            }
        }
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.world.contains(entity)
    }

    pub fn len(&self) -> u32 {
        self.world.len()
    }

    pub fn is_empty(&self) -> bool {
        self.world.len() == 0
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Drop every entity (mission restart).
    pub fn clear(&mut self) {
        self.world.clear();
    }
}

/// Running score state.
#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub hostiles_spawned: u32,
    pub hostiles_killed: u32,
    pub hostiles_leaked: u32,
    pub shots_fired: u32,
}

/// Everything a system may touch during a tick.
pub struct SimContext {
    /// Defenders and hostile units.
    pub units: Layer,
    /// Projectiles in flight.
    pub projectiles: Layer,
    /// "Unit moved" fan-out to defenders.
    pub dispatcher: Dispatcher,
    pub score: ScoreState,
    events: VecDeque<CombatEvent>,
}

impl Default for SimContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SimContext {
    pub fn new() -> Self {
        Self {
            units: Layer::new("units"),
            projectiles: Layer::new("projectiles"),
            dispatcher: Dispatcher::default(),
            score: ScoreState::default(),
            events: VecDeque::new(),
        }
    }

    /// Record a combat event for the next snapshot. The oldest event is
    /// dropped once `MAX_PENDING_EVENTS` are pending.
    pub fn emit(&mut self, event: CombatEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            warn!("combat event queue full, dropping oldest event");
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Events pending since the last drain, oldest first.
    pub fn pending_events(&self) -> impl Iterator<Item = &CombatEvent> {
        self.events.iter()
    }

    pub fn drain_events(&mut self) -> Vec<CombatEvent> {
        self.events.drain(..).collect()
    }

    /// Reset to an empty field.
    pub fn clear(&mut self) {
        self.units.clear();
        self.projectiles.clear();
        self.dispatcher = Dispatcher::default();
        self.score = ScoreState::default();
        self.events.clear();
    }
}
