//! "Unit moved" fan-out.
//!
//! Defenders subscribe when they are placed. Every time a hostile's
//! position is advanced, the mover calls [`broadcast`], which runs each
//! subscriber's targeting against that one unit, synchronously and in
//! subscription order. Units that do not move are never re-evaluated.

use hecs::Entity;

use crate::context::SimContext;
use crate::systems::fire_control;

/// A hostile unit's position was just updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitMoved {
    pub unit: Entity,
}

/// Ordered list of subscribed defenders.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    subscribers: Vec<Entity>,
}

impl Dispatcher {
    /// Subscribe a defender. Subscribing twice has no effect.
    pub fn subscribe(&mut self, defender: Entity) {
        if !self.subscribers.contains(&defender) {
            self.subscribers.push(defender);
        }
    }

    /// Returns `true` if the defender was subscribed.
    pub fn unsubscribe(&mut self, defender: Entity) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|&d| d != defender);
        self.subscribers.len() != before
    }

    /// Subscribers in delivery order.
    pub fn subscribers(&self) -> &[Entity] {
        &self.subscribers
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

/// Deliver `event` to every subscribed defender before returning.
pub fn broadcast(ctx: &mut SimContext, event: UnitMoved) {
    // Handlers never touch the subscriber list.
    let count = ctx.dispatcher.len();
    for i in 0..count {
        let defender = ctx.dispatcher.subscribers[i];
        fire_control::on_unit_moved(ctx, defender, event.unit);
    }
}
