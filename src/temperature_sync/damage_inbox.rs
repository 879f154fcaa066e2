//! Buffered damage events awaiting application.

use bevy::prelude::{Entity, Resource};

use crate::temperature::DamageTypes;

/// Damage addressed to a single entity.
///
/// `amount` is the raw value before the target's modifiers; negative values
/// heal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DamageEvent {
    /// Entity losing health.
    pub target: Entity,
    /// Entity credited with the damage.
    pub attacker: Entity,
    /// Raw damage value.
    pub amount: i32,
    /// Damage type tags.
    pub types: DamageTypes,
}

/// Ordered damage queue drained once per tick.
///
/// Events are applied in insertion order so every replica that pushes the
/// same events sees the same outcome.
#[derive(Resource, Default, Debug)]
pub struct DamageInbox {
    events: Vec<DamageEvent>,
}

impl DamageInbox {
    /// Queue a single event.
    pub fn push(&mut self, event: DamageEvent) {
        self.events.push(event);
    }

    /// Queue several events, preserving their order.
    pub fn extend<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = DamageEvent>,
    {
        self.events.extend(events);
    }

    /// Remove and yield every queued event in order.
    pub fn drain(&mut self) -> std::vec::Drain<'_, DamageEvent> {
        self.events.drain(..)
    }

    /// Whether nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of queued events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }
}
