//! Systems driving temperature attributes from the Bevy schedule.

use std::sync::Arc;

use bevy::prelude::*;
use log::{debug, warn};

use crate::components::{
    EffectiveModifiers, Health, Paused, Renderables, Temperature, TemperatureSettings,
};
use crate::numeric::apply_percentage_modifiers;
use crate::temperature::{
    Attack, DamageModifier, DamageObserver, DamageSink, DamageTypes, RenderDecorator,
    TemperatureAttribute,
};

use super::plugin::{TemperatureSyncError, TemperatureSyncErrorContext};
use super::{ConditionLedger, DamageEvent, DamageInbox};

/// Routes self-damage from one attribute into the shared inbox.
struct InboxSink<'a> {
    inbox: &'a mut DamageInbox,
    owner: Entity,
}

impl DamageSink for InboxSink<'_> {
    fn apply_self_damage(&mut self, amount: i32, types: &DamageTypes) {
        self.inbox.push(DamageEvent {
            target: self.owner,
            attacker: self.owner,
            amount,
            types: types.clone(),
        });
    }
}

/// Releases condition grants whose owning attribute was removed or despawned.
pub fn release_conditions_system(
    mut removed: RemovedComponents<Temperature>,
    mut ledger: ResMut<ConditionLedger>,
) {
    for entity in removed.read() {
        ledger.revoke_all(entity);
    }
}

/// Attaches temperature attributes to newly eligible entities.
///
/// An entity is eligible once it carries both [`TemperatureSettings`] and
/// [`Health`]. The maximum health is read once here and never again.
pub fn attach_temperature_system(
    mut commands: Commands,
    candidates: Query<(Entity, &TemperatureSettings, &Health), Without<Temperature>>,
    mut ledger: ResMut<ConditionLedger>,
) {
    for (entity, settings, health) in &candidates {
        if health.max < 0 {
            commands.trigger(TemperatureSyncError::new(
                TemperatureSyncErrorContext::Attach,
                format!("entity {entity:?} has negative max health {}", health.max),
            ));
            continue;
        }
        let mut attribute = TemperatureAttribute::attach(Arc::clone(&settings.0), health);
        attribute.claim_condition(&mut ledger.for_entity(entity));
        debug!(
            "temperature attached to {entity:?} with max {}",
            attribute.max_value()
        );
        let modifiers = EffectiveModifiers::from(&attribute);
        commands
            .entity(entity)
            .insert((Temperature(attribute), modifiers));
    }
}

/// Mirrors the host's [`Paused`] marker into each attribute.
pub fn sync_pause_system(mut query: Query<(&mut Temperature, Has<Paused>)>) {
    for (mut temperature, paused) in &mut query {
        if temperature.is_paused() != paused {
            temperature.set_paused(paused);
        }
    }
}

/// Advances every attribute by one tick.
///
/// Self-damage is queued in the [`DamageInbox`] with the owner as attacker
/// and is applied by [`apply_damage_system`] in the same frame.
pub fn equilibrate_temperature_system(
    mut query: Query<(Entity, &mut Temperature)>,
    mut inbox: ResMut<DamageInbox>,
) {
    for (owner, mut temperature) in &mut query {
        let mut sink = InboxSink {
            inbox: inbox.as_mut(),
            owner,
        };
        temperature.tick(&mut sink);
    }
}

/// Applies queued damage to health and notifies the target's attribute.
///
/// Damage is scaled by the target's damage-taken modifier before it lands,
/// and the attribute observes the scaled value.
pub fn apply_damage_system(
    mut inbox: ResMut<DamageInbox>,
    mut targets: Query<(&mut Health, Option<&mut Temperature>)>,
) {
    for event in inbox.drain() {
        let Ok((mut health, temperature)) = targets.get_mut(event.target) else {
            warn!("damage for unknown entity {:?} ignored", event.target);
            continue;
        };
        let modifiers: Vec<i32> = temperature
            .iter()
            .map(|attribute| attribute.damage_modifier())
            .collect();
        let damage = apply_percentage_modifiers(event.amount, &modifiers);
        health.apply_damage(damage);

        if let Some(mut observer) = temperature {
            observer.on_damaged(
                event.target,
                &Attack {
                    attacker: event.attacker,
                    damage,
                    types: &event.types,
                },
            );
        }
    }
}

/// Publishes the current modifiers for other systems to read.
pub fn refresh_modifiers_system(mut query: Query<(&Temperature, &mut EffectiveModifiers)>) {
    for (temperature, mut modifiers) in &mut query {
        let fresh = EffectiveModifiers::from(&temperature.0);
        if *modifiers != fresh {
            *modifiers = fresh;
        }
    }
}

/// Rewrites the temperature tint on each entity's renderables.
pub fn decorate_renderables_system(mut query: Query<(&Temperature, &mut Renderables)>) {
    for (temperature, mut renderables) in &mut query {
        for renderable in renderables.iter_mut().filter(|r| !r.decorative) {
            renderable.tint = None;
        }
        temperature.decorate(&mut renderables.0);
    }
}
