//! Synchronisation systems hosting temperature attributes in Bevy ECS.
//!
//! This module re-exports the plugin, the shared damage inbox, the condition
//! ledger and the per-tick systems that drive each attribute.

mod conditions;
mod damage_inbox;
mod plugin;
mod systems;

pub use conditions::{ConditionLedger, EntityConditions};
pub use damage_inbox::{DamageEvent, DamageInbox};
pub use plugin::{
    TemperaturePlugin, TemperatureSyncError, TemperatureSyncErrorContext, TemperatureToggle,
};
pub use systems::{
    apply_damage_system, attach_temperature_system, decorate_renderables_system,
    equilibrate_temperature_system, refresh_modifiers_system, release_conditions_system,
    sync_pause_system,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::temperature::DamageTypes;
    use bevy::prelude::World;
    use rstest::rstest;

    #[rstest]
    fn damage_inbox_is_constructible() {
        let mut world = World::new();
        let entity = world.spawn_empty().id();
        let mut inbox = DamageInbox::default();
        inbox.push(DamageEvent {
            target: entity,
            attacker: entity,
            amount: 1,
            types: DamageTypes::default(),
        });
        assert!(!inbox.is_empty());
    }

    #[rstest]
    fn plugin_is_default_constructible() {
        let _: TemperaturePlugin = TemperaturePlugin;
    }
}
