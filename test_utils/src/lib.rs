//! Utility helpers for tests.
//!
//! Provides configuration fixtures and app builders shared by the
//! integration suites.

use bevy::prelude::*;
use thermal::{DamageEvent, DamageInbox, DamageTypes, Health, TemperatureConfig, TemperaturePlugin};
use thermal::{Temperature, TemperatureSettings};

/// Damage type that heats the attribute in the fixtures.
pub const FIRE: &str = "Fire";
/// Damage type that chills the attribute in the fixtures.
pub const FROST: &str = "Frost";
/// Type tagged onto hot self-damage.
pub const BURN: &str = "Burn";
/// Type tagged onto cold self-damage.
pub const FROSTBITE: &str = "Frostbite";

/// Build a [`DamageTypes`] set from string slices.
#[must_use]
pub fn damage_types(names: &[&str]) -> DamageTypes {
    names.iter().copied().collect()
}

/// Configuration with a flat ceiling of 100 that recovers 5 every 25 ticks.
///
/// Fire and Frost shift the attribute. Self-damage and modifiers are off so
/// scenarios can enable only what they need.
#[must_use]
pub fn tank_config() -> TemperatureConfig {
    TemperatureConfig {
        flat_max: 100,
        percent_max_of_health: 0,
        initial_regen_delay: 25,
        post_damage_regen_delay: 40,
        flat_regen_amount: 5,
        percent_regen_amount: 0,
        regen_interval_ticks: 25,
        change_temperature_damage_types: damage_types(&[FIRE, FROST]),
        cold_damage_types: damage_types(&[FROSTBITE]),
        hot_damage_types: damage_types(&[BURN]),
        ..TemperatureConfig::default()
    }
}

/// [`tank_config`] with self-damage every `interval` ticks.
#[must_use]
pub fn burning_config(step_percent: i32, interval: u32) -> TemperatureConfig {
    TemperatureConfig {
        max_damage_percent_step: step_percent,
        damage_interval_ticks: interval,
        ..tank_config()
    }
}

/// Builder for test `App` instances hosting temperature attributes.
pub struct TemperatureTestAppBuilder {
    app: App,
}

impl TemperatureTestAppBuilder {
    /// Create a new test app with [`TemperaturePlugin`] installed.
    #[must_use]
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(TemperaturePlugin);
        Self { app }
    }

    /// Spawn an entity with full health and the given configuration.
    #[must_use]
    pub fn spawn_unit(mut self, max_health: i32, config: TemperatureConfig) -> (Self, Entity) {
        let entity = self
            .app
            .world_mut()
            .spawn((Health::new(max_health), TemperatureSettings::new(config)))
            .id();
        (self, entity)
    }

    /// Run one update so pending attributes attach, then return the app.
    #[must_use]
    pub fn build(mut self) -> App {
        self.app.update();
        self.app
    }
}

impl Default for TemperatureTestAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Queue an attack on `target` from `attacker`.
pub fn push_attack(app: &mut App, target: Entity, attacker: Entity, amount: i32, types: &[&str]) {
    app.world_mut()
        .resource_mut::<DamageInbox>()
        .push(DamageEvent {
            target,
            attacker,
            amount,
            types: damage_types(types),
        });
}

/// Read the attribute's current value.
///
/// # Panics
/// Panics if the entity has no attached attribute.
#[must_use]
pub fn temperature_of(app: &App, entity: Entity) -> i32 {
    app.world()
        .get::<Temperature>(entity)
        .unwrap_or_else(|| panic!("entity {entity:?} has no temperature"))
        .current_value()
}

/// Read the entity's current health.
///
/// # Panics
/// Panics if the entity has no health.
#[must_use]
pub fn health_of(app: &App, entity: Entity) -> i32 {
    app.world()
        .get::<Health>(entity)
        .unwrap_or_else(|| panic!("entity {entity:?} has no health"))
        .current
}
