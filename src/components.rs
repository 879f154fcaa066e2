//! ECS component types used by the simulation.
//! Includes health, the temperature attribute wrapper, and the derived values
//! other systems read each tick.
use std::sync::Arc;

use bevy::prelude::*;
use serde::Serialize;

use crate::numeric::saturate_i32;
use crate::temperature::{
    DamageModifier, HealthProvider, Renderable, SpeedModifier, TemperatureAttribute,
    TemperatureConfig, TurnSpeedModifier, TurretTurnSpeedModifier,
};
use crate::NEUTRAL_MODIFIER;

/// Primary health pool.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Health {
    /// Remaining hit points, kept within `0..=max`.
    pub current: i32,
    /// Maximum hit points.
    pub max: i32,
}

impl Health {
    /// Full health with the given maximum.
    #[must_use]
    pub const fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    /// Remove `amount` hit points; negative amounts heal.
    ///
    /// The result is clamped to `0..=max`.
    pub fn apply_damage(&mut self, amount: i32) {
        let remaining = i64::from(self.current) - i64::from(amount);
        self.current = saturate_i32(remaining).clamp(0, self.max.max(0));
    }

    /// Whether the pool is exhausted.
    #[must_use]
    pub const fn is_depleted(&self) -> bool {
        self.current <= 0
    }
}

impl HealthProvider for Health {
    fn max_health(&self) -> i32 {
        self.max
    }
}

/// Host-side pause of the owner's temperature trait.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Paused;

/// Requests a temperature attribute for the entity.
///
/// The attribute is attached on the next tick once the entity also has
/// [`Health`].
#[derive(Component, Debug, Clone, Deref)]
pub struct TemperatureSettings(pub Arc<TemperatureConfig>);

impl TemperatureSettings {
    /// Wrap an owned configuration.
    #[must_use]
    pub fn new(config: TemperatureConfig) -> Self {
        Self(Arc::new(config))
    }
}

/// Attached temperature state machine.
#[derive(Component, Debug, Deref, DerefMut)]
pub struct Temperature(pub TemperatureAttribute);

/// Percent multipliers published for movement, turning and damage intake.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EffectiveModifiers {
    /// Multiplier on incoming damage.
    pub damage_taken: i32,
    /// Multiplier on movement speed.
    pub move_speed: i32,
    /// Multiplier on body turn speed.
    pub turn_speed: i32,
    /// Multiplier on turret turn speed.
    pub turret_turn_speed: i32,
}

impl Default for EffectiveModifiers {
    fn default() -> Self {
        Self {
            damage_taken: NEUTRAL_MODIFIER,
            move_speed: NEUTRAL_MODIFIER,
            turn_speed: NEUTRAL_MODIFIER,
            turret_turn_speed: NEUTRAL_MODIFIER,
        }
    }
}

impl From<&TemperatureAttribute> for EffectiveModifiers {
    fn from(attribute: &TemperatureAttribute) -> Self {
        Self {
            damage_taken: attribute.damage_modifier(),
            move_speed: attribute.speed_modifier(),
            turn_speed: attribute.turn_speed_modifier(),
            turret_turn_speed: attribute.turret_turn_speed_modifier(),
        }
    }
}

/// Drawables owned by the entity, decorated each tick.
#[derive(Component, Debug, Clone, Default, Deref, DerefMut)]
pub struct Renderables(pub Vec<Renderable>);
