//! Temperature attribute state machine.
//!
//! A [`TemperatureAttribute`] holds a signed excursion from equilibrium.
//! Positive values are "hot", negative values "cold". Every tick the value
//! drifts back towards zero, may hurt its owner, and scales the owner's
//! damage intake, speed and turn rates.
//!
//! All state that influences the simulation is integral. Presentation values
//! (tints, bar fill) are derived on demand and never stored.

mod capabilities;
mod collaborators;
mod config;
mod damage_types;
mod presentation;


use std::sync::Arc;

use bevy::prelude::Entity;
use log::debug;
use serde::Serialize;

pub use capabilities::{
    DamageModifier, DamageObserver, RenderDecorator, SelectionBarProvider, SpeedModifier,
    TurnSpeedModifier, TurretTurnSpeedModifier,
};
pub use collaborators::{ConditionRegistry, ConditionToken, DamageSink, HealthProvider};
pub use config::{ConfigError, Rgb, Rgba, TemperatureConfig, Tint};
pub use damage_types::{Attack, DamageTypes};
pub use presentation::{Renderable, SelectionBarContext, TintOverride};

use crate::numeric::{magnitude_ratio, percent_of, saturate_i32};
use crate::{NEUTRAL_MODIFIER, PERCENT_SCALE};

/// Replica-comparable view of the attribute's simulation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TemperatureSnapshot {
    /// Signed excursion from equilibrium.
    pub current_value: i32,
    /// Saturation bound.
    pub max_value: i32,
    /// Ticks until the next regeneration step.
    pub regen_delay_ticks: u32,
    /// Ticks until the next self-damage application.
    pub damage_interval_ticks: u32,
    /// Enable gate.
    pub enabled: bool,
    /// Pause gate.
    pub paused: bool,
}

/// Per-entity temperature state.
#[derive(Debug)]
pub struct TemperatureAttribute {
    config: Arc<TemperatureConfig>,
    owner_max_health: i32,
    current_value: i32,
    max_value: i32,
    regen_delay_ticks: u32,
    damage_interval_ticks: u32,
    percent_regen_amount: i32,
    cool: Tint,
    warm: Tint,
    enabled: bool,
    paused: bool,
    condition_token: Option<ConditionToken>,
}

impl TemperatureAttribute {
    /// Attach a new, enabled attribute to an owner.
    ///
    /// The ceiling is `flat_max + percent_max_of_health% of max health` and
    /// is fixed for the attribute's lifetime. A negative result is treated as
    /// zero, which pins the value at equilibrium.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use thermal::{Health, TemperatureAttribute, TemperatureConfig};
    ///
    /// let config = TemperatureConfig {
    ///     flat_max: 50,
    ///     percent_max_of_health: 10,
    ///     ..TemperatureConfig::default()
    /// };
    /// let attribute = TemperatureAttribute::attach(Arc::new(config), &Health::new(1000));
    /// assert_eq!(attribute.max_value(), 150);
    /// assert_eq!(attribute.current_value(), 0);
    /// ```
    #[must_use]
    pub fn attach(config: Arc<TemperatureConfig>, health: &impl HealthProvider) -> Self {
        let owner_max_health = health.max_health();
        let max_value = config
            .flat_max
            .saturating_add(percent_of(owner_max_health, config.percent_max_of_health))
            .max(0);
        let percent_regen_amount = percent_of(max_value, config.percent_regen_amount);
        debug!(
            "temperature attached: max {max_value}, percent regen {percent_regen_amount}, owner max health {owner_max_health}"
        );
        Self {
            owner_max_health,
            current_value: 0,
            max_value,
            regen_delay_ticks: config.initial_regen_delay,
            damage_interval_ticks: config.damage_interval_ticks,
            percent_regen_amount,
            cool: Tint::from(config.cool_color),
            warm: Tint::from(config.warm_color),
            enabled: true,
            paused: false,
            condition_token: None,
            config,
        }
    }

    /// Configuration this attribute was attached with.
    #[must_use]
    pub fn config(&self) -> &TemperatureConfig {
        &self.config
    }

    /// Signed excursion from equilibrium.
    #[must_use]
    pub const fn current_value(&self) -> i32 {
        self.current_value
    }

    /// Saturation bound fixed at attachment.
    #[must_use]
    pub const fn max_value(&self) -> i32 {
        self.max_value
    }

    /// Ticks until the next regeneration step.
    #[must_use]
    pub const fn regen_delay_ticks(&self) -> u32 {
        self.regen_delay_ticks
    }

    /// Ticks until the next self-damage application.
    #[must_use]
    pub const fn damage_interval_ticks(&self) -> u32 {
        self.damage_interval_ticks
    }

    /// Whether the enable gate is open.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the host paused the attribute.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether the attribute currently holds a condition grant.
    #[must_use]
    pub const fn holds_condition(&self) -> bool {
        self.condition_token.is_some()
    }

    /// Enabled and not paused.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.enabled && !self.paused
    }

    /// Mirror the host's pause state.
    pub const fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Replica-comparable state.
    #[must_use]
    pub const fn snapshot(&self) -> TemperatureSnapshot {
        TemperatureSnapshot {
            current_value: self.current_value,
            max_value: self.max_value,
            regen_delay_ticks: self.regen_delay_ticks,
            damage_interval_ticks: self.damage_interval_ticks,
            enabled: self.enabled,
            paused: self.paused,
        }
    }

    /// Grant the configured condition if enabled and not already held.
    pub fn claim_condition(&mut self, conditions: &mut impl ConditionRegistry) {
        if !self.enabled || self.condition_token.is_some() {
            return;
        }
        if let Some(condition) = self.config.condition.as_deref() {
            self.condition_token = Some(conditions.grant(condition));
        }
    }

    /// Open the enable gate.
    ///
    /// Only a disabled → enabled transition resets the value and the
    /// regeneration delay. The self-damage cadence and the ceiling keep their
    /// state.
    pub fn enable(&mut self, conditions: &mut impl ConditionRegistry) {
        if self.enabled {
            return;
        }
        self.enabled = true;
        self.regen_delay_ticks = self.config.initial_regen_delay;
        self.current_value = 0;
        self.claim_condition(conditions);
        debug!("temperature enabled");
    }

    /// Close the enable gate and release any held condition.
    pub fn disable(&mut self, conditions: &mut impl ConditionRegistry) {
        if let Some(token) = self.condition_token.take() {
            conditions.revoke(token);
        }
        if self.enabled {
            self.enabled = false;
            debug!("temperature disabled at {}", self.current_value);
        }
    }

    /// Shift the value by `delta`, saturating at `±max_value`.
    pub fn change_value(&mut self, delta: i32) {
        if !self.is_active() {
            return;
        }
        self.current_value = self
            .current_value
            .saturating_add(delta)
            .clamp(-self.max_value, self.max_value);
    }

    /// Advance one simulation tick.
    pub fn tick(&mut self, sink: &mut impl DamageSink) {
        self.equilibrate(sink);
    }

    fn equilibrate(&mut self, sink: &mut impl DamageSink) {
        if !self.is_active() || self.current_value == 0 {
            return;
        }

        if self.config.max_damage_percent_step > 0 {
            self.damage_interval_ticks = self.damage_interval_ticks.saturating_sub(1);
            if self.damage_interval_ticks == 0 {
                self.damage_interval_ticks = self.config.damage_interval_ticks;
                self.inflict_self_damage(sink);
            }
        }

        // At the hot ceiling the regeneration clock holds still.
        if self.current_value == self.max_value {
            return;
        }
        self.regen_delay_ticks = self.regen_delay_ticks.saturating_sub(1);
        if self.regen_delay_ticks > 0 {
            return;
        }

        let magnitude = self.current_value.abs();
        let step = self
            .config
            .flat_regen_amount
            .saturating_add(self.percent_regen_amount)
            .clamp(0, magnitude);
        self.current_value -= step * self.current_value.signum();
        self.regen_delay_ticks = self.config.regen_interval_ticks;
    }

    fn inflict_self_damage(&self, sink: &mut impl DamageSink) {
        let types = if self.current_value > 0 {
            &self.config.hot_damage_types
        } else {
            &self.config.cold_damage_types
        };
        // The ratio truncates to 0 or 1 before scaling.
        let ratio = i64::from((self.current_value / self.max_value).abs());
        let damage = saturate_i32(
            i64::from(self.config.max_damage_percent_step)
                * ratio
                * i64::from(self.owner_max_health)
                / PERCENT_SCALE,
        );
        if damage == 0 {
            return;
        }
        debug!(
            "temperature {} inflicts {damage} self-damage",
            self.current_value
        );
        sink.apply_self_damage(damage, types);
    }

    fn truncated_ratio(&self) -> i32 {
        if self.max_value == 0 {
            return 0;
        }
        (self.current_value / self.max_value).abs()
    }

    fn speed_ramp(&self) -> i32 {
        let max_modifier = self.config.max_speed_modifier_percent;
        if !self.is_active() || self.current_value == 0 || max_modifier == 0 {
            return NEUTRAL_MODIFIER;
        }
        let offset = i64::from(self.current_value) * i64::from(max_modifier)
            / i64::from(self.max_value);
        NEUTRAL_MODIFIER.saturating_add(saturate_i32(offset))
    }

    fn active_tint(&self) -> Option<TintOverride> {
        if !self.is_active() || self.current_value == 0 {
            return None;
        }
        let alpha_rate = magnitude_ratio(self.current_value, self.max_value);
        let base = if self.current_value > 0 {
            self.warm
        } else {
            self.cool
        };
        Some(TintOverride {
            rgb: base.rgb,
            alpha: alpha_rate * base.alpha,
            replace_base_color: true,
        })
    }
}

impl DamageObserver for TemperatureAttribute {
    fn on_damaged(&mut self, owner: Entity, attack: &Attack<'_>) {
        if !self.enabled || attack.attacker == owner {
            return;
        }
        if attack.damage == 0
            || !attack
                .types
                .intersects(&self.config.change_temperature_damage_types)
        {
            return;
        }
        self.change_value(attack.damage);
        self.regen_delay_ticks = self
            .regen_delay_ticks
            .max(self.config.post_damage_regen_delay);
    }
}

impl DamageModifier for TemperatureAttribute {
    fn damage_modifier(&self) -> i32 {
        let max_modifier = self.config.max_damage_modifier_percent;
        if !self.is_active() || self.current_value == 0 || max_modifier == 0 {
            return NEUTRAL_MODIFIER;
        }
        NEUTRAL_MODIFIER.saturating_add(self.truncated_ratio().saturating_mul(max_modifier))
    }
}

impl SpeedModifier for TemperatureAttribute {
    fn speed_modifier(&self) -> i32 {
        self.speed_ramp()
    }
}

impl TurnSpeedModifier for TemperatureAttribute {
    fn turn_speed_modifier(&self) -> i32 {
        self.speed_ramp()
    }
}

impl TurretTurnSpeedModifier for TemperatureAttribute {
    fn turret_turn_speed_modifier(&self) -> i32 {
        self.speed_ramp()
    }
}

impl SelectionBarProvider for TemperatureAttribute {
    fn bar_value(&self, context: SelectionBarContext) -> f32 {
        if !self.is_active() || !self.config.show_selection_bar || !context.allows_display() {
            return 0.0;
        }
        if self.config.hide_bar_when_full && self.current_value.abs() == self.max_value {
            return 0.0;
        }
        magnitude_ratio(self.current_value, self.max_value)
    }

    fn bar_color(&self) -> Rgb {
        self.config.selection_bar_color
    }
}

impl RenderDecorator for TemperatureAttribute {
    fn decorate(&self, renderables: &mut [Renderable]) {
        let Some(tint) = self.active_tint() else {
            return;
        };
        for renderable in renderables.iter_mut().filter(|r| !r.decorative) {
            renderable.tint = Some(tint);
        }
    }
}
