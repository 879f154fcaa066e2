//! Narrow capability traits the host dispatches to.
//!
//! Modifier traits return percentages where [`NEUTRAL_MODIFIER`] means no
//! effect.
//!
//! [`NEUTRAL_MODIFIER`]: crate::NEUTRAL_MODIFIER

use bevy::prelude::Entity;

use super::{Attack, Renderable, Rgb, SelectionBarContext};

/// Scales damage the owner receives.
pub trait DamageModifier {
    /// Percentage applied to incoming damage.
    fn damage_modifier(&self) -> i32;
}

/// Scales the owner's movement speed.
pub trait SpeedModifier {
    /// Percentage applied to movement speed.
    fn speed_modifier(&self) -> i32;
}

/// Scales the owner's body turn rate.
pub trait TurnSpeedModifier {
    /// Percentage applied to turn speed.
    fn turn_speed_modifier(&self) -> i32;
}

/// Scales the owner's turret turn rate.
pub trait TurretTurnSpeedModifier {
    /// Percentage applied to turret turn speed.
    fn turret_turn_speed_modifier(&self) -> i32;
}

/// Supplies a selection bar drawn under the owner.
pub trait SelectionBarProvider {
    /// Fill fraction in `0.0..=1.0`; `0.0` hides the bar.
    fn bar_value(&self, context: SelectionBarContext) -> f32;
    /// Bar colour.
    fn bar_color(&self) -> Rgb;
}

/// Adjusts the owner's renderables before drawing.
pub trait RenderDecorator {
    /// Apply overrides in place. Decorative renderables must pass through.
    fn decorate(&self, renderables: &mut [Renderable]);
}

/// Reacts to damage landing on the owner.
pub trait DamageObserver {
    /// Called after `attack` has been applied to `owner`.
    fn on_damaged(&mut self, owner: Entity, attack: &Attack<'_>);
}
