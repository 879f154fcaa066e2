//! Bevy plugin wiring temperature systems into the schedule.

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use log::{debug, error};
use thiserror::Error;

use crate::components::Temperature;

use super::systems::{
    apply_damage_system, attach_temperature_system, decorate_renderables_system,
    equilibrate_temperature_system, refresh_modifiers_system, release_conditions_system,
    sync_pause_system,
};
use super::{ConditionLedger, DamageInbox};

/// Context carried by [`TemperatureSyncError`] events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureSyncErrorContext {
    /// Failure surfaced while attaching an attribute.
    Attach,
    /// Failure surfaced while toggling an attribute.
    Toggle,
}

/// Event raised when the temperature layer hits an error path.
///
/// Observers log these events so diagnostics remain visible even when
/// `bevy_log` is disabled.
#[derive(Event, Debug, Clone, Error)]
#[error("{context:?}: {detail}")]
pub struct TemperatureSyncError {
    /// Where the failure occurred.
    pub context: TemperatureSyncErrorContext,
    /// Description of the underlying error.
    pub detail: String,
}

impl TemperatureSyncError {
    /// Convenience constructor used by systems to emit error events.
    pub fn new(context: TemperatureSyncErrorContext, detail: impl Into<String>) -> Self {
        Self {
            context,
            detail: detail.into(),
        }
    }
}

/// Request to enable or disable an entity's temperature trait.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemperatureToggle {
    /// Entity whose attribute is toggled.
    pub entity: Entity,
    /// Desired state.
    pub enabled: bool,
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
fn log_temperature_error(event: On<TemperatureSyncError>) {
    let TemperatureSyncError { context, detail } = event.event();
    error!("temperature sync error during {context:?}: {detail}");
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
fn toggle_temperature(
    event: On<TemperatureToggle>,
    mut commands: Commands,
    mut query: Query<&mut Temperature>,
    mut ledger: ResMut<ConditionLedger>,
) {
    let TemperatureToggle { entity, enabled } = *event.event();
    let Ok(mut temperature) = query.get_mut(entity) else {
        commands.trigger(TemperatureSyncError::new(
            TemperatureSyncErrorContext::Toggle,
            format!("entity {entity:?} has no temperature attribute"),
        ));
        return;
    };
    let mut registry = ledger.for_entity(entity);
    if enabled {
        temperature.enable(&mut registry);
    } else {
        temperature.disable(&mut registry);
    }
    debug!("temperature on {entity:?} set enabled={enabled}");
}

/// Bevy plugin installing the per-tick temperature pipeline.
///
/// Systems run in [`Update`] in a fixed order: condition release, attach,
/// pause sync, equilibrium, damage application, modifier refresh, then
/// decoration.
#[derive(Default)]
pub struct TemperaturePlugin;

impl Plugin for TemperaturePlugin {
    fn build(&self, app: &mut App) {
        app.add_observer(log_temperature_error);
        app.add_observer(toggle_temperature);

        app.init_resource::<DamageInbox>();
        app.init_resource::<ConditionLedger>();

        app.add_systems(
            Update,
            (
                release_conditions_system,
                attach_temperature_system,
                sync_pause_system,
                equilibrate_temperature_system,
                apply_damage_system,
                refresh_modifiers_system,
                decorate_renderables_system,
            )
                .chain(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Health, TemperatureSettings};
    use crate::temperature::TemperatureConfig;
    use rstest::rstest;

    #[derive(Resource, Default)]
    struct Captured(Vec<TemperatureSyncErrorContext>);

    #[expect(
        clippy::needless_pass_by_value,
        reason = "Observer systems must accept On<T> by value for Events V2."
    )]
    fn capture(event: On<TemperatureSyncError>, mut captured: ResMut<Captured>) {
        captured.0.push(event.event().context);
    }

    fn app() -> App {
        let mut app = App::new();
        app.add_plugins(TemperaturePlugin);
        app.init_resource::<Captured>();
        app.add_observer(capture);
        app
    }

    #[rstest]
    fn plugin_initialises_resources() {
        let app = app();
        assert!(app.world().contains_resource::<DamageInbox>());
        assert!(app.world().contains_resource::<ConditionLedger>());
    }

    #[rstest]
    fn negative_max_health_is_reported() {
        let mut app = app();
        let entity = app
            .world_mut()
            .spawn((
                Health { current: 0, max: -5 },
                TemperatureSettings::new(TemperatureConfig::default()),
            ))
            .id();
        app.update();
        assert!(app.world().get::<Temperature>(entity).is_none());
        assert_eq!(
            app.world().resource::<Captured>().0,
            vec![TemperatureSyncErrorContext::Attach]
        );
    }

    #[rstest]
    fn toggling_an_unknown_entity_is_reported() {
        let mut app = app();
        let entity = app.world_mut().spawn(Health::new(10)).id();
        app.world_mut().trigger(TemperatureToggle {
            entity,
            enabled: false,
        });
        app.world_mut().flush();
        assert_eq!(
            app.world().resource::<Captured>().0,
            vec![TemperatureSyncErrorContext::Toggle]
        );
    }

    #[rstest]
    fn error_display_names_context() {
        let err = TemperatureSyncError::new(TemperatureSyncErrorContext::Toggle, "missing");
        assert_eq!(err.to_string(), "Toggle: missing");
    }
}
