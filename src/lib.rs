#![cfg_attr(docsrs, feature(doc_cfg))]
//! Library crate providing the thermal temperature attribute.
//!
//! The [`temperature`] module holds the engine-agnostic state machine and
//! its capability traits. [`temperature_sync`] hosts it inside Bevy ECS.
pub mod components;
pub mod constants;
pub mod logging;
pub mod numeric;
pub mod temperature;
pub mod temperature_sync;
pub use constants::*;

// Re-export commonly used items
pub use components::{
    EffectiveModifiers, Health, Paused, Renderables, Temperature, TemperatureSettings,
};
pub use logging::init as init_logging;
pub use temperature::{
    Attack, ConfigError, DamageTypes, TemperatureAttribute, TemperatureConfig,
    TemperatureSnapshot,
};
pub use temperature_sync::{
    ConditionLedger, DamageEvent, DamageInbox, TemperaturePlugin, TemperatureSyncError,
    TemperatureSyncErrorContext, TemperatureToggle,
};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use thermal::prelude::*;
    //! ```

    pub use crate::temperature::{
        DamageModifier, DamageObserver, RenderDecorator, SelectionBarProvider, SpeedModifier,
        TurnSpeedModifier, TurretTurnSpeedModifier,
    };
    pub use crate::DamageInbox;
    pub use crate::Health;
    pub use crate::TemperatureAttribute;
    pub use crate::TemperatureConfig;
    pub use crate::TemperaturePlugin;
    pub use crate::TemperatureSettings;
}
