//! Tunable parameters for a temperature attribute.
//!
//! Configuration is immutable once an attribute is attached. Documents are
//! JSON; omitted fields fall back to the defaults in [`crate::constants`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::DamageTypes;
use crate::numeric::normalize_channel;
use crate::{
    DEFAULT_COOL_COLOR, DEFAULT_DAMAGE_INTERVAL_TICKS, DEFAULT_FLAT_MAX,
    DEFAULT_FLAT_REGEN_AMOUNT, DEFAULT_INITIAL_REGEN_DELAY, DEFAULT_PERCENT_MAX_OF_HEALTH,
    DEFAULT_PERCENT_REGEN_AMOUNT, DEFAULT_POST_DAMAGE_REGEN_DELAY, DEFAULT_REGEN_INTERVAL_TICKS,
    DEFAULT_SELECTION_BAR_COLOR, DEFAULT_WARM_COLOR,
};

/// 8-bit RGBA colour, serialised as a four element array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rgba(pub [u8; 4]);

/// 8-bit RGB colour, serialised as a three element array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rgb(pub [u8; 3]);

/// Normalised tint derived from an [`Rgba`] colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tint {
    /// Red, green and blue in `0.0..=1.0`.
    pub rgb: [f32; 3],
    /// Opacity in `0.0..=1.0`.
    pub alpha: f32,
}

impl From<Rgba> for Tint {
    fn from(Rgba([r, g, b, a]): Rgba) -> Self {
        Self {
            rgb: [
                normalize_channel(r),
                normalize_channel(g),
                normalize_channel(b),
            ],
            alpha: normalize_channel(a),
        }
    }
}

/// Failure to load or validate a [`TemperatureConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read temperature config: {0}")]
    Io(#[from] std::io::Error),
    /// The document is not valid JSON for this schema.
    #[error("failed to parse temperature config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field that must be non-negative was negative.
    #[error("{field} must not be negative, got {value}")]
    Negative {
        /// Offending field name.
        field: &'static str,
        /// Value found in the document.
        value: i32,
    },
    /// A cadence that must advance was configured as zero ticks.
    #[error("{field} must be at least one tick")]
    ZeroInterval {
        /// Offending field name.
        field: &'static str,
    },
}

/// Immutable tuning for one temperature attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemperatureConfig {
    /// Flat contribution to the attribute ceiling.
    pub flat_max: i32,
    /// Percentage of the owner's maximum health added to the ceiling.
    pub percent_max_of_health: i32,
    /// Regeneration delay applied on attachment and on every enable.
    pub initial_regen_delay: u32,
    /// Regeneration delay floor imposed by a temperature-changing hit.
    pub post_damage_regen_delay: u32,
    /// Flat amount moved towards equilibrium per regeneration step.
    pub flat_regen_amount: i32,
    /// Percentage of the ceiling moved towards equilibrium per step.
    pub percent_regen_amount: i32,
    /// Ticks between regeneration steps.
    pub regen_interval_ticks: u32,
    /// Incoming damage types that shift the attribute.
    pub change_temperature_damage_types: DamageTypes,
    /// Types tagged onto self-damage during cold excursions.
    pub cold_damage_types: DamageTypes,
    /// Types tagged onto self-damage during hot excursions.
    pub hot_damage_types: DamageTypes,
    /// Speed and turn modifier reached at the ceiling, in percent.
    pub max_speed_modifier_percent: i32,
    /// Damage-taken modifier reached at the ceiling, in percent.
    pub max_damage_modifier_percent: i32,
    /// Self-damage per application at the ceiling, in percent of max health.
    pub max_damage_percent_step: i32,
    /// Ticks between self-damage applications.
    pub damage_interval_ticks: u32,
    /// Tint for cold excursions.
    pub cool_color: Rgba,
    /// Tint for hot excursions.
    pub warm_color: Rgba,
    /// Hide the selection bar while the magnitude sits at the ceiling.
    pub hide_bar_when_full: bool,
    /// Whether the selection bar is offered at all.
    pub show_selection_bar: bool,
    /// Selection bar colour.
    pub selection_bar_color: Rgb,
    /// Condition granted to the owner while the attribute is enabled.
    pub condition: Option<String>,
}

impl Default for TemperatureConfig {
    fn default() -> Self {
        Self {
            flat_max: DEFAULT_FLAT_MAX,
            percent_max_of_health: DEFAULT_PERCENT_MAX_OF_HEALTH,
            initial_regen_delay: DEFAULT_INITIAL_REGEN_DELAY,
            post_damage_regen_delay: DEFAULT_POST_DAMAGE_REGEN_DELAY,
            flat_regen_amount: DEFAULT_FLAT_REGEN_AMOUNT,
            percent_regen_amount: DEFAULT_PERCENT_REGEN_AMOUNT,
            regen_interval_ticks: DEFAULT_REGEN_INTERVAL_TICKS,
            change_temperature_damage_types: DamageTypes::default(),
            cold_damage_types: DamageTypes::default(),
            hot_damage_types: DamageTypes::default(),
            max_speed_modifier_percent: 0,
            max_damage_modifier_percent: 0,
            max_damage_percent_step: 0,
            damage_interval_ticks: DEFAULT_DAMAGE_INTERVAL_TICKS,
            cool_color: Rgba(DEFAULT_COOL_COLOR),
            warm_color: Rgba(DEFAULT_WARM_COLOR),
            hide_bar_when_full: false,
            show_selection_bar: true,
            selection_bar_color: Rgb(DEFAULT_SELECTION_BAR_COLOR),
            condition: None,
        }
    }
}

impl TemperatureConfig {
    /// Parse and validate a JSON document.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed documents and the
    /// validation variants for out-of-range values.
    ///
    /// # Examples
    /// ```
    /// use thermal::TemperatureConfig;
    /// let config = TemperatureConfig::from_json_str(r#"{ "flat_max": 200 }"#)
    ///     .expect("valid config");
    /// assert_eq!(config.flat_max, 200);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] when the file cannot be read, otherwise the
    /// same errors as [`Self::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check value ranges that the type system cannot express.
    ///
    /// # Errors
    /// Returns the first violated rule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("flat_max", self.flat_max),
            ("percent_max_of_health", self.percent_max_of_health),
            ("flat_regen_amount", self.flat_regen_amount),
            ("percent_regen_amount", self.percent_regen_amount),
            ("max_damage_percent_step", self.max_damage_percent_step),
        ];
        if let Some(&(field, value)) = non_negative.iter().find(|(_, value)| *value < 0) {
            return Err(ConfigError::Negative { field, value });
        }
        if self.regen_interval_ticks == 0 {
            return Err(ConfigError::ZeroInterval {
                field: "regen_interval_ticks",
            });
        }
        if self.max_damage_percent_step > 0 && self.damage_interval_ticks == 0 {
            return Err(ConfigError::ZeroInterval {
                field: "damage_interval_ticks",
            });
        }
        Ok(())
    }
}
