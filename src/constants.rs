//! Tuning defaults for the temperature attribute.
//!
//! These values back [`TemperatureConfig::default`](crate::TemperatureConfig)
//! and any field omitted from a JSON configuration document.

/// Flat contribution to the attribute ceiling.
pub const DEFAULT_FLAT_MAX: i32 = 0;
/// Share of the owner's maximum health added to the ceiling.
pub const DEFAULT_PERCENT_MAX_OF_HEALTH: i32 = 100;
/// Ticks before the first regeneration step after attaching or enabling.
pub const DEFAULT_INITIAL_REGEN_DELAY: u32 = 100;
/// Minimum regeneration delay imposed by a temperature-changing hit.
pub const DEFAULT_POST_DAMAGE_REGEN_DELAY: u32 = 50;
/// Flat amount moved towards equilibrium per regeneration step.
pub const DEFAULT_FLAT_REGEN_AMOUNT: i32 = 0;
/// Percentage of the ceiling moved towards equilibrium per regeneration step.
pub const DEFAULT_PERCENT_REGEN_AMOUNT: i32 = 1;
/// Ticks between consecutive regeneration steps.
pub const DEFAULT_REGEN_INTERVAL_TICKS: u32 = 25;
/// Ticks between consecutive self-damage applications.
pub const DEFAULT_DAMAGE_INTERVAL_TICKS: u32 = 25;
/// RGBA tint used for cold excursions.
pub const DEFAULT_COOL_COLOR: [u8; 4] = [0, 128, 255, 128];
/// RGBA tint used for hot excursions.
pub const DEFAULT_WARM_COLOR: [u8; 4] = [255, 64, 0, 128];
/// RGB colour of the selection bar.
pub const DEFAULT_SELECTION_BAR_COLOR: [u8; 3] = [255, 128, 0];

/// Multiplier value meaning "no effect" for every percentage modifier.
pub const NEUTRAL_MODIFIER: i32 = 100;
/// Denominator for all percentage arithmetic.
pub const PERCENT_SCALE: i64 = 100;
/// Full scale of an 8-bit colour channel.
pub const COLOR_CHANNEL_MAX: f32 = 255.0;
