//! Headless driver that runs a single temperature attribute for a number of
//! ticks and logs its state.

use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use bevy::prelude::*;
use clap::Parser;
use log::info;
use thermal::{
    init_logging, EffectiveModifiers, Health, Temperature, TemperatureConfig, TemperaturePlugin,
    TemperatureSettings,
};

/// Simulate a temperature attribute recovering from an excursion
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
    /// JSON configuration file; defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 200)]
    ticks: u32,
    /// Initial excursion applied after attachment
    #[arg(short, long, default_value_t = 100, allow_hyphen_values = true)]
    excursion: i32,
    /// Maximum health of the simulated owner
    #[arg(short, long, default_value_t = 200)]
    max_health: i32,
}

fn load_config(path: Option<&PathBuf>) -> Result<TemperatureConfig> {
    path.map_or_else(
        || Ok(TemperatureConfig::default()),
        |p| {
            TemperatureConfig::from_path(p)
                .with_context(|| format!("loading configuration from {}", p.display()))
        },
    )
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    ensure!(args.max_health >= 0, "max health must not be negative");

    let config = load_config(args.config.as_ref())?;

    let mut app = App::new();
    app.add_plugins(TemperaturePlugin);
    let entity = app
        .world_mut()
        .spawn((Health::new(args.max_health), TemperatureSettings::new(config)))
        .id();
    app.update();

    let mut temperature = app
        .world_mut()
        .get_mut::<Temperature>(entity)
        .context("temperature attribute was not attached")?;
    info!(
        "attached with max {} regenerating every {} ticks",
        temperature.max_value(),
        temperature.config().regen_interval_ticks
    );
    temperature.change_value(args.excursion);

    for tick in 1..=args.ticks {
        app.update();
        let world = app.world();
        let snapshot = world
            .get::<Temperature>(entity)
            .context("temperature attribute disappeared")?
            .snapshot();
        let health = world.get::<Health>(entity).context("health disappeared")?;
        let modifiers = world
            .get::<EffectiveModifiers>(entity)
            .copied()
            .unwrap_or_default();
        info!(
            "tick {tick}: temperature {}/{} health {}/{} speed {}% damage taken {}%",
            snapshot.current_value,
            snapshot.max_value,
            health.current,
            health.max,
            modifiers.move_speed,
            modifiers.damage_taken,
        );
    }
    Ok(())
}
