//! Headless runner for the Farmer simulation.
//!
//! Plays a whole season with a simple greedy policy, logging every day-end,
//! then prints the final [`GameSnapshot`](farmer_types::GameSnapshot) as JSON
//! on stdout.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing, to stderr)
//! 2. Load configuration from the path given as the first argument, or
//!    `farmer-config.yaml`, falling back to defaults when absent
//! 3. Validate it and build the game state
//! 4. Play and end `simulation.days` days
//! 5. Print the final snapshot

mod autoplay;
mod error;

use std::path::PathBuf;

use farmer_core::{GameConfig, GameState};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "farmer-config.yaml";

fn main() -> Result<(), EngineError> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!("farmer-engine starting");

    // 2-3. Load configuration and build the session.
    let config = load_config()?;
    config.validate()?;
    info!(
        farms = config.world.farms,
        coops = config.world.coops,
        seed = ?config.world.seed,
        days = config.simulation.days,
        "Configuration loaded"
    );

    let mut state = GameState::new(&config)?;

    // 4. Play the season.
    for _ in 0..config.simulation.days {
        let stats = autoplay::play_day(&mut state)?;
        debug!(
            day = state.day(),
            planted = stats.planted,
            harvested = stats.harvested,
            eggs_sold = stats.eggs_sold,
            chickens_bought = stats.chickens_bought,
            stamina = state.stamina(),
            "Autoplay finished its day"
        );
        state.end_day();
    }

    info!(
        days = state.day(),
        money = state.money(),
        points = state.points(),
        "Season finished"
    );

    // 5. Print the final snapshot.
    let json = serde_json::to_string_pretty(&state.snapshot())?;
    println!("{json}");
    Ok(())
}

/// Load configuration from the first argument or the default path.
///
/// A missing file at the default path falls back to defaults; a missing
/// file that was asked for explicitly is an error.
fn load_config() -> Result<GameConfig, EngineError> {
    if let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) {
        return Ok(GameConfig::from_file(&path)?);
    }
    let path = PathBuf::from(DEFAULT_CONFIG_PATH);
    if path.exists() {
        Ok(GameConfig::from_file(&path)?)
    } else {
        info!("Config file not found, using defaults");
        Ok(GameConfig::default())
    }
}
