//! Configuration loading and typed config structures for a Farmer session.
//!
//! The configuration lives in `farmer-config.yaml`. Every field has a
//! default, so an empty file (or no file at all) yields the classic starting
//! state: four 3x4 farms, one coop for five chickens with two already in it,
//! $1000, and 160 actions per day.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use farmer_types::CropKind;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A value parsed but cannot start a session.
    #[error("invalid config value for {field}: {reason}")]
    Invalid {
        /// Dotted path of the offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level session configuration. Mirrors `farmer-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GameConfig {
    /// Farm and coop layout plus the random seed.
    #[serde(default)]
    pub world: WorldConfig,

    /// Starting money and inventory.
    #[serde(default)]
    pub economy: EconomyConfig,

    /// Daily action budget.
    #[serde(default)]
    pub labor: LaborConfig,

    /// Day event odds.
    #[serde(default)]
    pub events: EventsConfig,

    /// Challenge board settings.
    #[serde(default)]
    pub challenges: ChallengesConfig,

    /// Headless run settings.
    #[serde(default)]
    pub simulation: SimulationConfig,
}

impl GameConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        Ok(config)
    }

    /// Check that the values describe a playable session.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let world = &self.world;
        if world.farms == 0 {
            return Err(invalid("world.farms", "at least one farm is required"));
        }
        if world.farm_rows == 0 || world.farm_cols == 0 {
            return Err(invalid(
                "world.farm_rows",
                format!(
                    "farm grid {}x{} has no plots",
                    world.farm_rows, world.farm_cols
                ),
            ));
        }
        if world.coops == 0 {
            return Err(invalid("world.coops", "at least one coop is required"));
        }
        if world.starting_chickens > world.coop_capacity {
            return Err(invalid(
                "world.starting_chickens",
                format!(
                    "{} chickens do not fit a coop of {}",
                    world.starting_chickens, world.coop_capacity
                ),
            ));
        }
        if self.labor.actions_per_day == 0 {
            return Err(invalid("labor.actions_per_day", "must be positive"));
        }
        check_probability("events.event_chance", self.events.event_chance)?;
        check_probability("events.worm_chance", self.events.worm_chance)?;
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

fn check_probability(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid(field, format!("{value} is not a probability")))
    }
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// Farm and coop layout.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorldConfig {
    /// Number of farms.
    #[serde(default = "default_farms")]
    pub farms: usize,

    /// Rows per farm grid.
    #[serde(default = "default_farm_rows")]
    pub farm_rows: usize,

    /// Columns per farm grid.
    #[serde(default = "default_farm_cols")]
    pub farm_cols: usize,

    /// Number of coops.
    #[serde(default = "default_coops")]
    pub coops: usize,

    /// Chicken capacity of every coop.
    #[serde(default = "default_coop_capacity")]
    pub coop_capacity: usize,

    /// Chickens placed in the first coop at the start.
    #[serde(default = "default_starting_chickens")]
    pub starting_chickens: usize,

    /// Random seed. Absent means operating-system entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            farms: default_farms(),
            farm_rows: default_farm_rows(),
            farm_cols: default_farm_cols(),
            coops: default_coops(),
            coop_capacity: default_coop_capacity(),
            starting_chickens: default_starting_chickens(),
            seed: None,
        }
    }
}

/// Starting money and inventory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EconomyConfig {
    /// Money in the wallet on day zero.
    #[serde(default = "default_starting_money")]
    pub starting_money: u32,

    /// Seed packets owned on day zero.
    #[serde(default = "default_starting_seeds")]
    pub starting_seeds: BTreeMap<CropKind, u32>,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            starting_money: default_starting_money(),
            starting_seeds: default_starting_seeds(),
        }
    }
}

/// Daily action budget.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LaborConfig {
    /// Effectful actions the player can take before stamina runs out.
    #[serde(default = "default_actions_per_day")]
    pub actions_per_day: u32,
}

impl Default for LaborConfig {
    fn default() -> Self {
        Self {
            actions_per_day: default_actions_per_day(),
        }
    }
}

/// Day event odds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EventsConfig {
    /// Chance each event fires at day-end.
    #[serde(default = "default_event_chance")]
    pub event_chance: f64,

    /// Chance a worm bugs each plot once the worm event fires.
    #[serde(default = "default_worm_chance")]
    pub worm_chance: f64,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            event_chance: default_event_chance(),
            worm_chance: default_worm_chance(),
        }
    }
}

/// Challenge board settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChallengesConfig {
    /// Maximum concurrently active challenges. `null` means uncapped, in
    /// which case the board is never replenished.
    #[serde(default = "default_active_cap")]
    pub active_cap: Option<usize>,
}

impl Default for ChallengesConfig {
    fn default() -> Self {
        Self {
            active_cap: default_active_cap(),
        }
    }
}

/// Headless run settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimulationConfig {
    /// Days the engine plays before stopping.
    #[serde(default = "default_days")]
    pub days: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            days: default_days(),
        }
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

const fn default_farms() -> usize {
    4
}

const fn default_farm_rows() -> usize {
    3
}

const fn default_farm_cols() -> usize {
    4
}

const fn default_coops() -> usize {
    1
}

const fn default_coop_capacity() -> usize {
    5
}

const fn default_starting_chickens() -> usize {
    2
}

const fn default_starting_money() -> u32 {
    1000
}

fn default_starting_seeds() -> BTreeMap<CropKind, u32> {
    [
        CropKind::Raddish,
        CropKind::Carrot,
        CropKind::Potato,
        CropKind::Tomato,
    ]
    .into_iter()
    .map(|crop| (crop, 5))
    .collect()
}

const fn default_actions_per_day() -> u32 {
    160
}

const fn default_event_chance() -> f64 {
    0.1
}

const fn default_worm_chance() -> f64 {
    0.5
}

#[allow(clippy::unnecessary_wraps)]
const fn default_active_cap() -> Option<usize> {
    Some(3)
}

const fn default_days() -> u64 {
    30
}
