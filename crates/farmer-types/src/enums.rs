//! Enumeration types for the Farmer simulation.
//!
//! Crop kinds carry their growth and price constants so that every crate
//! reads the same table. Tools, day events, and views are closed sets that
//! callers dispatch on with exhaustive `match`.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Growth
// ---------------------------------------------------------------------------

/// Growth stage of a planted crop, strictly ordered.
///
/// A plant advances one stage each time it accumulates enough watered
/// growth-days. [`GrowthState::Fruiting`] is terminal until a harvest
/// regresses the plant back to [`GrowthState::Adult`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export, export_to = "bindings/")]
pub enum GrowthState {
    /// Freshly planted.
    #[default]
    Seed,
    /// First visible sprout.
    SmallSeedling,
    /// Established seedling.
    BigSeedling,
    /// Fully grown, not yet bearing fruit.
    Adult,
    /// Bearing fruit, ready to harvest.
    Fruiting,
}

impl GrowthState {
    /// Every stage in growth order.
    pub const ALL: [Self; 5] = [
        Self::Seed,
        Self::SmallSeedling,
        Self::BigSeedling,
        Self::Adult,
        Self::Fruiting,
    ];

    /// The stage after this one. Fruiting stays Fruiting.
    pub const fn next(self) -> Self {
        match self {
            Self::Seed => Self::SmallSeedling,
            Self::SmallSeedling => Self::BigSeedling,
            Self::BigSeedling => Self::Adult,
            Self::Adult | Self::Fruiting => Self::Fruiting,
        }
    }
}

// ---------------------------------------------------------------------------
// Crops
// ---------------------------------------------------------------------------

/// A crop variety. Each variety has its own seed, plant, and fruit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum CropKind {
    /// Fast, single harvest, cheap.
    Raddish,
    /// Two days per stage, single harvest.
    Carrot,
    /// Three days per stage, single harvest.
    Potato,
    /// Four days per stage, harvestable three times.
    Tomato,
    /// Six days per stage, harvestable three times, most valuable.
    Melon,
}

impl CropKind {
    /// Every crop variety, cheapest first.
    pub const ALL: [Self; 5] = [
        Self::Raddish,
        Self::Carrot,
        Self::Potato,
        Self::Tomato,
        Self::Melon,
    ];

    /// Watered growth-days needed to advance one growth stage.
    pub const fn days_to_grow(self) -> u32 {
        match self {
            Self::Raddish => 1,
            Self::Carrot => 2,
            Self::Potato => 3,
            Self::Tomato => 4,
            Self::Melon => 6,
        }
    }

    /// How many times the plant yields fruit before it is removed.
    pub const fn times_harvestable(self) -> u32 {
        match self {
            Self::Raddish | Self::Carrot | Self::Potato => 1,
            Self::Tomato | Self::Melon => 3,
        }
    }

    /// Price of one seed packet.
    pub const fn seed_price(self) -> u32 {
        match self {
            Self::Raddish => 100,
            Self::Carrot => 200,
            Self::Potato => 300,
            Self::Tomato => 500,
            Self::Melon => 900,
        }
    }

    /// Sell price of one fruit.
    pub const fn fruit_price(self) -> u32 {
        match self {
            Self::Raddish => 50,
            Self::Carrot => 60,
            Self::Potato => 100,
            Self::Tomato => 150,
            Self::Melon => 500,
        }
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Raddish => "Raddish",
            Self::Carrot => "Carrot",
            Self::Potato => "Potato",
            Self::Tomato => "Tomato",
            Self::Melon => "Melon",
        }
    }
}

impl fmt::Display for CropKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Tools
// ---------------------------------------------------------------------------

/// A tool the player can hold and apply to a plot, egg spot, or feeder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Tool {
    /// Harvests fruit and collects eggs.
    Hand,
    /// Waters a plot.
    Pail,
    /// Fertilizes a plot or fills the chicken feeder.
    Bag,
    /// Sprays bugs off a plant.
    Bottle,
    /// Destroys a plant.
    Scythe,
}

impl Tool {
    /// Every tool.
    pub const ALL: [Self; 5] = [Self::Hand, Self::Pail, Self::Bag, Self::Bottle, Self::Scythe];
}

// ---------------------------------------------------------------------------
// Day events
// ---------------------------------------------------------------------------

/// A random event that may fire at the end of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum EventKind {
    /// Waters every plot on every farm.
    Rain,
    /// Spreads bugs onto plants.
    Worm,
}

impl EventKind {
    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rain => "Rain",
            Self::Worm => "Worm",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// Which scene the front end is showing. A UI hint with no simulation effect.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export, export_to = "bindings/")]
pub enum View {
    /// Overview of the whole homestead.
    #[default]
    FullView,
    /// A single farm grid.
    FarmView,
    /// The chicken coop.
    CoopView,
    /// The house (challenge board, new day).
    HouseView,
    /// The road to the shops.
    RoadView,
    /// The seed shop.
    SeedShopView,
    /// The chick shop.
    ChickShopView,
}
