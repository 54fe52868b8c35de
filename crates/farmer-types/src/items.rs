//! Value objects that move between the player and the world.
//!
//! Products are what the player holds and sells; items are what the player
//! buys. Both are immutable and priced by their variant.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::CropKind;

/// Buy price of one chicken.
pub const CHICKEN_PRICE: u32 = 1000;

/// Sell price of one egg.
pub const EGG_PRICE: u32 = 100;

/// Row/column address of a plot inside a farm grid.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export, export_to = "bindings/")]
pub struct PlotPos {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

impl PlotPos {
    /// Build a position from row and column.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A harvested fruit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Fruit {
    /// The crop this fruit came from.
    pub crop: CropKind,
}

impl Fruit {
    /// A fruit of the given crop.
    pub const fn of(crop: CropKind) -> Self {
        Self { crop }
    }

    /// Sell price.
    pub const fn sell_price(self) -> u32 {
        self.crop.fruit_price()
    }
}

/// A laid egg.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export, export_to = "bindings/")]
pub struct Egg;

impl Egg {
    /// Sell price.
    pub const fn sell_price(self) -> u32 {
        EGG_PRICE
    }
}

/// Anything the player can hold and sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Product {
    /// A harvested fruit.
    Fruit(Fruit),
    /// A collected egg.
    Egg(Egg),
}

impl Product {
    /// Sell price of the held product.
    pub const fn sell_price(self) -> u32 {
        match self {
            Self::Fruit(fruit) => fruit.sell_price(),
            Self::Egg(egg) => egg.sell_price(),
        }
    }
}

impl From<Fruit> for Product {
    fn from(fruit: Fruit) -> Self {
        Self::Fruit(fruit)
    }
}

impl From<Egg> for Product {
    fn from(egg: Egg) -> Self {
        Self::Egg(egg)
    }
}

/// Anything the player can buy in a shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Item {
    /// A seed packet for one full farm.
    Seed(CropKind),
    /// A chicken for the current coop.
    Chicken,
}

impl Item {
    /// Buy price.
    pub const fn buy_price(self) -> u32 {
        match self {
            Self::Seed(crop) => crop.seed_price(),
            Self::Chicken => CHICKEN_PRICE,
        }
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Seed(crop) => crop.name(),
            Self::Chicken => "Chicken",
        }
    }
}
