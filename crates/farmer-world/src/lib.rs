//! Farms, plants, and coops for the Farmer simulation.
//!
//! This crate models the physical homestead: plants that grow through
//! discrete stages, plots and farm grids that host them, and coops where
//! chickens turn feed into eggs. Everything here advances only when the
//! caller runs a day-end; nothing suspends or touches I/O.
//!
//! # Modules
//!
//! - [`coop`] -- Chickens, egg spots, the shared feeder, and the coop.
//! - [`dice`] -- The [`Dice`] randomness seam and its seeded implementation.
//! - [`error`] -- Error types for world operations.
//! - [`farm`] -- Fixed-size plot grids with all-or-nothing planting.
//! - [`plant`] -- The per-plant growth, bug, and harvest automaton.
//! - [`plot`] -- A single cell owning at most one plant.

pub mod coop;
pub mod dice;
pub mod error;
pub mod farm;
pub mod plant;
pub mod plot;

// Re-export primary types at crate root.
pub use coop::{Chicken, ChickenFeeder, Coop, EggSpot};
pub use dice::{Dice, FixedDice, SeededDice};
pub use error::WorldError;
pub use farm::{Farm, FarmDayEnd};
pub use plant::{BUG_CHANCE, BUG_DEATH_CHANCE, Harvest, Plant, PlantDayEnd};
pub use plot::Plot;
