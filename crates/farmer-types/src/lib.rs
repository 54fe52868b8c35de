//! Shared type definitions for the Farmer simulation.
//!
//! This crate is the single source of truth for the value types used across
//! the Farmer workspace. Types defined here flow downstream to `TypeScript`
//! via `ts-rs` for front-end collaborators.
//!
//! # Modules
//!
//! - [`enums`] -- Growth stages, crop varieties, tools, day events, views
//! - [`items`] -- Sellable products, buyable items, grid positions
//! - [`snapshot`] -- Read-only projections of a session for rendering

pub mod enums;
pub mod items;
pub mod snapshot;

// Re-export all public types at crate root for convenience.
pub use enums::{CropKind, EventKind, GrowthState, Tool, View};
pub use items::{CHICKEN_PRICE, EGG_PRICE, Egg, Fruit, Item, PlotPos, Product};
pub use snapshot::{
    ChallengeSummary, CoopSnapshot, FarmSnapshot, GameSnapshot, OwnedCount, PlotSnapshot,
};
