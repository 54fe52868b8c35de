//! Read-only projections of the game state for front ends.
//!
//! A [`GameSnapshot`] is taken on demand and carries everything a renderer
//! or console needs to draw the current day. Nothing in here feeds back into
//! the simulation.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{CropKind, EventKind, GrowthState, Tool, View};
use crate::items::{Item, PlotPos, Product};

/// Full read-only view of a session at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct GameSnapshot {
    /// Number of completed days.
    pub day: u64,
    /// Current scene.
    pub view: View,
    /// Player money.
    pub money: u32,
    /// Remaining stamina in `[0, 1]`.
    pub stamina: f64,
    /// Accumulated challenge points.
    pub points: u32,
    /// Index of the selected farm.
    pub current_farm: usize,
    /// Index of the selected coop.
    pub current_coop: usize,
    /// Owned amount of every item the player has ever held.
    pub owned: Vec<OwnedCount>,
    /// Currently selected tool.
    pub current_tool: Option<Tool>,
    /// Product in the player's hand.
    pub held: Option<Product>,
    /// Events that fired at the last day-end.
    pub todays_events: Vec<EventKind>,
    /// Active challenges in board order.
    pub challenges: Vec<ChallengeSummary>,
    /// Every farm.
    pub farms: Vec<FarmSnapshot>,
    /// Every coop.
    pub coops: Vec<CoopSnapshot>,
}

/// Owned quantity of one purchasable item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct OwnedCount {
    /// The item.
    pub item: Item,
    /// How many are owned.
    pub count: u32,
}

/// A challenge as shown on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ChallengeSummary {
    /// Goal description.
    pub text: String,
    /// Points awarded on completion.
    pub reward: u32,
}

/// One farm grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct FarmSnapshot {
    /// Grid rows.
    pub rows: usize,
    /// Grid columns.
    pub cols: usize,
    /// Plots in row-major order.
    pub plots: Vec<PlotSnapshot>,
}

/// One plot and the plant on it, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PlotSnapshot {
    /// Grid position.
    pub pos: PlotPos,
    /// Whether the plot was watered today.
    pub watered: bool,
    /// Crop growing here.
    pub crop: Option<CropKind>,
    /// Growth stage of the crop.
    pub state: Option<GrowthState>,
    /// Whether the crop is alive.
    pub alive: Option<bool>,
    /// Whether the crop has a bug.
    pub has_bug: bool,
}

/// One chicken coop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CoopSnapshot {
    /// Maximum number of chickens.
    pub capacity: usize,
    /// Current number of chickens.
    pub chickens: usize,
    /// Feed units in the feeder.
    pub feeder_filled: usize,
    /// Whether each chicken's egg spot holds an egg, index-aligned.
    pub eggs: Vec<bool>,
}
