//! Error types for the `farmer-world` crate.
//!
//! These errors mark caller mistakes that the public command surface should
//! never let through: harvesting an exhausted plant, overfilling a coop, or
//! addressing a cell outside a grid. Recoverable no-ops are reported as
//! `bool` or `Option` instead.

use farmer_types::{CropKind, PlotPos};

/// Errors that can occur during world operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    /// A plant was harvested after it already yielded its last fruit.
    #[error(
        "cannot harvest an overharvested {crop} plant: harvested {harvested}, harvestable {harvestable}"
    )]
    OverHarvested {
        /// The crop of the plant.
        crop: CropKind,
        /// Times the plant has been harvested.
        harvested: u32,
        /// Times the plant may be harvested.
        harvestable: u32,
    },

    /// A chicken was added to a full coop.
    #[error("cannot add more chickens, coop is already at capacity of {capacity}")]
    CoopAtCapacity {
        /// Coop capacity.
        capacity: usize,
    },

    /// A plot position lies outside the farm grid.
    #[error("plot {pos:?} is outside a {rows}x{cols} farm")]
    PlotOutOfBounds {
        /// The requested position.
        pos: PlotPos,
        /// Grid rows.
        rows: usize,
        /// Grid columns.
        cols: usize,
    },

    /// An egg spot index lies outside the coop.
    #[error("egg spot {index} does not exist, coop has {count} spots")]
    EggSpotOutOfBounds {
        /// The requested index.
        index: usize,
        /// Number of egg spots.
        count: usize,
    },

    /// A restored farm's plot list does not fill its grid.
    #[error("a {rows}x{cols} farm holds {plots} plots")]
    PlotCountMismatch {
        /// Grid rows.
        rows: usize,
        /// Grid columns.
        cols: usize,
        /// Plots actually present.
        plots: usize,
    },

    /// A farm was requested with an empty or overflowing grid.
    #[error("invalid farm dimensions {rows}x{cols}")]
    InvalidDimensions {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
    },
}
