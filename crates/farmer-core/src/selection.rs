//! Transient highlight cursor kept outside the game state.
//!
//! The presentation layer owns a [`Highlights`] table and resets it on every
//! hover cycle. Nothing in the simulation reads it.

use std::collections::BTreeMap;

use farmer_types::PlotPos;

/// At most one highlighted plot per farm index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlights {
    plots: BTreeMap<usize, PlotPos>,
}

impl Highlights {
    /// No highlights.
    pub const fn new() -> Self {
        Self {
            plots: BTreeMap::new(),
        }
    }

    /// Highlight `pos` on `farm`, replacing any previous highlight there.
    pub fn highlight(&mut self, farm: usize, pos: PlotPos) {
        self.plots.insert(farm, pos);
    }

    /// Drop the highlight on `farm`.
    pub fn unhighlight(&mut self, farm: usize) {
        self.plots.remove(&farm);
    }

    /// The highlighted plot on `farm`.
    pub fn highlighted(&self, farm: usize) -> Option<PlotPos> {
        self.plots.get(&farm).copied()
    }

    /// Whether `pos` is highlighted on `farm`.
    pub fn is_highlighted(&self, farm: usize, pos: PlotPos) -> bool {
        self.highlighted(farm) == Some(pos)
    }

    /// Drop every highlight.
    pub fn clear(&mut self) {
        self.plots.clear();
    }
}
