//! Fixed-size grids of plots.
//!
//! A farm is built once with its dimensions and never resized. Planting is
//! all-or-nothing: a seed packet sows every cell or none.

use serde::{Deserialize, Serialize};

use farmer_types::{CropKind, PlotPos};

use crate::dice::Dice;
use crate::error::WorldError;
use crate::plot::Plot;

/// A rows-by-cols grid of plots, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FarmRecord")]
pub struct Farm {
    rows: usize,
    cols: usize,
    plots: Vec<Plot>,
}

/// Serialized farm, checked against its own dimensions before use.
#[derive(Deserialize)]
struct FarmRecord {
    rows: usize,
    cols: usize,
    plots: Vec<Plot>,
}

impl TryFrom<FarmRecord> for Farm {
    type Error = WorldError;

    fn try_from(record: FarmRecord) -> Result<Self, Self::Error> {
        let FarmRecord { rows, cols, plots } = record;
        let cells = rows
            .checked_mul(cols)
            .filter(|&cells| cells > 0)
            .ok_or(WorldError::InvalidDimensions { rows, cols })?;
        if cells != plots.len() {
            return Err(WorldError::PlotCountMismatch {
                rows,
                cols,
                plots: plots.len(),
            });
        }
        Ok(Self { rows, cols, plots })
    }
}

/// Tally of plant outcomes from one farm day-end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FarmDayEnd {
    /// Plants that died of bugs.
    pub died: u32,
    /// Plants that advanced a growth stage.
    pub advanced: u32,
}

impl Farm {
    /// Build an empty farm.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidDimensions`] if either dimension is zero
    /// or the cell count overflows.
    pub fn new(rows: usize, cols: usize) -> Result<Self, WorldError> {
        let cells = rows
            .checked_mul(cols)
            .filter(|&cells| cells > 0)
            .ok_or(WorldError::InvalidDimensions { rows, cols })?;
        Ok(Self {
            rows,
            cols,
            plots: vec![Plot::new(); cells],
        })
    }

    /// Grid rows.
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Grid columns.
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Number of plots.
    pub const fn len(&self) -> usize {
        self.plots.len()
    }

    /// Whether the farm has no plots. Never true for a constructed farm.
    pub const fn is_empty(&self) -> bool {
        self.plots.is_empty()
    }

    fn index_of(&self, pos: PlotPos) -> Option<usize> {
        if pos.row >= self.rows || pos.col >= self.cols {
            return None;
        }
        pos.row.checked_mul(self.cols)?.checked_add(pos.col)
    }

    const fn out_of_bounds(&self, pos: PlotPos) -> WorldError {
        WorldError::PlotOutOfBounds {
            pos,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// The plot at `pos`.
    pub fn plot(&self, pos: PlotPos) -> Option<&Plot> {
        self.index_of(pos).and_then(|i| self.plots.get(i))
    }

    /// The plot at `pos`, mutably.
    pub fn plot_mut(&mut self, pos: PlotPos) -> Option<&mut Plot> {
        self.index_of(pos).and_then(|i| self.plots.get_mut(i))
    }

    /// The plot at `pos`, or an error naming the grid bounds.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::PlotOutOfBounds`] if `pos` is outside the grid.
    pub fn try_plot_mut(&mut self, pos: PlotPos) -> Result<&mut Plot, WorldError> {
        let err = self.out_of_bounds(pos);
        self.plot_mut(pos).ok_or(err)
    }

    /// Position of the row-major `index`.
    pub fn pos_of(&self, index: usize) -> Option<PlotPos> {
        if index >= self.plots.len() {
            return None;
        }
        let row = index.checked_div(self.cols)?;
        let col = index.checked_rem(self.cols)?;
        Some(PlotPos::new(row, col))
    }

    /// Every plot with its position, row-major.
    pub fn plots(&self) -> impl Iterator<Item = (PlotPos, &Plot)> {
        let cols = self.cols;
        self.plots.iter().enumerate().map(move |(i, plot)| {
            let row = i.checked_div(cols).unwrap_or(0);
            let col = i.checked_rem(cols).unwrap_or(0);
            (PlotPos::new(row, col), plot)
        })
    }

    /// Every plot, mutably, row-major.
    pub fn plots_mut(&mut self) -> impl Iterator<Item = &mut Plot> {
        self.plots.iter_mut()
    }

    /// Whether any plot is occupied.
    pub fn planted(&self) -> bool {
        self.plots.iter().any(|plot| !plot.is_empty())
    }

    /// Sow `crop` into every plot.
    ///
    /// Succeeds only if every plot is plantable; otherwise nothing changes
    /// and `false` is returned.
    pub fn plant_a_seed(&mut self, crop: CropKind) -> bool {
        if !self.plots.iter().all(Plot::can_plant) {
            return false;
        }
        for plot in &mut self.plots {
            plot.plant_a_seed(crop);
        }
        true
    }

    /// Advance every plot through day-end, row-major.
    pub fn end_day(&mut self, dice: &mut dyn Dice) -> FarmDayEnd {
        let mut tally = FarmDayEnd::default();
        for plot in &mut self.plots {
            let outcome = plot.end_day(dice);
            if outcome.died {
                tally.died = tally.died.saturating_add(1);
            }
            if outcome.advanced {
                tally.advanced = tally.advanced.saturating_add(1);
            }
        }
        tally
    }
}
