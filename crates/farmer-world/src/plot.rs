//! A single farm cell holding at most one plant.
//!
//! The plot owns its plant outright. When a harvest reports the plant as
//! exhausted, the plot drops it; no back-reference from plant to plot is
//! needed.

use serde::{Deserialize, Serialize};

use farmer_types::{CropKind, Fruit, GrowthState};

use crate::dice::Dice;
use crate::error::WorldError;
use crate::plant::{Plant, PlantDayEnd};

/// One cell of a farm grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plot {
    watered: bool,
    plant: Option<Plant>,
}

impl Plot {
    /// An empty, dry plot.
    pub const fn new() -> Self {
        Self {
            watered: false,
            plant: None,
        }
    }

    /// Whether no plant is present.
    pub const fn is_empty(&self) -> bool {
        self.plant.is_none()
    }

    /// Whether a seed can be planted here.
    pub const fn can_plant(&self) -> bool {
        self.is_empty()
    }

    /// Whether the soil was watered today.
    pub const fn watered(&self) -> bool {
        self.watered
    }

    /// The plant growing here, if any.
    pub const fn plant(&self) -> Option<&Plant> {
        self.plant.as_ref()
    }

    /// Plant a seed of `crop`.
    ///
    /// Returns `false` if the plot is occupied. A seed sown into soil that
    /// was already watered today counts as watered.
    pub fn plant_a_seed(&mut self, crop: CropKind) -> bool {
        if !self.can_plant() {
            return false;
        }
        let mut plant = Plant::new(crop);
        if self.watered {
            plant.water();
        }
        self.plant = Some(plant);
        true
    }

    /// Remove the plant. Returns whether one was present.
    pub fn destroy_plant(&mut self) -> bool {
        self.plant.take().is_some()
    }

    /// Water the soil and any plant in it. Returns `false` if the plot was
    /// already watered today.
    pub fn water(&mut self) -> bool {
        if self.watered {
            return false;
        }
        self.watered = true;
        if let Some(plant) = self.plant.as_mut() {
            plant.water();
        }
        true
    }

    /// Fertilize the plant. Returns `false` if the plot is empty or the
    /// plant was already fertilized today.
    pub fn fertilize(&mut self) -> bool {
        self.plant.as_mut().is_some_and(Plant::fertilize)
    }

    /// Harvest the plant, clearing the plot after its final fruit.
    ///
    /// # Errors
    ///
    /// Propagates [`WorldError::OverHarvested`] from the plant.
    pub fn harvest(&mut self) -> Result<Option<Fruit>, WorldError> {
        let Some(plant) = self.plant.as_mut() else {
            return Ok(None);
        };
        let Some(harvest) = plant.harvest()? else {
            return Ok(None);
        };
        if harvest.exhausted {
            self.plant = None;
        }
        Ok(Some(harvest.fruit))
    }

    /// Infest the plant, if any, with a bug.
    pub fn give_bug(&mut self) {
        if let Some(plant) = self.plant.as_mut() {
            plant.give_bug();
        }
    }

    /// Spray the plant. Returns `true` only if a bug was removed.
    pub fn bug_spray(&mut self) -> bool {
        self.plant.as_mut().is_some_and(Plant::bug_spray)
    }

    /// Growth stage of the plant.
    pub fn state(&self) -> Option<GrowthState> {
        self.plant.as_ref().map(Plant::state)
    }

    /// Whether the plant is alive.
    pub fn alive(&self) -> Option<bool> {
        self.plant.as_ref().map(Plant::alive)
    }

    /// Crop of the plant.
    pub fn crop(&self) -> Option<CropKind> {
        self.plant.as_ref().map(Plant::crop)
    }

    /// Whether the plant has a bug. Empty plots have none.
    pub fn has_bug(&self) -> bool {
        self.plant.as_ref().is_some_and(Plant::has_bug)
    }

    /// Dry the soil and advance the plant through day-end.
    pub fn end_day(&mut self, dice: &mut dyn Dice) -> PlantDayEnd {
        self.watered = false;
        self.plant
            .as_mut()
            .map(|plant| plant.end_day(dice))
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::dice::FixedDice;

    fn water_days(plot: &mut Plot, days: u32) {
        let mut calm = FixedDice::never();
        for _ in 0..days {
            plot.water();
            plot.end_day(&mut calm);
        }
    }

    #[test]
    fn empty_plot_projects_nothing() {
        let plot = Plot::new();
        assert!(plot.is_empty());
        assert!(plot.can_plant());
        assert_eq!(plot.state(), None);
        assert_eq!(plot.alive(), None);
        assert_eq!(plot.crop(), None);
        assert!(!plot.has_bug());
    }

    #[test]
    fn plant_a_seed_fails_when_occupied() {
        let mut plot = Plot::new();
        assert!(plot.plant_a_seed(CropKind::Raddish));
        assert!(!plot.plant_a_seed(CropKind::Carrot));
        assert_eq!(plot.crop(), Some(CropKind::Raddish));
    }

    #[test]
    fn seed_planted_into_wet_soil_is_watered() {
        let mut plot = Plot::new();
        assert!(plot.water());
        assert!(plot.plant_a_seed(CropKind::Raddish));
        assert!(plot.plant().unwrap().watered_today());
        plot.end_day(&mut FixedDice::never());
        assert_eq!(plot.state(), Some(GrowthState::SmallSeedling));
    }

    #[test]
    fn destroy_plant_reports_presence() {
        let mut plot = Plot::new();
        assert!(!plot.destroy_plant());
        plot.plant_a_seed(CropKind::Raddish);
        assert!(plot.destroy_plant());
        assert!(plot.is_empty());
    }

    #[test]
    fn watering_is_once_per_day() {
        let mut plot = Plot::new();
        assert!(plot.water());
        assert!(!plot.water());
        plot.end_day(&mut FixedDice::never());
        assert!(!plot.watered());
        assert!(plot.water());
    }

    #[test]
    fn fertilize_needs_a_plant() {
        let mut plot = Plot::new();
        assert!(!plot.fertilize());
        plot.plant_a_seed(CropKind::Potato);
        assert!(plot.fertilize());
        assert!(!plot.fertilize());
    }

    #[test]
    fn raddish_grows_when_watered_enough() {
        let mut plot = Plot::new();
        plot.plant_a_seed(CropKind::Raddish);
        water_days(&mut plot, 1);
        assert_eq!(plot.state(), Some(GrowthState::SmallSeedling));
    }

    #[test]
    fn tomato_grows_when_watered_enough() {
        let mut plot = Plot::new();
        plot.plant_a_seed(CropKind::Tomato);
        water_days(&mut plot, 4);
        assert_eq!(plot.state(), Some(GrowthState::SmallSeedling));
    }

    #[test]
    fn raddish_harvest_empties_plot() {
        let mut plot = Plot::new();
        plot.plant_a_seed(CropKind::Raddish);
        water_days(&mut plot, 4);
        assert_eq!(plot.state(), Some(GrowthState::Fruiting));

        let fruit = plot.harvest().unwrap();
        assert_eq!(fruit, Some(Fruit::of(CropKind::Raddish)));
        assert_eq!(fruit.map(Fruit::sell_price), Some(50));
        assert!(plot.is_empty());
    }

    #[test]
    fn tomato_harvest_keeps_plant() {
        let mut plot = Plot::new();
        plot.plant_a_seed(CropKind::Tomato);
        water_days(&mut plot, 16);

        let fruit = plot.harvest().unwrap();
        assert_eq!(fruit, Some(Fruit::of(CropKind::Tomato)));
        assert!(!plot.is_empty());
        assert_eq!(plot.state(), Some(GrowthState::Adult));
    }

    #[test]
    fn unripe_raddish_does_not_harvest() {
        let mut plot = Plot::new();
        plot.plant_a_seed(CropKind::Raddish);
        water_days(&mut plot, 3);
        assert_eq!(plot.harvest().unwrap(), None);
        assert!(!plot.is_empty());
    }

    #[test]
    fn empty_plot_harvests_nothing() {
        let mut plot = Plot::new();
        assert_eq!(plot.harvest().unwrap(), None);
    }

    #[test]
    fn bugs_forward_to_plant() {
        let mut plot = Plot::new();
        plot.give_bug();
        assert!(!plot.has_bug());
        assert!(!plot.bug_spray());

        plot.plant_a_seed(CropKind::Carrot);
        plot.give_bug();
        assert!(plot.has_bug());
        assert!(plot.bug_spray());
        assert!(!plot.has_bug());
    }
}
