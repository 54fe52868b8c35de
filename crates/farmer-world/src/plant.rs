//! Per-plant growth automaton: watering, fertilizing, bugs, and harvest.
//!
//! A plant advances one [`GrowthState`] each time it accumulates
//! [`CropKind::days_to_grow`] growth-days. A growth-day is a day-end on
//! which the plant was watered; fertilizing on a watered day counts double.
//! Multi-harvest crops fall back to [`GrowthState::Adult`] after each
//! harvest and must grow back into fruit.

use serde::{Deserialize, Serialize};

use farmer_types::{CropKind, Fruit, GrowthState};

use crate::dice::Dice;
use crate::error::WorldError;

/// One in this many healthy plants catches a bug at day-end.
pub const BUG_CHANCE: u32 = 50;

/// A bugged plant dies at day-end on a one-in-this roll.
pub const BUG_DEATH_CHANCE: u32 = 2;

/// A single growing plant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plant {
    crop: CropKind,
    state: GrowthState,
    alive: bool,
    has_bug: bool,
    times_harvested: u32,
    growth_days: u32,
    watered_today: bool,
    fertilized_today: bool,
}

/// Fruit returned by a successful harvest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Harvest {
    /// The fruit picked.
    pub fruit: Fruit,
    /// The plant has yielded its last fruit and must be removed.
    pub exhausted: bool,
}

/// What happened to a plant at day-end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlantDayEnd {
    /// The plant died of a bug.
    pub died: bool,
    /// The plant advanced a growth stage.
    pub advanced: bool,
}

impl Plant {
    /// A freshly planted seed of `crop`.
    pub const fn new(crop: CropKind) -> Self {
        Self {
            crop,
            state: GrowthState::Seed,
            alive: true,
            has_bug: false,
            times_harvested: 0,
            growth_days: 0,
            watered_today: false,
            fertilized_today: false,
        }
    }

    /// The crop variety.
    pub const fn crop(&self) -> CropKind {
        self.crop
    }

    /// Current growth stage.
    pub const fn state(&self) -> GrowthState {
        self.state
    }

    /// Whether the plant is alive.
    pub const fn alive(&self) -> bool {
        self.alive
    }

    /// Whether the plant has a bug.
    pub const fn has_bug(&self) -> bool {
        self.has_bug
    }

    /// How many fruits have been picked.
    pub const fn times_harvested(&self) -> u32 {
        self.times_harvested
    }

    /// Growth-days accumulated towards the next stage.
    pub const fn growth_days(&self) -> u32 {
        self.growth_days
    }

    /// Whether the plant was watered today.
    pub const fn watered_today(&self) -> bool {
        self.watered_today
    }

    /// Whether the plant was fertilized today.
    pub const fn fertilized_today(&self) -> bool {
        self.fertilized_today
    }

    /// Water the plant. Returns `false` if it was already watered today.
    pub const fn water(&mut self) -> bool {
        if self.watered_today {
            return false;
        }
        self.watered_today = true;
        true
    }

    /// Fertilize the plant. Returns `false` if it was already fertilized
    /// today. Fertilizer only counts on days the plant is also watered.
    pub const fn fertilize(&mut self) -> bool {
        if self.fertilized_today {
            return false;
        }
        self.fertilized_today = true;
        true
    }

    /// Pick a fruit.
    ///
    /// Returns `Ok(None)` unless the plant is alive and fruiting. A
    /// non-final harvest sends the plant back to [`GrowthState::Adult`]
    /// with its growth counter reset; the final harvest marks it
    /// [`Harvest::exhausted`] so the owning plot can clear it.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::OverHarvested`] if the plant has already
    /// yielded all of its fruit.
    pub fn harvest(&mut self) -> Result<Option<Harvest>, WorldError> {
        let harvestable = self.crop.times_harvestable();
        if self.times_harvested >= harvestable {
            return Err(WorldError::OverHarvested {
                crop: self.crop,
                harvested: self.times_harvested,
                harvestable,
            });
        }

        if self.state != GrowthState::Fruiting || !self.alive {
            return Ok(None);
        }

        self.times_harvested = self.times_harvested.saturating_add(1);
        let exhausted = self.times_harvested >= harvestable;
        if !exhausted {
            self.state = GrowthState::Adult;
            self.growth_days = 0;
        }

        Ok(Some(Harvest {
            fruit: Fruit::of(self.crop),
            exhausted,
        }))
    }

    /// Infest the plant with a bug.
    pub const fn give_bug(&mut self) {
        self.has_bug = true;
    }

    /// Spray the plant. Returns `true` only if a bug was removed.
    pub const fn bug_spray(&mut self) -> bool {
        if self.has_bug {
            self.has_bug = false;
            return true;
        }
        false
    }

    /// Advance the plant through one day-end.
    ///
    /// # Order of operations
    ///
    /// 1. A bugged plant dies on a coin flip
    /// 2. The bug is cleared
    /// 3. A one-in-[`BUG_CHANCE`] roll infests it for tomorrow
    /// 4. A watered day adds a growth-day, two if also fertilized
    /// 5. Today's watering and fertilizing are cleared
    /// 6. A living, non-fruiting plant with enough growth-days advances one
    ///    stage and resets its counter
    ///
    /// Death is checked before growth, so a plant that dies does not also
    /// advance.
    pub fn end_day(&mut self, dice: &mut dyn Dice) -> PlantDayEnd {
        let mut outcome = PlantDayEnd::default();

        // 1-3. Bugs
        if self.has_bug && dice.one_in(BUG_DEATH_CHANCE) {
            outcome.died = self.alive;
            self.alive = false;
        }
        self.has_bug = false;
        if dice.one_in(BUG_CHANCE) {
            self.has_bug = true;
        }

        // 4-5. Growth-days
        if self.watered_today {
            let gained: u32 = if self.fertilized_today { 2 } else { 1 };
            self.growth_days = self.growth_days.saturating_add(gained);
        }
        self.watered_today = false;
        self.fertilized_today = false;

        // 6. Stage advance
        if self.state != GrowthState::Fruiting
            && self.alive
            && self.growth_days >= self.crop.days_to_grow()
        {
            self.state = self.state.next();
            self.growth_days = 0;
            outcome.advanced = true;
        }

        if outcome.died {
            tracing::debug!(crop = %self.crop, state = ?self.state, "Plant died of a bug");
        }

        outcome
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::dice::{FixedDice, SeededDice};

    fn grow_watered(plant: &mut Plant, days: u32) {
        let mut calm = FixedDice::never();
        for _ in 0..days {
            plant.water();
            plant.end_day(&mut calm);
        }
    }

    #[test]
    fn each_crop_advances_after_days_to_grow() {
        for crop in CropKind::ALL {
            let mut plant = Plant::new(crop);
            grow_watered(&mut plant, crop.days_to_grow().saturating_sub(1));
            assert_eq!(plant.state(), GrowthState::Seed, "{crop} advanced early");
            grow_watered(&mut plant, 1);
            assert_eq!(plant.state(), GrowthState::SmallSeedling, "{crop} did not advance");
            assert_eq!(plant.growth_days(), 0);
        }
    }

    #[test]
    fn unwatered_days_do_not_count() {
        let mut calm = FixedDice::never();
        let mut plant = Plant::new(CropKind::Raddish);
        for _ in 0..10 {
            plant.end_day(&mut calm);
        }
        assert_eq!(plant.state(), GrowthState::Seed);
        assert_eq!(plant.growth_days(), 0);
    }

    #[test]
    fn fertilized_watered_day_counts_double() {
        let mut calm = FixedDice::never();
        let mut plant = Plant::new(CropKind::Carrot);
        assert!(plant.water());
        assert!(plant.fertilize());
        plant.end_day(&mut calm);
        assert_eq!(plant.state(), GrowthState::SmallSeedling);

        let mut potato = Plant::new(CropKind::Potato);
        potato.water();
        potato.fertilize();
        potato.end_day(&mut calm);
        assert_eq!(potato.growth_days(), 2);
        assert_eq!(potato.state(), GrowthState::Seed);
    }

    #[test]
    fn fertilizer_without_water_does_nothing() {
        let mut calm = FixedDice::never();
        let mut plant = Plant::new(CropKind::Raddish);
        assert!(plant.fertilize());
        plant.end_day(&mut calm);
        assert_eq!(plant.growth_days(), 0);
        assert_eq!(plant.state(), GrowthState::Seed);
    }

    #[test]
    fn water_and_fertilize_are_once_per_day() {
        let mut calm = FixedDice::never();
        let mut plant = Plant::new(CropKind::Tomato);
        assert!(plant.water());
        assert!(!plant.water());
        assert!(plant.fertilize());
        assert!(!plant.fertilize());
        plant.end_day(&mut calm);
        assert!(plant.water());
        assert!(plant.fertilize());
    }

    #[test]
    fn harvest_before_fruiting_yields_nothing() {
        let mut plant = Plant::new(CropKind::Raddish);
        grow_watered(&mut plant, 3);
        assert_eq!(plant.state(), GrowthState::Adult);
        assert_eq!(plant.harvest().unwrap(), None);
        assert_eq!(plant.times_harvested(), 0);
    }

    #[test]
    fn single_harvest_crop_is_exhausted() {
        let mut plant = Plant::new(CropKind::Raddish);
        grow_watered(&mut plant, 4);
        assert_eq!(plant.state(), GrowthState::Fruiting);
        let harvest = plant.harvest().unwrap().unwrap();
        assert_eq!(harvest.fruit, Fruit::of(CropKind::Raddish));
        assert!(harvest.exhausted);
    }

    #[test]
    fn over_harvest_is_an_error() {
        let mut plant = Plant::new(CropKind::Raddish);
        grow_watered(&mut plant, 4);
        plant.harvest().unwrap();
        let err = plant.harvest().unwrap_err();
        assert_eq!(
            err,
            WorldError::OverHarvested {
                crop: CropKind::Raddish,
                harvested: 1,
                harvestable: 1,
            }
        );
    }

    #[test]
    fn multi_harvest_regrows_from_adult() {
        let mut plant = Plant::new(CropKind::Tomato);
        grow_watered(&mut plant, 16);
        assert_eq!(plant.state(), GrowthState::Fruiting);

        let first = plant.harvest().unwrap().unwrap();
        assert!(!first.exhausted);
        assert_eq!(plant.state(), GrowthState::Adult);
        assert_eq!(plant.growth_days(), 0);

        grow_watered(&mut plant, 3);
        assert_eq!(plant.state(), GrowthState::Adult);
        assert_eq!(plant.harvest().unwrap(), None);
        grow_watered(&mut plant, 1);
        assert_eq!(plant.state(), GrowthState::Fruiting);
    }

    #[test]
    fn fruiting_plant_does_not_advance() {
        let mut plant = Plant::new(CropKind::Raddish);
        grow_watered(&mut plant, 10);
        assert_eq!(plant.state(), GrowthState::Fruiting);
    }

    #[test]
    fn bug_spray_reports_effect() {
        let mut plant = Plant::new(CropKind::Carrot);
        assert!(!plant.bug_spray());
        plant.give_bug();
        assert!(plant.has_bug());
        assert!(plant.bug_spray());
        assert!(!plant.has_bug());
    }

    #[test]
    fn bug_kills_before_growth() {
        let mut doom = FixedDice::always();
        let mut plant = Plant::new(CropKind::Raddish);
        plant.give_bug();
        plant.water();
        let outcome = plant.end_day(&mut doom);
        assert!(outcome.died);
        assert!(!outcome.advanced);
        assert!(!plant.alive());
        assert_eq!(plant.state(), GrowthState::Seed);
        // The always-landing die also re-infests it for tomorrow.
        assert!(plant.has_bug());
    }

    #[test]
    fn dead_plant_cannot_be_harvested() {
        let mut plant = Plant::new(CropKind::Raddish);
        grow_watered(&mut plant, 4);
        plant.give_bug();
        plant.end_day(&mut FixedDice::always());
        assert!(!plant.alive());
        assert_eq!(plant.harvest().unwrap(), None);
        assert_eq!(plant.times_harvested(), 0);
    }

    #[test]
    fn calm_dice_clear_bug_without_death() {
        let mut plant = Plant::new(CropKind::Potato);
        plant.give_bug();
        let outcome = plant.end_day(&mut FixedDice::never());
        assert!(!outcome.died);
        assert!(plant.alive());
        assert!(!plant.has_bug());
    }

    #[test]
    fn bugs_appear_at_roughly_the_bug_chance() {
        let mut dice = SeededDice::from_seed(2024);
        let mut infested: u32 = 0;
        for _ in 0..5000 {
            let mut plant = Plant::new(CropKind::Melon);
            plant.end_day(&mut dice);
            if plant.has_bug() {
                infested = infested.saturating_add(1);
            }
        }
        // Expect about 100 of 5000 (1 in 50).
        assert!(
            (40..200).contains(&infested),
            "infestation rate off: {infested}/5000"
        );
    }
}
