//! Chicken coops: chickens, their egg spots, and a shared feeder.
//!
//! Feeding and laying are index-aligned. At day-end the first
//! `min(feed, chickens)` chickens eat, and each fed chicken lays one egg
//! into the spot with the same index. Eggs nobody collected are lost.

use serde::{Deserialize, Serialize};

use farmer_types::Egg;

use crate::error::WorldError;

/// The shared feeder. Each unit of feed feeds one chicken.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChickenFeeder {
    capacity: usize,
    filled: usize,
}

impl ChickenFeeder {
    /// An empty feeder holding up to `capacity` units.
    pub const fn new(capacity: usize) -> Self {
        Self {
            capacity,
            filled: 0,
        }
    }

    /// Maximum units of feed.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Units of feed currently in the feeder.
    pub const fn filled(&self) -> usize {
        self.filled
    }

    /// Add one unit of feed. Returns `false` if the feeder is full.
    pub const fn add_feed(&mut self) -> bool {
        if self.filled >= self.capacity {
            return false;
        }
        self.filled = self.filled.saturating_add(1);
        true
    }

    /// Empty the feeder.
    pub const fn end_day(&mut self) {
        self.filled = 0;
    }
}

/// A single chicken.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chicken {
    fed: bool,
}

impl Chicken {
    /// A hungry chicken.
    pub const fn new() -> Self {
        Self { fed: false }
    }

    /// Whether the chicken has eaten today.
    pub const fn fed(&self) -> bool {
        self.fed
    }

    /// Feed the chicken. Returns `false` if it already ate today.
    pub const fn feed(&mut self) -> bool {
        if self.fed {
            return false;
        }
        self.fed = true;
        true
    }

    /// Lay an egg into `spot` if fed. Returns whether an egg was laid.
    pub const fn lay(&mut self, spot: &mut EggSpot) -> bool {
        if !self.fed {
            return false;
        }
        self.fed = false;
        spot.lay_egg(Egg)
    }

    /// Forget today's feeding.
    pub const fn end_day(&mut self) {
        self.fed = false;
    }
}

/// Where one chicken lays its egg.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EggSpot {
    egg: Option<Egg>,
}

impl EggSpot {
    /// An empty spot.
    pub const fn new() -> Self {
        Self { egg: None }
    }

    /// Place an egg. Returns `false` if the spot is occupied.
    pub const fn lay_egg(&mut self, egg: Egg) -> bool {
        if self.egg.is_some() {
            return false;
        }
        self.egg = Some(egg);
        true
    }

    /// Whether an egg is waiting.
    pub const fn has_egg(&self) -> bool {
        self.egg.is_some()
    }

    /// Take the egg, if any.
    pub const fn collect(&mut self) -> Option<Egg> {
        self.egg.take()
    }

    /// Drop any uncollected egg.
    pub const fn end_day(&mut self) {
        self.egg = None;
    }
}

/// A coop with a fixed number of chicken slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coop {
    capacity: usize,
    chickens: Vec<Chicken>,
    spots: Vec<EggSpot>,
    feeder: ChickenFeeder,
}

impl Coop {
    /// An empty coop with room for `capacity` chickens and a feeder of the
    /// same size.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            chickens: Vec::with_capacity(capacity),
            spots: Vec::with_capacity(capacity),
            feeder: ChickenFeeder::new(capacity),
        }
    }

    /// Maximum number of chickens.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current number of chickens.
    pub const fn chicken_count(&self) -> usize {
        self.chickens.len()
    }

    /// Whether no more chickens fit.
    pub const fn is_full(&self) -> bool {
        self.chickens.len() >= self.capacity
    }

    /// Add a chicken and its egg spot.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::CoopAtCapacity`] if the coop is full.
    pub fn add_chicken(&mut self) -> Result<(), WorldError> {
        if self.is_full() {
            return Err(WorldError::CoopAtCapacity {
                capacity: self.capacity,
            });
        }
        self.chickens.push(Chicken::new());
        self.spots.push(EggSpot::new());
        Ok(())
    }

    /// The shared feeder.
    pub const fn feeder(&self) -> &ChickenFeeder {
        &self.feeder
    }

    /// The shared feeder, mutably.
    pub const fn feeder_mut(&mut self) -> &mut ChickenFeeder {
        &mut self.feeder
    }

    /// Every egg spot, index-aligned with the chickens.
    pub fn egg_spots(&self) -> &[EggSpot] {
        &self.spots
    }

    /// The egg spot at `index`, mutably.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::EggSpotOutOfBounds`] if there is no such spot.
    pub fn egg_spot_mut(&mut self, index: usize) -> Result<&mut EggSpot, WorldError> {
        let count = self.spots.len();
        self.spots
            .get_mut(index)
            .ok_or(WorldError::EggSpotOutOfBounds { index, count })
    }

    /// Number of eggs waiting to be collected.
    pub fn eggs_waiting(&self) -> usize {
        self.spots.iter().filter(|spot| spot.has_egg()).count()
    }

    /// Advance the coop through day-end. Returns the number of eggs laid.
    ///
    /// # Order of operations
    ///
    /// 1. Feed chicken `i` for every feed unit `i` that has a chicken
    /// 2. Empty the feeder
    /// 3. For each chicken: clear its spot, lay if fed, reset its day
    pub fn end_day(&mut self) -> u32 {
        let meals = self.feeder.filled().min(self.chickens.len());
        for chicken in self.chickens.iter_mut().take(meals) {
            chicken.feed();
        }

        self.feeder.end_day();

        let mut laid: u32 = 0;
        for (chicken, spot) in self.chickens.iter_mut().zip(self.spots.iter_mut()) {
            spot.end_day();
            if chicken.lay(spot) {
                laid = laid.saturating_add(1);
            }
            chicken.end_day();
        }

        tracing::debug!(
            chickens = self.chickens.len(),
            meals = meals,
            laid = laid,
            "Coop day ended"
        );
        laid
    }
}
