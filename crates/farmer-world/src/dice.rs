//! Randomness for day-end rolls.
//!
//! Every random decision in the world (bug death, bug spawn, event
//! triggers, worm spread) goes through the [`Dice`] trait. A session owns a
//! single [`SeededDice`] and lends it to farms and events in a fixed order,
//! so the same seed replays the same season.

use std::fmt;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of random rolls for the simulation.
pub trait Dice: fmt::Debug {
    /// Roll a die with `sides` faces; `true` when it lands on the first face.
    ///
    /// A zero-sided die never lands.
    fn one_in(&mut self, sides: u32) -> bool;

    /// Draw a uniform value in `[0, 1)`; `true` when it is below
    /// `probability`.
    fn below(&mut self, probability: f64) -> bool;
}

/// Seeded dice backed by a small fast PRNG.
#[derive(Debug, Clone)]
pub struct SeededDice {
    rng: SmallRng,
}

impl SeededDice {
    /// Dice seeded from `seed`. Identical seeds produce identical rolls.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Dice seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Seeded when a seed is given, entropy otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::from_seed)
    }
}

impl Dice for SeededDice {
    fn one_in(&mut self, sides: u32) -> bool {
        if sides == 0 {
            return false;
        }
        self.rng.random_range(0..sides) == 0
    }

    fn below(&mut self, probability: f64) -> bool {
        self.rng.random::<f64>() < probability
    }
}

/// Dice that always land the same way.
///
/// `FixedDice::never()` makes a world without bugs or events, which is what
/// scripted scenarios want; `FixedDice::always()` is its mirror image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDice {
    outcome: bool,
}

impl FixedDice {
    /// Every roll succeeds.
    pub const fn always() -> Self {
        Self { outcome: true }
    }

    /// Every roll fails.
    pub const fn never() -> Self {
        Self { outcome: false }
    }
}

impl Dice for FixedDice {
    fn one_in(&mut self, _sides: u32) -> bool {
        self.outcome
    }

    fn below(&mut self, _probability: f64) -> bool {
        self.outcome
    }
}
