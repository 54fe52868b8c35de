//! Random day events that perturb every farm at day-end.
//!
//! Each registered event rolls once per day. A fired event acts on every plot
//! of every farm and is reported back so the game can record it for the
//! challenge board and the front end.

use farmer_types::EventKind;
use farmer_world::{Dice, Farm};

/// A single day event and its odds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DayEvent {
    /// Waters every plot.
    Rain {
        /// Chance the rain falls on a given day.
        chance: f64,
    },
    /// Bugs plants plot by plot.
    Worm {
        /// Chance the worms come on a given day.
        chance: f64,
        /// Chance each plot's plant gets a bug once they do.
        worm_chance: f64,
    },
}

impl DayEvent {
    /// The kind reported when this event fires.
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Rain { .. } => EventKind::Rain,
            Self::Worm { .. } => EventKind::Worm,
        }
    }

    /// Chance the event fires on a given day.
    pub const fn chance(&self) -> f64 {
        match *self {
            Self::Rain { chance } | Self::Worm { chance, .. } => chance,
        }
    }

    /// Roll for the event and apply it to `farms` if it fires.
    pub fn try_event(&self, farms: &mut [Farm], dice: &mut dyn Dice) -> bool {
        if !dice.below(self.chance()) {
            return false;
        }
        self.invoke(farms, dice);
        true
    }

    fn invoke(&self, farms: &mut [Farm], dice: &mut dyn Dice) {
        match *self {
            Self::Rain { .. } => {
                for plot in farms.iter_mut().flat_map(Farm::plots_mut) {
                    plot.water();
                }
            }
            Self::Worm { worm_chance, .. } => {
                for plot in farms.iter_mut().flat_map(Farm::plots_mut) {
                    if dice.below(worm_chance) {
                        plot.give_bug();
                    }
                }
            }
        }
    }
}

/// Ordered set of day events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayEventHandler {
    events: Vec<DayEvent>,
}

impl DayEventHandler {
    /// A handler with no events.
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Worms then rain, both at `chance`.
    pub fn classic(chance: f64, worm_chance: f64) -> Self {
        let mut handler = Self::new();
        handler.add_event(DayEvent::Worm {
            chance,
            worm_chance,
        });
        handler.add_event(DayEvent::Rain { chance });
        handler
    }

    /// Register an event. Events roll in registration order.
    pub fn add_event(&mut self, event: DayEvent) {
        self.events.push(event);
    }

    /// Registered events.
    pub fn events(&self) -> &[DayEvent] {
        &self.events
    }

    /// Roll every event against `farms`. Returns the kinds that fired.
    pub fn try_events(&self, farms: &mut [Farm], dice: &mut dyn Dice) -> Vec<EventKind> {
        let mut fired = Vec::new();
        for event in &self.events {
            if event.try_event(farms, dice) {
                tracing::debug!(event = %event.kind(), "Day event fired");
                fired.push(event.kind());
            }
        }
        fired
    }
}
