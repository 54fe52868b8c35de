//! Building read-only [`GameSnapshot`]s from a live session.

use farmer_types::{CoopSnapshot, FarmSnapshot, GameSnapshot, OwnedCount, PlotSnapshot};
use farmer_world::{Coop, EggSpot, Farm};

use crate::challenge::Challenge;
use crate::state::GameState;

/// Project `state` into a snapshot.
pub(crate) fn capture(state: &GameState) -> GameSnapshot {
    GameSnapshot {
        day: state.day(),
        view: state.view(),
        money: state.money(),
        stamina: state.stamina(),
        points: state.points(),
        current_farm: state.current_farm_index(),
        current_coop: state.current_coop_index(),
        owned: state
            .owned_items()
            .iter()
            .map(|(&item, &count)| OwnedCount { item, count })
            .collect(),
        current_tool: state.current_tool(),
        held: state.held(),
        todays_events: state.todays_events().to_vec(),
        challenges: state.challenges().iter().map(Challenge::summary).collect(),
        farms: state.farms().iter().map(farm_snapshot).collect(),
        coops: state.coops().iter().map(coop_snapshot).collect(),
    }
}

/// Project one farm grid.
pub fn farm_snapshot(farm: &Farm) -> FarmSnapshot {
    FarmSnapshot {
        rows: farm.rows(),
        cols: farm.cols(),
        plots: farm
            .plots()
            .map(|(pos, plot)| PlotSnapshot {
                pos,
                watered: plot.watered(),
                crop: plot.crop(),
                state: plot.state(),
                alive: plot.alive(),
                has_bug: plot.has_bug(),
            })
            .collect(),
    }
}

/// Project one coop.
pub fn coop_snapshot(coop: &Coop) -> CoopSnapshot {
    CoopSnapshot {
        capacity: coop.capacity(),
        chickens: coop.chicken_count(),
        feeder_filled: coop.feeder().filled(),
        eggs: coop.egg_spots().iter().map(EggSpot::has_egg).collect(),
    }
}
