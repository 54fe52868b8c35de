//! A greedy policy that plays one day through the public game commands.
//!
//! Every farm is replanted once it is fully empty, bugs are sprayed, ripe
//! fruit is picked and sold, dead plants are cut, and everything still
//! growing is watered. Coops have their eggs sold and get one unit of feed
//! per chicken. Spare money buys chickens.

use farmer_core::{GameError, GameState, ToolTarget};
use farmer_types::{CHICKEN_PRICE, CropKind, GrowthState, Item, PlotPos, Tool};

/// Money kept back when deciding to buy a chicken.
const CHICKEN_RESERVE: u32 = 1500;

/// What the policy achieved in one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayStats {
    /// Farms sown.
    pub planted: u32,
    /// Fruits picked and sold.
    pub harvested: u32,
    /// Eggs collected and sold.
    pub eggs_sold: u32,
    /// Chickens bought.
    pub chickens_bought: u32,
}

/// Play the current day until the policy has nothing left to do or the
/// stamina runs out. Does not end the day.
pub fn play_day(state: &mut GameState) -> Result<PlayStats, GameError> {
    let mut stats = PlayStats::default();

    for farm in 0..state.farms().len() {
        state.select_farm(farm)?;
        tend_farm(state, &mut stats)?;
    }
    for coop in 0..state.coops().len() {
        state.select_coop(coop)?;
        tend_coop(state, &mut stats)?;
    }
    state.reset_temps();

    let has_room = !state.current_coop()?.is_full();
    if has_room
        && state.money() >= CHICKEN_PRICE.saturating_add(CHICKEN_RESERVE)
        && state.buy(Item::Chicken)?
    {
        stats.chickens_bought = stats.chickens_bought.saturating_add(1);
    }

    Ok(stats)
}

fn tend_farm(state: &mut GameState, stats: &mut PlayStats) -> Result<(), GameError> {
    if !state.current_farm()?.planted() {
        if let Some(crop) = pick_seed(state)? {
            if state.plant_seed_to_current(crop)? {
                stats.planted = stats.planted.saturating_add(1);
            }
        }
    }

    let plots: Vec<(PlotPos, Option<GrowthState>, Option<bool>, bool)> = state
        .current_farm()?
        .plots()
        .map(|(pos, plot)| (pos, plot.state(), plot.alive(), plot.has_bug()))
        .collect();

    for (pos, growth, alive, has_bug) in plots {
        let target = ToolTarget::Plot(pos);
        match alive {
            None => continue,
            Some(false) => {
                state.use_tool(Tool::Scythe, target)?;
                continue;
            }
            Some(true) => {}
        }

        if has_bug {
            state.use_tool(Tool::Bottle, target)?;
        }
        if growth == Some(GrowthState::Fruiting)
            && state.use_tool(Tool::Hand, target)?
            && state.sell_held()
        {
            stats.harvested = stats.harvested.saturating_add(1);
        }

        let still_growing = state
            .current_farm()?
            .plot(pos)
            .and_then(|plot| plot.state())
            .is_some_and(|growth| growth != GrowthState::Fruiting);
        if still_growing {
            state.use_tool(Tool::Pail, target)?;
        }
    }
    Ok(())
}

/// The dearest owned packet, or else the dearest one the wallet affords.
fn pick_seed(state: &mut GameState) -> Result<Option<CropKind>, GameError> {
    let owned = CropKind::ALL
        .into_iter()
        .rev()
        .find(|&crop| state.owned(Item::Seed(crop)) > 0);
    if owned.is_some() {
        return Ok(owned);
    }
    for crop in CropKind::ALL.into_iter().rev() {
        if state.buy(Item::Seed(crop))? {
            return Ok(Some(crop));
        }
    }
    Ok(None)
}

fn tend_coop(state: &mut GameState, stats: &mut PlayStats) -> Result<(), GameError> {
    let (eggs, hungry) = {
        let coop = state.current_coop()?;
        let eggs: Vec<usize> = coop
            .egg_spots()
            .iter()
            .enumerate()
            .filter(|(_, spot)| spot.has_egg())
            .map(|(index, _)| index)
            .collect();
        let hungry = coop.chicken_count().saturating_sub(coop.feeder().filled());
        (eggs, hungry)
    };

    for index in eggs {
        if state.use_tool(Tool::Hand, ToolTarget::EggSpot(index))? && state.sell_held() {
            stats.eggs_sold = stats.eggs_sold.saturating_add(1);
        }
    }
    for _ in 0..hungry {
        if !state.use_tool(Tool::Bag, ToolTarget::Feeder)? {
            break;
        }
    }
    Ok(())
}
