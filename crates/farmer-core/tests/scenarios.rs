//! End-to-end scenarios driving a [`GameState`] through its public API.
//!
//! Scripted scenarios roll [`FixedDice::never`] so no bug or event interferes.
//! The replay scenario uses seeded dice to show a seed pins a whole season.

#![allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::float_cmp)]

use farmer_core::{ChallengeKind, GameConfig, GameState, ToolTarget};
use farmer_types::{CropKind, Egg, EventKind, Fruit, GrowthState, Item, PlotPos, Product, Tool};
use farmer_world::{Dice, FixedDice};

// =============================================================================
// Helpers
// =============================================================================

/// One farm of `rows` x `cols`, otherwise the classic config.
fn small_config(rows: usize, cols: usize) -> GameConfig {
    let mut config = GameConfig::default();
    config.world.farms = 1;
    config.world.farm_rows = rows;
    config.world.farm_cols = cols;
    config
}

fn start(config: &GameConfig, dice: impl Dice + 'static) -> GameState {
    GameState::with_dice(config, Box::new(dice)).unwrap()
}

fn positions(state: &GameState) -> Vec<PlotPos> {
    state
        .current_farm()
        .unwrap()
        .plots()
        .map(|(pos, _)| pos)
        .collect()
}

/// Water every plot of the current farm, then end the day, `days` times.
fn water_days(state: &mut GameState, days: u32) {
    for _ in 0..days {
        for pos in positions(state) {
            state.use_tool(Tool::Pail, ToolTarget::Plot(pos)).unwrap();
        }
        state.end_day();
    }
}

fn plot_state(state: &GameState, pos: PlotPos) -> Option<GrowthState> {
    state.current_farm().unwrap().plot(pos).unwrap().state()
}

fn harvest_and_sell(state: &mut GameState, pos: PlotPos) -> bool {
    state.select_tool(Some(Tool::Hand));
    if !state.use_current_tool(ToolTarget::Plot(pos)).unwrap() {
        return false;
    }
    state.sell_held()
}

// =============================================================================
// Crops
// =============================================================================

#[test]
fn raddish_from_seed_to_sale() {
    let mut state = start(&small_config(1, 1), FixedDice::never());
    let pos = PlotPos::new(0, 0);
    assert!(state.plant_seed_to_current(CropKind::Raddish).unwrap());

    water_days(&mut state, 1);
    assert_eq!(plot_state(&state, pos), Some(GrowthState::SmallSeedling));
    water_days(&mut state, 3);
    assert_eq!(plot_state(&state, pos), Some(GrowthState::Fruiting));

    state.select_tool(Some(Tool::Hand));
    assert!(state.use_current_tool(ToolTarget::Plot(pos)).unwrap());
    assert_eq!(
        state.held(),
        Some(Product::Fruit(Fruit::of(CropKind::Raddish)))
    );
    assert_eq!(state.current_tool(), None);
    assert!(state.current_farm().unwrap().plot(pos).unwrap().is_empty());

    let before = state.money();
    assert!(state.sell_held());
    assert_eq!(state.money(), before + 50);
}

#[test]
fn tomato_is_harvested_three_times() {
    let mut state = start(&small_config(1, 1), FixedDice::never());
    let pos = PlotPos::new(0, 0);
    assert!(state.plant_seed_to_current(CropKind::Tomato).unwrap());

    water_days(&mut state, 15);
    assert_eq!(plot_state(&state, pos), Some(GrowthState::Adult));
    water_days(&mut state, 1);
    assert_eq!(plot_state(&state, pos), Some(GrowthState::Fruiting));

    let before = state.money();
    assert!(harvest_and_sell(&mut state, pos));
    assert_eq!(state.money(), before + 150);
    assert_eq!(plot_state(&state, pos), Some(GrowthState::Adult));

    // Regrowth needs the full four watered days again.
    water_days(&mut state, 3);
    assert!(!harvest_and_sell(&mut state, pos));
    water_days(&mut state, 1);
    assert!(harvest_and_sell(&mut state, pos));
    assert!(!state.current_farm().unwrap().plot(pos).unwrap().is_empty());

    water_days(&mut state, 4);
    assert!(harvest_and_sell(&mut state, pos));
    assert!(state.current_farm().unwrap().plot(pos).unwrap().is_empty());
    assert_eq!(state.money(), before + 450);
}

#[test]
fn fertilizer_doubles_a_watered_day() {
    let mut state = start(&small_config(1, 1), FixedDice::never());
    let pos = PlotPos::new(0, 0);
    state.plant_seed_to_current(CropKind::Carrot).unwrap();

    // Fertilizer alone does nothing.
    assert!(state.use_tool(Tool::Bag, ToolTarget::Plot(pos)).unwrap());
    state.end_day();
    assert_eq!(plot_state(&state, pos), Some(GrowthState::Seed));

    assert!(state.use_tool(Tool::Bag, ToolTarget::Plot(pos)).unwrap());
    assert!(state.use_tool(Tool::Pail, ToolTarget::Plot(pos)).unwrap());
    state.end_day();
    assert_eq!(plot_state(&state, pos), Some(GrowthState::SmallSeedling));
}

#[test]
fn scythe_clears_a_plot_for_replanting() {
    let mut state = start(&small_config(1, 2), FixedDice::never());
    state.plant_seed_to_current(CropKind::Potato).unwrap();
    assert!(!state.plant_seed_to_current(CropKind::Raddish).unwrap());

    assert!(state.use_tool(Tool::Scythe, ToolTarget::Plot(PlotPos::new(0, 0))).unwrap());
    assert!(!state.use_tool(Tool::Scythe, ToolTarget::Plot(PlotPos::new(0, 0))).unwrap());
    // One plot is still occupied, so the farm stays unplantable.
    assert!(!state.plant_seed_to_current(CropKind::Raddish).unwrap());

    assert!(state.use_tool(Tool::Scythe, ToolTarget::Plot(PlotPos::new(0, 1))).unwrap());
    assert!(state.plant_seed_to_current(CropKind::Raddish).unwrap());
    assert_eq!(state.owned(Item::Seed(CropKind::Raddish)), 4);
}

// =============================================================================
// Coop
// =============================================================================

#[test]
fn two_feeds_give_two_eggs() {
    let mut state = start(&GameConfig::default(), FixedDice::never());
    assert_eq!(state.current_coop().unwrap().capacity(), 5);
    assert_eq!(state.current_coop().unwrap().chicken_count(), 2);

    assert!(state.use_tool(Tool::Bag, ToolTarget::Feeder).unwrap());
    assert!(state.use_tool(Tool::Bag, ToolTarget::Feeder).unwrap());
    let report = state.end_day();
    assert_eq!(report.eggs_laid, 2);

    let coop = state.current_coop().unwrap();
    assert_eq!(coop.eggs_waiting(), 2);
    assert_eq!(coop.feeder().filled(), 0);

    assert!(state.use_tool(Tool::Hand, ToolTarget::EggSpot(1)).unwrap());
    assert_eq!(state.held(), Some(Product::Egg(Egg)));
    let before = state.money();
    assert!(state.sell_held());
    assert_eq!(state.money(), before + 100);
    assert_eq!(state.current_coop().unwrap().eggs_waiting(), 1);
}

#[test]
fn surplus_feed_fills_the_feeder_but_is_wasted() {
    let mut state = start(&GameConfig::default(), FixedDice::never());
    for _ in 0..3 {
        assert!(state.use_tool(Tool::Bag, ToolTarget::Feeder).unwrap());
    }
    assert_eq!(state.current_coop().unwrap().feeder().filled(), 3);

    assert_eq!(state.end_day().eggs_laid, 2);
    assert_eq!(state.current_coop().unwrap().feeder().filled(), 0);

    // Uncollected eggs are gone after the next day-end.
    state.end_day();
    assert_eq!(state.current_coop().unwrap().eggs_waiting(), 0);
}

#[test]
fn feeder_refuses_past_capacity() {
    let mut state = start(&GameConfig::default(), FixedDice::never());
    for _ in 0..5 {
        assert!(state.use_tool(Tool::Bag, ToolTarget::Feeder).unwrap());
    }
    let left = state.actions_left();
    assert!(!state.use_tool(Tool::Bag, ToolTarget::Feeder).unwrap());
    assert_eq!(state.actions_left(), left);
}

// =============================================================================
// Economy
// =============================================================================

#[test]
fn unaffordable_purchase_changes_nothing() {
    let mut config = GameConfig::default();
    config.economy.starting_money = 150;
    let mut state = start(&config, FixedDice::never());
    let before = state.snapshot();

    assert!(!state.buy(Item::Chicken).unwrap());
    assert!(!state.buy(Item::Seed(CropKind::Carrot)).unwrap());
    assert_eq!(state.snapshot(), before);

    assert!(state.buy(Item::Seed(CropKind::Raddish)).unwrap());
    assert_eq!(state.money(), 50);
    assert_eq!(state.owned(Item::Seed(CropKind::Raddish)), 6);
}

#[test]
fn selling_nothing_is_a_no_op() {
    let mut state = start(&GameConfig::default(), FixedDice::never());
    let before = state.snapshot();
    assert!(!state.sell_held());
    assert_eq!(state.snapshot(), before);
}

#[test]
fn only_ripe_fruit_and_laid_eggs_reach_the_hand() {
    let mut state = start(&small_config(1, 2), FixedDice::never());
    assert!(state.plant_seed_to_current(CropKind::Raddish).unwrap());
    state.select_tool(Some(Tool::Hand));

    for pos in positions(&state) {
        assert!(!state.use_current_tool(ToolTarget::Plot(pos)).unwrap());
    }
    assert!(!state.use_current_tool(ToolTarget::EggSpot(0)).unwrap());

    assert_eq!(state.held(), None);
    assert!(!state.sell_held());
    assert_eq!(state.money(), 1000);
    assert_eq!(state.points(), 0);
}

// =============================================================================
// Challenges
// =============================================================================

#[test]
fn money_challenge_pays_on_sale_and_escalates() {
    let mut config = small_config(1, 2);
    config.economy.starting_money = 100;
    let mut state = start(&config, FixedDice::never());
    assert_eq!(
        state.challenges().first().map(|c| c.kind()),
        Some(ChallengeKind::Money { goal: 200 })
    );

    state.plant_seed_to_current(CropKind::Raddish).unwrap();
    water_days(&mut state, 4);
    assert_eq!(state.points(), 0);

    assert!(harvest_and_sell(&mut state, PlotPos::new(0, 0)));
    assert_eq!(state.money(), 150);
    assert_eq!(state.points(), 0);

    assert!(harvest_and_sell(&mut state, PlotPos::new(0, 1)));
    assert_eq!(state.money(), 200);
    assert_eq!(state.points(), 1);

    let kinds: Vec<ChallengeKind> = state.challenges().iter().map(|c| c.kind()).collect();
    assert!(!kinds.contains(&ChallengeKind::Money { goal: 200 }));
    assert!(kinds.contains(&ChallengeKind::Money { goal: 400 }));

    // Nothing changed, so nothing more is paid.
    assert_eq!(state.update_challenges(), 0);
    assert_eq!(state.points(), 1);
}

#[test]
fn event_sightings_count_once_per_day() {
    let mut state = start(&GameConfig::default(), FixedDice::always());
    let report = state.end_day();
    assert_eq!(report.events, vec![EventKind::Worm, EventKind::Rain]);
    assert_eq!(state.todays_events(), &[EventKind::Worm, EventKind::Rain]);

    // $200 and Rain x1 are met, then the freshly drawn $400 too.
    assert_eq!(report.points_awarded, 4);
    assert_eq!(state.points(), 4);

    let kinds: Vec<ChallengeKind> = state.challenges().iter().map(|c| c.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            ChallengeKind::ChickenCount { goal: 3 },
            ChallengeKind::EventCount {
                event: EventKind::Worm,
                goal: 2,
                seen: 0,
            },
            ChallengeKind::ChickenCount { goal: 4 },
        ]
    );
}

#[test]
fn buying_a_chicken_completes_the_chicken_challenge() {
    let mut config = GameConfig::default();
    config.economy.starting_money = 5000;
    config.challenges.active_cap = None;
    let mut state = start(&config, FixedDice::never());
    assert!(state.challenges().is_empty());
    assert_eq!(state.update_challenges(), 0);

    let mut capped = GameConfig::default();
    capped.economy.starting_money = 1100;
    let mut state = start(&capped, FixedDice::never());
    // $200 and $400 pay at the first check; three chickens do not.
    assert_eq!(state.update_challenges(), 3);
    assert!(state.buy(Item::Chicken).unwrap());
    assert_eq!(state.current_coop().unwrap().chicken_count(), 3);
    assert_eq!(state.update_challenges(), 1);
}

// =============================================================================
// Reproducibility
// =============================================================================

fn play_season(seed: u64) -> farmer_types::GameSnapshot {
    let mut config = GameConfig::default();
    config.world.seed = Some(seed);
    config.events.event_chance = 0.5;
    let mut state = GameState::new(&config).unwrap();
    state.plant_seed_to_current(CropKind::Tomato).unwrap();
    for _ in 0..20 {
        water_days(&mut state, 1);
        for pos in positions(&state) {
            state.use_tool(Tool::Bottle, ToolTarget::Plot(pos)).unwrap();
        }
    }
    state.snapshot()
}

#[test]
fn same_seed_replays_the_same_season() {
    assert_eq!(play_season(17), play_season(17));
}
