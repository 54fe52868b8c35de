//! The game session: economy, labor, selections, and the day boundary.
//!
//! [`GameState`] is the only entry point front ends mutate. It owns every
//! farm and coop, the wallet and inventory, the event and challenge
//! handlers, and the session's single source of randomness.

use std::collections::BTreeMap;

use farmer_types::{CropKind, EventKind, GameSnapshot, Item, Product, Tool, View};
use farmer_world::{Coop, Dice, Farm, SeededDice};

use crate::challenge::{Challenge, ChallengeHandler, ChallengeProgress};
use crate::config::GameConfig;
use crate::error::GameError;
use crate::events::DayEventHandler;
use crate::snapshot;
use crate::tools::{self, ToolTarget};

/// What one day-end did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayReport {
    /// The day that just ended, counting from zero.
    pub day: u64,
    /// Plants that died of bugs.
    pub plants_died: u32,
    /// Plants that advanced a growth stage.
    pub plants_advanced: u32,
    /// Eggs laid across every coop.
    pub eggs_laid: u32,
    /// Events that fired.
    pub events: Vec<EventKind>,
    /// Challenge points awarded.
    pub points_awarded: u32,
}

/// A complete game session.
#[derive(Debug)]
pub struct GameState {
    view: View,
    farms: Vec<Farm>,
    current_farm: usize,
    coops: Vec<Coop>,
    current_coop: usize,
    money: u32,
    owned: BTreeMap<Item, u32>,
    current_tool: Option<Tool>,
    held: Option<Product>,
    actions_per_day: u32,
    actions_left: u32,
    events: DayEventHandler,
    todays_events: Vec<EventKind>,
    challenges: ChallengeHandler,
    points: u32,
    day: u64,
    dice: Box<dyn Dice>,
}

impl GameState {
    /// Start a session from `config`, seeded from `world.seed` or entropy.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Config`] if `config` fails
    /// [`GameConfig::validate`].
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        Self::with_dice(config, Box::new(SeededDice::new(config.world.seed)))
    }

    /// Start a session from `config` rolling `dice`.
    ///
    /// # Errors
    ///
    /// See [`GameState::new`].
    pub fn with_dice(config: &GameConfig, dice: Box<dyn Dice>) -> Result<Self, GameError> {
        config.validate()?;
        let world = &config.world;

        let farms = (0..world.farms)
            .map(|_| Farm::new(world.farm_rows, world.farm_cols))
            .collect::<Result<Vec<_>, _>>()?;
        if farms.is_empty() {
            return Err(GameError::FarmIndexOutOfRange { index: 0, count: 0 });
        }

        let mut coops: Vec<Coop> = (0..world.coops)
            .map(|_| Coop::new(world.coop_capacity))
            .collect();
        let Some(first_coop) = coops.first_mut() else {
            return Err(GameError::CoopIndexOutOfRange { index: 0, count: 0 });
        };
        for _ in 0..world.starting_chickens {
            first_coop.add_chicken()?;
        }

        let owned = config
            .economy
            .starting_seeds
            .iter()
            .filter(|&(_, &count)| count > 0)
            .map(|(&crop, &count)| (Item::Seed(crop), count))
            .collect();

        let mut challenges = ChallengeHandler::new(config.challenges.active_cap);
        challenges.replenish();

        let actions_per_day = config.labor.actions_per_day;

        tracing::debug!(
            farms = farms.len(),
            coops = coops.len(),
            money = config.economy.starting_money,
            seed = ?world.seed,
            "Game state created"
        );

        Ok(Self {
            view: View::default(),
            farms,
            current_farm: 0,
            coops,
            current_coop: 0,
            money: config.economy.starting_money,
            owned,
            current_tool: None,
            held: None,
            actions_per_day,
            actions_left: actions_per_day,
            events: DayEventHandler::classic(config.events.event_chance, config.events.worm_chance),
            todays_events: Vec::new(),
            challenges,
            points: 0,
            day: 0,
            dice,
        })
    }

    /// The classic starting state: default config, entropy-seeded.
    ///
    /// # Errors
    ///
    /// Never fails for the default config; see [`GameState::new`].
    pub fn classic() -> Result<Self, GameError> {
        Self::new(&GameConfig::default())
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Current scene.
    pub const fn view(&self) -> View {
        self.view
    }

    /// Every farm in selection order.
    pub fn farms(&self) -> &[Farm] {
        &self.farms
    }

    /// Index of the selected farm.
    pub const fn current_farm_index(&self) -> usize {
        self.current_farm
    }

    /// The selected farm.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::FarmIndexOutOfRange`] only if the farm list was
    /// emptied, which no public operation does.
    pub fn current_farm(&self) -> Result<&Farm, GameError> {
        let count = self.farms.len();
        self.farms
            .get(self.current_farm)
            .ok_or(GameError::FarmIndexOutOfRange {
                index: self.current_farm,
                count,
            })
    }

    /// The selected farm, mutably.
    ///
    /// # Errors
    ///
    /// See [`GameState::current_farm`].
    pub fn current_farm_mut(&mut self) -> Result<&mut Farm, GameError> {
        let count = self.farms.len();
        self.farms
            .get_mut(self.current_farm)
            .ok_or(GameError::FarmIndexOutOfRange {
                index: self.current_farm,
                count,
            })
    }

    /// Every coop in selection order.
    pub fn coops(&self) -> &[Coop] {
        &self.coops
    }

    /// Index of the selected coop.
    pub const fn current_coop_index(&self) -> usize {
        self.current_coop
    }

    /// The selected coop.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CoopIndexOutOfRange`] only if the coop list was
    /// emptied, which no public operation does.
    pub fn current_coop(&self) -> Result<&Coop, GameError> {
        let count = self.coops.len();
        self.coops
            .get(self.current_coop)
            .ok_or(GameError::CoopIndexOutOfRange {
                index: self.current_coop,
                count,
            })
    }

    /// The selected coop, mutably.
    ///
    /// # Errors
    ///
    /// See [`GameState::current_coop`].
    pub fn current_coop_mut(&mut self) -> Result<&mut Coop, GameError> {
        let count = self.coops.len();
        self.coops
            .get_mut(self.current_coop)
            .ok_or(GameError::CoopIndexOutOfRange {
                index: self.current_coop,
                count,
            })
    }

    /// Player money.
    pub const fn money(&self) -> u32 {
        self.money
    }

    /// How many of `item` the player owns.
    pub fn owned(&self, item: Item) -> u32 {
        self.owned.get(&item).copied().unwrap_or(0)
    }

    /// Owned amount of every item ever bought or granted.
    pub const fn owned_items(&self) -> &BTreeMap<Item, u32> {
        &self.owned
    }

    /// Selected tool.
    pub const fn current_tool(&self) -> Option<Tool> {
        self.current_tool
    }

    /// Product in hand.
    pub const fn held(&self) -> Option<Product> {
        self.held
    }

    /// Remaining stamina in `[0, 1]`.
    pub fn stamina(&self) -> f64 {
        f64::from(self.actions_left) / f64::from(self.actions_per_day)
    }

    /// Stamina spent per effectful action.
    pub fn stamina_step(&self) -> f64 {
        1.0 / f64::from(self.actions_per_day)
    }

    /// Effectful actions left today.
    pub const fn actions_left(&self) -> u32 {
        self.actions_left
    }

    /// Events that fired at the last day-end.
    pub fn todays_events(&self) -> &[EventKind] {
        &self.todays_events
    }

    /// Active challenges in board order.
    pub fn challenges(&self) -> &[Challenge] {
        self.challenges.challenges()
    }

    /// Accumulated challenge points.
    pub const fn points(&self) -> u32 {
        self.points
    }

    /// Completed days.
    pub const fn day(&self) -> u64 {
        self.day
    }

    fn progress(&self) -> ChallengeProgress {
        let chickens = self.coops.get(self.current_coop).map_or(0, Coop::chicken_count);
        ChallengeProgress {
            money: self.money,
            chickens: u32::try_from(chickens).unwrap_or(u32::MAX),
        }
    }

    // -----------------------------------------------------------------------
    // Selection
    // -----------------------------------------------------------------------

    /// Select the farm at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::FarmIndexOutOfRange`] if there is no such farm.
    pub const fn select_farm(&mut self, index: usize) -> Result<(), GameError> {
        if index >= self.farms.len() {
            return Err(GameError::FarmIndexOutOfRange {
                index,
                count: self.farms.len(),
            });
        }
        self.current_farm = index;
        Ok(())
    }

    /// Select the coop at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CoopIndexOutOfRange`] if there is no such coop.
    pub const fn select_coop(&mut self, index: usize) -> Result<(), GameError> {
        if index >= self.coops.len() {
            return Err(GameError::CoopIndexOutOfRange {
                index,
                count: self.coops.len(),
            });
        }
        self.current_coop = index;
        Ok(())
    }

    /// Pick up `tool`, or put it down with `None`.
    pub const fn select_tool(&mut self, tool: Option<Tool>) {
        self.current_tool = tool;
    }

    /// Clear the tool, the held product, and the farm and coop selection.
    pub const fn reset_temps(&mut self) {
        self.current_tool = None;
        self.held = None;
        self.current_farm = 0;
        self.current_coop = 0;
    }

    /// Move to `view`.
    ///
    /// When `costs_labor` is set the walk spends a stamina step and is
    /// refused if none is left. A successful switch pays out challenges and
    /// resets transient selections. Returns whether the switch happened.
    pub fn switch_view(&mut self, view: View, costs_labor: bool) -> bool {
        if costs_labor {
            if !self.can_work() {
                return false;
            }
            self.do_labor();
        }
        self.update_challenges();
        self.view = view;
        self.reset_temps();
        true
    }

    // -----------------------------------------------------------------------
    // Economy
    // -----------------------------------------------------------------------

    /// Buy one `item`.
    ///
    /// Refused when the price exceeds the wallet, or for a chicken when the
    /// current coop is full. On success the chicken moves in, the owned
    /// count goes up, and the money is paid, all together.
    ///
    /// # Errors
    ///
    /// Propagates [`GameError`] if the current coop is missing.
    pub fn buy(&mut self, item: Item) -> Result<bool, GameError> {
        let price = item.buy_price();
        let Some(remaining) = self.money.checked_sub(price) else {
            return Ok(false);
        };

        if item == Item::Chicken {
            let coop = self.current_coop_mut()?;
            if coop.is_full() {
                return Ok(false);
            }
            coop.add_chicken()?;
        }

        let owned = self.owned.entry(item).or_insert(0);
        *owned = owned.saturating_add(1);
        self.money = remaining;

        tracing::debug!(item = item.name(), price = price, money = self.money, "Bought item");
        Ok(true)
    }

    /// Sow an owned `crop` packet over the whole current farm.
    ///
    /// Refused when no packet is owned or any plot is occupied. The packet
    /// is only used up on success.
    ///
    /// # Errors
    ///
    /// Propagates [`GameError`] if the current farm is missing.
    pub fn plant_seed_to_current(&mut self, crop: CropKind) -> Result<bool, GameError> {
        let item = Item::Seed(crop);
        if self.owned(item) == 0 {
            return Ok(false);
        }
        if !self.current_farm_mut()?.plant_a_seed(crop) {
            return Ok(false);
        }
        if let Some(count) = self.owned.get_mut(&item) {
            *count = count.saturating_sub(1);
        }
        tracing::debug!(crop = %crop, farm = self.current_farm, "Planted farm");
        Ok(true)
    }

    /// Put `product` in hand and drop the tool. Refused while already
    /// holding something.
    pub(crate) const fn pick_up(&mut self, product: Product) -> bool {
        if self.held.is_some() {
            return false;
        }
        self.held = Some(product);
        self.current_tool = None;
        true
    }

    /// Sell the held product and pay out any challenges it completes.
    ///
    /// Returns `false` if nothing is held.
    pub fn sell_held(&mut self) -> bool {
        let Some(product) = self.held.take() else {
            return false;
        };
        self.money = self.money.saturating_add(product.sell_price());
        tracing::debug!(product = ?product, money = self.money, "Sold product");
        self.update_challenges();
        true
    }

    // -----------------------------------------------------------------------
    // Labor
    // -----------------------------------------------------------------------

    /// Spend one stamina step, stopping at zero.
    pub const fn do_labor(&mut self) {
        self.actions_left = self.actions_left.saturating_sub(1);
    }

    /// Whether a stamina step is left.
    pub const fn can_work(&self) -> bool {
        self.actions_left > 0
    }

    /// Apply `tool` to `target`. See [`tools::use_tool`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError`] if the target does not exist.
    pub fn use_tool(&mut self, tool: Tool, target: ToolTarget) -> Result<bool, GameError> {
        tools::use_tool(self, tool, target)
    }

    /// Apply the selected tool to `target`. No-op without a tool.
    ///
    /// # Errors
    ///
    /// Returns [`GameError`] if the target does not exist.
    pub fn use_current_tool(&mut self, target: ToolTarget) -> Result<bool, GameError> {
        match self.current_tool {
            Some(tool) => self.use_tool(tool, target),
            None => Ok(false),
        }
    }

    // -----------------------------------------------------------------------
    // Day boundary
    // -----------------------------------------------------------------------

    /// Pay out completed challenges. Returns the points awarded.
    pub fn update_challenges(&mut self) -> u32 {
        let progress = self.progress();
        let awarded = self.challenges.check_challenges(progress);
        self.points = self.points.saturating_add(awarded);
        awarded
    }

    /// End the day.
    ///
    /// # Order of operations
    ///
    /// 1. Every farm, then every coop, runs its day-end
    /// 2. Stamina is restored
    /// 3. Day events roll and replace yesterday's list
    /// 4. Event challenges count today's events
    /// 5. Challenges are paid out
    pub fn end_day(&mut self) -> DayReport {
        let mut report = DayReport {
            day: self.day,
            plants_died: 0,
            plants_advanced: 0,
            eggs_laid: 0,
            events: Vec::new(),
            points_awarded: 0,
        };

        for farm in &mut self.farms {
            let tally = farm.end_day(self.dice.as_mut());
            report.plants_died = report.plants_died.saturating_add(tally.died);
            report.plants_advanced = report.plants_advanced.saturating_add(tally.advanced);
        }
        for coop in &mut self.coops {
            report.eggs_laid = report.eggs_laid.saturating_add(coop.end_day());
        }

        self.actions_left = self.actions_per_day;

        self.todays_events = self.events.try_events(&mut self.farms, self.dice.as_mut());
        self.challenges.log_day_end(&self.todays_events);
        report.points_awarded = self.update_challenges();
        report.events.clone_from(&self.todays_events);

        tracing::info!(
            day = self.day,
            money = self.money,
            points = self.points,
            died = report.plants_died,
            advanced = report.plants_advanced,
            eggs = report.eggs_laid,
            events = ?self.todays_events,
            "Day ended"
        );

        self.day = self.day.saturating_add(1);
        report
    }

    /// Read-only projection of the whole session.
    pub fn snapshot(&self) -> GameSnapshot {
        snapshot::capture(self)
    }
}
