//! Tool dispatch against plots, egg spots, and the feeder.
//!
//! Every use goes through the same gate: nothing happens without stamina,
//! and stamina is only spent when the tool actually changed something.
//! Tool and target pairs that make no sense (a pail on an egg spot) are
//! quiet no-ops, not errors.

use farmer_types::{PlotPos, Product, Tool};

use crate::error::GameError;
use crate::state::GameState;

/// What a tool is applied to, resolved against the current farm or coop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolTarget {
    /// A plot of the current farm.
    Plot(PlotPos),
    /// An egg spot of the current coop.
    EggSpot(usize),
    /// The feeder of the current coop.
    Feeder,
}

/// Apply `tool` to `target`, spending one stamina step if it had an effect.
///
/// Returns whether the action had an effect.
///
/// # Errors
///
/// Returns [`GameError::World`] if the target does not exist in the current
/// farm or coop.
pub fn use_tool(state: &mut GameState, tool: Tool, target: ToolTarget) -> Result<bool, GameError> {
    if !state.can_work() {
        return Ok(false);
    }
    let acted = apply(state, tool, target)?;
    if acted {
        state.do_labor();
        tracing::debug!(tool = ?tool, target = ?target, "Tool used");
    }
    Ok(acted)
}

fn apply(state: &mut GameState, tool: Tool, target: ToolTarget) -> Result<bool, GameError> {
    match (tool, target) {
        (Tool::Hand, ToolTarget::Plot(pos)) => {
            if state.held().is_some() {
                return Ok(false);
            }
            let fruit = state.current_farm_mut()?.try_plot_mut(pos)?.harvest()?;
            Ok(fruit.is_some_and(|fruit| state.pick_up(Product::Fruit(fruit))))
        }
        (Tool::Hand, ToolTarget::EggSpot(index)) => {
            if state.held().is_some() {
                return Ok(false);
            }
            let egg = state.current_coop_mut()?.egg_spot_mut(index)?.collect();
            Ok(egg.is_some_and(|egg| state.pick_up(Product::Egg(egg))))
        }
        (Tool::Pail, ToolTarget::Plot(pos)) => {
            Ok(state.current_farm_mut()?.try_plot_mut(pos)?.water())
        }
        (Tool::Bag, ToolTarget::Plot(pos)) => {
            Ok(state.current_farm_mut()?.try_plot_mut(pos)?.fertilize())
        }
        (Tool::Bag, ToolTarget::Feeder) => Ok(state.current_coop_mut()?.feeder_mut().add_feed()),
        (Tool::Bottle, ToolTarget::Plot(pos)) => {
            Ok(state.current_farm_mut()?.try_plot_mut(pos)?.bug_spray())
        }
        (Tool::Scythe, ToolTarget::Plot(pos)) => {
            Ok(state.current_farm_mut()?.try_plot_mut(pos)?.destroy_plant())
        }
        _ => Ok(false),
    }
}
