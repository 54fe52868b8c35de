//! Tools, day events, challenges, and the game session for Farmer.
//!
//! [`GameState`] is the aggregate root a front end drives: it buys and
//! sells, plants, applies tools through [`ToolTarget`]s, and runs the day
//! boundary that advances farms and coops, rolls day events, and pays out
//! the challenge board.
//!
//! # Modules
//!
//! - [`challenge`] -- Challenge goals, the escalating ladder, and the board.
//! - [`config`] -- Configuration loading from `farmer-config.yaml`.
//! - [`error`] -- Error types for game operations.
//! - [`events`] -- Rain and worm day events.
//! - [`selection`] -- Presentation-side highlight cursor.
//! - [`snapshot`] -- Read-only projections of a session.
//! - [`state`] -- The [`GameState`] session.
//! - [`tools`] -- Tool dispatch with stamina accounting.

pub mod challenge;
pub mod config;
pub mod error;
pub mod events;
pub mod selection;
pub mod snapshot;
pub mod state;
pub mod tools;

pub use challenge::{Challenge, ChallengeHandler, ChallengeKind, ChallengeLadder, ChallengeProgress};
pub use config::{ConfigError, GameConfig};
pub use error::GameError;
pub use events::{DayEvent, DayEventHandler};
pub use selection::Highlights;
pub use state::{DayReport, GameState};
pub use tools::ToolTarget;
