//! Error types for the `farmer-core` crate.
//!
//! A [`GameError`] means the caller addressed something that does not exist
//! or broke a world invariant. Ordinary refusals (not enough money, no
//! stamina, nothing held) are `false` returns, not errors.

use farmer_world::WorldError;

use crate::config::ConfigError;

/// Errors that can occur during game operations.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// The session config failed validation.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },

    /// A farm index beyond the farm list was selected.
    #[error("can't select farm index {index}, there are only {count} farms")]
    FarmIndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of farms.
        count: usize,
    },

    /// A coop index beyond the coop list was selected.
    #[error("can't select coop index {index}, there are only {count} coops")]
    CoopIndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of coops.
        count: usize,
    },

    /// A world invariant was broken.
    #[error("world error: {source}")]
    World {
        /// The underlying world error.
        #[from]
        source: WorldError,
    },
}
