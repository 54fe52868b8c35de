//! Error types for the engine binary.

/// Top-level error for the engine binary.
///
/// Each variant wraps a specific subsystem error, so `main` can propagate
/// everything with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading or validation failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: farmer_core::ConfigError,
    },

    /// A game command hit a broken invariant.
    #[error("game error: {source}")]
    Game {
        /// The underlying game error.
        #[from]
        source: farmer_core::GameError,
    },

    /// The final snapshot could not be serialized.
    #[error("snapshot serialization failed: {source}")]
    Json {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },
}
