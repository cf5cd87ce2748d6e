//! Error types for the soul engine binary.
//!
//! [`EngineError`] wraps every failure mode of startup and script replay
//! so `main` can propagate with `?`.

/// Top-level error for the soul engine binary.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: soul_core::ConfigError,
    },

    /// A session operation failed.
    #[error("session error: {source}")]
    Session {
        /// The underlying session error.
        #[from]
        source: soul_core::SessionError,
    },

    /// The deed script could not be read or contains an invalid entry.
    #[error("script error: {message}")]
    Script {
        /// Description of the script failure.
        message: String,
    },

    /// The final garden snapshot could not be serialized.
    #[error("output error: {source}")]
    Output {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },
}
