//! Error types for the server binary.
//!
//! [`RolodexError`] is the top-level error type that wraps all possible
//! failure modes during startup and serving.

use rolodex_api::ServerError;

/// Top-level error for the server binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum RolodexError {
    /// Configuration loading or validation failed.
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),

    /// The logging subscriber could not be installed.
    #[error("logging error: {message}")]
    Logging {
        /// Description of the logging failure.
        message: String,
    },

    /// The HTTP server failed to bind or serve.
    #[error(transparent)]
    Server {
        /// The underlying server error.
        #[from]
        source: ServerError,
    },
}
