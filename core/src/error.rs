//! Error types for the stopwatch runtime and its configuration
//!
//! State transitions never fail; these only cover the edges around them.

use thiserror::Error;

/// Underlying cause of a failed config load or save
#[cfg(feature = "persist")]
pub type PersistSource = confy::ConfyError;

/// Without `persist` nothing is ever loaded or saved
#[cfg(not(feature = "persist"))]
pub type PersistSource = std::convert::Infallible;

/// Errors raised when feeding input into a running widget
#[derive(Debug, Error)]
pub enum StopwatchError {
    #[error("stopwatch has been torn down")]
    TornDown,

    #[error("no control with role '{role}'")]
    UnknownControl { role: String },
}

/// Errors during configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration")]
    Load(#[source] PersistSource),

    #[error("failed to save configuration")]
    Save(#[source] PersistSource),

    #[error("invalid configuration: {reason}")]
    Invalid { reason: String },
}
