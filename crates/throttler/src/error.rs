//! Throttler error types

use thiserror::Error;

/// Throttler-specific errors
#[derive(Debug, Error)]
pub enum ThrottlerError {
    /// Invalid throttle configuration
    #[error("invalid throttle config: {0}")]
    Config(#[source] contracts::RegistryError),

    /// Contract-level error (from transports)
    #[error("contract error: {0}")]
    Contract(#[from] contracts::RegistryError),
}
