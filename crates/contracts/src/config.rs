//! Throttle configuration contracts that can be shared across crates.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::RegistryError;

/// Throttle configuration: at most `limit` dispatches per `window`.
///
/// Immutable for the lifetime of a client; set once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrottleConfig {
    /// Fixed window duration over which the limit applies
    pub window: Duration,

    /// Maximum submissions released per window
    pub limit: usize,
}

impl ThrottleConfig {
    /// Create a new throttle configuration
    pub fn new(window: Duration, limit: usize) -> Self {
        Self { window, limit }
    }

    /// Convenience for the common "N requests per second" shape
    pub fn per_second(limit: usize) -> Self {
        Self::new(Duration::from_secs(1), limit)
    }

    /// Validate configuration values
    ///
    /// # Errors
    /// Returns a validation error if the limit is zero or the window is empty.
    pub fn validate(&self) -> Result<(), RegistryError> {
        if self.limit == 0 {
            return Err(RegistryError::config_validation(
                "limit",
                "request limit must be positive",
            ));
        }
        if self.window.is_zero() {
            return Err(RegistryError::config_validation(
                "window",
                "window duration must be positive",
            ));
        }
        Ok(())
    }
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self::per_second(5)
    }
}
