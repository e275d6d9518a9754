//! Transport trait - outbound call interface
//!
//! Defines the abstract interface for transports.

use crate::RegistryError;

/// Outbound call trait
///
/// All transport implementations must implement this trait. Methods take
/// `&self`: one transport instance is shared behind an `Arc` by every
/// concurrently running dispatch task.
#[trait_variant::make(Transport: Send)]
pub trait LocalTransport {
    /// Transport name (used for logging/metrics)
    fn name(&self) -> &str;

    /// Perform one outbound call with the serialized payload and its signature
    ///
    /// Exactly one attempt; the caller never retries.
    ///
    /// # Errors
    /// Returns send error (should include context)
    async fn send(&self, payload: &[u8], signature: &str) -> Result<(), RegistryError>;
}
