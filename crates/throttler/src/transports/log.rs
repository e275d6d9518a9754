//! LogTransport - logs dispatch attempts via tracing

use contracts::{RegistryError, Transport};
use tracing::{info, instrument};

/// Transport that only logs; useful for demos and debugging
pub struct LogTransport {
    name: String,
}

impl LogTransport {
    /// Create a new LogTransport with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Transport for LogTransport {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(
        name = "log_transport_send",
        skip(self, payload, signature),
        fields(transport = %self.name)
    )]
    async fn send(&self, payload: &[u8], signature: &str) -> Result<(), RegistryError> {
        info!(
            transport = %self.name,
            bytes = payload.len(),
            signature_len = signature.len(),
            "Dispatch attempt"
        );
        Ok(())
    }
}
