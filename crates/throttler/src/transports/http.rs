//! HttpTransport - one POST per dispatch to the registration endpoint

use contracts::{RegistryError, Transport};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use tracing::{debug, instrument};

/// Fixed document-creation endpoint of the registration API
pub const CREATE_DOCUMENT_URL: &str = "https://ismp.crpt.ru/api/v3/lk/documents/create";

/// Header carrying the detached signature
const SIGNATURE_HEADER: &str = "Signature";

/// Transport that POSTs serialized documents over HTTPS.
///
/// One request per `send`, no retry, response body not consumed; any
/// non-2xx status is reported as a send error.
pub struct HttpTransport {
    name: String,
    client: Client,
    url: Url,
}

impl HttpTransport {
    /// Create a transport pointed at the production endpoint
    pub fn new(name: impl Into<String>) -> Result<Self, RegistryError> {
        Self::with_url(name, CREATE_DOCUMENT_URL)
    }

    /// Create a transport pointed at a custom endpoint (tests, staging)
    #[instrument(name = "http_transport_with_url", skip(name))]
    pub fn with_url(name: impl Into<String>, url: &str) -> Result<Self, RegistryError> {
        let name = name.into();
        let url = Url::parse(url).map_err(|e| {
            RegistryError::transport_connection(&name, format!("invalid url '{url}': {e}"))
        })?;

        let client = Client::builder()
            .build()
            .map_err(|e| RegistryError::transport_connection(&name, e.to_string()))?;

        debug!(transport = %name, url = %url, "HttpTransport created");

        Ok(Self { name, client, url })
    }
}

impl Transport for HttpTransport {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(
        name = "http_transport_send",
        skip(self, payload, signature),
        fields(transport = %self.name, bytes = payload.len())
    )]
    async fn send(&self, payload: &[u8], signature: &str) -> Result<(), RegistryError> {
        let response = self
            .client
            .post(self.url.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(SIGNATURE_HEADER, signature)
            .body(payload.to_vec())
            .send()
            .await
            .map_err(|e| RegistryError::transport_send(&self.name, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RegistryError::transport_send(
                &self.name,
                format!("unexpected status {status}"),
            ));
        }

        // Response body intentionally not read.
        debug!(transport = %self.name, status = status.as_u16(), "Document posted");
        Ok(())
    }
}
