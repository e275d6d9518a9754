//! Layered error definitions
//!
//! Categorized by source: config / serialization / transport

use thiserror::Error;

/// Unified error type
#[derive(Debug, Error)]
pub enum RegistryError {
    // ===== Configuration Errors =====
    /// Configuration validation error
    #[error("config validation error at '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // ===== Serialization Errors =====
    /// Payload could not be converted to wire format
    #[error("payload serialization error for document '{doc_id}': {message}")]
    Serialization { doc_id: String, message: String },

    // ===== Transport Errors =====
    /// Outbound call failed
    #[error("transport '{transport}' send error: {message}")]
    TransportSend { transport: String, message: String },

    /// Transport could not be constructed or connected
    #[error("transport '{transport}' connection error: {message}")]
    TransportConnection { transport: String, message: String },

    // ===== General Errors =====
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl RegistryError {
    /// Create configuration validation error
    pub fn config_validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create payload serialization error
    pub fn serialization(doc_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Serialization {
            doc_id: doc_id.into(),
            message: message.into(),
        }
    }

    /// Create transport send error
    pub fn transport_send(transport: impl Into<String>, message: impl Into<String>) -> Self {
        Self::TransportSend {
            transport: transport.into(),
            message: message.into(),
        }
    }

    /// Create transport connection error
    pub fn transport_connection(transport: impl Into<String>, message: impl Into<String>) -> Self {
        Self::TransportConnection {
            transport: transport.into(),
            message: message.into(),
        }
    }
}
