//! Document payload contracts for the registration API.
//!
//! Field names follow the API's JSON schema. Most fields are snake_case on
//! the wire and match the Rust names; `importRequest` and `participantInn`
//! are the two camelCase exceptions and carry explicit renames.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A document to be registered with the external API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Nested description block
    pub description: Description,

    /// Document identifier
    pub doc_id: String,

    /// Document status
    pub doc_status: String,

    /// Document type code
    pub doc_type: String,

    /// Import flag (legacy camelCase wire name)
    #[serde(rename = "importRequest")]
    pub import_request: bool,

    /// Owner tax number
    pub owner_inn: String,

    /// Participant tax number
    pub participant_inn: String,

    /// Producer tax number
    pub producer_inn: String,

    /// Production date (ISO `YYYY-MM-DD` on the wire)
    pub production_date: NaiveDate,

    /// Production type code
    pub production_type: String,

    /// Products covered by this document
    pub products: Vec<Product>,

    /// Registration date
    pub reg_date: NaiveDate,

    /// Registration number
    pub reg_number: String,
}

/// Document description block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    /// Participant tax number (legacy camelCase wire name)
    #[serde(rename = "participantInn")]
    pub participant_inn: String,
}

impl Description {
    pub fn new(participant_inn: impl Into<String>) -> Self {
        Self {
            participant_inn: participant_inn.into(),
        }
    }
}

/// One product entry inside a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Certificate document code
    pub certificate_document: String,

    /// Certificate document date
    pub certificate_document_date: NaiveDate,

    /// Certificate document number
    pub certificate_document_number: String,

    /// Owner tax number
    pub owner_inn: String,

    /// Producer tax number
    pub producer_inn: String,

    /// Production date
    pub production_date: NaiveDate,

    /// Commodity classification code
    pub tnved_code: String,

    /// Unit identification code
    pub uit_code: String,

    /// Unit group identification code
    pub uitu_code: String,
}
