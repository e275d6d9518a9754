//! Submission - the unit of queued work.

use serde::{Deserialize, Serialize};

use crate::Document;

/// One pending registration: a document plus its detached signature.
///
/// Immutable once created. Owned by the submission queue until released,
/// then by the dispatch task until the outbound attempt completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// Document payload, serialized at dispatch time
    pub document: Document,
    /// Detached signature, carried as request metadata
    pub signature: String,
}

impl Submission {
    /// Create a new submission
    pub fn new(document: Document, signature: impl Into<String>) -> Self {
        Self {
            document,
            signature: signature.into(),
        }
    }
}
