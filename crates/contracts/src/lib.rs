//! # Contracts
//!
//! Frozen interface contracts (ICD), defining inter-module data structures and traits.
//! All business crates can only depend on this crate, reverse dependencies are prohibited.
//!
//! ## Wire Model
//! - Document payloads serialize to the registration API's JSON schema
//! - Field names are snake_case on the wire except the two legacy
//!   camelCase fields (`importRequest`, `participantInn`)

mod config;
mod document;
mod error;
mod submission;
mod transport;

pub use config::*;
pub use document::*;
pub use error::*;
pub use submission::Submission;
pub use transport::*;
