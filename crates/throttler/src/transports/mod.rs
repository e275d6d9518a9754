//! Transport implementations
//!
//! Contains HttpTransport and LogTransport.

mod http;
mod log;

pub use self::http::{HttpTransport, CREATE_DOCUMENT_URL};
pub use self::log::LogTransport;
