//! Transport layer for the Tuulbox server.
//!
//! Tuulbox is served over HTTP only. The transport owns the listener and
//! connection lifecycle and hands each request to the tool dispatcher.

mod config;
mod error;
pub mod http;

pub use config::HttpConfig;
pub use error::{TransportError, TransportResult};
pub use self::http::HttpTransport;
