//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the server,
//! including error handling, configuration, settings persistence, server
//! lifecycle management and the HTTP transport.

pub mod config;
pub mod error;
pub mod server;
pub mod settings;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use server::TuulboxServer;
pub use settings::{JsonFileSettingsStore, Settings, SettingsStore};
pub use transport::{HttpConfig, HttpTransport};
