//! Tuulbox Library
//!
//! A small web server hosting a collection of self-describing tools. Each
//! tool declares its own name and URL segment; the server discovers the
//! registered tools, checks them for naming conflicts and routes requests
//! to them.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, settings, the server and the HTTP transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: The tool contract, discovery, verification, routing and dispatch
//!   - **assets**: Static assets served ahead of routing
//!
//! # Example
//!
//! ```rust,no_run
//! use tuulbox::core::{Config, HttpTransport, JsonFileSettingsStore, Settings, TuulboxServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let settings = Settings::load_or_default(&JsonFileSettingsStore::new(&config.settings.path))?;
//!     let server = TuulboxServer::new(config.clone(), settings);
//!     HttpTransport::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, Result, TuulboxServer};
pub use domains::tools::{Tool, ToolContext, ToolOutput, ToolRequest, discover, verify};
