//! Tools domain module.
//!
//! Everything Tuulbox serves is a tool: a type implementing [`Tool`] that
//! knows its own name and URL segment and handles the requests routed to it.
//!
//! ## Architecture
//!
//! - `contract.rs` - The [`Tool`] trait and request/response types
//! - `definitions/` - Bundled tools (one file per tool) and the registration list
//! - `discovery.rs` - Builds and caches the enabled tool set
//! - `validation.rs` - Checks the tool set for naming conflicts
//! - `routing.rs` - Two-level routing tree
//! - `dispatch.rs` - Per-request entry point
//! - `layout.rs` - Site layout wrapped around tool pages
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` implementing [`Tool`] and `Default`
//! 2. Add `construct::<MyTool>` to `definitions::REGISTERED`
//!
//! Nested sub-paths are declared by the tool itself in [`Tool::routes`].

mod contract;
pub mod definitions;
mod discovery;
mod dispatch;
mod error;
pub mod layout;
mod routing;
#[cfg(test)]
pub(crate) mod testing;
mod validation;

pub use contract::{Tool, ToolContext, ToolOutput, ToolRequest};
pub use discovery::{ToolFactory, construct, discover, discover_from};
pub use dispatch::Dispatcher;
pub use error::{ToolError, ToolResult};
pub use routing::{Resolved, RouteHandler, RoutingTree, ToolResolver, build_routing};
pub use validation::{Criterion, Defect, InvalidToolSet, validate, verify};
