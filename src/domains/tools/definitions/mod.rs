//! Tool definitions module.
//!
//! Each bundled tool is defined in its own file. [`REGISTERED`] is the list
//! discovery reads: a tool type that is not listed here is never served.

mod css;
mod encoding;
mod home;
mod json;

pub use css::CssTool;
pub use encoding::Base64Tool;
pub use home::HomeTool;
pub use json::JsonTool;

use super::discovery::{ToolFactory, construct};

/// Every tool type shipped with this program.
pub const REGISTERED: &[ToolFactory] = &[
    construct::<HomeTool>,
    construct::<CssTool>,
    construct::<Base64Tool>,
    construct::<JsonTool>,
];
