//! Tool discovery.
//!
//! Tools are found through an explicit registration list rather than by
//! scanning loaded types: every entry of `definitions::REGISTERED` is a
//! [`ToolFactory`] that constructs one instance of one tool type. Because
//! registration goes through [`construct`], a tool type without a
//! no-argument constructor is rejected at compile time.
//!
//! The discovered set is built once per process and shared afterwards.

use std::sync::{Arc, OnceLock};

use tracing::{debug, info};

use super::contract::Tool;
use super::definitions::REGISTERED;

/// Constructs one instance of a registered tool type.
pub type ToolFactory = fn() -> Arc<dyn Tool>;

/// Factory for any tool type with a no-argument constructor.
pub fn construct<T: Tool + Default>() -> Arc<dyn Tool> {
    Arc::new(T::default())
}

static TOOLS: OnceLock<Arc<[Arc<dyn Tool>]>> = OnceLock::new();

/// The enabled tools of this program, in registration order.
///
/// Built on first access; every later call returns the same set.
pub fn discover() -> Arc<[Arc<dyn Tool>]> {
    let tools = TOOLS.get_or_init(|| {
        let tools = discover_from(REGISTERED);
        info!(
            "Discovered {} enabled tools ({} registered)",
            tools.len(),
            REGISTERED.len()
        );
        tools
    });
    Arc::clone(tools)
}

/// Instantiate every factory once and keep the enabled instances.
pub fn discover_from(factories: &[ToolFactory]) -> Arc<[Arc<dyn Tool>]> {
    factories
        .iter()
        .map(|factory| factory())
        .filter(|tool| {
            if !tool.enabled() {
                debug!("Skipping disabled tool {}", tool.type_name());
            }
            tool.enabled()
        })
        .collect()
}
