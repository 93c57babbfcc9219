//! Fixture tools for registry, routing and dispatch tests.

use std::sync::Arc;

use async_trait::async_trait;

use super::contract::{Tool, ToolContext, ToolOutput, ToolRequest};
use super::error::{ToolError, ToolResult};

/// How a fixture responds when handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    /// Returns a page whose body is the fixture label.
    Echo,
    /// Returns an invalid-arguments error.
    Fail,
    /// Panics inside the handler.
    Panic,
}

/// A tool with configurable identity.
pub struct FixtureTool {
    pub label: &'static str,
    pub name: Option<&'static str>,
    pub url_name: Option<&'static str>,
    pub enabled: bool,
    pub listed: bool,
    pub behavior: Behavior,
}

impl FixtureTool {
    pub fn new(label: &'static str, name: Option<&'static str>, url_name: Option<&'static str>) -> Self {
        Self {
            label,
            name,
            url_name,
            enabled: true,
            listed: true,
            behavior: Behavior::Echo,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn unlisted(mut self) -> Self {
        self.listed = false;
        self
    }

    pub fn behaving(mut self, behavior: Behavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn shared(self) -> Arc<dyn Tool> {
        Arc::new(self)
    }
}

#[async_trait]
impl Tool for FixtureTool {
    fn name(&self) -> Option<&'static str> {
        self.name
    }

    fn url_name(&self) -> Option<&'static str> {
        self.url_name
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    fn listed(&self) -> bool {
        self.listed
    }

    fn type_name(&self) -> &'static str {
        self.label
    }

    async fn handle(&self, _ctx: &ToolContext, _request: &ToolRequest) -> ToolResult<ToolOutput> {
        match self.behavior {
            Behavior::Echo => Ok(ToolOutput::page(self.label, self.label)),
            Behavior::Fail => Err(ToolError::invalid_arguments(self.label)),
            Behavior::Panic => panic!("fixture {} panicked", self.label),
        }
    }
}

/// Build a shared tool set from fixtures.
pub fn tool_set(tools: Vec<FixtureTool>) -> Arc<[Arc<dyn Tool>]> {
    tools.into_iter().map(FixtureTool::shared).collect()
}
