//! The capability contract every tool implements.
//!
//! A tool is a self-describing request handler: it reports its identity
//! (name, URL segment, listing metadata) and handles requests routed to it.
//! Adding a tool means implementing [`Tool`] and registering the type in
//! `definitions::REGISTERED`; discovery and dispatch need no changes.

use std::sync::Arc;

use async_trait::async_trait;
use axum::response::Response;
use bytes::Bytes;
use http::{HeaderMap, Method, header};
use serde::de::DeserializeOwned;

use super::error::{ToolError, ToolResult};
use super::routing::ToolResolver;
use crate::core::settings::Settings;

/// A request as seen by a tool.
#[derive(Debug, Clone)]
pub struct ToolRequest {
    /// HTTP method.
    pub method: Method,

    /// Full request path, e.g. `/base64/encode`.
    pub path: String,

    /// Path beneath the tool's mount point, e.g. `/encode`.
    /// Empty when the request targets the root of the tool.
    pub sub_path: String,

    /// Raw query string, without the leading `?`.
    pub query: Option<String>,

    /// Request headers.
    pub headers: HeaderMap,

    /// Request body, fully buffered.
    pub body: Bytes,
}

impl ToolRequest {
    /// Create a bodyless request for the given method and path-and-query.
    pub fn new(method: Method, path_and_query: &str) -> Self {
        let (path, query) = match path_and_query.split_once('?') {
            Some((path, query)) => (path, Some(query.to_string())),
            None => (path_and_query, None),
        };

        Self {
            method,
            path: path.to_string(),
            sub_path: String::new(),
            query,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    /// Host the request was addressed to, without the port.
    pub fn host(&self) -> Option<&str> {
        let host = self.headers.get(header::HOST)?.to_str().ok()?;
        Some(match host.rsplit_once(':') {
            Some((name, port)) if port.bytes().all(|b| b.is_ascii_digit()) => name,
            _ => host,
        })
    }

    /// Deserialize the query string.
    pub fn query_params<T: DeserializeOwned>(&self) -> ToolResult<T> {
        serde_urlencoded::from_str(self.query.as_deref().unwrap_or(""))
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))
    }

    /// Deserialize a form-encoded body, falling back to the query string
    /// for bodyless requests.
    pub fn form_params<T: DeserializeOwned>(&self) -> ToolResult<T> {
        if self.body.is_empty() {
            return self.query_params();
        }
        serde_urlencoded::from_bytes(&self.body)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))
    }
}

/// What a tool hands back to the dispatcher.
pub enum ToolOutput {
    /// HTML content to be wrapped in the site layout.
    Page { title: String, body: String },

    /// A complete response, sent as-is.
    Response(Response),
}

impl ToolOutput {
    /// Create a page output.
    pub fn page(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Page {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Shared state a tool can read while handling a request.
#[derive(Clone)]
pub struct ToolContext {
    settings: Arc<Settings>,
    tools: Arc<[Arc<dyn Tool>]>,
}

impl ToolContext {
    pub fn new(settings: Arc<Settings>, tools: Arc<[Arc<dyn Tool>]>) -> Self {
        Self { settings, tools }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Every tool in the registry, in discovery order.
    pub fn tools(&self) -> &[Arc<dyn Tool>] {
        &self.tools
    }

    /// Tools that should be advertised to users.
    pub fn listed_tools(&self) -> impl Iterator<Item = &Arc<dyn Tool>> {
        self.tools.iter().filter(|tool| tool.listed())
    }
}

/// The contract implemented by every tool.
#[async_trait]
pub trait Tool: Send + Sync + 'static {
    /// Human-readable name. Unique among tools that have one.
    fn name(&self) -> Option<&'static str>;

    /// URL segment the tool is mounted under. `None` mounts the tool at the
    /// site root; at most one tool may do so. Never `Some("")`.
    fn url_name(&self) -> Option<&'static str>;

    /// Disabled tools are dropped at discovery and never routed.
    fn enabled(&self) -> bool {
        true
    }

    /// Whether the tool is advertised on the home page.
    fn listed(&self) -> bool {
        true
    }

    fn keywords(&self) -> Option<&'static str> {
        None
    }

    fn description(&self) -> Option<&'static str> {
        None
    }

    /// Extra script included in the layout of this tool's pages.
    fn js(&self) -> Option<&'static str> {
        None
    }

    /// Extra stylesheet included in the layout of this tool's pages.
    fn css(&self) -> Option<&'static str> {
        None
    }

    /// Identity of the implementing type, used in verification reports.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Extend the tool's own resolver with nested sub-paths.
    ///
    /// The resolver passed in already maps the tool root to [`Tool::handle`].
    fn routes(&self, resolver: ToolResolver) -> ToolResolver {
        resolver
    }

    /// Handle a request addressed to the root of the tool.
    async fn handle(&self, ctx: &ToolContext, request: &ToolRequest) -> ToolResult<ToolOutput>;
}
