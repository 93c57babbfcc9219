//! Two-level routing.
//!
//! The outer level maps the first path segment to a tool (the tool without a
//! URL name takes everything no other tool claims). The inner level is a
//! [`ToolResolver`] owned by that tool, mapping the rest of the path to a
//! handler. The registry only installs the tool root; a tool adds nested
//! paths through [`Tool::routes`](super::Tool::routes).

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use tracing::{debug, info, warn};

use super::contract::{Tool, ToolContext, ToolOutput, ToolRequest};
use super::error::ToolResult;

/// Future returned by a route handler.
pub type RouteFuture = BoxFuture<'static, ToolResult<ToolOutput>>;

/// A handler bound to one path inside a tool.
pub type RouteHandler = Arc<dyn Fn(ToolContext, ToolRequest) -> RouteFuture + Send + Sync>;

/// Sub-path resolver owned by a single tool.
#[derive(Clone, Default)]
pub struct ToolResolver {
    routes: HashMap<String, RouteHandler>,
}

impl ToolResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `path` (relative to the tool mount, `""` for the root) to a
    /// handler. Trailing slashes are ignored.
    pub fn route<F, Fut>(mut self, path: &str, handler: F) -> Self
    where
        F: Fn(ToolContext, ToolRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ToolResult<ToolOutput>> + Send + 'static,
    {
        let handler: RouteHandler = Arc::new(move |ctx, request| handler(ctx, request).boxed());
        self.routes.insert(normalize(path).to_string(), handler);
        self
    }

    /// Find the handler for a sub-path.
    pub fn resolve(&self, sub_path: &str) -> Option<&RouteHandler> {
        self.routes.get(normalize(sub_path))
    }

    /// Bound sub-paths, sorted.
    pub fn paths(&self) -> Vec<&str> {
        let mut paths: Vec<_> = self.routes.keys().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }
}

impl fmt::Debug for ToolResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolResolver")
            .field("paths", &self.paths())
            .finish()
    }
}

fn normalize(path: &str) -> &str {
    path.trim_end_matches('/')
}

/// A tool together with the resolver for its sub-paths.
struct Mount {
    tool: Arc<dyn Tool>,
    resolver: ToolResolver,
}

/// Outcome of resolving a request path.
pub struct Resolved<'a> {
    pub tool: &'a Arc<dyn Tool>,
    pub handler: &'a RouteHandler,
    /// Path beneath the tool mount.
    pub sub_path: String,
}

/// The outer routing level: mount segment to tool.
pub struct RoutingTree {
    /// Keyed by URL name; the top-level tool is under `""`.
    mounts: HashMap<String, Mount>,
    /// When set, only requests addressed to this domain (or a subdomain)
    /// are routed.
    domain: Option<String>,
}

impl RoutingTree {
    /// Resolve a request to a tool handler, or `None` if nothing matches.
    pub fn resolve(&self, host: Option<&str>, path: &str) -> Option<Resolved<'_>> {
        if !self.accepts_host(host) {
            debug!("Host {:?} rejected by domain filter {:?}", host, self.domain);
            return None;
        }

        let trimmed = path.strip_prefix('/').unwrap_or(path);
        let (segment, rest) = match trimmed.find('/') {
            Some(idx) => trimmed.split_at(idx),
            None => (trimmed, ""),
        };

        // A named mount owns its whole prefix; there is no fallback to the
        // top-level tool once a segment matched.
        let (mount, sub_path) = match self.mounts.get(segment).filter(|_| !segment.is_empty()) {
            Some(mount) => (mount, rest),
            None => (self.mounts.get("")?, path),
        };

        let handler = mount.resolver.resolve(sub_path)?;
        Some(Resolved {
            tool: &mount.tool,
            handler,
            sub_path: normalize(sub_path).to_string(),
        })
    }

    /// Mount segments, sorted; `""` is the top-level tool.
    pub fn segments(&self) -> Vec<&str> {
        let mut segments: Vec<_> = self.mounts.keys().map(String::as_str).collect();
        segments.sort_unstable();
        segments
    }

    fn accepts_host(&self, host: Option<&str>) -> bool {
        let Some(domain) = self.domain.as_deref() else {
            return true;
        };
        let Some(host) = host else {
            return false;
        };
        let host = host.to_ascii_lowercase();
        let domain = domain.to_ascii_lowercase();
        host == domain || host.ends_with(&format!(".{domain}"))
    }
}

impl fmt::Debug for RoutingTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoutingTree")
            .field("segments", &self.segments())
            .field("domain", &self.domain)
            .finish()
    }
}

/// Build the routing tree for a tool set.
///
/// Each tool gets its own resolver whose root calls [`Tool::handle`], which
/// the tool may then extend, and is mounted under `url_name` (or the site
/// root when it has none).
pub fn build_routing(tools: &[Arc<dyn Tool>], domain: Option<&str>) -> RoutingTree {
    let mut mounts: HashMap<String, Mount> = HashMap::new();

    for tool in tools {
        let segment = tool.url_name().unwrap_or("");

        if let Some(existing) = mounts.get(segment) {
            warn!(
                "Mount /{} already taken by {}; ignoring {}",
                segment,
                existing.tool.type_name(),
                tool.type_name()
            );
            continue;
        }

        let handler_tool = Arc::clone(tool);
        let root = ToolResolver::new().route("", move |ctx, request| {
            let tool = Arc::clone(&handler_tool);
            async move { tool.handle(&ctx, &request).await }
        });
        let resolver = tool.routes(root);

        debug!("Mounted {} at /{} ({:?})", tool.type_name(), segment, resolver);
        mounts.insert(
            segment.to_string(),
            Mount {
                tool: Arc::clone(tool),
                resolver,
            },
        );
    }

    info!("Routing tree built with {} mounts", mounts.len());

    RoutingTree {
        mounts,
        domain: domain.map(str::to_string),
    }
}
