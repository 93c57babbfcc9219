//! Request dispatch: the single entry point for every HTTP request.

use std::panic::AssertUnwindSafe;
use std::sync::{Arc, OnceLock};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use futures::FutureExt;
use tracing::{debug, error, instrument, warn};

use super::contract::{Tool, ToolContext, ToolOutput, ToolRequest};
use super::layout::render_page;
use super::routing::{RoutingTree, build_routing};
use crate::core::settings::Settings;
use crate::domains::assets::{AssetSource, FAVICON_PATH};

/// Routes requests to tools.
///
/// Holds the tool set, the settings and the asset source for the lifetime of
/// the server. The routing tree is built on first use and then shared by all
/// requests.
pub struct Dispatcher {
    tools: Arc<[Arc<dyn Tool>]>,
    settings: Arc<Settings>,
    assets: Arc<dyn AssetSource>,
    routing: OnceLock<RoutingTree>,
}

impl Dispatcher {
    pub fn new(
        tools: Arc<[Arc<dyn Tool>]>,
        settings: Arc<Settings>,
        assets: Arc<dyn AssetSource>,
    ) -> Self {
        Self {
            tools,
            settings,
            assets,
            routing: OnceLock::new(),
        }
    }

    pub fn tools(&self) -> &[Arc<dyn Tool>] {
        &self.tools
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The routing tree, built on first access.
    pub fn routing(&self) -> &RoutingTree {
        self.routing
            .get_or_init(|| build_routing(&self.tools, self.settings.use_domain.as_deref()))
    }

    /// Handle one request.
    ///
    /// The favicon is served before routing is consulted. Unmatched paths get
    /// an empty 404. Errors and panics inside a tool only affect this request.
    #[instrument(skip_all, fields(method = %request.method, path = %request.path))]
    pub async fn dispatch(&self, mut request: ToolRequest) -> Response {
        if request.path == FAVICON_PATH {
            return self.assets.favicon().into_response();
        }

        let Some(resolved) = self.routing().resolve(request.host(), &request.path) else {
            debug!("No route matched");
            return StatusCode::NOT_FOUND.into_response();
        };

        let tool = Arc::clone(resolved.tool);
        let handler = Arc::clone(resolved.handler);
        request.sub_path = resolved.sub_path;
        debug!("Routed to {} (sub-path {:?})", tool.type_name(), request.sub_path);

        let ctx = ToolContext::new(Arc::clone(&self.settings), Arc::clone(&self.tools));
        let outcome = AssertUnwindSafe(handler(ctx.clone(), request))
            .catch_unwind()
            .await;

        match outcome {
            Ok(Ok(output)) => render(&*tool, &ctx, output),
            Ok(Err(err)) => {
                warn!("Tool {} failed: {}", tool.type_name(), err);
                err.into_response()
            }
            Err(_) => {
                error!("Tool {} panicked while handling request", tool.type_name());
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

fn render(tool: &dyn Tool, ctx: &ToolContext, output: ToolOutput) -> Response {
    match output {
        ToolOutput::Page { title, body } => render_page(tool, ctx, &title, &body).into_response(),
        ToolOutput::Response(response) => response,
    }
}
