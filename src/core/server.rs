//! Server assembly and lifecycle.
//!
//! The server owns the configuration and the dispatcher built from the
//! discovered tool set. Adding a tool never requires touching this file:
//! tools are registered in `domains/tools/definitions/`.

use std::sync::Arc;

use axum::Router;
use tracing::info;

use super::config::Config;
use super::settings::Settings;
use super::transport::http;
use crate::domains::assets::EmbeddedAssets;
use crate::domains::tools::{Dispatcher, discover};

/// The Tuulbox server.
#[derive(Clone)]
pub struct TuulboxServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Request dispatcher shared by all connections.
    dispatcher: Arc<Dispatcher>,
}

impl TuulboxServer {
    /// Create a server over the registered tools.
    pub fn new(config: Config, settings: Settings) -> Self {
        let dispatcher = Dispatcher::new(
            discover(),
            Arc::new(settings),
            Arc::new(EmbeddedAssets),
        );

        Self {
            config: Arc::new(config),
            dispatcher: Arc::new(dispatcher),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    pub fn dispatcher(&self) -> &Arc<Dispatcher> {
        &self.dispatcher
    }

    /// Build the routing tree now instead of on the first request.
    pub fn warm_up(&self) {
        let routing = self.dispatcher.routing();
        info!(
            "Routing ready: {} tools mounted at {:?}",
            self.dispatcher.tools().len(),
            routing.segments()
        );
    }

    /// The axum application serving this server.
    pub fn router(&self) -> Router {
        http::app(Arc::clone(&self.dispatcher))
    }
}
