//! HTTP transport implementation.
//!
//! Every request goes to a single fallback handler that buffers the body and
//! hands the request to the [`Dispatcher`]. axum's own router is not used for
//! matching: tool routing is the dispatcher's job.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use http_body_util::{BodyExt, LengthLimitError, Limited};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::{HttpConfig, TransportError, TransportResult};
use crate::core::TuulboxServer;
use crate::domains::tools::{Dispatcher, ToolRequest};

/// Largest request body accepted, in bytes.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    dispatcher: Arc<Dispatcher>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Run the HTTP transport until Ctrl-C.
    pub async fn run(self, server: TuulboxServer) -> TransportResult<()> {
        let addr = self.config.address();
        let app = server.router();

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!("Ready - listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        info!("HTTP transport finished");
        Ok(())
    }
}

/// Build the axum application around a dispatcher.
pub fn app(dispatcher: Arc<Dispatcher>) -> Router {
    Router::new()
        .fallback(handle_request)
        .with_state(AppState { dispatcher })
        .layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Entry point for every request.
async fn handle_request(State(state): State<AppState>, request: Request) -> Response {
    match into_tool_request(request).await {
        Ok(request) => state.dispatcher.dispatch(request).await,
        Err((status, err)) => {
            warn!("Rejected request: {}", err);
            (status, err.to_string()).into_response()
        }
    }
}

/// Buffer the body and convert to the form tools consume.
async fn into_tool_request(
    request: Request,
) -> Result<ToolRequest, (StatusCode, TransportError)> {
    let (parts, body) = request.into_parts();

    let body = Limited::new(body, MAX_BODY_BYTES)
        .collect()
        .await
        .map_err(|e| {
            let status = if e.is::<LengthLimitError>() {
                StatusCode::PAYLOAD_TOO_LARGE
            } else {
                StatusCode::BAD_REQUEST
            };
            (status, TransportError::body(e.to_string()))
        })?
        .to_bytes();

    Ok(ToolRequest {
        method: parts.method,
        path: parts.uri.path().to_string(),
        sub_path: String::new(),
        query: parts.uri.query().map(str::to_string),
        headers: parts.headers,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::settings::Settings;
    use crate::domains::assets::EmbeddedAssets;
    use crate::domains::tools::discover;
    use axum::body::{Body, to_bytes};
    use axum::http::{Method, header};
    use tower::ServiceExt;

    fn test_app() -> Router {
        let dispatcher = Dispatcher::new(
            discover(),
            Arc::new(Settings::default()),
            Arc::new(EmbeddedAssets),
        );
        app(Arc::new(dispatcher))
    }

    async fn send(request: axum::http::Request<Body>) -> (StatusCode, String) {
        let response = test_app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    fn get(uri: &str) -> axum::http::Request<Body> {
        axum::http::Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_stylesheet_is_served() {
        let response = test_app().oneshot(get("/css")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/css; charset=utf-8"
        );
    }

    #[tokio::test]
    async fn test_favicon_is_served() {
        let response = test_app().oneshot(get("/favicon.ico")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "image/x-icon"
        );
    }

    #[tokio::test]
    async fn test_home_page_lists_tools() {
        let (status, body) = send(get("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("href=\"/base64\""));
        assert!(body.contains("href=\"/json\""));
    }

    #[tokio::test]
    async fn test_unknown_path_is_404() {
        let (status, body) = send(get("/no/such/tool")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_form_post_reaches_nested_route() {
        let request = axum::http::Request::builder()
            .method(Method::POST)
            .uri("/base64/encode")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("input=hi"))
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("aGk="));
    }

    #[tokio::test]
    async fn test_oversized_body_is_rejected() {
        let request = axum::http::Request::builder()
            .method(Method::POST)
            .uri("/json")
            .body(Body::from(vec![b'a'; MAX_BODY_BYTES + 1]))
            .unwrap();
        let (status, _) = send(request).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    }
}
