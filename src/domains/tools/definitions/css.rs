//! Site stylesheet, served at `/css`.

use async_trait::async_trait;
use axum::http::header;
use axum::response::IntoResponse;

use crate::domains::tools::{Tool, ToolContext, ToolOutput, ToolRequest, ToolResult};

const STYLESHEET: &str = include_str!("../../../../assets/tuulbox.css");

#[derive(Debug, Default)]
pub struct CssTool;

#[async_trait]
impl Tool for CssTool {
    fn name(&self) -> Option<&'static str> {
        None
    }

    fn url_name(&self) -> Option<&'static str> {
        Some("css")
    }

    fn listed(&self) -> bool {
        false
    }

    async fn handle(&self, _ctx: &ToolContext, _request: &ToolRequest) -> ToolResult<ToolOutput> {
        let response = ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET);
        Ok(ToolOutput::Response(response.into_response()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::settings::Settings;
    use axum::http::Method;
    use std::sync::Arc;

    #[test]
    fn test_serves_stylesheet() {
        let ctx = ToolContext::new(Arc::new(Settings::default()), Arc::from(Vec::new()));
        let request = ToolRequest::new(Method::GET, "/css");
        let output = tokio_test::block_on(CssTool.handle(&ctx, &request)).unwrap();
        let ToolOutput::Response(response) = output else {
            panic!("expected a raw response");
        };
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/css; charset=utf-8"
        );
        assert!(STYLESHEET.contains(".everything"));
    }
}
