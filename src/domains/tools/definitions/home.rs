//! Home page tool.
//!
//! Mounted at the site root. Lists every listed tool and filters them by the
//! `q` search parameter.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::domains::tools::layout::{SITE_TITLE, html_escape};
use crate::domains::tools::{Tool, ToolContext, ToolOutput, ToolRequest, ToolResult};

#[derive(Debug, Default, Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: String,
}

/// Home page - the tool index and search results.
#[derive(Debug, Default)]
pub struct HomeTool;

impl HomeTool {
    fn matches(tool: &dyn Tool, needle: &str) -> bool {
        [tool.name(), tool.keywords(), tool.description()]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

#[async_trait]
impl Tool for HomeTool {
    fn name(&self) -> Option<&'static str> {
        None
    }

    fn url_name(&self) -> Option<&'static str> {
        None
    }

    fn listed(&self) -> bool {
        false
    }

    async fn handle(&self, ctx: &ToolContext, request: &ToolRequest) -> ToolResult<ToolOutput> {
        let params: SearchParams = request.query_params()?;
        let needle = params.q.trim().to_lowercase();
        debug!("Home search {:?}", needle);

        let items: Vec<String> = ctx
            .listed_tools()
            .filter(|tool| needle.is_empty() || Self::matches(&***tool, &needle))
            .filter_map(|tool| {
                let url = tool.url_name()?;
                let name = html_escape(tool.name().unwrap_or(url));
                let description = tool
                    .description()
                    .map(|d| format!(" - {}", html_escape(d)))
                    .unwrap_or_default();
                Some(format!("<li><a href=\"/{url}\">{name}</a>{description}</li>"))
            })
            .collect();

        let body = if items.is_empty() {
            format!(
                "<p>No tools match &quot;{}&quot;.</p>",
                html_escape(params.q.trim())
            )
        } else {
            format!("<ul class=\"tools\">\n{}\n</ul>", items.join("\n"))
        };

        Ok(ToolOutput::page(SITE_TITLE, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::settings::Settings;
    use crate::domains::tools::definitions::{Base64Tool, JsonTool};
    use crate::domains::tools::testing::{FixtureTool, tool_set};
    use axum::http::Method;
    use std::sync::Arc;

    fn context() -> ToolContext {
        let tools: Arc<[Arc<dyn Tool>]> = Arc::from(vec![
            Arc::new(HomeTool) as Arc<dyn Tool>,
            Arc::new(Base64Tool),
            Arc::new(JsonTool),
        ]);
        ToolContext::new(Arc::new(Settings::default()), tools)
    }

    fn body_of(output: ToolOutput) -> String {
        match output {
            ToolOutput::Page { body, .. } => body,
            ToolOutput::Response(_) => panic!("expected a page"),
        }
    }

    #[tokio::test]
    async fn test_lists_listed_tools() {
        let request = ToolRequest::new(Method::GET, "/");
        let body = body_of(HomeTool.handle(&context(), &request).await.unwrap());
        assert!(body.contains("href=\"/base64\""));
        assert!(body.contains("href=\"/json\""));
        assert_eq!(body.matches("<li>").count(), 2);
    }

    #[tokio::test]
    async fn test_search_filters_case_insensitively() {
        let request = ToolRequest::new(Method::GET, "/?q=BASE64");
        let body = body_of(HomeTool.handle(&context(), &request).await.unwrap());
        assert!(body.contains("href=\"/base64\""));
        assert!(!body.contains("href=\"/json\""));
    }

    #[tokio::test]
    async fn test_search_without_hits_is_escaped() {
        let request = ToolRequest::new(Method::GET, "/?q=%3Cscript%3E");
        let body = body_of(HomeTool.handle(&context(), &request).await.unwrap());
        assert!(body.contains("&lt;script&gt;"));
        assert!(!body.contains("<script>"));
    }

    #[test]
    fn test_unlisted_tools_are_hidden() {
        let tools = tool_set(vec![
            FixtureTool::new("Visible", Some("Visible"), Some("visible")),
            FixtureTool::new("Hidden", Some("Hidden"), Some("hidden")).unlisted(),
        ]);
        let ctx = ToolContext::new(Arc::new(Settings::default()), tools);
        let request = ToolRequest::new(Method::GET, "/");
        let body = body_of(tokio_test::block_on(HomeTool.handle(&ctx, &request)).unwrap());
        assert!(body.contains("href=\"/visible\""));
        assert!(!body.contains("href=\"/hidden\""));
    }
}
