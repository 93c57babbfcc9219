//! JSON formatter.
//!
//! Posting `input` to the root pretty-prints it; `/json/minify` compacts it.

use async_trait::async_trait;
use axum::http::Method;
use serde::Deserialize;
use serde_json::Value;

use crate::domains::tools::layout::html_escape;
use crate::domains::tools::{
    Tool, ToolContext, ToolError, ToolOutput, ToolRequest, ToolResolver, ToolResult,
};

const TITLE: &str = "JSON formatter";

#[derive(Debug, Deserialize)]
struct JsonParams {
    input: String,
}

#[derive(Debug, Default)]
pub struct JsonTool;

impl JsonTool {
    fn parse(input: &str) -> ToolResult<Value> {
        serde_json::from_str(input)
            .map_err(|e| ToolError::invalid_arguments(format!("invalid JSON: {e}")))
    }

    pub fn pretty(input: &str) -> ToolResult<String> {
        serde_json::to_string_pretty(&Self::parse(input)?)
            .map_err(|e| ToolError::internal(e.to_string()))
    }

    pub fn minify(input: &str) -> ToolResult<String> {
        serde_json::to_string(&Self::parse(input)?).map_err(|e| ToolError::internal(e.to_string()))
    }

    fn form(input: &str) -> String {
        format!(
            r#"<form method="post" action="/json">
<textarea name="input" rows="12" cols="60">{input}</textarea>
<p><input type="submit" value="Format"> <input type="submit" value="Minify" formaction="/json/minify"></p>
</form>"#,
            input = html_escape(input),
        )
    }

    fn result_page(input: &str, output: &str) -> ToolOutput {
        let body = format!("{}\n<pre>{}</pre>", Self::form(input), html_escape(output));
        ToolOutput::page(TITLE, body)
    }

    async fn minify_route(_ctx: ToolContext, request: ToolRequest) -> ToolResult<ToolOutput> {
        let params: JsonParams = request.form_params()?;
        Ok(Self::result_page(&params.input, &Self::minify(&params.input)?))
    }
}

#[async_trait]
impl Tool for JsonTool {
    fn name(&self) -> Option<&'static str> {
        Some(TITLE)
    }

    fn url_name(&self) -> Option<&'static str> {
        Some("json")
    }

    fn keywords(&self) -> Option<&'static str> {
        Some("json pretty print format minify indent")
    }

    fn description(&self) -> Option<&'static str> {
        Some("Pretty-print or minify JSON documents.")
    }

    fn routes(&self, resolver: ToolResolver) -> ToolResolver {
        resolver.route("/minify", Self::minify_route)
    }

    async fn handle(&self, _ctx: &ToolContext, request: &ToolRequest) -> ToolResult<ToolOutput> {
        if request.method != Method::POST {
            return Ok(ToolOutput::page(TITLE, Self::form("")));
        }
        let params: JsonParams = request.form_params()?;
        Ok(Self::result_page(&params.input, &Self::pretty(&params.input)?))
    }
}
