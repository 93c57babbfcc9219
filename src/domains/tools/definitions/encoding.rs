//! Base64 encoder and decoder.
//!
//! The root shows a form; `/base64/encode` and `/base64/decode` take an
//! `input` parameter from the query string or a form-encoded body.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::domains::tools::layout::html_escape;
use crate::domains::tools::{
    Tool, ToolContext, ToolError, ToolOutput, ToolRequest, ToolResolver, ToolResult,
};

const TITLE: &str = "Base64";

/// Parameters accepted by both conversions.
#[derive(Debug, Deserialize)]
pub struct Base64Params {
    /// Text to encode, or Base64 to decode.
    pub input: String,
}

#[derive(Debug, Default)]
pub struct Base64Tool;

impl Base64Tool {
    pub fn encode(input: &str) -> String {
        STANDARD.encode(input.as_bytes())
    }

    /// Decode Base64 into UTF-8 text. Surrounding whitespace is ignored.
    pub fn decode(input: &str) -> ToolResult<String> {
        let bytes = STANDARD
            .decode(input.trim())
            .map_err(|e| ToolError::invalid_arguments(format!("not valid Base64: {e}")))?;
        String::from_utf8(bytes)
            .map_err(|_| ToolError::invalid_arguments("decoded bytes are not UTF-8 text"))
    }

    fn form(input: &str) -> String {
        format!(
            r#"<form method="post" action="/base64/encode">
<textarea name="input" rows="8" cols="60">{input}</textarea>
<p><input type="submit" value="Encode"> <input type="submit" value="Decode" formaction="/base64/decode"></p>
</form>"#,
            input = html_escape(input),
        )
    }

    fn result_page(input: &str, output: &str) -> ToolOutput {
        let body = format!("{}\n<pre>{}</pre>", Self::form(input), html_escape(output));
        ToolOutput::page(TITLE, body)
    }

    #[instrument(skip_all)]
    async fn encode_route(_ctx: ToolContext, request: ToolRequest) -> ToolResult<ToolOutput> {
        let params: Base64Params = request.form_params()?;
        debug!("Encoding {} bytes", params.input.len());
        Ok(Self::result_page(&params.input, &Self::encode(&params.input)))
    }

    #[instrument(skip_all)]
    async fn decode_route(_ctx: ToolContext, request: ToolRequest) -> ToolResult<ToolOutput> {
        let params: Base64Params = request.form_params()?;
        debug!("Decoding {} bytes", params.input.len());
        let decoded = Self::decode(&params.input)?;
        Ok(Self::result_page(&params.input, &decoded))
    }
}

#[async_trait]
impl Tool for Base64Tool {
    fn name(&self) -> Option<&'static str> {
        Some(TITLE)
    }

    fn url_name(&self) -> Option<&'static str> {
        Some("base64")
    }

    fn keywords(&self) -> Option<&'static str> {
        Some("encode decode base64 binary text")
    }

    fn description(&self) -> Option<&'static str> {
        Some("Convert text to and from Base64.")
    }

    fn routes(&self, resolver: ToolResolver) -> ToolResolver {
        resolver
            .route("/encode", Self::encode_route)
            .route("/decode", Self::decode_route)
    }

    async fn handle(&self, _ctx: &ToolContext, _request: &ToolRequest) -> ToolResult<ToolOutput> {
        Ok(ToolOutput::page(TITLE, Self::form("")))
    }
}
