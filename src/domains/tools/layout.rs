//! Site layout wrapped around tool pages.

use axum::response::Html;

use super::contract::{Tool, ToolContext};

/// Title shown on every page.
pub const SITE_TITLE: &str = "Tuulbox";

/// Render a tool page inside the shared layout.
///
/// `body` is trusted HTML produced by the tool; `title` is escaped.
pub fn render_page(tool: &dyn Tool, ctx: &ToolContext, title: &str, body: &str) -> Html<String> {
    let head_title = if title.is_empty() || title == SITE_TITLE {
        SITE_TITLE.to_string()
    } else {
        format!("{} - {SITE_TITLE}", html_escape(title))
    };

    let extra_css = tool
        .css()
        .map(|css| format!("<style>{css}</style>"))
        .unwrap_or_default();
    let extra_js = tool
        .js()
        .map(|js| format!("<script>{js}</script>"))
        .unwrap_or_default();

    let tool_count = ctx.listed_tools().count();

    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{head_title}</title>
<link rel="stylesheet" href="/css">
{extra_css}
</head>
<body>
<div class="everything">
<div class="search"><form action="/" method="get"><input type="text" name="q" accesskey="s"> <input type="submit" value="Search"></form></div>
<h1><a href="/">{SITE_TITLE}</a></h1>
<div class="content">
<h2>{title}</h2>
{body}
</div>
</div>
<div class="footer">{tool_count} tools</div>
{extra_js}
</body>
</html>
"#,
        title = html_escape(title),
    ))
}

/// Escape HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
