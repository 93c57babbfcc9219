//! Static assets served outside the tool routing tree.

use axum::http::header;
use axum::response::{IntoResponse, Response};
use bytes::Bytes;

/// Path of the site icon. Requests for it never reach the routing tree.
pub const FAVICON_PATH: &str = "/favicon.ico";

static FAVICON: &[u8] = include_bytes!("../../../assets/favicon.ico");

/// A binary payload with its content type.
#[derive(Debug, Clone)]
pub struct Asset {
    pub content_type: &'static str,
    pub bytes: Bytes,
}

impl IntoResponse for Asset {
    fn into_response(self) -> Response {
        ([(header::CONTENT_TYPE, self.content_type)], self.bytes).into_response()
    }
}

/// Source of the assets the dispatcher serves directly.
pub trait AssetSource: Send + Sync {
    /// Payload served for [`FAVICON_PATH`].
    fn favicon(&self) -> Asset;
}

/// Assets compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedAssets;

impl AssetSource for EmbeddedAssets {
    fn favicon(&self) -> Asset {
        Asset {
            content_type: "image/x-icon",
            bytes: Bytes::from_static(FAVICON),
        }
    }
}
