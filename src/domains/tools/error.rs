//! Tool-specific error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Result type returned by tool handlers.
pub type ToolResult<T> = Result<T, ToolError>;

/// Errors a tool can report while handling a request.
///
/// These stay local to the request that produced them; the dispatcher turns
/// them into a response and the shared registry is never touched.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The tool has nothing at the requested location.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The request carried missing or malformed input.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The tool understood the request but could not complete it.
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "execution failed" error.
    pub fn execution_failed(msg: impl Into<String>) -> Self {
        Self::ExecutionFailed(msg.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// HTTP status used when this error reaches the client.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidArguments(_) => StatusCode::BAD_REQUEST,
            Self::ExecutionFailed(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ToolError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
