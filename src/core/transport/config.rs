//! Transport configuration types.

use serde::{Deserialize, Serialize};

use crate::core::error::{Error, Result};

/// HTTP transport configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

impl HttpConfig {
    /// Create an HTTP transport config.
    pub fn new(port: u16, host: impl Into<String>) -> Self {
        Self {
            port,
            host: host.into(),
        }
    }

    /// Load transport config from environment variables.
    ///
    /// Reads `TUULBOX_HTTP_HOST` and `TUULBOX_HTTP_PORT`; an unparseable
    /// port is a configuration error.
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var("TUULBOX_HTTP_PORT") {
            Ok(port) => port
                .parse()
                .map_err(|_| Error::config(format!("invalid TUULBOX_HTTP_PORT: {port:?}")))?,
            Err(_) => default_port(),
        };
        let host = std::env::var("TUULBOX_HTTP_HOST").unwrap_or_else(|_| default_host());

        Ok(Self { port, host })
    }

    /// Bind address, `host:port`.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        format!("HTTP on {}", self.address())
    }
}
