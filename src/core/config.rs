//! Configuration management for the Tuulbox server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use super::error::Result;
use super::transport::HttpConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

/// Main configuration structure for the Tuulbox server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: HttpConfig,

    /// Where application settings are persisted.
    pub settings: SettingsConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server, used in log output.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Settings store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsConfig {
    /// Path of the JSON settings file. Created with defaults if missing.
    pub path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "tuulbox".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: HttpConfig::default(),
            settings: SettingsConfig {
                path: PathBuf::from("tuulbox.settings.json"),
            },
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Variables are prefixed with `TUULBOX_`, e.g. `TUULBOX_LOG_LEVEL`.
    /// A `.env` file in the working directory is read first if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("TUULBOX_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("TUULBOX_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = HttpConfig::from_env()?;

        if let Ok(path) = std::env::var("TUULBOX_SETTINGS_PATH") {
            config.settings.path = PathBuf::from(path);
            info!("Settings file set to {:?}", config.settings.path);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        for var in [
            "TUULBOX_SERVER_NAME",
            "TUULBOX_LOG_LEVEL",
            "TUULBOX_HTTP_HOST",
            "TUULBOX_HTTP_PORT",
            "TUULBOX_SETTINGS_PATH",
        ] {
            unsafe {
                std::env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_defaults_without_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        let config = Config::from_env().unwrap();
        assert_eq!(config.server.name, "tuulbox");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.transport, HttpConfig::default());
        assert_eq!(config.settings.path, PathBuf::from("tuulbox.settings.json"));
    }

    #[test]
    fn test_env_overrides() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("TUULBOX_LOG_LEVEL", "debug");
            std::env::set_var("TUULBOX_HTTP_PORT", "9090");
            std::env::set_var("TUULBOX_HTTP_HOST", "0.0.0.0");
            std::env::set_var("TUULBOX_SETTINGS_PATH", "/tmp/tuulbox.json");
        }
        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.transport.address(), "0.0.0.0:9090");
        assert_eq!(config.settings.path, PathBuf::from("/tmp/tuulbox.json"));
    }

    #[test]
    fn test_invalid_port_is_config_error() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("TUULBOX_HTTP_PORT", "not-a-port");
        }
        let result = Config::from_env();
        clear_env();

        assert!(matches!(result, Err(Error::Config(_))));
    }
}
