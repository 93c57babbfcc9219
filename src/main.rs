//! Tuulbox Entry Point
//!
//! Initializes logging, loads configuration and settings, and serves the
//! registered tools over HTTP.

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use tuulbox::core::{Config, HttpTransport, JsonFileSettingsStore, Settings, TuulboxServer};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);

    let store = JsonFileSettingsStore::new(&config.settings.path);
    let settings = Settings::load_or_default(&store)?;
    if let Some(domain) = settings.use_domain.as_deref() {
        info!("Serving only requests for {}", domain);
    }

    let server = TuulboxServer::new(config.clone(), settings);
    server.warm_up();

    info!("Server initialized, {}", config.transport.description());

    HttpTransport::new(config.transport).run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Configures tracing with the specified log level and format.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .init();
}
