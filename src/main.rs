//! Greeter: an HTTP greeting service for CI/CD pipeline smoke tests.
//!
//! This is the application entry point. It parses command line arguments,
//! loads configuration, initializes tracing, builds the router, and starts
//! the HTTP server. All environment variable reads happen here, so router
//! construction in the library stays free of environment coupling.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use greeter::config::{
    AppConfig, ConfigError, DEFAULT_LOG_FILTER, ENV_PORT, ENV_RUN_MODE, RUN_MODE_TEST,
};
use greeter::http::{start_server, ServeOptions};
use greeter::routes::create_router;

/// Greeter: an HTTP greeting service for pipeline smoke tests
#[derive(Parser, Debug)]
#[command(name = "greeter", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Listener port (overrides the config file and PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level filter (e.g., "greeter=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration: explicit path must exist, the default file is optional
    let mut config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::load_default()?,
    };

    // Initialize tracing with filter priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    // Port priority: CLI > PORT env > config file > built-in default
    if let Some(port) = args.port {
        config.http.port = port;
    } else if let Ok(value) = std::env::var(ENV_PORT) {
        config.http.port = value.parse().map_err(|e| {
            ConfigError::Validation(format!("Invalid {ENV_PORT} value '{value}': {e}"))
        })?;
    }

    // Test mode keeps the router fully constructed but never binds a socket,
    // so a harness can drive it in-process.
    let listen = std::env::var(ENV_RUN_MODE)
        .map(|mode| mode != RUN_MODE_TEST)
        .unwrap_or(true);

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        listen,
        "Loaded configuration"
    );

    // Create router
    let app = create_router();

    // Start server (or skip the listener entirely in test mode)
    let options = ServeOptions {
        listen,
        host: config.http.host.clone(),
        port: config.http.port,
    };
    start_server(app, &options).await?;

    Ok(())
}
