//! Application entry point. Initializes tracing, reads configuration from
//! flags and environment, loads the landing template, sets up the Axum router,
//! and serves until a shutdown signal arrives.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use myapp::config::{AppConfig, Args, DEFAULT_LOG_FILTER};
use myapp::http::start_server;
use myapp::templates::LandingPage;
use myapp::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .clone()
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    init_tracing(&log_filter, &args.log_format);

    let config = AppConfig::from(args);
    let secrets = config.secrets_status();
    tracing::info!(
        host = %config.host,
        port = config.port,
        version = %config.version,
        environment = %config.environment,
        database = secrets.database,
        api_key = secrets.api_key,
        "Loaded configuration"
    );

    let landing = LandingPage::load(&config.landing_template);
    tracing::info!(html_enabled = landing.is_available(), "Initialized landing page");

    let state = AppState::new(config.clone(), landing);
    let app = create_router(state);

    start_server(app, &config).await?;

    Ok(())
}

fn init_tracing(filter: &str, format: &str) {
    let registry = tracing_subscriber::registry().with(EnvFilter::new(filter));

    match format {
        "json" => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        "text" => registry.with(tracing_subscriber::fmt::layer()).init(),
        other => {
            registry.with(tracing_subscriber::fmt::layer()).init();
            tracing::warn!(format = %other, "Unknown log format, using text");
        }
    }
}
