//! Marquee - Main Entry Point
//! HTTP server for the IMDb demo service

mod settings;
mod telemetry;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Import workspace crates
use marquee_api_http::{HttpServer, HttpServerConfig, ImdbService, Services};
use marquee_core::application::{create_service_methods, imdb};
use settings::Settings;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_LOG_FILTER: &str = "marquee=info,tower_http=info";

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize logging
    let log_format = std::env::var("MARQUEE_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))
        .context("Failed to create env filter")?;

    // Keep the guard alive so buffered lines are flushed on exit
    let (writer, _log_guard) = tracing_appender::non_blocking(std::io::stdout());
    let otel = telemetry::otel_layer()?;

    match log_format.as_str() {
        "json" => {
            // Production: JSON structured logging
            tracing_subscriber::registry()
                .with(otel)
                .with(env_filter)
                .with(fmt::layer().json().with_writer(writer))
                .init();
        }
        _ => {
            // Development: Pretty formatting with colors
            tracing_subscriber::registry()
                .with(otel)
                .with(env_filter)
                .with(fmt::layer().pretty().with_writer(writer))
                .init();
        }
    }

    info!("Marquee v{} starting...", VERSION);

    // 2. Load configuration
    let settings = Settings::load()?;

    // 3. Build services (handlers -> method records -> service interfaces)
    let imdb = ImdbService::new(create_service_methods(imdb::handlers()))
        .context("IMDb service is incomplete")?;
    let services = Services { imdb };

    // 4. Start HTTP server
    let config = HttpServerConfig {
        port: settings.port,
        ..Default::default()
    };
    let handle = HttpServer::new(config, services)
        .start()
        .await
        .context("HTTP server start failed")?;

    info!(addr = %handle.local_addr(), "Listening");
    info!("Press Ctrl+C to shutdown");

    // 5. Wait for shutdown signal
    tokio::signal::ctrl_c().await?;

    info!("Shutdown signal received. Exiting gracefully...");

    // 6. Graceful shutdown
    handle.stop().await.context("HTTP server stop failed")?;
    telemetry::shutdown();

    info!("Shutdown complete.");

    Ok(())
}
