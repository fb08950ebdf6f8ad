//! # Converter Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the rate provider adapter
//! - Create the shared cache and metrics
//! - Start the HTTP server

mod config;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use converter_hex::{MetricsRecorder, RateCache, inbound::HttpServer};
use converter_providers::{FrankfurterProvider, StaticRateProvider};

use config::ProviderKind;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,converter_app=debug,converter_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting converter server on port {}", config.port);
    tracing::info!(
        "Rate TTL: {}s, provider: {:?}",
        config.rate_ttl.as_secs(),
        config.provider
    );

    // Shared state: created once, process lifetime
    let cache = Arc::new(RateCache::new(config.rate_ttl));
    let metrics = Arc::new(MetricsRecorder::new());
    let addr = format!("0.0.0.0:{}", config.port);

    // Create and run the HTTP server over the configured provider
    match config.provider {
        ProviderKind::Frankfurter => {
            let provider =
                FrankfurterProvider::with_config(config.provider_url, config.provider_timeout);
            HttpServer::new(provider, cache, metrics).run(&addr).await
        }
        ProviderKind::Static => {
            let provider = StaticRateProvider::new();
            HttpServer::new(provider, cache, metrics).run(&addr).await
        }
    }
}
