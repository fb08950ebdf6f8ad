//! Configuration loading from environment.

use std::env;
use std::time::Duration;

/// Which rate provider adapter to wire in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// Live rates from the Frankfurter API.
    Frankfurter,
    /// Hardcoded indicative rates, no network access.
    Static,
}

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub rate_ttl: Duration,
    pub provider: ProviderKind,
    pub provider_url: String,
    pub provider_timeout: Duration,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()?;

        let rate_ttl = Duration::from_secs(
            env::var("RATE_TTL_SECS")
                .unwrap_or_else(|_| "300".to_string())
                .parse()?,
        );

        let provider = match env::var("RATE_PROVIDER")
            .unwrap_or_else(|_| "frankfurter".to_string())
            .to_lowercase()
            .as_str()
        {
            "frankfurter" => ProviderKind::Frankfurter,
            "static" => ProviderKind::Static,
            other => anyhow::bail!("Unknown RATE_PROVIDER: {other}"),
        };

        let provider_url = env::var("PROVIDER_URL")
            .unwrap_or_else(|_| converter_providers::DEFAULT_BASE_URL.to_string());

        let provider_timeout = Duration::from_secs(
            env::var("PROVIDER_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()?,
        );

        Ok(Self {
            port,
            rate_ttl,
            provider,
            provider_url,
            provider_timeout,
        })
    }
}
