//! HTTP adapter for the Frankfurter exchange rate API.

use std::collections::HashMap;
use std::time::Duration;

use converter_types::{CurrencyCode, ProviderError, RateProvider};
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://api.frankfurter.app";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Rate provider backed by `https://api.frankfurter.app`.
///
/// Each call is bounded by a request timeout so a slow upstream never hangs
/// the conversion indefinitely.
pub struct FrankfurterProvider {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

/// Subset of the Frankfurter `/latest` payload we care about.
#[derive(Debug, Deserialize)]
struct FrankfurterResponse {
    rates: HashMap<String, f64>,
}

impl FrankfurterProvider {
    /// Creates a provider with the default API endpoint and timeout.
    pub fn new() -> Self {
        Self::with_config(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    /// Creates a provider against a custom endpoint, e.g. for a local stub.
    pub fn with_config(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }
}

impl Default for FrankfurterProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl RateProvider for FrankfurterProvider {
    async fn fetch_rate(
        &self,
        from: CurrencyCode,
        to: CurrencyCode,
    ) -> Result<f64, ProviderError> {
        let url = format!("{}/latest?from={}&to={}", self.base_url, from, to);

        let response = self
            .http
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout
                } else {
                    ProviderError::Upstream(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Upstream(format!(
                "Unexpected status {status} from rate API"
            )));
        }

        let payload: FrankfurterResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

        let rate = payload
            .rates
            .get(to.code())
            .copied()
            .ok_or(ProviderError::UnsupportedPair(from, to))?;

        tracing::debug!(%from, %to, rate, "Rate fetched from Frankfurter");
        Ok(rate)
    }
}
