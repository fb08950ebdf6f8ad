//! # Converter Client SDK
//!
//! A typed Rust client for the Currency Converter API.

use converter_types::{
    CacheClearedResponse, ConversionResult, ConvertResponse, CurrenciesResponse, HealthStatus,
};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Currency Converter API client.
pub struct ConverterClient {
    base_url: String,
    http: Client,
}

impl ConverterClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Converts an amount between two currencies.
    pub async fn convert(
        &self,
        from: &str,
        to: &str,
        amount: f64,
    ) -> Result<ConversionResult, ClientError> {
        let response: ConvertResponse = self
            .get(&format!(
                "/convert?from={}&to={}&amount={}",
                from, to, amount
            ))
            .await?;
        Ok(response.conversion)
    }

    /// Lists the currencies the service supports.
    pub async fn currencies(&self) -> Result<CurrenciesResponse, ClientError> {
        self.get("/currencies").await
    }

    /// Fetches the service health snapshot.
    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        self.get("/health").await
    }

    /// Clears the server-side rate cache.
    pub async fn clear_cache(&self) -> Result<CacheClearedResponse, ClientError> {
        let resp = self
            .http
            .post(format!("{}/cache/clear", self.base_url))
            .send()
            .await?;
        self.handle_response(resp).await
    }

    /// Fetches the raw Prometheus metrics exposition.
    pub async fn metrics_text(&self) -> Result<String, ClientError> {
        let resp = self
            .http
            .get(format!("{}/metrics", self.base_url))
            .send()
            .await?;
        let status = resp.status();
        let body = resp.text().await?;
        if status.is_success() {
            Ok(body)
        } else {
            Err(ClientError::Api {
                status: status.as_u16(),
                message: body,
            })
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(body);
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ConverterClient::new("http://localhost:5000");
        assert_eq!(client.base_url, "http://localhost:5000");
    }

    #[test]
    fn test_client_with_trailing_slash() {
        let client = ConverterClient::new("http://localhost:5000/");
        assert_eq!(client.base_url, "http://localhost:5000");
    }
}
