//! Error types for the conversion service.

use crate::domain::CurrencyCode;

/// Errors surfaced by the rate provider port.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Provider does not support pair {0} -> {1}")]
    UnsupportedPair(CurrencyCode, CurrencyCode),

    #[error("Provider request timed out")]
    Timeout,

    #[error("Provider request failed: {0}")]
    Upstream(String),

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),
}

/// Errors returned by the conversion entry point.
///
/// The transport layer maps these to HTTP status codes; the core never logs,
/// it only returns typed errors.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Unsupported currency code, non-finite or negative amount.
    /// Detected before any cache or provider interaction.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Provider timeout, transient failure, or unsupported pair.
    /// The cache is left unmodified.
    #[error("Exchange rate unavailable: {0}")]
    RateUnavailable(String),

    /// Reserved for cache backends that can themselves fail.
    /// The in-memory cache never produces this.
    #[error("Cache unavailable: {0}")]
    CacheUnavailable(String),
}

impl From<ProviderError> for ConvertError {
    fn from(err: ProviderError) -> Self {
        ConvertError::RateUnavailable(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_maps_to_rate_unavailable() {
        let err: ConvertError = ProviderError::Timeout.into();
        assert!(matches!(err, ConvertError::RateUnavailable(_)));

        let err: ConvertError =
            ProviderError::UnsupportedPair(CurrencyCode::EUR, CurrencyCode::JPY).into();
        assert!(matches!(err, ConvertError::RateUnavailable(_)));
    }
}
