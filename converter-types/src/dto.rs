//! Data Transfer Objects (DTOs) for requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ConversionResult;

// ─────────────────────────────────────────────────────────────────────────────
// Conversion DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Query parameters for the conversion endpoint.
///
/// All fields are optional at the type level so that missing parameters can
/// be reported as a client error instead of a generic rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ConvertParams {
    /// Source currency code
    #[schema(example = "EUR")]
    pub from: Option<String>,
    /// Target currency code
    #[schema(example = "USD")]
    pub to: Option<String>,
    /// Amount to convert
    #[schema(example = "100")]
    pub amount: Option<String>,
}

/// Response wrapper for a successful conversion.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConvertResponse {
    pub conversion: ConversionResult,
}

// ─────────────────────────────────────────────────────────────────────────────
// Service status DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Supported currency listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CurrenciesResponse {
    /// Sorted list of supported 3-letter codes
    #[schema(example = json!(["EUR", "USD"]))]
    pub supported_currencies: Vec<String>,
    /// Number of supported currencies
    #[schema(example = 10)]
    pub count: usize,
}

/// Health snapshot derived from cache state.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    /// "healthy" whenever the cache is reachable; an empty cache is not
    /// degraded, it may simply be cold
    #[schema(example = "healthy")]
    pub status: String,
    /// Number of live cache entries (stale entries included)
    pub cache_size: usize,
    pub timestamp: DateTime<Utc>,
}

/// Response after clearing the rate cache.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CacheClearedResponse {
    #[schema(example = "Cache cleared")]
    pub message: String,
}
