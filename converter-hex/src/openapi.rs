//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use converter_types::domain::{ConversionResult, CurrencyCode};
use converter_types::dto::{
    CacheClearedResponse, ConvertResponse, CurrenciesResponse, HealthStatus,
};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Service index
#[utoipa::path(
    get,
    path = "/",
    tag = "status",
    responses(
        (status = 200, description = "Service name, version and endpoint map", body = inline(serde_json::Value))
    )
)]
async fn index() {}

/// Convert an amount between currencies
#[utoipa::path(
    get,
    path = "/convert",
    tag = "conversion",
    params(
        ("from" = String, Query, description = "Source currency code", example = "EUR"),
        ("to" = String, Query, description = "Target currency code", example = "USD"),
        ("amount" = String, Query, description = "Amount to convert", example = "100")
    ),
    responses(
        (status = 200, description = "Conversion result", body = ConvertResponse),
        (status = 400, description = "Unsupported currency, missing parameter or invalid amount"),
        (status = 502, description = "Exchange rate unavailable")
    )
)]
async fn convert() {}

/// List supported currencies
#[utoipa::path(
    get,
    path = "/currencies",
    tag = "conversion",
    responses(
        (status = 200, description = "Sorted supported currency codes", body = CurrenciesResponse)
    )
)]
async fn currencies() {}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "status",
    responses(
        (status = 200, description = "Service is healthy", body = HealthStatus)
    )
)]
async fn health() {}

/// Prometheus metrics exposition
#[utoipa::path(
    get,
    path = "/metrics",
    tag = "status",
    responses(
        (status = 200, description = "Counters and gauges in Prometheus text format", content_type = "text/plain")
    )
)]
async fn metrics() {}

/// Clear the rate cache
#[utoipa::path(
    post,
    path = "/cache/clear",
    tag = "ops",
    responses(
        (status = 200, description = "Cache emptied", body = CacheClearedResponse)
    )
)]
async fn clear_cache() {}

/// OpenAPI documentation for the Currency Converter API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Currency Converter API",
        version = "1.0.0",
        description = "Converts amounts between currencies using cached exchange rates from an external provider.",
        license(name = "MIT"),
    ),
    paths(
        index,
        convert,
        currencies,
        health,
        metrics,
        clear_cache,
    ),
    components(
        schemas(
            ConvertResponse,
            ConversionResult,
            CurrencyCode,
            CurrenciesResponse,
            HealthStatus,
            CacheClearedResponse,
        )
    ),
    tags(
        (name = "conversion", description = "Currency conversion operations"),
        (name = "status", description = "Health and metrics endpoints"),
        (name = "ops", description = "Administrative operations"),
    )
)]
pub struct ApiDoc;
