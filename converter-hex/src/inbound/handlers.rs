//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use converter_types::{
    CacheClearedResponse, ConvertError, ConvertParams, ConvertResponse, CurrenciesResponse,
    CurrencyCode, RateProvider,
};

use super::trace::TraceId;
use crate::cache::RateCache;
use crate::health::HealthReporter;
use crate::metrics::MetricsRecorder;
use crate::service::ConversionService;

/// Application state shared across handlers.
pub struct AppState<P: RateProvider> {
    pub service: ConversionService<P>,
    pub cache: Arc<RateCache>,
    pub metrics: Arc<MetricsRecorder>,
    pub health: HealthReporter,
}

/// Wrapper to implement IntoResponse for ConvertError (orphan rule workaround).
pub struct ApiError(pub ConvertError);

impl From<ConvertError> for ApiError {
    fn from(err: ConvertError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ConvertError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ConvertError::RateUnavailable(_) => StatusCode::BAD_GATEWAY,
            ConvertError::CacheUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = serde_json::json!({
            "error": self.0.to_string(),
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

/// Service index: name, version, and endpoint map.
pub async fn index() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Currency Converter API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "convert": "/convert?from=EUR&to=USD&amount=100",
            "currencies": "/currencies",
            "metrics": "/metrics",
            "health": "/health"
        }
    }))
}

/// Converts an amount between two currencies.
#[tracing::instrument(skip(state), fields(from = ?params.from, to = ?params.to))]
pub async fn convert<P: RateProvider>(
    State(state): State<Arc<AppState<P>>>,
    Extension(trace_id): Extension<TraceId>,
    Query(params): Query<ConvertParams>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(from), Some(to), Some(amount)) = (params.from, params.to, params.amount) else {
        return Err(ConvertError::InvalidInput(
            "Missing required parameters: from, to, amount".into(),
        )
        .into());
    };

    let amount: f64 = amount
        .parse()
        .map_err(|_| ConvertError::InvalidInput(format!("Invalid amount: {amount}")))?;

    let result = state
        .service
        .convert(&from, &to, amount)
        .await?
        .with_trace_id(trace_id.0);

    Ok(Json(ConvertResponse { conversion: result }))
}

/// Lists supported currencies.
pub async fn currencies() -> impl IntoResponse {
    let mut codes: Vec<String> = CurrencyCode::all()
        .iter()
        .map(|c| c.code().to_string())
        .collect();
    codes.sort();

    Json(CurrenciesResponse {
        count: codes.len(),
        supported_currencies: codes,
    })
}

/// Health check endpoint.
pub async fn health<P: RateProvider>(State(state): State<Arc<AppState<P>>>) -> impl IntoResponse {
    Json(state.health.report())
}

/// Prometheus text exposition of the process counters.
pub async fn metrics<P: RateProvider>(State(state): State<Arc<AppState<P>>>) -> impl IntoResponse {
    let body = state.metrics.render(state.cache.size());
    ([(header::CONTENT_TYPE, "text/plain; version=0.0.4")], body)
}

/// Administrative cache clear. Idempotent, always succeeds.
#[tracing::instrument(skip(state))]
pub async fn clear_cache<P: RateProvider>(
    State(state): State<Arc<AppState<P>>>,
) -> impl IntoResponse {
    state.cache.clear();
    tracing::info!("Rate cache cleared");

    Json(CacheClearedResponse {
        message: "Cache cleared".to_string(),
    })
}

/// JSON 404 for unknown routes.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "error": "Endpoint not found",
            "code": 404
        })),
    )
}
