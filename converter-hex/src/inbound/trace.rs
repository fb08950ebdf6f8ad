//! Trace-id propagation and request logging middleware.
//!
//! Every request gets a trace identifier: taken from the `X-Trace-ID`
//! header when the caller supplies one, generated otherwise. The id is
//! stored in request extensions for handlers to attach to results, and
//! echoed back on the response header.

use std::time::Instant;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::metrics::MetricsRecorder;

pub const TRACE_HEADER: &str = "X-Trace-ID";

/// Trace identifier for the current request.
#[derive(Debug, Clone)]
pub struct TraceId(pub String);

/// Reads or generates the trace id, logs request completion, and echoes the
/// id back to the caller.
pub async fn trace_id_middleware(mut request: Request<Body>, next: Next) -> Response {
    let trace_id = request
        .headers()
        .get(TRACE_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    request.extensions_mut().insert(TraceId(trace_id.clone()));
    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&trace_id) {
        response.headers_mut().insert(TRACE_HEADER, value);
    }

    tracing::info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        trace_id = %trace_id,
        "Request completed"
    );

    response
}

/// Counts every completed request, tagged by outcome.
pub async fn track_requests(
    State(metrics): State<Arc<MetricsRecorder>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let response = next.run(request).await;
    metrics.record_request(response.status().as_u16() < 400);
    response
}
