//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use converter_types::RateProvider;

use super::handlers::{self, AppState};
use super::trace::{self, trace_id_middleware};
use crate::HealthReporter;
use crate::cache::RateCache;
use crate::metrics::MetricsRecorder;
use crate::openapi::ApiDoc;
use crate::service::ConversionService;

/// HTTP Server for the Currency Converter API.
pub struct HttpServer<P: RateProvider> {
    state: Arc<AppState<P>>,
}

impl<P: RateProvider> HttpServer<P> {
    /// Creates a new HTTP server over the given provider and shared state.
    pub fn new(provider: P, cache: Arc<RateCache>, metrics: Arc<MetricsRecorder>) -> Self {
        let service = ConversionService::new(provider, cache.clone(), metrics.clone());
        let health = HealthReporter::new(cache.clone());

        Self {
            state: Arc::new(AppState {
                service,
                cache,
                metrics,
                health,
            }),
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/", get(handlers::index))
            .route("/convert", get(handlers::convert::<P>))
            .route("/currencies", get(handlers::currencies))
            .route("/health", get(handlers::health::<P>))
            .route("/metrics", get(handlers::metrics::<P>))
            .route("/cache/clear", post(handlers::clear_cache::<P>))
            .fallback(handlers::not_found)
            .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
            .layer(middleware::from_fn_with_state(
                self.state.metrics.clone(),
                trace::track_requests,
            ))
            .layer(middleware::from_fn(trace_id_middleware))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use converter_providers::StaticRateProvider;
    use http_body_util::BodyExt;
    use std::time::Duration;
    use tower::ServiceExt;

    fn test_server() -> HttpServer<StaticRateProvider> {
        HttpServer::new(
            StaticRateProvider::new(),
            Arc::new(RateCache::new(Duration::from_secs(300))),
            Arc::new(MetricsRecorder::new()),
        )
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_route() {
        let router = test_server().router();
        let response = router
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["cache_size"], 0);
    }

    #[tokio::test]
    async fn test_convert_route_success() {
        let router = test_server().router();
        let response = router
            .oneshot(
                Request::get("/convert?from=USD&to=USD&amount=100")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["conversion"]["rate"], 1.0);
        assert_eq!(body["conversion"]["converted_amount"], 100.0);
        assert!(body["conversion"]["trace_id"].is_string());
    }

    #[tokio::test]
    async fn test_convert_route_missing_params() {
        let router = test_server().router();
        let response = router
            .oneshot(
                Request::get("/convert?from=EUR")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_convert_route_unknown_currency() {
        let router = test_server().router();
        let response = router
            .oneshot(
                Request::get("/convert?from=XXX&to=USD&amount=1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], 400);
    }

    #[tokio::test]
    async fn test_trace_id_echoed_back() {
        let router = test_server().router();
        let response = router
            .oneshot(
                Request::get("/health")
                    .header("X-Trace-ID", "test-trace-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get("X-Trace-ID").unwrap(),
            "test-trace-123"
        );
    }

    #[tokio::test]
    async fn test_metrics_route_exposition() {
        let server = test_server();
        let router = server.router();

        let _ = router
            .clone()
            .oneshot(
                Request::get("/convert?from=EUR&to=USD&amount=100")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let response = router
            .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.contains("currency_conversions_total 1"));
        assert!(text.contains("exchange_cache_size 1"));
    }

    #[tokio::test]
    async fn test_cache_clear_route() {
        let server = test_server();
        let router = server.router();

        let _ = router
            .clone()
            .oneshot(
                Request::get("/convert?from=EUR&to=USD&amount=100")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(server.state.cache.size(), 1);

        let response = router
            .oneshot(Request::post("/cache/clear").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(server.state.cache.size(), 0);
    }

    #[tokio::test]
    async fn test_unknown_route_returns_json_404() {
        let router = test_server().router();
        let response = router
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Endpoint not found");
    }
}
