//! It's Real quotation API.
//!
//! A small JSON-over-HTTP service for the It's Real tattoo studio. Maps a
//! tattoo size code to a price range in Colombian pesos, applies the
//! sensitive-zone and advisory adjustments, and serves the result on
//! `POST /cotizar`, with status probes and a documentation page around it.

use std::time::Instant;

use axum::http::{header, Method};
use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod error;
pub mod pricing;
pub mod routes;

pub use error::{AppError, Result};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Crate version reported by the status endpoints.
    pub version: String,
    /// Process start instant, for uptime reporting.
    pub started_at: Instant,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            started_at: Instant::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::docs::docs))
        .route("/test", get(routes::status::test))
        .route("/health", get(routes::status::health))
        .merge(pricing::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}

/// Permissive CORS so the studio's web forms can call the API cross-origin.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    async fn get_response(uri: &str) -> axum::response::Response {
        app(AppState::new())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    // ==================== status endpoint tests ====================

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = get_response("/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["status"], "ok");
        assert!(json["uptime"].is_u64());
    }

    #[tokio::test]
    async fn test_liveness_endpoint() {
        let response = get_response("/test").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["mensaje"], "API Its Real funcionando ✅");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
        assert!(json["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_docs_page() {
        let response = get_response("/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(content_type.starts_with("text/html"));

        let html = body_string(response).await;
        assert!(html.contains("IT'S REAL API"));
        assert!(html.contains("POST /cotizar"));
        assert!(html.contains(env!("CARGO_PKG_VERSION")));
    }

    #[tokio::test]
    async fn test_unknown_route_returns_404() {
        let response = get_response("/nope").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    // ==================== CORS tests ====================

    #[tokio::test]
    async fn test_cors_preflight_allows_any_origin() {
        let response = app(AppState::new())
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/cotizar")
                    .header(header::ORIGIN, "https://itsrealtattoo.example")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn test_simple_requests_carry_cors_header() {
        let response = app(AppState::new())
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(header::ORIGIN, "https://itsrealtattoo.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );
    }

    // ==================== routing integration tests ====================

    #[tokio::test]
    async fn test_quotation_route_is_mounted() {
        let response = app(AppState::new())
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/cotizar")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"size_code": 3}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["price_min"], 700_000);
        assert_eq!(json["price_max"], 1_000_000);
    }
}
