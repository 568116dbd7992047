use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::core::models::RelayConfig;

pub mod chat;
pub mod common;

pub fn build_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/chat", post(chat::submit_chat_message))
        // Health
        .route("/healthz", get(|| async { "ok" }))
        .with_state(state)
}

/// Routes plus CORS (any origin) and request logging.
pub fn build_app(state: Arc<AppState>) -> Router {
    build_routes(state)
        .layer(CorsLayer::permissive())
        .layer(axum::middleware::from_fn(common::request_logger))
}

/// Accepts hostnames and IPv6 literals such as `::` as well as IPv4.
pub async fn bind_listener(config: &RelayConfig) -> std::io::Result<TcpListener> {
    TcpListener::bind((config.bind_address.as_str(), config.port)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::ChatService;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    struct EchoService;

    #[async_trait]
    impl ChatService for EchoService {
        async fn get_chat_reply(&self, message: &str) -> String {
            message.to_string()
        }
    }

    fn app() -> Router {
        build_app(Arc::new(AppState::with_service(Arc::new(EchoService))))
    }

    #[tokio::test]
    async fn test_healthz() {
        let response = app()
            .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"ok");
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let response = app()
            .oneshot(
                Request::post("/api/chat")
                    .header(header::ORIGIN, "http://localhost:8501")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"message":"hello"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/api/chat")
                    .header(header::ORIGIN, "http://example.com")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.status().is_success());
        assert!(response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[tokio::test]
    async fn test_bind_listener_accepts_hostname() {
        let config = RelayConfig {
            bind_address: "localhost".to_string(),
            port: 0,
            ..RelayConfig::default()
        };
        let listener = bind_listener(&config).await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }

    #[tokio::test]
    async fn test_bind_listener_reports_bad_address() {
        let config = RelayConfig {
            bind_address: "not a host".to_string(),
            port: 0,
            ..RelayConfig::default()
        };
        assert!(bind_listener(&config).await.is_err());
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let response = app()
            .oneshot(Request::get("/api/unknown").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
