//! Vetter Server - HTTP API server.
//!
//! This crate provides the HTTP API for the Vetter input-sanitization
//! service.
//!
//! ## Endpoints
//!
//! - `POST /v1/sanitized/input/` - Classify an input string as sanitized
//!   or unsanitized
//!
//! ## Example
//!
//! ```no_run
//! use vetter_server::{Server, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let server = Server::new(ServerConfig::default()).unwrap();
//!     server.run().await.unwrap();
//! }
//! ```

pub mod error;
mod handlers;
pub mod models;
pub mod state;

use std::net::SocketAddr;

use axum::routing::post;
use axum::Router;
use socket2::{Domain, Protocol, Socket, Type};
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

pub use error::{ApiError, Result};
pub use state::AppState;

/// Default server port.
pub const DEFAULT_PORT: u16 = 5000;

/// Default server host (localhost only for security).
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to (default: 127.0.0.1).
    pub host: String,
    /// Port to bind to (default: 5000).
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Sets the host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets the port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
}

/// Server error types.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to bind to address.
    #[error("failed to bind to {0}: {1}")]
    BindError(SocketAddr, std::io::Error),

    /// Server runtime error.
    #[error("server error: {0}")]
    Runtime(String),
}

/// The HTTP API server.
pub struct Server {
    router: Router,
    addr: SocketAddr,
}

impl Server {
    /// Creates a new server with the given configuration.
    pub fn new(config: ServerConfig) -> std::result::Result<Self, ServerError> {
        Self::with_state(config, AppState::new())
    }

    /// Creates a server with custom application state.
    pub fn with_state(
        config: ServerConfig,
        state: AppState,
    ) -> std::result::Result<Self, ServerError> {
        // Allow browser-side callers to hit the API directly
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        // Build router
        let router = Router::new()
            .route("/v1/sanitized/input/", post(handlers::classify_input))
            .layer(cors)
            .with_state(state);

        let addr = format!("{}:{}", config.host, config.port)
            .parse()
            .map_err(|e| ServerError::Runtime(format!("invalid address: {}", e)))?;

        Ok(Self { router, addr })
    }

    /// Returns the server address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Runs the server until shutdown.
    pub async fn run(self) -> std::result::Result<(), ServerError> {
        info!("Starting Vetter API server on {}", self.addr);

        // Create socket with SO_REUSEADDR to allow binding even when sockets are lingering
        let socket = Socket::new(Domain::IPV4, Type::STREAM, Some(Protocol::TCP))
            .map_err(|e| ServerError::BindError(self.addr, e))?;

        // Allow address reuse (helps with TIME_WAIT/CLOSE_WAIT sockets)
        socket
            .set_reuse_address(true)
            .map_err(|e| ServerError::BindError(self.addr, e))?;

        // Bind and listen
        socket
            .bind(&self.addr.into())
            .map_err(|e| ServerError::BindError(self.addr, e))?;
        socket
            .listen(128)
            .map_err(|e| ServerError::BindError(self.addr, e))?;

        // Set non-blocking for tokio
        socket
            .set_nonblocking(true)
            .map_err(|e| ServerError::BindError(self.addr, e))?;

        // Convert to tokio TcpListener
        let std_listener: std::net::TcpListener = socket.into();
        let listener = tokio::net::TcpListener::from_std(std_listener)
            .map_err(|e| ServerError::BindError(self.addr, e))?;

        axum::serve(listener, self.router)
            .await
            .map_err(|e| ServerError::Runtime(e.to_string()))?;

        Ok(())
    }

    /// Returns the router for testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::json;
    use tower::ServiceExt;

    fn create_test_app() -> Router {
        let state = AppState::new();

        Router::new()
            .route("/v1/sanitized/input/", post(handlers::classify_input))
            .with_state(state)
    }

    fn classify_request(body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/v1/sanitized/input/")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn response_json(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_classify_safe_input() {
        let app = create_test_app();

        let request = classify_request(json!({"input": "safe_input"}).to_string());
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["result"], "sanitized");
    }

    #[tokio::test]
    async fn test_classify_sql_injection() {
        let app = create_test_app();

        let request =
            classify_request(json!({"input": "unsafe_input; DROP TABLE users;"}).to_string());
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["result"], "unsanitized");
    }

    #[tokio::test]
    async fn test_classify_missing_input_field() {
        let app = create_test_app();

        let request = classify_request(json!({}).to_string());
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["result"], "sanitized");
    }

    #[tokio::test]
    async fn test_classify_empty_input() {
        let app = create_test_app();

        let request = classify_request(json!({"input": ""}).to_string());
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["result"], "sanitized");
    }

    #[tokio::test]
    async fn test_classify_xss_payload() {
        let app = create_test_app();

        let request =
            classify_request(json!({"input": "<script>alert('XSS');</script>"}).to_string());
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["result"], "unsanitized");
    }

    #[tokio::test]
    async fn test_classify_union_injection() {
        let app = create_test_app();

        let request = classify_request(
            json!({"input": "1 UNION SELECT username, password FROM users --"}).to_string(),
        );
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["result"], "unsanitized");
    }

    #[tokio::test]
    async fn test_classify_numbers_only() {
        let app = create_test_app();

        let request = classify_request(json!({"input": "12345"}).to_string());
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["result"], "sanitized");
    }

    #[tokio::test]
    async fn test_classify_special_characters() {
        let app = create_test_app();

        let request = classify_request(json!({"input": "!@#$%^&*"}).to_string());
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["result"], "unsanitized");
    }

    #[tokio::test]
    async fn test_malformed_body_returns_500() {
        let app = create_test_app();

        let request = classify_request("{not valid json".to_string());
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = response_json(response).await;
        assert!(json["error"].is_string());
    }

    #[tokio::test]
    async fn test_non_object_body_returns_500() {
        let app = create_test_app();

        let request = classify_request(json!("just a string").to_string());
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = response_json(response).await;
        assert!(json["error"].is_string());
    }

    #[tokio::test]
    async fn test_missing_content_type_returns_500() {
        let app = create_test_app();

        let request = Request::builder()
            .method("POST")
            .uri("/v1/sanitized/input/")
            .body(Body::from(json!({"input": "safe_input"}).to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_success_body_has_only_result_field() {
        let app = create_test_app();

        let request = classify_request(json!({"input": "safe_input"}).to_string());
        let response = app.oneshot(request).await.unwrap();

        let json = response_json(response).await;
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert!(obj.contains_key("result"));
    }

    #[tokio::test]
    async fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[tokio::test]
    async fn test_server_config_with_port() {
        let config = ServerConfig::default().with_port(9000);
        assert_eq!(config.port, 9000);
    }

    #[tokio::test]
    async fn test_server_addr() {
        let server = Server::new(ServerConfig::default().with_port(9100)).unwrap();
        assert_eq!(server.addr().port(), 9100);
    }
}
