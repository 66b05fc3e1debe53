#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use portfolio_api::config::ServerConfig;
use portfolio_api::router::{build_app_router, with_app_layers};
use portfolio_api::state::AppState;
use portfolio_db::models::contact_message::ContactMessage;
use portfolio_notify::{ContactNotifier, DisabledNotifier, NotifyError};
use sqlx::PgPool;
use tower::ServiceExt;

/// Bearer token accepted by the test app's management API.
pub const ADMIN_TOKEN: &str = "test-admin-token";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        media_url: "/media/".to_string(),
        admin_token: Some(ADMIN_TOKEN.to_string()),
        admin_email: "studio@example.com".to_string(),
        notify_timeout_secs: 2,
    }
}

/// Build the full application router with notifications disabled.
///
/// Uses the same [`build_app_router`] as `main.rs` so integration tests
/// exercise the production middleware stack.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, test_config(), Arc::new(DisabledNotifier))
}

/// Build the application with a specific notifier.
pub fn build_test_app_with_notifier(pool: PgPool, notifier: Arc<dyn ContactNotifier>) -> Router {
    build_test_app_with(pool, test_config(), notifier)
}

pub fn build_test_app_with(
    pool: PgPool,
    config: ServerConfig,
    notifier: Arc<dyn ContactNotifier>,
) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        notifier,
    };
    build_app_router(state, &config)
}

/// Mount extra `routes` behind the production layer stack.
pub fn build_test_app_with_routes(pool: PgPool, routes: Router<AppState>) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        notifier: Arc::new(DisabledNotifier),
    };
    with_app_layers(routes, state, &config)
}

// ---------------------------------------------------------------------------
// Notifier doubles
// ---------------------------------------------------------------------------

/// Records the id of every message it is asked to deliver, optionally
/// failing each attempt.
#[derive(Default)]
pub struct RecordingNotifier {
    pub fail: bool,
    pub delivered: Mutex<Vec<i64>>,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn delivered(&self) -> Vec<i64> {
        self.delivered.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactNotifier for RecordingNotifier {
    async fn notify(&self, message: &ContactMessage) -> Result<(), NotifyError> {
        self.delivered.lock().unwrap().push(message.id);
        if self.fail {
            return Err(NotifyError::Build("smtp unavailable".to_string()));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Read the full body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

/// POST an `application/x-www-form-urlencoded` body.
pub async fn post_form(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, Method::POST, uri, Some(body), None).await
}

pub async fn admin_get(app: Router, uri: &str) -> Response<Body> {
    json_request(app, Method::GET, uri, None, Some(ADMIN_TOKEN)).await
}

pub async fn admin_post(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, Method::POST, uri, Some(body), Some(ADMIN_TOKEN)).await
}

pub async fn admin_put(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, Method::PUT, uri, Some(body), Some(ADMIN_TOKEN)).await
}

pub async fn admin_patch(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, Method::PATCH, uri, Some(body), Some(ADMIN_TOKEN)).await
}

pub async fn admin_delete(app: Router, uri: &str) -> Response<Body> {
    json_request(app, Method::DELETE, uri, None, Some(ADMIN_TOKEN)).await
}

/// Send a request with an optional JSON body and optional bearer token.
pub async fn json_request(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
    token: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    send(app, request).await
}
