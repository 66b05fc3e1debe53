//! Application router assembly.
//!
//! [`build_app_router`] is shared by `main.rs` and the integration tests so
//! both run behind the same layers. [`with_app_layers`] applies that stack
//! to an arbitrary set of routes.

use std::any::Any;
use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use portfolio_core::error::CoreError;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::error::AppError;
use crate::middleware::error_page::render_error_pages;
use crate::routes;
use crate::state::AppState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// How long browsers may cache a CORS preflight answer.
const CORS_MAX_AGE: Duration = Duration::from_secs(3600);

/// Build the complete application.
///
/// Outermost first, a request passes through:
///
/// 1. request id assignment, tracing span, request id echo
/// 2. request timeout (408)
/// 3. error-page rendering for public 404/500 responses
/// 4. panic recovery (500)
/// 5. the routes, where `/api/v1` additionally carries CORS
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let management_api = routes::api_routes().layer(build_cors_layer(config));

    let routes = Router::new()
        .merge(routes::health::router())
        .merge(routes::public::router())
        .nest("/api/v1", management_api);

    with_app_layers(routes, state, config)
}

/// Wrap `routes` in the not-found fallback and every layer listed on
/// [`build_app_router`] except CORS.
///
/// Panic recovery sits inside error-page rendering so a recovered panic
/// is rendered like any other public 500.
pub fn with_app_layers(
    routes: Router<AppState>,
    state: AppState,
    config: &ServerConfig,
) -> Router {
    let app = routes
        .fallback(page_not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            render_error_pages,
        ))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ));

    with_request_tracing(app).with_state(state)
}

/// Turn a handler panic into the generic internal error. The panic payload
/// is logged, never sent to the client.
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::Core(CoreError::Internal(format!("handler panicked: {detail}"))).into_response()
}

/// Wrap `app` so every request gets an `x-request-id` (generated when the
/// client sent none), a tracing span, and the same id on the response.
fn with_request_tracing(app: Router<AppState>) -> Router<AppState> {
    let header = HeaderName::from_static(REQUEST_ID_HEADER);
    app.layer(PropagateRequestIdLayer::new(header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(header, MakeRequestUuid))
}

/// Unmatched paths become a `Page` not-found error, which the error-page
/// layer then renders with the site settings.
async fn page_not_found(uri: Uri) -> AppError {
    AppError::not_found("Page", uri.path())
}

/// CORS for the management API, allowing the configured admin UI origins.
///
/// Panics on an unparsable origin; this only runs at startup.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .map(|origin| {
            origin
                .parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{origin}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(CORS_MAX_AGE)
}
