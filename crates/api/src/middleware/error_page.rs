//! Error-page rendering for the public site.
//!
//! Public 404 and 500 responses carry the site-settings singleton so the
//! error page can render the site header and footer. Management and health
//! routes keep the bare `{"error", "code"}` body.

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use portfolio_db::repositories::SiteSettingsRepo;
use serde_json::json;

use crate::error::ErrorDetails;
use crate::state::AppState;
use crate::views::SiteSettingsView;

/// Path prefixes whose errors are left untouched.
const PLAIN_ERROR_PREFIXES: [&str; 2] = ["/api/", "/health"];

pub async fn render_error_pages(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let plain = PLAIN_ERROR_PREFIXES
        .iter()
        .any(|prefix| request.uri().path().starts_with(prefix));

    let response = next.run(request).await;
    if plain {
        return response;
    }

    let status = response.status();
    if status != StatusCode::NOT_FOUND && status != StatusCode::INTERNAL_SERVER_ERROR {
        return response;
    }
    let Some(details) = response.extensions().get::<ErrorDetails>().cloned() else {
        return response;
    };

    let settings = match SiteSettingsRepo::get_or_create(&state.pool).await {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load site settings for error page");
            return response;
        }
    };

    let body = json!({
        "status": status.as_u16(),
        "error": details.message,
        "code": details.code,
        "site_settings": SiteSettingsView::new(settings, &state.config.media_url),
    });
    (status, Json(body)).into_response()
}
