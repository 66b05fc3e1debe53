//! Handlers for `/admin/site-settings`, the singleton settings row.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use portfolio_core::error::CoreError;
use portfolio_db::models::site_settings::UpdateSiteSettings;
use portfolio_db::repositories::SiteSettingsRepo;

use super::limit_text;
use crate::error::AppResult;
use crate::middleware::admin::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::views::SiteSettingsView;

/// GET /api/v1/admin/site-settings
pub async fn get(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<SiteSettingsView>>> {
    let settings = SiteSettingsRepo::get_or_create(&state.pool).await?;
    Ok(Json(DataResponse {
        data: SiteSettingsView::new(settings, &state.config.media_url),
    }))
}

/// POST /api/v1/admin/site-settings
///
/// Only succeeds while no settings row exists.
pub async fn create(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<DataResponse<SiteSettingsView>>)> {
    let settings = SiteSettingsRepo::create(&state.pool).await?.ok_or_else(|| {
        CoreError::Conflict("Site settings already exist; update them instead".into())
    })?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: SiteSettingsView::new(settings, &state.config.media_url),
        }),
    ))
}

/// PUT /api/v1/admin/site-settings
pub async fn update(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<UpdateSiteSettings>,
) -> AppResult<Json<DataResponse<SiteSettingsView>>> {
    limit_text("site_name", input.site_name.as_deref(), 200)?;
    limit_text("tagline", input.tagline.as_deref(), 300)?;
    limit_text("meta_description", input.meta_description.as_deref(), 160)?;
    limit_text("meta_keywords", input.meta_keywords.as_deref(), 200)?;

    let settings = SiteSettingsRepo::update(&state.pool, &input).await?;
    tracing::info!("Site settings updated");
    Ok(Json(DataResponse {
        data: SiteSettingsView::new(settings, &state.config.media_url),
    }))
}
