//! Handlers for `/admin/services`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use portfolio_core::types::DbId;
use portfolio_db::models::service::{CreateService, UpdateService};
use portfolio_db::repositories::ServiceRepo;

use super::{check_slug, limit_text, require_text};
use crate::error::{AppError, AppResult};
use crate::middleware::admin::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::views::{self, ServiceView};

const NAME_MAX: usize = 200;
const ICON_MAX: usize = 50;

/// GET /api/v1/admin/services
pub async fn list(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ServiceView>>>> {
    let services = ServiceRepo::list(&state.pool, None).await?;
    Ok(Json(DataResponse {
        data: views::all(services, &state.config.media_url, ServiceView::new),
    }))
}

/// POST /api/v1/admin/services
pub async fn create(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateService>,
) -> AppResult<(StatusCode, Json<DataResponse<ServiceView>>)> {
    require_text("name", &input.name, NAME_MAX)?;
    require_text("description", &input.description, usize::MAX)?;
    check_slug(input.slug.as_deref())?;
    limit_text("icon", input.icon.as_deref(), ICON_MAX)?;

    let service = ServiceRepo::create(&state.pool, &input).await?;
    tracing::info!(service_id = service.id, slug = %service.slug, "Service created");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: ServiceView::new(service, &state.config.media_url),
        }),
    ))
}

/// GET /api/v1/admin/services/{id}
pub async fn get_by_id(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ServiceView>>> {
    let service = ServiceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Service", id))?;
    Ok(Json(DataResponse {
        data: ServiceView::new(service, &state.config.media_url),
    }))
}

/// PUT /api/v1/admin/services/{id}
pub async fn update(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateService>,
) -> AppResult<Json<DataResponse<ServiceView>>> {
    if let Some(name) = &input.name {
        require_text("name", name, NAME_MAX)?;
    }
    check_slug(input.slug.as_deref())?;
    limit_text("icon", input.icon.as_deref(), ICON_MAX)?;

    let service = ServiceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Service", id))?;
    Ok(Json(DataResponse {
        data: ServiceView::new(service, &state.config.media_url),
    }))
}

/// DELETE /api/v1/admin/services/{id}
pub async fn delete(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ServiceRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Service", id))
    }
}
