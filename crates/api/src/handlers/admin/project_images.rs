//! Handlers for `/admin/project-images`: inline caption and order edits.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use portfolio_core::types::DbId;
use portfolio_db::models::project_image::UpdateProjectImage;
use portfolio_db::repositories::ProjectImageRepo;

use super::limit_text;
use crate::error::{AppError, AppResult};
use crate::middleware::admin::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::views::ProjectImageView;

/// PUT /api/v1/admin/project-images/{id}
pub async fn update(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProjectImage>,
) -> AppResult<Json<DataResponse<ProjectImageView>>> {
    limit_text("caption", input.caption.as_deref(), 200)?;
    let image = ProjectImageRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("ProjectImage", id))?;
    Ok(Json(DataResponse {
        data: ProjectImageView::new(image, &state.config.media_url),
    }))
}

/// DELETE /api/v1/admin/project-images/{id}
pub async fn delete(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ProjectImageRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("ProjectImage", id))
    }
}
