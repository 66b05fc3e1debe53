//! Handlers for `/admin/projects` and the per-project gallery.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use portfolio_core::types::DbId;
use portfolio_db::models::project::{CreateProject, UpdateProject};
use portfolio_db::models::project_image::CreateProjectImage;
use portfolio_db::repositories::{ProjectImageRepo, ProjectRepo};

use super::{check_slug, limit_text, require_text};
use crate::error::{AppError, AppResult};
use crate::middleware::admin::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::views::{self, ProjectImageView, ProjectRowView, ProjectView};

const TITLE_MAX: usize = 200;
const SHORT_TEXT_MAX: usize = 200;
const CAPTION_MAX: usize = 200;

/// GET /api/v1/admin/projects
pub async fn list(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ProjectRowView>>>> {
    let rows = ProjectRepo::list_with_image_counts(&state.pool).await?;
    Ok(Json(DataResponse {
        data: views::all(rows, &state.config.media_url, ProjectRowView::new),
    }))
}

/// POST /api/v1/admin/projects
pub async fn create(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<DataResponse<ProjectView>>)> {
    require_text("title", &input.title, TITLE_MAX)?;
    require_text("description", &input.description, usize::MAX)?;
    require_text("featured_image", &input.featured_image, usize::MAX)?;
    check_slug(input.slug.as_deref())?;
    limit_text("location", input.location.as_deref(), SHORT_TEXT_MAX)?;
    limit_text("client_name", input.client_name.as_deref(), SHORT_TEXT_MAX)?;

    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(project_id = project.id, slug = %project.slug, "Project created");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: ProjectView::new(project, &state.config.media_url),
        }),
    ))
}

/// GET /api/v1/admin/projects/{id}
pub async fn get_by_id(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ProjectView>>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Project", id))?;
    Ok(Json(DataResponse {
        data: ProjectView::new(project, &state.config.media_url),
    }))
}

/// PUT /api/v1/admin/projects/{id}
pub async fn update(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<DataResponse<ProjectView>>> {
    if let Some(title) = &input.title {
        require_text("title", title, TITLE_MAX)?;
    }
    check_slug(input.slug.as_deref())?;
    limit_text("location", input.location.as_deref(), SHORT_TEXT_MAX)?;
    limit_text("client_name", input.client_name.as_deref(), SHORT_TEXT_MAX)?;

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Project", id))?;
    Ok(Json(DataResponse {
        data: ProjectView::new(project, &state.config.media_url),
    }))
}

/// DELETE /api/v1/admin/projects/{id}
///
/// Removes the project's gallery images with it.
pub async fn delete(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ProjectRepo::delete(&state.pool, id).await? {
        tracing::info!(project_id = id, "Project deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Project", id))
    }
}

/// GET /api/v1/admin/projects/{id}/images
pub async fn list_images(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<ProjectImageView>>>> {
    ensure_project_exists(&state, id).await?;
    let images = ProjectImageRepo::list_by_project(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: views::all(images, &state.config.media_url, ProjectImageView::new),
    }))
}

/// POST /api/v1/admin/projects/{id}/images
pub async fn add_image(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateProjectImage>,
) -> AppResult<(StatusCode, Json<DataResponse<ProjectImageView>>)> {
    require_text("image", &input.image, usize::MAX)?;
    limit_text("caption", input.caption.as_deref(), CAPTION_MAX)?;
    ensure_project_exists(&state, id).await?;

    let image = ProjectImageRepo::create(&state.pool, id, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: ProjectImageView::new(image, &state.config.media_url),
        }),
    ))
}

async fn ensure_project_exists(state: &AppState, id: DbId) -> AppResult<()> {
    ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .map(|_| ())
        .ok_or_else(|| AppError::not_found("Project", id))
}
