//! Handlers for `/admin/categories`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use portfolio_core::types::DbId;
use portfolio_db::models::category::{Category, CategoryWithCount, CreateCategory, UpdateCategory};
use portfolio_db::repositories::CategoryRepo;

use super::{check_slug, require_text};
use crate::error::{AppError, AppResult};
use crate::middleware::admin::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

const NAME_MAX: usize = 100;

/// GET /api/v1/admin/categories
pub async fn list(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<CategoryWithCount>>>> {
    let categories = CategoryRepo::list_with_counts(&state.pool).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// POST /api/v1/admin/categories
pub async fn create(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<(StatusCode, Json<DataResponse<Category>>)> {
    require_text("name", &input.name, NAME_MAX)?;
    check_slug(input.slug.as_deref())?;

    let category = CategoryRepo::create(&state.pool, &input).await?;
    tracing::info!(category_id = category.id, slug = %category.slug, "Category created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

/// GET /api/v1/admin/categories/{id}
pub async fn get_by_id(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Category>>> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Category", id))?;
    Ok(Json(DataResponse { data: category }))
}

/// PUT /api/v1/admin/categories/{id}
pub async fn update(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<Json<DataResponse<Category>>> {
    if let Some(name) = &input.name {
        require_text("name", name, NAME_MAX)?;
    }
    check_slug(input.slug.as_deref())?;

    let category = CategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Category", id))?;
    Ok(Json(DataResponse { data: category }))
}

/// DELETE /api/v1/admin/categories/{id}
///
/// Projects in the category survive with no category.
pub async fn delete(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if CategoryRepo::delete(&state.pool, id).await? {
        tracing::info!(category_id = id, "Category deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Category", id))
    }
}
