//! Handlers for `/admin/authors`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use portfolio_db::models::author::{Author, CreateAuthor};
use portfolio_db::repositories::AuthorRepo;

use super::{limit_text, require_text};
use crate::error::AppResult;
use crate::middleware::admin::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/authors
pub async fn list(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Author>>>> {
    let authors = AuthorRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: authors }))
}

/// POST /api/v1/admin/authors
pub async fn create(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateAuthor>,
) -> AppResult<(StatusCode, Json<DataResponse<Author>>)> {
    require_text("username", &input.username, 150)?;
    limit_text("full_name", input.full_name.as_deref(), 200)?;

    let author = AuthorRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: author })))
}
