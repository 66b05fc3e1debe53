//! Handlers for `/admin/blog-posts`. Drafts are visible here.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use portfolio_core::types::DbId;
use portfolio_db::models::blog_post::{BlogPost, CreateBlogPost, UpdateBlogPost};
use portfolio_db::repositories::BlogPostRepo;

use super::{check_slug, limit_text, require_text};
use crate::error::{AppError, AppResult};
use crate::middleware::admin::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

const TITLE_MAX: usize = 300;
const EXCERPT_MAX: usize = 300;
const TAGS_MAX: usize = 200;

/// GET /api/v1/admin/blog-posts
pub async fn list(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<BlogPost>>>> {
    let posts = BlogPostRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: posts }))
}

/// POST /api/v1/admin/blog-posts
pub async fn create(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateBlogPost>,
) -> AppResult<(StatusCode, Json<DataResponse<BlogPost>>)> {
    require_text("title", &input.title, TITLE_MAX)?;
    require_text("content", &input.content, usize::MAX)?;
    require_text("featured_image", &input.featured_image, usize::MAX)?;
    check_slug(input.slug.as_deref())?;
    limit_text("excerpt", input.excerpt.as_deref(), EXCERPT_MAX)?;
    limit_text("tags", input.tags.as_deref(), TAGS_MAX)?;

    let post = BlogPostRepo::create(&state.pool, &input).await?;
    tracing::info!(
        blog_post_id = post.id,
        slug = %post.slug,
        is_published = post.is_published,
        "Blog post created",
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: post })))
}

/// GET /api/v1/admin/blog-posts/{id}
pub async fn get_by_id(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<BlogPost>>> {
    let post = BlogPostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("BlogPost", id))?;
    Ok(Json(DataResponse { data: post }))
}

/// PUT /api/v1/admin/blog-posts/{id}
pub async fn update(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBlogPost>,
) -> AppResult<Json<DataResponse<BlogPost>>> {
    if let Some(title) = &input.title {
        require_text("title", title, TITLE_MAX)?;
    }
    check_slug(input.slug.as_deref())?;
    limit_text("excerpt", input.excerpt.as_deref(), EXCERPT_MAX)?;
    limit_text("tags", input.tags.as_deref(), TAGS_MAX)?;

    let post = BlogPostRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("BlogPost", id))?;
    Ok(Json(DataResponse { data: post }))
}

/// DELETE /api/v1/admin/blog-posts/{id}
pub async fn delete(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if BlogPostRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("BlogPost", id))
    }
}
