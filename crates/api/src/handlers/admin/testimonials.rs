//! Handlers for `/admin/testimonials`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use portfolio_core::content::validate_rating;
use portfolio_core::types::DbId;
use portfolio_db::models::testimonial::{CreateTestimonial, UpdateTestimonial};
use portfolio_db::repositories::TestimonialRepo;

use super::require_text;
use crate::error::{AppError, AppResult};
use crate::middleware::admin::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::views::{self, TestimonialView};

const CLIENT_NAME_MAX: usize = 200;

/// GET /api/v1/admin/testimonials
///
/// Each row carries its rating rendered as stars.
pub async fn list(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<TestimonialView>>>> {
    let testimonials = TestimonialRepo::list(&state.pool).await?;
    Ok(Json(DataResponse {
        data: views::all(testimonials, &state.config.media_url, TestimonialView::new),
    }))
}

/// POST /api/v1/admin/testimonials
pub async fn create(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateTestimonial>,
) -> AppResult<(StatusCode, Json<DataResponse<TestimonialView>>)> {
    require_text("client_name", &input.client_name, CLIENT_NAME_MAX)?;
    require_text("content", &input.content, usize::MAX)?;
    if let Some(rating) = input.rating {
        validate_rating(rating)?;
    }

    let testimonial = TestimonialRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: TestimonialView::new(testimonial, &state.config.media_url),
        }),
    ))
}

/// GET /api/v1/admin/testimonials/{id}
pub async fn get_by_id(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<TestimonialView>>> {
    let testimonial = TestimonialRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Testimonial", id))?;
    Ok(Json(DataResponse {
        data: TestimonialView::new(testimonial, &state.config.media_url),
    }))
}

/// PUT /api/v1/admin/testimonials/{id}
pub async fn update(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTestimonial>,
) -> AppResult<Json<DataResponse<TestimonialView>>> {
    if let Some(name) = &input.client_name {
        require_text("client_name", name, CLIENT_NAME_MAX)?;
    }
    if let Some(rating) = input.rating {
        validate_rating(rating)?;
    }

    let testimonial = TestimonialRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Testimonial", id))?;
    Ok(Json(DataResponse {
        data: TestimonialView::new(testimonial, &state.config.media_url),
    }))
}

/// DELETE /api/v1/admin/testimonials/{id}
pub async fn delete(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if TestimonialRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Testimonial", id))
    }
}
