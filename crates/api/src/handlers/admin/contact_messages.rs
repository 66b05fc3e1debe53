//! Handlers for `/admin/contact-messages`.
//!
//! Submissions come only from the public form, so the management side can
//! read them and toggle `is_read` but not create or delete them.

use axum::extract::{Path, State};
use axum::Json;
use portfolio_core::types::DbId;
use portfolio_db::models::contact_message::{ContactMessage, UpdateReadStatus};
use portfolio_db::repositories::ContactMessageRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::admin::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/contact-messages
pub async fn list(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ContactMessage>>>> {
    let messages = ContactMessageRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: messages }))
}

/// GET /api/v1/admin/contact-messages/{id}
pub async fn get_by_id(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ContactMessage>>> {
    let message = ContactMessageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("ContactMessage", id))?;
    Ok(Json(DataResponse { data: message }))
}

/// PATCH /api/v1/admin/contact-messages/{id}
pub async fn set_read(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateReadStatus>,
) -> AppResult<Json<DataResponse<ContactMessage>>> {
    let message = ContactMessageRepo::set_read(&state.pool, id, input.is_read)
        .await?
        .ok_or_else(|| AppError::not_found("ContactMessage", id))?;
    tracing::debug!(contact_message_id = id, is_read = message.is_read, "Read status changed");
    Ok(Json(DataResponse { data: message }))
}
