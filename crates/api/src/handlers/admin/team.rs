//! Handlers for `/admin/team`.

use std::str::FromStr;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use portfolio_core::content::validate_social_links;
use portfolio_core::error::CoreError;
use portfolio_core::team::TeamPosition;
use portfolio_core::types::DbId;
use portfolio_db::models::team_member::{CreateTeamMember, UpdateTeamMember};
use portfolio_db::repositories::TeamMemberRepo;

use super::require_text;
use crate::error::{AppError, AppResult};
use crate::middleware::admin::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::views::{self, TeamMemberView};

const NAME_MAX: usize = 200;

fn check_member_fields(
    position: Option<&str>,
    experience_years: Option<i32>,
    social_links: Option<&serde_json::Value>,
) -> Result<(), CoreError> {
    if let Some(position) = position {
        TeamPosition::from_str(position)?;
    }
    if experience_years.is_some_and(|y| y < 0) {
        return Err(CoreError::Validation(
            "experience_years must not be negative".into(),
        ));
    }
    if let Some(links) = social_links {
        validate_social_links(links)?;
    }
    Ok(())
}

/// GET /api/v1/admin/team
pub async fn list(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<TeamMemberView>>>> {
    let members = TeamMemberRepo::list(&state.pool).await?;
    Ok(Json(DataResponse {
        data: views::all(members, &state.config.media_url, TeamMemberView::new),
    }))
}

/// POST /api/v1/admin/team
pub async fn create(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateTeamMember>,
) -> AppResult<(StatusCode, Json<DataResponse<TeamMemberView>>)> {
    require_text("name", &input.name, NAME_MAX)?;
    require_text("image", &input.image, usize::MAX)?;
    check_member_fields(
        Some(&input.position),
        input.experience_years,
        input.social_links.as_ref(),
    )?;

    let member = TeamMemberRepo::create(&state.pool, &input).await?;
    tracing::info!(team_member_id = member.id, "Team member created");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: TeamMemberView::new(member, &state.config.media_url),
        }),
    ))
}

/// GET /api/v1/admin/team/{id}
pub async fn get_by_id(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<TeamMemberView>>> {
    let member = TeamMemberRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("TeamMember", id))?;
    Ok(Json(DataResponse {
        data: TeamMemberView::new(member, &state.config.media_url),
    }))
}

/// PUT /api/v1/admin/team/{id}
pub async fn update(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTeamMember>,
) -> AppResult<Json<DataResponse<TeamMemberView>>> {
    if let Some(name) = &input.name {
        require_text("name", name, NAME_MAX)?;
    }
    check_member_fields(
        input.position.as_deref(),
        input.experience_years,
        input.social_links.as_ref(),
    )?;

    let member = TeamMemberRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("TeamMember", id))?;
    Ok(Json(DataResponse {
        data: TeamMemberView::new(member, &state.config.media_url),
    }))
}

/// DELETE /api/v1/admin/team/{id}
pub async fn delete(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if TeamMemberRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("TeamMember", id))
    }
}
