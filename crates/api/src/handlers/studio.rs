//! Handlers for the services and team pages.

use axum::extract::State;
use axum::Json;
use portfolio_db::repositories::{ServiceRepo, TeamMemberRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::handlers::site_settings;
use crate::state::AppState;
use crate::views::{self, ServiceView, SiteSettingsView, TeamMemberView};

#[derive(Debug, Serialize)]
pub struct ServicesPage {
    pub services: Vec<ServiceView>,
    pub site_settings: SiteSettingsView,
}

#[derive(Debug, Serialize)]
pub struct TeamPage {
    pub team_members: Vec<TeamMemberView>,
    pub site_settings: SiteSettingsView,
}

/// GET /services/
pub async fn services(State(state): State<AppState>) -> AppResult<Json<ServicesPage>> {
    let services = ServiceRepo::list(&state.pool, None).await?;
    Ok(Json(ServicesPage {
        services: views::all(services, &state.config.media_url, ServiceView::new),
        site_settings: site_settings(&state).await?,
    }))
}

/// GET /team/
pub async fn team(State(state): State<AppState>) -> AppResult<Json<TeamPage>> {
    let members = TeamMemberRepo::list(&state.pool).await?;
    Ok(Json(TeamPage {
        team_members: views::all(members, &state.config.media_url, TeamMemberView::new),
        site_settings: site_settings(&state).await?,
    }))
}
