//! Handler for the home page.

use axum::extract::State;
use axum::Json;
use portfolio_core::content::{
    FEATURED_PROJECTS_LIMIT, FEATURED_TESTIMONIALS_LIMIT, HOME_RECENT_POSTS_LIMIT,
    HOME_SERVICES_LIMIT,
};
use portfolio_db::repositories::{BlogPostRepo, ProjectRepo, ServiceRepo, TestimonialRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::handlers::site_settings;
use crate::state::AppState;
use crate::views::{self, PostView, ProjectView, ServiceView, SiteSettingsView, TestimonialView};

#[derive(Debug, Serialize)]
pub struct HomePage {
    pub featured_projects: Vec<ProjectView>,
    pub featured_testimonials: Vec<TestimonialView>,
    pub services: Vec<ServiceView>,
    pub recent_posts: Vec<PostView>,
    pub site_settings: SiteSettingsView,
}

/// GET /
pub async fn home(State(state): State<AppState>) -> AppResult<Json<HomePage>> {
    let pool = &state.pool;
    let (projects, testimonials, services, posts) = tokio::try_join!(
        ProjectRepo::list_featured(pool, FEATURED_PROJECTS_LIMIT),
        TestimonialRepo::list_featured(pool, FEATURED_TESTIMONIALS_LIMIT),
        ServiceRepo::list(pool, Some(HOME_SERVICES_LIMIT)),
        BlogPostRepo::list_recent_published(pool, HOME_RECENT_POSTS_LIMIT),
    )?;

    let media = state.config.media_url.as_str();
    Ok(Json(HomePage {
        featured_projects: views::all(projects, media, ProjectView::new),
        featured_testimonials: views::all(testimonials, media, TestimonialView::new),
        services: views::all(services, media, ServiceView::new),
        recent_posts: views::all(posts, media, PostView::new),
        site_settings: site_settings(&state).await?,
    }))
}
