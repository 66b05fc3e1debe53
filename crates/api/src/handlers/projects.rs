//! Handlers for the project listing and project detail pages.

use axum::extract::{Path, Query, State};
use axum::Json;
use portfolio_core::content::RELATED_PROJECTS_LIMIT;
use portfolio_core::pagination::{parse_page_number, Page, PageInfo, PROJECTS_PER_PAGE};
use portfolio_db::models::category::Category;
use portfolio_db::repositories::{CategoryRepo, ProjectImageRepo, ProjectRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::handlers::site_settings;
use crate::query::ProjectListParams;
use crate::state::AppState;
use crate::views::{self, ProjectImageView, ProjectView, SiteSettingsView};

#[derive(Debug, Serialize)]
pub struct ProjectListPage {
    pub projects: Page<ProjectView>,
    pub categories: Vec<Category>,
    /// Slug of the active category filter, empty when unfiltered.
    pub selected_category: String,
    pub site_settings: SiteSettingsView,
}

#[derive(Debug, Serialize)]
pub struct ProjectDetailPage {
    pub project: ProjectView,
    pub category: Option<Category>,
    pub images: Vec<ProjectImageView>,
    pub related_projects: Vec<ProjectView>,
    pub site_settings: SiteSettingsView,
}

/// GET /projects/?category=&page=
///
/// An unknown category slug yields an empty first page; a page number past
/// the end is a 404.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProjectListParams>,
) -> AppResult<Json<ProjectListPage>> {
    let number = parse_page_number(params.page.as_deref())?;
    let category = params
        .category
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let total = ProjectRepo::count(&state.pool, category).await?;
    let info = PageInfo::new(number, PROJECTS_PER_PAGE, total)?;
    let rows =
        ProjectRepo::list_page(&state.pool, category, info.limit(), info.offset()).await?;
    let categories = CategoryRepo::list(&state.pool).await?;

    let media = state.config.media_url.as_str();
    Ok(Json(ProjectListPage {
        projects: Page::new(rows, info).map(|p| ProjectView::new(p, media)),
        categories,
        selected_category: category.unwrap_or_default().to_string(),
        site_settings: site_settings(&state).await?,
    }))
}

/// GET /projects/{slug}/
pub async fn detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<ProjectDetailPage>> {
    let project = ProjectRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::not_found("Project", &slug))?;

    let category = match project.category_id {
        Some(id) => CategoryRepo::find_by_id(&state.pool, id).await?,
        None => None,
    };
    let images = ProjectImageRepo::list_by_project(&state.pool, project.id).await?;
    let related =
        ProjectRepo::list_related(&state.pool, &project, RELATED_PROJECTS_LIMIT).await?;

    let media = state.config.media_url.as_str();
    Ok(Json(ProjectDetailPage {
        project: ProjectView::new(project, media),
        category,
        images: views::all(images, media, ProjectImageView::new),
        related_projects: views::all(related, media, ProjectView::new),
        site_settings: site_settings(&state).await?,
    }))
}
