//! Handlers for the blog listing and post detail pages.
//!
//! Only published posts are visible here; drafts answer 404.

use axum::extract::{Path, Query, State};
use axum::Json;
use portfolio_core::content::SIDEBAR_RECENT_POSTS_LIMIT;
use portfolio_core::pagination::{parse_page_number, Page, PageInfo, BLOG_POSTS_PER_PAGE};
use portfolio_db::repositories::BlogPostRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::handlers::site_settings;
use crate::query::PageParams;
use crate::state::AppState;
use crate::views::{self, PostView, SiteSettingsView};

#[derive(Debug, Serialize)]
pub struct BlogListPage {
    pub posts: Page<PostView>,
    pub recent_posts: Vec<PostView>,
    pub site_settings: SiteSettingsView,
}

#[derive(Debug, Serialize)]
pub struct BlogDetailPage {
    pub post: PostView,
    pub recent_posts: Vec<PostView>,
    pub site_settings: SiteSettingsView,
}

/// GET /blog/?page=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<BlogListPage>> {
    let number = parse_page_number(params.page.as_deref())?;
    let total = BlogPostRepo::count_published(&state.pool).await?;
    let info = PageInfo::new(number, BLOG_POSTS_PER_PAGE, total)?;

    let rows = BlogPostRepo::list_published_page(&state.pool, info.limit(), info.offset()).await?;
    let recent =
        BlogPostRepo::list_recent_published(&state.pool, SIDEBAR_RECENT_POSTS_LIMIT).await?;

    let media = state.config.media_url.as_str();
    Ok(Json(BlogListPage {
        posts: Page::new(rows, info).map(|p| PostView::new(p, media)),
        recent_posts: views::all(recent, media, PostView::new),
        site_settings: site_settings(&state).await?,
    }))
}

/// GET /blog/{slug}/
pub async fn detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<BlogDetailPage>> {
    let post = BlogPostRepo::find_published_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::not_found("BlogPost", &slug))?;
    let recent =
        BlogPostRepo::list_recent_published(&state.pool, SIDEBAR_RECENT_POSTS_LIMIT).await?;

    let media = state.config.media_url.as_str();
    Ok(Json(BlogDetailPage {
        post: PostView::new(post, media),
        recent_posts: views::all(recent, media, PostView::new),
        site_settings: site_settings(&state).await?,
    }))
}
