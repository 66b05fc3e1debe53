//! HTTP handlers.
//!
//! Public page handlers return JSON page payloads that always include the
//! site settings; the [`admin`] handlers back the content-management API.

pub mod admin;
pub mod blog;
pub mod contact;
pub mod home;
pub mod projects;
pub mod studio;

use portfolio_db::repositories::SiteSettingsRepo;

use crate::error::AppResult;
use crate::state::AppState;
use crate::views::SiteSettingsView;

/// Load (creating on first access) the site settings for a page payload.
pub(crate) async fn site_settings(state: &AppState) -> AppResult<SiteSettingsView> {
    let settings = SiteSettingsRepo::get_or_create(&state.pool).await?;
    Ok(SiteSettingsView::new(settings, &state.config.media_url))
}
