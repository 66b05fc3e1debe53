//! Site-wide settings singleton.

use portfolio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The single row of the `site_settings` table (always `id = 1`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SiteSettings {
    pub id: DbId,
    pub site_name: String,
    pub tagline: String,
    pub description: String,
    pub logo: String,
    pub favicon: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub facebook_url: String,
    pub instagram_url: String,
    pub twitter_url: String,
    pub linkedin_url: String,
    pub meta_description: String,
    pub meta_keywords: String,
    pub footer_text: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for updating the settings row. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSiteSettings {
    pub site_name: Option<String>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub favicon: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub twitter_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub footer_text: Option<String>,
}
