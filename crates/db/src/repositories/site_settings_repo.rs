//! Repository for the `site_settings` singleton.
//!
//! The table admits exactly one row (`id = 1`, enforced by a CHECK
//! constraint). Public pages call [`SiteSettingsRepo::get_or_create`]; the
//! management API may also call [`SiteSettingsRepo::create`], which refuses
//! to make a second row.

use sqlx::PgPool;

use crate::models::site_settings::{SiteSettings, UpdateSiteSettings};

/// Primary key of the only settings row.
pub const SETTINGS_ID: i64 = 1;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, site_name, tagline, description, logo, favicon, phone, email, \
    address, facebook_url, instagram_url, twitter_url, linkedin_url, meta_description, \
    meta_keywords, footer_text, created_at, updated_at";

/// Provides get-or-create and update for the settings singleton.
pub struct SiteSettingsRepo;

impl SiteSettingsRepo {
    /// Return the settings row, creating it with defaults on first access.
    ///
    /// Idempotent and safe under concurrent first requests: the insert is a
    /// no-op when the row already exists.
    pub async fn get_or_create(pool: &PgPool) -> Result<SiteSettings, sqlx::Error> {
        sqlx::query("INSERT INTO site_settings (id) VALUES ($1) ON CONFLICT (id) DO NOTHING")
            .bind(SETTINGS_ID)
            .execute(pool)
            .await?;

        let query = format!("SELECT {COLUMNS} FROM site_settings WHERE id = $1");
        sqlx::query_as::<_, SiteSettings>(&query)
            .bind(SETTINGS_ID)
            .fetch_one(pool)
            .await
    }

    /// The settings row, if it has been created.
    pub async fn find(pool: &PgPool) -> Result<Option<SiteSettings>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_settings WHERE id = $1");
        sqlx::query_as::<_, SiteSettings>(&query)
            .bind(SETTINGS_ID)
            .fetch_optional(pool)
            .await
    }

    /// Create the settings row with defaults. Returns `None` when a row
    /// already exists; a second row is never created.
    pub async fn create(pool: &PgPool) -> Result<Option<SiteSettings>, sqlx::Error> {
        let query = format!(
            "INSERT INTO site_settings (id) VALUES ($1)
             ON CONFLICT (id) DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteSettings>(&query)
            .bind(SETTINGS_ID)
            .fetch_optional(pool)
            .await
    }

    /// Apply an update to the settings row, creating it first if needed.
    pub async fn update(
        pool: &PgPool,
        input: &UpdateSiteSettings,
    ) -> Result<SiteSettings, sqlx::Error> {
        Self::get_or_create(pool).await?;

        let query = format!(
            "UPDATE site_settings SET
                site_name = COALESCE($2, site_name),
                tagline = COALESCE($3, tagline),
                description = COALESCE($4, description),
                logo = COALESCE($5, logo),
                favicon = COALESCE($6, favicon),
                phone = COALESCE($7, phone),
                email = COALESCE($8, email),
                address = COALESCE($9, address),
                facebook_url = COALESCE($10, facebook_url),
                instagram_url = COALESCE($11, instagram_url),
                twitter_url = COALESCE($12, twitter_url),
                linkedin_url = COALESCE($13, linkedin_url),
                meta_description = COALESCE($14, meta_description),
                meta_keywords = COALESCE($15, meta_keywords),
                footer_text = COALESCE($16, footer_text)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteSettings>(&query)
            .bind(SETTINGS_ID)
            .bind(&input.site_name)
            .bind(&input.tagline)
            .bind(&input.description)
            .bind(&input.logo)
            .bind(&input.favicon)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.address)
            .bind(&input.facebook_url)
            .bind(&input.instagram_url)
            .bind(&input.twitter_url)
            .bind(&input.linkedin_url)
            .bind(&input.meta_description)
            .bind(&input.meta_keywords)
            .bind(&input.footer_text)
            .fetch_one(pool)
            .await
    }
}
