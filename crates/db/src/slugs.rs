//! Unique slug allocation for the slugged tables.
//!
//! Derived slugs are made unique by trying `base`, `base-2`, `base-3`, ...
//! The lookup and the write are separate statements, so a concurrent writer
//! can take the chosen slug first; [`write_with_slug`] then allocates again and
//! retries. Editor-supplied slugs are used verbatim; a collision there
//! surfaces as a `uq_<table>_slug` unique violation from the insert or update.

use std::future::Future;

use portfolio_core::slug::{derive_slug, with_suffix};
use portfolio_core::types::DbId;
use sqlx::PgPool;

/// Tables whose rows carry a unique `slug` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugTable {
    Categories,
    Projects,
    Services,
    BlogPosts,
}

impl SlugTable {
    fn table(self) -> &'static str {
        match self {
            SlugTable::Categories => "categories",
            SlugTable::Projects => "projects",
            SlugTable::Services => "services",
            SlugTable::BlogPosts => "blog_posts",
        }
    }

    fn unique_constraint(self) -> &'static str {
        match self {
            SlugTable::Categories => "uq_categories_slug",
            SlugTable::Projects => "uq_projects_slug",
            SlugTable::Services => "uq_services_slug",
            SlugTable::BlogPosts => "uq_blog_posts_slug",
        }
    }

    /// Whether `err` is a unique violation on this table's slug.
    fn is_slug_conflict(self, err: &sqlx::Error) -> bool {
        err.as_database_error()
            .and_then(|db| db.constraint())
            .is_some_and(|constraint| constraint == self.unique_constraint())
    }

    /// Slug used when the source text normalizes to nothing.
    fn fallback(self) -> &'static str {
        match self {
            SlugTable::Categories => "category",
            SlugTable::Projects => "project",
            SlugTable::Services => "service",
            SlugTable::BlogPosts => "post",
        }
    }
}

/// Whether `slug` is taken by a row other than `exclude_id`.
pub async fn slug_exists(
    pool: &PgPool,
    table: SlugTable,
    slug: &str,
    exclude_id: Option<DbId>,
) -> Result<bool, sqlx::Error> {
    let query = format!(
        "SELECT EXISTS(SELECT 1 FROM {} WHERE slug = $1 AND id IS DISTINCT FROM $2)",
        table.table()
    );
    sqlx::query_scalar::<_, bool>(&query)
        .bind(slug)
        .bind(exclude_id)
        .fetch_one(pool)
        .await
}

/// Derive a slug from `source` that no other row in `table` uses.
pub async fn allocate_slug(
    pool: &PgPool,
    table: SlugTable,
    source: &str,
    exclude_id: Option<DbId>,
) -> Result<String, sqlx::Error> {
    let base = derive_slug(source, table.fallback());
    if !slug_exists(pool, table, &base, exclude_id).await? {
        return Ok(base);
    }

    let mut n = 2;
    loop {
        let candidate = with_suffix(&base, n);
        if !slug_exists(pool, table, &candidate, exclude_id).await? {
            tracing::debug!(table = table.table(), %base, %candidate, "Slug taken, using suffixed candidate");
            return Ok(candidate);
        }
        n += 1;
    }
}

/// Attempts at writing a row with a derived slug before a slug conflict is
/// returned to the caller.
pub const MAX_SLUG_ATTEMPTS: u32 = 10;

/// Where a written row's slug comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugSource<'a> {
    /// Leave the stored slug as it is.
    Unchanged,
    /// Use the editor's slug verbatim.
    Explicit(&'a str),
    /// Allocate a unique slug from this text.
    Derived(&'a str),
}

impl<'a> SlugSource<'a> {
    /// A non-blank `explicit` slug wins, otherwise one is derived from `text`.
    pub fn for_create(explicit: Option<&'a str>, text: &'a str) -> Self {
        match explicit.map(str::trim).filter(|s| !s.is_empty()) {
            Some(slug) => SlugSource::Explicit(slug),
            None => SlugSource::Derived(text),
        }
    }
}

/// Run `write` with the slug chosen by `source` (`None` for
/// [`SlugSource::Unchanged`]).
///
/// A derived slug that loses a race to a concurrent writer is re-allocated
/// and the write repeated, up to [`MAX_SLUG_ATTEMPTS`] times. Explicit slugs
/// are written once.
pub async fn write_with_slug<T, F, Fut>(
    pool: &PgPool,
    table: SlugTable,
    source: SlugSource<'_>,
    exclude_id: Option<DbId>,
    mut write: F,
) -> Result<T, sqlx::Error>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<T, sqlx::Error>>,
{
    let text = match source {
        SlugSource::Unchanged => return write(None).await,
        SlugSource::Explicit(slug) => return write(Some(slug.to_string())).await,
        SlugSource::Derived(text) => text,
    };

    let mut attempt = 1;
    loop {
        let slug = allocate_slug(pool, table, text, exclude_id).await?;
        match write(Some(slug)).await {
            Err(e) if attempt < MAX_SLUG_ATTEMPTS && table.is_slug_conflict(&e) => {
                tracing::debug!(table = table.table(), attempt, "Derived slug taken concurrently, retrying");
                attempt += 1;
            }
            result => return result,
        }
    }
}
