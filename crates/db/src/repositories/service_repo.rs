//! Repository for the `services` table.

use portfolio_core::types::DbId;
use sqlx::PgPool;

use crate::models::service::{CreateService, Service, UpdateService};
use crate::slugs::{write_with_slug, SlugSource, SlugTable};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, slug, description, icon, image, features, sort_order, created_at, updated_at";

/// Provides CRUD operations for service offerings.
pub struct ServiceRepo;

impl ServiceRepo {
    /// Insert a new service, deriving a unique slug from the name when none
    /// is given.
    pub async fn create(pool: &PgPool, input: &CreateService) -> Result<Service, sqlx::Error> {
        let query = format!(
            "INSERT INTO services (name, slug, description, icon, image, features, sort_order)
             VALUES ($1, $2, $3, COALESCE($4, ''), COALESCE($5, ''), COALESCE($6, ''),
                COALESCE($7, 0))
             RETURNING {COLUMNS}"
        );
        let query = query.as_str();
        let source = SlugSource::for_create(input.slug.as_deref(), &input.name);

        write_with_slug(pool, SlugTable::Services, source, None, move |slug| async move {
            sqlx::query_as::<_, Service>(query)
                .bind(&input.name)
                .bind(slug)
                .bind(&input.description)
                .bind(&input.icon)
                .bind(&input.image)
                .bind(&input.features)
                .bind(input.sort_order)
                .fetch_one(pool)
                .await
        })
        .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Service>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM services WHERE id = $1");
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Services in display order. `limit = None` returns all of them.
    pub async fn list(pool: &PgPool, limit: Option<i64>) -> Result<Vec<Service>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM services ORDER BY sort_order, id LIMIT $1");
        sqlx::query_as::<_, Service>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Update a service. Only non-`None` fields in `input` are applied; an
    /// empty `slug` re-derives it from the (new or current) name.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateService,
    ) -> Result<Option<Service>, sqlx::Error> {
        let current;
        let source = match input.slug.as_deref().map(str::trim) {
            Some("") => {
                let Some(row) = Self::find_by_id(pool, id).await? else {
                    return Ok(None);
                };
                current = row;
                SlugSource::Derived(input.name.as_deref().unwrap_or(&current.name))
            }
            Some(slug) => SlugSource::Explicit(slug),
            None => SlugSource::Unchanged,
        };

        let query = format!(
            "UPDATE services SET
                name = COALESCE($2, name),
                slug = COALESCE($3, slug),
                description = COALESCE($4, description),
                icon = COALESCE($5, icon),
                image = COALESCE($6, image),
                features = COALESCE($7, features),
                sort_order = COALESCE($8, sort_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let query = query.as_str();

        write_with_slug(pool, SlugTable::Services, source, Some(id), move |slug| async move {
            sqlx::query_as::<_, Service>(query)
                .bind(id)
                .bind(&input.name)
                .bind(slug)
                .bind(&input.description)
                .bind(&input.icon)
                .bind(&input.image)
                .bind(&input.features)
                .bind(input.sort_order)
                .fetch_optional(pool)
                .await
        })
        .await
    }

    /// Delete a service. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
