//! Repository for the `categories` table.

use portfolio_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::{Category, CategoryWithCount, CreateCategory, UpdateCategory};
use crate::slugs::{write_with_slug, SlugSource, SlugTable};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "c.id, c.name, c.slug, c.description, c.created_at, c.updated_at";

/// Provides CRUD operations for project categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category, deriving a unique slug from the name when none
    /// is given.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories AS c (name, slug, description)
             VALUES ($1, $2, COALESCE($3, ''))
             RETURNING {COLUMNS}"
        );
        let query = query.as_str();
        let source = SlugSource::for_create(input.slug.as_deref(), &input.name);

        write_with_slug(pool, SlugTable::Categories, source, None, move |slug| async move {
            sqlx::query_as::<_, Category>(query)
                .bind(&input.name)
                .bind(slug)
                .bind(&input.description)
                .fetch_one(pool)
                .await
        })
        .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories c WHERE c.id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories c WHERE c.slug = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List all categories ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories c ORDER BY c.name, c.id");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// List all categories with their project counts, ordered by name.
    pub async fn list_with_counts(pool: &PgPool) -> Result<Vec<CategoryWithCount>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS}, COUNT(p.id) AS project_count
             FROM categories c
             LEFT JOIN projects p ON p.category_id = c.id
             GROUP BY c.id
             ORDER BY c.name, c.id"
        );
        sqlx::query_as::<_, CategoryWithCount>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a category. Only non-`None` fields in `input` are applied; an
    /// empty `slug` re-derives it from the (new or current) name.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCategory,
    ) -> Result<Option<Category>, sqlx::Error> {
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
            "UPDATE categories c SET
                name = COALESCE($2, c.name),
                slug = COALESCE($3, c.slug),
                description = COALESCE($4, c.description)
             WHERE c.id = $1
             RETURNING {COLUMNS}"
        );
        let query = query.as_str();

        write_with_slug(pool, SlugTable::Categories, source, Some(id), move |slug| async move {
            sqlx::query_as::<_, Category>(query)
                .bind(id)
                .bind(&input.name)
                .bind(slug)
                .bind(&input.description)
                .fetch_optional(pool)
                .await
        })
        .await
    }

    /// Delete a category. Its projects stay, detached (`category_id = NULL`).
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
