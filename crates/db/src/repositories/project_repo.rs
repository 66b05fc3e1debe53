//! Repository for the `projects` table.

use portfolio_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, ProjectWithImageCount, UpdateProject};
use crate::slugs::{write_with_slug, SlugSource, SlugTable};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "p.id, p.title, p.slug, p.category_id, p.description, \
    p.detailed_description, p.featured_image, p.project_date, p.location, p.client_name, \
    p.budget, p.duration, p.is_featured, p.created_at, p.updated_at";

/// Default listing order: most recent project date first.
const ORDER: &str = "ORDER BY p.project_date DESC, p.id DESC";

/// Provides CRUD and listing queries for portfolio projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, deriving a unique slug from the title when none
    /// is given.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects AS p (title, slug, category_id, description, detailed_description,
                featured_image, project_date, location, client_name, budget, duration, is_featured)
             VALUES ($1, $2, $3, $4, COALESCE($5, ''), $6, $7, COALESCE($8, ''),
                COALESCE($9, ''), COALESCE($10, ''), COALESCE($11, ''), COALESCE($12, FALSE))
             RETURNING {COLUMNS}"
        );
        let query = query.as_str();
        let source = SlugSource::for_create(input.slug.as_deref(), &input.title);

        write_with_slug(pool, SlugTable::Projects, source, None, move |slug| async move {
            sqlx::query_as::<_, Project>(query)
                .bind(&input.title)
                .bind(slug)
                .bind(input.category_id)
                .bind(&input.description)
                .bind(&input.detailed_description)
                .bind(&input.featured_image)
                .bind(input.project_date)
                .bind(&input.location)
                .bind(&input.client_name)
                .bind(&input.budget)
                .bind(&input.duration)
                .bind(input.is_featured)
                .fetch_one(pool)
                .await
        })
        .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects p WHERE p.id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects p WHERE p.slug = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Featured projects, most recent first, at most `limit` rows.
    pub async fn list_featured(pool: &PgPool, limit: i64) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects p WHERE p.is_featured {ORDER} LIMIT $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Count projects, optionally restricted to the category with the given slug.
    pub async fn count(pool: &PgPool, category_slug: Option<&str>) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM projects p
             LEFT JOIN categories c ON c.id = p.category_id
             WHERE ($1::text IS NULL OR c.slug = $1)",
        )
        .bind(category_slug)
        .fetch_one(pool)
        .await
    }

    /// One page of projects, optionally restricted to a category slug.
    /// An unknown slug yields an empty page.
    pub async fn list_page(
        pool: &PgPool,
        category_slug: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects p
             LEFT JOIN categories c ON c.id = p.category_id
             WHERE ($1::text IS NULL OR c.slug = $1)
             {ORDER}
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(category_slug)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Other projects in the same category as `project` (uncategorized
    /// projects relate to each other), at most `limit` rows.
    pub async fn list_related(
        pool: &PgPool,
        project: &Project,
        limit: i64,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects p
             WHERE p.category_id IS NOT DISTINCT FROM $1 AND p.id <> $2
             {ORDER}
             LIMIT $3"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(project.category_id)
            .bind(project.id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// All projects with their gallery sizes, for the management list.
    pub async fn list_with_image_counts(
        pool: &PgPool,
    ) -> Result<Vec<ProjectWithImageCount>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS}, COUNT(i.id) AS image_count
             FROM projects p
             LEFT JOIN project_images i ON i.project_id = p.id
             GROUP BY p.id
             {ORDER}"
        );
        sqlx::query_as::<_, ProjectWithImageCount>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied; an
    /// empty `slug` re-derives it from the (new or current) title.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let current;
        let source = match input.slug.as_deref().map(str::trim) {
            Some("") => {
                let Some(row) = Self::find_by_id(pool, id).await? else {
                    return Ok(None);
                };
                current = row;
                SlugSource::Derived(input.title.as_deref().unwrap_or(&current.title))
            }
            Some(slug) => SlugSource::Explicit(slug),
            None => SlugSource::Unchanged,
        };

        let query = format!(
            "UPDATE projects p SET
                title = COALESCE($2, p.title),
                slug = COALESCE($3, p.slug),
                category_id = CASE WHEN $5 THEN NULL ELSE COALESCE($4, p.category_id) END,
                description = COALESCE($6, p.description),
                detailed_description = COALESCE($7, p.detailed_description),
                featured_image = COALESCE($8, p.featured_image),
                project_date = COALESCE($9, p.project_date),
                location = COALESCE($10, p.location),
                client_name = COALESCE($11, p.client_name),
                budget = COALESCE($12, p.budget),
                duration = COALESCE($13, p.duration),
                is_featured = COALESCE($14, p.is_featured)
             WHERE p.id = $1
             RETURNING {COLUMNS}"
        );
        let query = query.as_str();

        write_with_slug(pool, SlugTable::Projects, source, Some(id), move |slug| async move {
            sqlx::query_as::<_, Project>(query)
                .bind(id)
                .bind(&input.title)
                .bind(slug)
                .bind(input.category_id)
                .bind(input.clear_category)
                .bind(&input.description)
                .bind(&input.detailed_description)
                .bind(&input.featured_image)
                .bind(input.project_date)
                .bind(&input.location)
                .bind(&input.client_name)
                .bind(&input.budget)
                .bind(&input.duration)
                .bind(input.is_featured)
                .fetch_optional(pool)
                .await
        })
        .await
    }

    /// Delete a project together with its gallery images. Returns `true` if a
    /// row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
