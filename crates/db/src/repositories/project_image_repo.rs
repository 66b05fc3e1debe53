//! Repository for the `project_images` table.

use portfolio_core::types::DbId;
use sqlx::PgPool;

use crate::models::project_image::{CreateProjectImage, ProjectImage, UpdateProjectImage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, image, caption, sort_order, created_at, updated_at";

/// Provides CRUD operations for project gallery images.
pub struct ProjectImageRepo;

impl ProjectImageRepo {
    /// Attach a new image to `project_id`.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateProjectImage,
    ) -> Result<ProjectImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_images (project_id, image, caption, sort_order)
             VALUES ($1, $2, COALESCE($3, ''), COALESCE($4, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectImage>(&query)
            .bind(project_id)
            .bind(&input.image)
            .bind(&input.caption)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ProjectImage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_images WHERE id = $1");
        sqlx::query_as::<_, ProjectImage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// A project's gallery in display order.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ProjectImage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_images
             WHERE project_id = $1
             ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, ProjectImage>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a gallery image. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProjectImage,
    ) -> Result<Option<ProjectImage>, sqlx::Error> {
        let query = format!(
            "UPDATE project_images SET
                image = COALESCE($2, image),
                caption = COALESCE($3, caption),
                sort_order = COALESCE($4, sort_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectImage>(&query)
            .bind(id)
            .bind(&input.image)
            .bind(&input.caption)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Remove a gallery image. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM project_images WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
