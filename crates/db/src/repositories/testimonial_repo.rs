//! Repository for the `testimonials` table.

use portfolio_core::types::DbId;
use sqlx::PgPool;

use crate::models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, client_name, client_position, client_company, content, rating, \
    client_image, is_featured, sort_order, created_at, updated_at";

/// Featured first, then by display order.
const ORDER: &str = "ORDER BY is_featured DESC, sort_order, id";

/// Provides CRUD operations for client testimonials.
pub struct TestimonialRepo;

impl TestimonialRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateTestimonial,
    ) -> Result<Testimonial, sqlx::Error> {
        let query = format!(
            "INSERT INTO testimonials (client_name, client_position, client_company, content,
                rating, client_image, is_featured, sort_order)
             VALUES ($1, COALESCE($2, ''), COALESCE($3, ''), $4, COALESCE($5, 5),
                COALESCE($6, ''), COALESCE($7, FALSE), COALESCE($8, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(&input.client_name)
            .bind(&input.client_position)
            .bind(&input.client_company)
            .bind(&input.content)
            .bind(input.rating)
            .bind(&input.client_image)
            .bind(input.is_featured)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM testimonials WHERE id = $1");
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All testimonials, featured first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Testimonial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM testimonials {ORDER}");
        sqlx::query_as::<_, Testimonial>(&query).fetch_all(pool).await
    }

    /// Featured testimonials in display order, at most `limit` rows.
    pub async fn list_featured(pool: &PgPool, limit: i64) -> Result<Vec<Testimonial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM testimonials WHERE is_featured {ORDER} LIMIT $1");
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Update a testimonial. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTestimonial,
    ) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!(
            "UPDATE testimonials SET
                client_name = COALESCE($2, client_name),
                client_position = COALESCE($3, client_position),
                client_company = COALESCE($4, client_company),
                content = COALESCE($5, content),
                rating = COALESCE($6, rating),
                client_image = COALESCE($7, client_image),
                is_featured = COALESCE($8, is_featured),
                sort_order = COALESCE($9, sort_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .bind(&input.client_name)
            .bind(&input.client_position)
            .bind(&input.client_company)
            .bind(&input.content)
            .bind(input.rating)
            .bind(&input.client_image)
            .bind(input.is_featured)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a testimonial. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
