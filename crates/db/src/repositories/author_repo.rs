//! Repository for the `authors` table.

use portfolio_core::types::DbId;
use sqlx::PgPool;

use crate::models::author::{Author, CreateAuthor};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, full_name, email, created_at, updated_at";

/// Provides create and lookup operations for blog authors.
pub struct AuthorRepo;

impl AuthorRepo {
    pub async fn create(pool: &PgPool, input: &CreateAuthor) -> Result<Author, sqlx::Error> {
        let query = format!(
            "INSERT INTO authors (username, full_name, email)
             VALUES ($1, COALESCE($2, ''), COALESCE($3, ''))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Author>(&query)
            .bind(&input.username)
            .bind(&input.full_name)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Author>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM authors WHERE id = $1");
        sqlx::query_as::<_, Author>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Author>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM authors ORDER BY username");
        sqlx::query_as::<_, Author>(&query).fetch_all(pool).await
    }

    /// Delete an author. Their posts stay, with `author_id = NULL`.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
