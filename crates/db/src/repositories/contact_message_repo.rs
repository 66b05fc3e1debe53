//! Repository for the `contact_messages` table.
//!
//! Message content is never updated or deleted: rows are written once by the
//! public form, and only the read flag changes later.

use portfolio_core::types::DbId;
use sqlx::PgPool;

use crate::models::contact_message::{ContactMessage, CreateContactMessage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, phone, subject, message, project_type, budget, \
    is_read, created_at, updated_at";

/// Provides insert, listing and read-flag operations for contact messages.
pub struct ContactMessageRepo;

impl ContactMessageRepo {
    /// Persist a validated submission as an unread message.
    pub async fn create(
        pool: &PgPool,
        input: &CreateContactMessage,
    ) -> Result<ContactMessage, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_messages (name, email, phone, subject, message, project_type, budget)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactMessage>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.subject)
            .bind(&input.message)
            .bind(&input.project_type)
            .bind(&input.budget)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ContactMessage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contact_messages WHERE id = $1");
        sqlx::query_as::<_, ContactMessage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All messages, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ContactMessage>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM contact_messages ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, ContactMessage>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn count_unread(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM contact_messages WHERE NOT is_read")
            .fetch_one(pool)
            .await
    }

    /// Mark a message read or unread. Returns `None` if no row with the given
    /// `id` exists.
    pub async fn set_read(
        pool: &PgPool,
        id: DbId,
        is_read: bool,
    ) -> Result<Option<ContactMessage>, sqlx::Error> {
        let query = format!(
            "UPDATE contact_messages SET is_read = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactMessage>(&query)
            .bind(id)
            .bind(is_read)
            .fetch_optional(pool)
            .await
    }
}
