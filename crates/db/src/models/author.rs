//! Blog author model and DTOs.

use portfolio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `authors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Author {
    pub id: DbId,
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an author.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAuthor {
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
}
