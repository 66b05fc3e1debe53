//! Service offering model and DTOs.

use portfolio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `services` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Service {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub description: String,
    /// Icon class name, e.g. `fas fa-paint-brush`.
    pub icon: String,
    pub image: String,
    /// Comma-delimited feature list.
    pub features: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a service. The slug is derived from `name` when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateService {
    pub name: String,
    pub slug: Option<String>,
    pub description: String,
    pub icon: Option<String>,
    pub image: Option<String>,
    pub features: Option<String>,
    pub sort_order: Option<i32>,
}

/// DTO for updating a service. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateService {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub image: Option<String>,
    pub features: Option<String>,
    pub sort_order: Option<i32>,
}
