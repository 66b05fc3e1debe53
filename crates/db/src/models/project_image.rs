//! Project gallery image model and DTOs.

use portfolio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `project_images` table. Owned by its project and removed
/// with it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectImage {
    pub id: DbId,
    pub project_id: DbId,
    pub image: String,
    pub caption: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for adding an image to a project's gallery.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectImage {
    pub image: String,
    pub caption: Option<String>,
    pub sort_order: Option<i32>,
}

/// DTO for updating a gallery image. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProjectImage {
    pub image: Option<String>,
    pub caption: Option<String>,
    pub sort_order: Option<i32>,
}
