//! Portfolio project model and DTOs.

use chrono::NaiveDate;
use portfolio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub category_id: Option<DbId>,
    pub description: String,
    pub detailed_description: String,
    pub featured_image: String,
    pub project_date: NaiveDate,
    pub location: String,
    pub client_name: String,
    /// Free text, e.g. "$50,000 - $100,000".
    pub budget: String,
    /// Free text, e.g. "3 months".
    pub duration: String,
    pub is_featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A project with the size of its gallery, for the management list.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectWithImageCount {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub project: Project,
    pub image_count: i64,
}

/// DTO for creating a project. The slug is derived from `title` when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub slug: Option<String>,
    pub category_id: Option<DbId>,
    pub description: String,
    pub detailed_description: Option<String>,
    pub featured_image: String,
    pub project_date: NaiveDate,
    pub location: Option<String>,
    pub client_name: Option<String>,
    pub budget: Option<String>,
    pub duration: Option<String>,
    pub is_featured: Option<bool>,
}

/// DTO for updating a project. All fields are optional.
///
/// `category_id` can only move a project to another category; set
/// `clear_category` to detach it instead.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub category_id: Option<DbId>,
    #[serde(default)]
    pub clear_category: bool,
    pub description: Option<String>,
    pub detailed_description: Option<String>,
    pub featured_image: Option<String>,
    pub project_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub client_name: Option<String>,
    pub budget: Option<String>,
    pub duration: Option<String>,
    pub is_featured: Option<bool>,
}
