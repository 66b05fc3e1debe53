//! Team member model and DTOs.

use portfolio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `team_members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TeamMember {
    pub id: DbId,
    pub name: String,
    /// Storage key of a [`portfolio_core::team::TeamPosition`].
    pub position: String,
    pub bio: String,
    pub image: String,
    pub email: String,
    pub phone: String,
    pub experience_years: i32,
    pub specialization: String,
    /// JSON object of `network -> url`.
    pub social_links: serde_json::Value,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a team member.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeamMember {
    pub name: String,
    pub position: String,
    pub bio: Option<String>,
    pub image: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub experience_years: Option<i32>,
    pub specialization: Option<String>,
    pub social_links: Option<serde_json::Value>,
    pub sort_order: Option<i32>,
}

/// DTO for updating a team member. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTeamMember {
    pub name: Option<String>,
    pub position: Option<String>,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub experience_years: Option<i32>,
    pub specialization: Option<String>,
    pub social_links: Option<serde_json::Value>,
    pub sort_order: Option<i32>,
}
