//! Repository for the `team_members` table.

use portfolio_core::types::DbId;
use sqlx::PgPool;

use crate::models::team_member::{CreateTeamMember, TeamMember, UpdateTeamMember};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, position, bio, image, email, phone, experience_years, \
    specialization, social_links, sort_order, created_at, updated_at";

/// Provides CRUD operations for team members.
pub struct TeamMemberRepo;

impl TeamMemberRepo {
    pub async fn create(pool: &PgPool, input: &CreateTeamMember) -> Result<TeamMember, sqlx::Error> {
        let query = format!(
            "INSERT INTO team_members (name, position, bio, image, email, phone,
                experience_years, specialization, social_links, sort_order)
             VALUES ($1, $2, COALESCE($3, ''), $4, COALESCE($5, ''), COALESCE($6, ''),
                COALESCE($7, 0), COALESCE($8, ''), COALESCE($9, '{{}}'::jsonb), COALESCE($10, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(&input.name)
            .bind(&input.position)
            .bind(&input.bio)
            .bind(&input.image)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.experience_years)
            .bind(&input.specialization)
            .bind(&input.social_links)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TeamMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM team_members WHERE id = $1");
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All team members in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<TeamMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM team_members ORDER BY sort_order, id");
        sqlx::query_as::<_, TeamMember>(&query).fetch_all(pool).await
    }

    /// Update a team member. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTeamMember,
    ) -> Result<Option<TeamMember>, sqlx::Error> {
        let query = format!(
            "UPDATE team_members SET
                name = COALESCE($2, name),
                position = COALESCE($3, position),
                bio = COALESCE($4, bio),
                image = COALESCE($5, image),
                email = COALESCE($6, email),
                phone = COALESCE($7, phone),
                experience_years = COALESCE($8, experience_years),
                specialization = COALESCE($9, specialization),
                social_links = COALESCE($10, social_links),
                sort_order = COALESCE($11, sort_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.position)
            .bind(&input.bio)
            .bind(&input.image)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.experience_years)
            .bind(&input.specialization)
            .bind(&input.social_links)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a team member. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM team_members WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
