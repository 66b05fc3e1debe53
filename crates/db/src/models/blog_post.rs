//! Blog post model and DTOs.

use portfolio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `blog_posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlogPost {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub author_id: Option<DbId>,
    pub content: String,
    pub featured_image: String,
    pub excerpt: String,
    /// Comma-delimited tag list.
    pub tags: String,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A published post joined with its author's display name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PublishedPost {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub post: BlogPost,
    /// Full name, or username when no full name is set. `None` when the
    /// author was removed.
    pub author_name: Option<String>,
}

/// DTO for creating a post. The slug is derived from `title` when omitted;
/// `is_published` defaults to `true`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBlogPost {
    pub title: String,
    pub slug: Option<String>,
    pub author_id: Option<DbId>,
    pub content: String,
    pub featured_image: String,
    pub excerpt: Option<String>,
    pub tags: Option<String>,
    pub is_published: Option<bool>,
}

/// DTO for updating a post. All fields are optional; set `clear_author` to
/// detach the author.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBlogPost {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub author_id: Option<DbId>,
    #[serde(default)]
    pub clear_author: bool,
    pub content: Option<String>,
    pub featured_image: Option<String>,
    pub excerpt: Option<String>,
    pub tags: Option<String>,
    pub is_published: Option<bool>,
}
