//! Repository for the `blog_posts` table.
//!
//! Public queries only ever see published posts; the `*_published` methods
//! are the only ones the site pages call.

use portfolio_core::types::DbId;
use sqlx::PgPool;

use crate::models::blog_post::{BlogPost, CreateBlogPost, PublishedPost, UpdateBlogPost};
use crate::slugs::{write_with_slug, SlugSource, SlugTable};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "b.id, b.title, b.slug, b.author_id, b.content, b.featured_image, \
    b.excerpt, b.tags, b.is_published, b.created_at, b.updated_at";

/// Published posts joined with their author's display name.
const PUBLISHED_FROM: &str = "COALESCE(NULLIF(a.full_name, ''), a.username) AS author_name
     FROM blog_posts b
     LEFT JOIN authors a ON a.id = b.author_id
     WHERE b.is_published";

/// Newest first.
const ORDER: &str = "ORDER BY b.created_at DESC, b.id DESC";

/// Provides CRUD and publication-aware listing for blog posts.
pub struct BlogPostRepo;

impl BlogPostRepo {
    /// Insert a new post, deriving a unique slug from the title when none is
    /// given. Posts are published unless `is_published` is `false`.
    pub async fn create(pool: &PgPool, input: &CreateBlogPost) -> Result<BlogPost, sqlx::Error> {
        let query = format!(
            "INSERT INTO blog_posts AS b (title, slug, author_id, content, featured_image,
                excerpt, tags, is_published)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, ''), COALESCE($7, ''), COALESCE($8, TRUE))
             RETURNING {COLUMNS}"
        );
        let query = query.as_str();
        let source = SlugSource::for_create(input.slug.as_deref(), &input.title);

        write_with_slug(pool, SlugTable::BlogPosts, source, None, move |slug| async move {
            sqlx::query_as::<_, BlogPost>(query)
                .bind(&input.title)
                .bind(slug)
                .bind(input.author_id)
                .bind(&input.content)
                .bind(&input.featured_image)
                .bind(&input.excerpt)
                .bind(&input.tags)
                .bind(input.is_published)
                .fetch_one(pool)
                .await
        })
        .await
    }

    /// Find any post (published or not) by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blog_posts b WHERE b.id = $1");
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Every post, drafts included, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blog_posts b {ORDER}");
        sqlx::query_as::<_, BlogPost>(&query).fetch_all(pool).await
    }

    pub async fn count_published(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM blog_posts WHERE is_published")
            .fetch_one(pool)
            .await
    }

    /// One page of published posts, newest first.
    pub async fn list_published_page(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<PublishedPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS}, {PUBLISHED_FROM} {ORDER} LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, PublishedPost>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// The `limit` most recent published posts.
    pub async fn list_recent_published(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<PublishedPost>, sqlx::Error> {
        Self::list_published_page(pool, limit, 0).await
    }

    /// Find a published post by slug. Drafts are invisible here.
    pub async fn find_published_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<PublishedPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS}, {PUBLISHED_FROM} AND b.slug = $1");
        sqlx::query_as::<_, PublishedPost>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Update a post. Only non-`None` fields in `input` are applied; an empty
    /// `slug` re-derives it from the (new or current) title.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBlogPost,
    ) -> Result<Option<BlogPost>, sqlx::Error> {
        let current;
        let source = match input.slug.as_deref().map(str::trim) {
            Some("") => {
                let Some(row) = Self::find_by_id(pool, id).await? else {
                    return Ok(None);
                };
                current = row;
                SlugSource::Derived(input.title.as_deref().unwrap_or(&current.title))
            }
            Some(slug) => SlugSource::Explicit(slug),
            None => SlugSource::Unchanged,
        };

        let query = format!(
            "UPDATE blog_posts b SET
                title = COALESCE($2, b.title),
                slug = COALESCE($3, b.slug),
                author_id = CASE WHEN $5 THEN NULL ELSE COALESCE($4, b.author_id) END,
                content = COALESCE($6, b.content),
                featured_image = COALESCE($7, b.featured_image),
                excerpt = COALESCE($8, b.excerpt),
                tags = COALESCE($9, b.tags),
                is_published = COALESCE($10, b.is_published)
             WHERE b.id = $1
             RETURNING {COLUMNS}"
        );
        let query = query.as_str();

        write_with_slug(pool, SlugTable::BlogPosts, source, Some(id), move |slug| async move {
            sqlx::query_as::<_, BlogPost>(query)
                .bind(id)
                .bind(&input.title)
                .bind(slug)
                .bind(input.author_id)
                .bind(input.clear_author)
                .bind(&input.content)
                .bind(&input.featured_image)
                .bind(&input.excerpt)
                .bind(&input.tags)
                .bind(input.is_published)
                .fetch_optional(pool)
                .await
        })
        .await
    }

    /// Delete a post. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
