use sqlx::{Pool, Postgres};
use tracing::debug;
use uuid::Uuid;

use crate::db::models::{Post, PostFields};

const POST_COLUMNS: &str =
    "id, title, summary, content, image_url, category, author, slug, created_at, updated_at";

/// Repository for post database operations
pub struct PostRepository;

impl PostRepository {
    /// List posts newest first, optionally capped at `limit`
    pub async fn list(pool: &Pool<Postgres>, limit: Option<i64>) -> Result<Vec<Post>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM posts ORDER BY created_at DESC LIMIT $1",
            POST_COLUMNS
        );
        // LIMIT NULL means no limit in PostgreSQL
        sqlx::query_as::<_, Post>(&sql)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    pub async fn find(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<Post>, sqlx::Error> {
        let sql = format!("SELECT {} FROM posts WHERE id = $1", POST_COLUMNS);
        sqlx::query_as::<_, Post>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_slug(pool: &Pool<Postgres>, slug: &str) -> Result<Option<Post>, sqlx::Error> {
        let sql = format!("SELECT {} FROM posts WHERE slug = $1", POST_COLUMNS);
        sqlx::query_as::<_, Post>(&sql)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Insert a post and return the full record
    pub async fn create(pool: &Pool<Postgres>, post: &PostFields) -> Result<Post, sqlx::Error> {
        debug!("Creating post: slug={}", post.slug);

        let sql = format!(
            r#"
            INSERT INTO posts (title, summary, content, image_url, category, author, slug)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            POST_COLUMNS
        );
        let row = sqlx::query_as::<_, Post>(&sql)
            .bind(&post.title)
            .bind(&post.summary)
            .bind(&post.content)
            .bind(&post.image_url)
            .bind(&post.category)
            .bind(&post.author)
            .bind(&post.slug)
            .fetch_one(pool)
            .await?;

        debug!("Post created with id={}", row.id);
        Ok(row)
    }

    pub async fn update(
        pool: &Pool<Postgres>,
        id: Uuid,
        post: &PostFields,
    ) -> Result<Option<Post>, sqlx::Error> {
        let sql = format!(
            r#"
            UPDATE posts
            SET title = $2, summary = $3, content = $4, image_url = $5,
                category = $6, author = $7, slug = $8, updated_at = now()
            WHERE id = $1
            RETURNING {}
            "#,
            POST_COLUMNS
        );
        sqlx::query_as::<_, Post>(&sql)
            .bind(id)
            .bind(&post.title)
            .bind(&post.summary)
            .bind(&post.content)
            .bind(&post.image_url)
            .bind(&post.category)
            .bind(&post.author)
            .bind(&post.slug)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &Pool<Postgres>, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
