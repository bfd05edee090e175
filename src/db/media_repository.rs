use sqlx::{Pool, Postgres};
use tracing::debug;
use uuid::Uuid;

use crate::db::models::{GalleryItem, NewGalleryItem, NewNotice, Notice};

const GALLERY_COLUMNS: &str =
    "id, url, alt_text, caption, file_type, file_size, duration, created_at";
const NOTICE_COLUMNS: &str = "id, title, notice_type, url, created_at";

/// Repository for gallery media records
pub struct GalleryRepository;

impl GalleryRepository {
    pub async fn list(pool: &Pool<Postgres>) -> Result<Vec<GalleryItem>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM gallery_items ORDER BY created_at DESC",
            GALLERY_COLUMNS
        );
        sqlx::query_as::<_, GalleryItem>(&sql).fetch_all(pool).await
    }

    pub async fn create(
        pool: &Pool<Postgres>,
        item: &NewGalleryItem,
    ) -> Result<GalleryItem, sqlx::Error> {
        debug!("Adding gallery item: url={}", item.url);

        let sql = format!(
            r#"
            INSERT INTO gallery_items (url, alt_text, caption, file_type, file_size, duration)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}
            "#,
            GALLERY_COLUMNS
        );
        sqlx::query_as::<_, GalleryItem>(&sql)
            .bind(&item.url)
            .bind(&item.alt_text)
            .bind(&item.caption)
            .bind(item.file_type)
            .bind(item.file_size)
            .bind(item.duration)
            .fetch_one(pool)
            .await
    }

    pub async fn update_text(
        pool: &Pool<Postgres>,
        id: Uuid,
        alt_text: &str,
        caption: &str,
    ) -> Result<Option<GalleryItem>, sqlx::Error> {
        let sql = format!(
            "UPDATE gallery_items SET alt_text = $2, caption = $3 WHERE id = $1 RETURNING {}",
            GALLERY_COLUMNS
        );
        sqlx::query_as::<_, GalleryItem>(&sql)
            .bind(id)
            .bind(alt_text)
            .bind(caption)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &Pool<Postgres>, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM gallery_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Repository for site notices
pub struct NoticeRepository;

impl NoticeRepository {
    pub async fn list(pool: &Pool<Postgres>) -> Result<Vec<Notice>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM notices ORDER BY created_at DESC",
            NOTICE_COLUMNS
        );
        sqlx::query_as::<_, Notice>(&sql).fetch_all(pool).await
    }

    pub async fn create(pool: &Pool<Postgres>, notice: &NewNotice) -> Result<Notice, sqlx::Error> {
        debug!("Creating notice: title={}", notice.title);

        let sql = format!(
            "INSERT INTO notices (title, notice_type, url) VALUES ($1, $2, $3) RETURNING {}",
            NOTICE_COLUMNS
        );
        sqlx::query_as::<_, Notice>(&sql)
            .bind(&notice.title)
            .bind(notice.notice_type)
            .bind(&notice.url)
            .fetch_one(pool)
            .await
    }

    pub async fn delete(pool: &Pool<Postgres>, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notices WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
