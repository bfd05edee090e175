use sqlx::{Pool, Postgres};
use tracing::debug;
use uuid::Uuid;

use crate::db::models::{ContactMessage, NewContactMessage};

const MESSAGE_COLUMNS: &str = "id, name, email, subject, message, read, created_at";

/// Repository for contact form submissions
pub struct MessageRepository;

impl MessageRepository {
    pub async fn list(pool: &Pool<Postgres>) -> Result<Vec<ContactMessage>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM contact_messages ORDER BY created_at DESC",
            MESSAGE_COLUMNS
        );
        sqlx::query_as::<_, ContactMessage>(&sql).fetch_all(pool).await
    }

    pub async fn create(
        pool: &Pool<Postgres>,
        message: &NewContactMessage,
    ) -> Result<ContactMessage, sqlx::Error> {
        debug!("Storing contact message from {}", message.email);

        let sql = format!(
            r#"
            INSERT INTO contact_messages (name, email, subject, message)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            MESSAGE_COLUMNS
        );
        sqlx::query_as::<_, ContactMessage>(&sql)
            .bind(&message.name)
            .bind(&message.email)
            .bind(&message.subject)
            .bind(&message.message)
            .fetch_one(pool)
            .await
    }

    pub async fn set_read(
        pool: &Pool<Postgres>,
        id: Uuid,
        read: bool,
    ) -> Result<Option<ContactMessage>, sqlx::Error> {
        let sql = format!(
            "UPDATE contact_messages SET read = $2 WHERE id = $1 RETURNING {}",
            MESSAGE_COLUMNS
        );
        sqlx::query_as::<_, ContactMessage>(&sql)
            .bind(id)
            .bind(read)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &Pool<Postgres>, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contact_messages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
