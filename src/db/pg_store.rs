use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use super::application_repository::{GeneralApplicationRepository, JobApplicationRepository};
use super::job_repository::JobRepository;
use super::media_repository::{GalleryRepository, NoticeRepository};
use super::message_repository::MessageRepository;
use super::models::{
    ContactMessage, GalleryItem, GeneralApplication, GeneralApplicationStatus, Job, JobApplication,
    JobApplicationStatus, JobDeletion, JobFields, NewContactMessage, NewGalleryItem,
    NewGeneralApplication, NewJobApplication, NewNotice, Notice, Post, PostFields,
};
use super::post_repository::PostRepository;
use super::store::{ContentStore, StoreError};

/// PostgreSQL-backed content store
pub struct PgStore {
    pool: Pool<Postgres>,
}

impl PgStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

/// Map unique-constraint violations to `StoreError::Conflict`
fn classify(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return StoreError::Conflict(db_err.message().to_string());
        }
    }
    StoreError::Database(err)
}

#[async_trait]
impl ContentStore for PgStore {
    fn backend_tag(&self) -> &'static str {
        "postgres"
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }

    async fn list_posts(&self, limit: Option<i64>) -> Result<Vec<Post>, StoreError> {
        Ok(PostRepository::list(&self.pool, limit).await?)
    }

    async fn get_post(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        Ok(PostRepository::find(&self.pool, id).await?)
    }

    async fn get_post_by_slug(&self, slug: &str) -> Result<Option<Post>, StoreError> {
        Ok(PostRepository::find_by_slug(&self.pool, slug).await?)
    }

    async fn create_post(&self, post: &PostFields) -> Result<Post, StoreError> {
        PostRepository::create(&self.pool, post).await.map_err(classify)
    }

    async fn update_post(&self, id: Uuid, post: &PostFields) -> Result<Option<Post>, StoreError> {
        PostRepository::update(&self.pool, id, post)
            .await
            .map_err(classify)
    }

    async fn delete_post(&self, id: Uuid) -> Result<bool, StoreError> {
        Ok(PostRepository::delete(&self.pool, id).await?)
    }

    async fn list_jobs(&self) -> Result<Vec<Job>, StoreError> {
        Ok(JobRepository::list(&self.pool).await?)
    }

    async fn get_job(&self, id: Uuid) -> Result<Option<Job>, StoreError> {
        Ok(JobRepository::find(&self.pool, id).await?)
    }

    async fn create_job(&self, job: &JobFields) -> Result<Job, StoreError> {
        Ok(JobRepository::create(&self.pool, job).await?)
    }

    async fn update_job(&self, id: Uuid, job: &JobFields) -> Result<Option<Job>, StoreError> {
        Ok(JobRepository::update(&self.pool, id, job).await?)
    }

    async fn delete_job(&self, id: Uuid) -> Result<Option<JobDeletion>, StoreError> {
        Ok(JobRepository::delete_preserving_applications(&self.pool, id).await?)
    }

    async fn list_job_applications(&self) -> Result<Vec<JobApplication>, StoreError> {
        Ok(JobApplicationRepository::list(&self.pool).await?)
    }

    async fn get_job_application(&self, id: Uuid) -> Result<Option<JobApplication>, StoreError> {
        Ok(JobApplicationRepository::find(&self.pool, id).await?)
    }

    async fn create_job_application(
        &self,
        application: &NewJobApplication,
    ) -> Result<Option<JobApplication>, StoreError> {
        match JobApplicationRepository::create(&self.pool, application).await {
            Ok(created) => Ok(created),
            // The job went away between the SELECT and the FK check
            Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn update_job_application_status(
        &self,
        id: Uuid,
        status: JobApplicationStatus,
    ) -> Result<Option<JobApplication>, StoreError> {
        Ok(JobApplicationRepository::update_status(&self.pool, id, status).await?)
    }

    async fn delete_job_application(&self, id: Uuid) -> Result<bool, StoreError> {
        Ok(JobApplicationRepository::delete(&self.pool, id).await?)
    }

    async fn list_general_applications(&self) -> Result<Vec<GeneralApplication>, StoreError> {
        Ok(GeneralApplicationRepository::list(&self.pool).await?)
    }

    async fn create_general_application(
        &self,
        application: &NewGeneralApplication,
    ) -> Result<GeneralApplication, StoreError> {
        Ok(GeneralApplicationRepository::create(&self.pool, application).await?)
    }

    async fn update_general_application_status(
        &self,
        id: Uuid,
        status: GeneralApplicationStatus,
    ) -> Result<Option<GeneralApplication>, StoreError> {
        Ok(GeneralApplicationRepository::update_status(&self.pool, id, status).await?)
    }

    async fn delete_general_application(&self, id: Uuid) -> Result<bool, StoreError> {
        Ok(GeneralApplicationRepository::delete(&self.pool, id).await?)
    }

    async fn list_notices(&self) -> Result<Vec<Notice>, StoreError> {
        Ok(NoticeRepository::list(&self.pool).await?)
    }

    async fn create_notice(&self, notice: &NewNotice) -> Result<Notice, StoreError> {
        Ok(NoticeRepository::create(&self.pool, notice).await?)
    }

    async fn delete_notice(&self, id: Uuid) -> Result<bool, StoreError> {
        Ok(NoticeRepository::delete(&self.pool, id).await?)
    }

    async fn list_gallery_items(&self) -> Result<Vec<GalleryItem>, StoreError> {
        Ok(GalleryRepository::list(&self.pool).await?)
    }

    async fn create_gallery_item(&self, item: &NewGalleryItem) -> Result<GalleryItem, StoreError> {
        Ok(GalleryRepository::create(&self.pool, item).await?)
    }

    async fn update_gallery_item(
        &self,
        id: Uuid,
        alt_text: &str,
        caption: &str,
    ) -> Result<Option<GalleryItem>, StoreError> {
        Ok(GalleryRepository::update_text(&self.pool, id, alt_text, caption).await?)
    }

    async fn delete_gallery_item(&self, id: Uuid) -> Result<bool, StoreError> {
        Ok(GalleryRepository::delete(&self.pool, id).await?)
    }

    async fn list_messages(&self) -> Result<Vec<ContactMessage>, StoreError> {
        Ok(MessageRepository::list(&self.pool).await?)
    }

    async fn create_message(
        &self,
        message: &NewContactMessage,
    ) -> Result<ContactMessage, StoreError> {
        Ok(MessageRepository::create(&self.pool, message).await?)
    }

    async fn set_message_read(
        &self,
        id: Uuid,
        read: bool,
    ) -> Result<Option<ContactMessage>, StoreError> {
        Ok(MessageRepository::set_read(&self.pool, id, read).await?)
    }

    async fn delete_message(&self, id: Uuid) -> Result<bool, StoreError> {
        Ok(MessageRepository::delete(&self.pool, id).await?)
    }
}
