use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use super::models::{
    ContactMessage, GalleryItem, GeneralApplication, GeneralApplicationStatus, Job, JobApplication,
    JobApplicationStatus, JobDeletion, JobFields, NewContactMessage, NewGalleryItem,
    NewGeneralApplication, NewJobApplication, NewNotice, Notice, Post, PostFields,
};

/// Errors raised by a storage backend
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("file storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt data file: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A uniqueness constraint was violated
    #[error("conflict: {0}")]
    Conflict(String),
}

/// Persistence for every resource the site manages.
///
/// Listings are ordered most-recently-created first. Item operations return
/// `None` (or `false`) when the id does not exist.
#[async_trait]
pub trait ContentStore: Send + Sync {
    fn backend_tag(&self) -> &'static str;

    /// Cheap connectivity check used by the health endpoints
    async fn ping(&self) -> Result<(), StoreError>;

    async fn close(&self);

    async fn list_posts(&self, limit: Option<i64>) -> Result<Vec<Post>, StoreError>;
    async fn get_post(&self, id: Uuid) -> Result<Option<Post>, StoreError>;
    async fn get_post_by_slug(&self, slug: &str) -> Result<Option<Post>, StoreError>;
    async fn create_post(&self, post: &PostFields) -> Result<Post, StoreError>;
    async fn update_post(&self, id: Uuid, post: &PostFields) -> Result<Option<Post>, StoreError>;
    async fn delete_post(&self, id: Uuid) -> Result<bool, StoreError>;

    async fn list_jobs(&self) -> Result<Vec<Job>, StoreError>;
    async fn get_job(&self, id: Uuid) -> Result<Option<Job>, StoreError>;
    async fn create_job(&self, job: &JobFields) -> Result<Job, StoreError>;
    async fn update_job(&self, id: Uuid, job: &JobFields) -> Result<Option<Job>, StoreError>;
    /// Removes a job and, in the same atomic step, detaches the applications
    /// that referenced it (job id cleared, title marked as deleted).
    async fn delete_job(&self, id: Uuid) -> Result<Option<JobDeletion>, StoreError>;

    async fn list_job_applications(&self) -> Result<Vec<JobApplication>, StoreError>;
    async fn get_job_application(&self, id: Uuid) -> Result<Option<JobApplication>, StoreError>;
    /// Resolves the job and inserts in one step; `None` when the job does
    /// not exist (or is deleted concurrently)
    async fn create_job_application(
        &self,
        application: &NewJobApplication,
    ) -> Result<Option<JobApplication>, StoreError>;
    async fn update_job_application_status(
        &self,
        id: Uuid,
        status: JobApplicationStatus,
    ) -> Result<Option<JobApplication>, StoreError>;
    async fn delete_job_application(&self, id: Uuid) -> Result<bool, StoreError>;

    async fn list_general_applications(&self) -> Result<Vec<GeneralApplication>, StoreError>;
    async fn create_general_application(
        &self,
        application: &NewGeneralApplication,
    ) -> Result<GeneralApplication, StoreError>;
    async fn update_general_application_status(
        &self,
        id: Uuid,
        status: GeneralApplicationStatus,
    ) -> Result<Option<GeneralApplication>, StoreError>;
    async fn delete_general_application(&self, id: Uuid) -> Result<bool, StoreError>;

    async fn list_notices(&self) -> Result<Vec<Notice>, StoreError>;
    async fn create_notice(&self, notice: &NewNotice) -> Result<Notice, StoreError>;
    async fn delete_notice(&self, id: Uuid) -> Result<bool, StoreError>;

    async fn list_gallery_items(&self) -> Result<Vec<GalleryItem>, StoreError>;
    async fn create_gallery_item(&self, item: &NewGalleryItem) -> Result<GalleryItem, StoreError>;
    async fn update_gallery_item(
        &self,
        id: Uuid,
        alt_text: &str,
        caption: &str,
    ) -> Result<Option<GalleryItem>, StoreError>;
    async fn delete_gallery_item(&self, id: Uuid) -> Result<bool, StoreError>;

    async fn list_messages(&self) -> Result<Vec<ContactMessage>, StoreError>;
    async fn create_message(&self, message: &NewContactMessage)
        -> Result<ContactMessage, StoreError>;
    async fn set_message_read(
        &self,
        id: Uuid,
        read: bool,
    ) -> Result<Option<ContactMessage>, StoreError>;
    async fn delete_message(&self, id: Uuid) -> Result<bool, StoreError>;
}
