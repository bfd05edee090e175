use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Suffix stamped onto an application's job title once its posting is gone.
pub const DELETED_JOB_SUFFIX: &str = " (Job Deleted)";

/// Job title recorded on applications whose posting was deleted.
pub fn deleted_job_title(title: &str) -> String {
    format!("{}{}", title, DELETED_JOB_SUFFIX)
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub image_url: Option<String>,
    pub category: String,
    pub author: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Editable fields of a post; the slug is always derived by the service.
#[derive(Debug, Clone)]
pub struct PostFields {
    pub title: String,
    pub summary: String,
    pub content: String,
    pub image_url: Option<String>,
    pub category: String,
    pub author: String,
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub department: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub salary: Option<String>,
    pub description: String,
    pub requirements: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct JobFields {
    pub title: String,
    pub department: String,
    pub location: String,
    pub job_type: String,
    pub salary: Option<String>,
    pub description: String,
    pub requirements: Vec<String>,
}

/// Outcome of removing a job posting
#[derive(Debug, Clone, Serialize)]
pub struct JobDeletion {
    pub job: Job,
    /// Applications that referenced the job and were kept
    pub preserved_applications: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "job_application_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum JobApplicationStatus {
    Pending,
    Reviewed,
    Shortlisted,
    Rejected,
    Hired,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobApplication {
    pub id: Uuid,
    /// Cleared when the referenced job is deleted
    pub job_id: Option<Uuid>,
    pub job_title: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub cover_letter: String,
    pub experience: Option<String>,
    pub linkedin_url: Option<String>,
    pub portfolio_url: Option<String>,
    pub cv_url: String,
    pub status: JobApplicationStatus,
    pub created_at: DateTime<Utc>,
}

/// Intake shape; the stored job title is read from the job when inserting
#[derive(Debug, Clone)]
pub struct NewJobApplication {
    pub job_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub cover_letter: String,
    pub experience: Option<String>,
    pub linkedin_url: Option<String>,
    pub portfolio_url: Option<String>,
    pub cv_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "general_application_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum GeneralApplicationStatus {
    Pending,
    Reviewed,
    Contacted,
    Archived,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GeneralApplication {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub current_role: Option<String>,
    pub experience: Option<String>,
    pub interested_roles: Option<String>,
    pub availability_date: Option<String>,
    pub linkedin_url: Option<String>,
    pub portfolio_url: Option<String>,
    pub additional_info: Option<String>,
    pub cv_url: String,
    pub status: GeneralApplicationStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewGeneralApplication {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub current_role: Option<String>,
    pub experience: Option<String>,
    pub interested_roles: Option<String>,
    pub availability_date: Option<String>,
    pub linkedin_url: Option<String>,
    pub portfolio_url: Option<String>,
    pub additional_info: Option<String>,
    pub cv_url: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "media_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Image,
    Video,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GalleryItem {
    pub id: Uuid,
    pub url: String,
    pub alt_text: String,
    pub caption: String,
    pub file_type: MediaKind,
    pub file_size: Option<i64>,
    /// Seconds, videos only
    pub duration: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewGalleryItem {
    pub url: String,
    pub alt_text: String,
    pub caption: String,
    pub file_type: MediaKind,
    pub file_size: Option<i64>,
    pub duration: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notice_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Image,
    Pdf,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notice {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "type")]
    pub notice_type: NoticeKind,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewNotice {
    pub title: String,
    pub notice_type: NoticeKind,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deleted_job_title_appends_marker() {
        assert_eq!(
            deleted_job_title("Product Manager"),
            "Product Manager (Job Deleted)"
        );
    }

    #[test]
    fn statuses_use_lowercase_wire_names() {
        let status: JobApplicationStatus = serde_json::from_str("\"shortlisted\"").unwrap();
        assert_eq!(status, JobApplicationStatus::Shortlisted);
        assert!(serde_json::from_str::<JobApplicationStatus>("\"contacted\"").is_err());
        assert!(serde_json::from_str::<GeneralApplicationStatus>("\"hired\"").is_err());
    }

    #[test]
    fn job_type_serializes_as_type() {
        let now = Utc::now();
        let job = Job {
            id: Uuid::new_v4(),
            title: "Engineer".into(),
            department: "Engineering".into(),
            location: "Remote".into(),
            job_type: "Full-time".into(),
            salary: None,
            description: "Build things".into(),
            requirements: vec!["Rust".into()],
            created_at: now,
            updated_at: now,
        };
        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["type"], "Full-time");
        assert!(value.get("job_type").is_none());
    }
}
