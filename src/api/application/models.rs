use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::db::models::{GeneralApplicationStatus, JobApplicationStatus};

/// Application for a specific job posting, as submitted by the careers form
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct JobApplicationRequest {
    #[validate(required(message = "Job is required"))]
    pub job_id: Option<Uuid>,
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
    #[validate(length(min = 1, message = "Cover letter is required"))]
    pub cover_letter: String,
    pub experience: Option<String>,
    pub linkedin_url: Option<String>,
    pub portfolio_url: Option<String>,
    #[validate(length(min = 1, message = "CV is required"))]
    pub cv_url: String,
}

/// Open application not tied to a posting
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneralApplicationRequest {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
    pub current_role: Option<String>,
    pub experience: Option<String>,
    pub interested_roles: Option<String>,
    pub availability_date: Option<String>,
    pub linkedin_url: Option<String>,
    pub portfolio_url: Option<String>,
    pub additional_info: Option<String>,
    #[validate(length(min = 1, message = "CV is required"))]
    pub cv_url: String,
}

/// Status change for a job application; unknown statuses fail to deserialize
#[derive(Debug, Deserialize, Validate)]
pub struct JobApplicationStatusUpdate {
    pub status: JobApplicationStatus,
}

#[derive(Debug, Deserialize, Validate)]
pub struct GeneralApplicationStatusUpdate {
    pub status: GeneralApplicationStatus,
}

/// Response for a submitted application
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSubmitted {
    pub success: bool,
    pub message: String,
    pub application_id: Uuid,
}
