use serde::Deserialize;
use validator::Validate;

/// Job posting payload for create and update
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct JobRequest {
    #[validate(length(min = 1, max = 200, message = "Title is required (max 200 characters)"))]
    pub title: String,
    #[validate(length(min = 1, message = "Department is required"))]
    pub department: String,
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "Job type is required"))]
    pub job_type: String,
    pub salary: Option<String>,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    /// Ordered requirement lines; blank entries are dropped
    pub requirements: Vec<String>,
}
