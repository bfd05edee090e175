use serde::Deserialize;
use validator::Validate;

use crate::db::models::NewContactMessage;

/// Contact form submission; every field is required
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ContactRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

impl From<&ContactRequest> for NewContactMessage {
    fn from(request: &ContactRequest) -> Self {
        NewContactMessage {
            name: request.name.trim().to_string(),
            email: request.email.trim().to_string(),
            subject: request.subject.trim().to_string(),
            message: request.message.clone(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct ReadFlagUpdate {
    pub read: bool,
}
