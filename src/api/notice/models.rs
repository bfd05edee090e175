use serde::Deserialize;
use validator::Validate;

use crate::db::models::{NewNotice, NoticeKind};

#[derive(Debug, Deserialize, Validate)]
pub struct NoticeRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[serde(rename = "type")]
    pub notice_type: NoticeKind,
    #[serde(default)]
    #[validate(length(min = 1, message = "URL is required"))]
    pub url: String,
}

impl From<&NoticeRequest> for NewNotice {
    fn from(request: &NoticeRequest) -> Self {
        NewNotice {
            title: request.title.trim().to_string(),
            notice_type: request.notice_type,
            url: request.url.trim().to_string(),
        }
    }
}
