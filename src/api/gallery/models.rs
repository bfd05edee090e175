use serde::Deserialize;
use validator::Validate;

use crate::db::models::{MediaKind, NewGalleryItem};

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct GalleryItemRequest {
    #[validate(length(min = 1, message = "URL is required"))]
    pub url: String,
    #[serde(alias = "alt_text")]
    pub alt: String,
    pub caption: String,
    pub file_type: MediaKind,
    #[validate(range(min = 0, message = "File size cannot be negative"))]
    pub file_size: Option<i64>,
    #[validate(range(min = 0, message = "Duration cannot be negative"))]
    pub duration: Option<i32>,
}

impl From<&GalleryItemRequest> for NewGalleryItem {
    fn from(request: &GalleryItemRequest) -> Self {
        NewGalleryItem {
            url: request.url.trim().to_string(),
            alt_text: request.alt.clone(),
            caption: request.caption.clone(),
            file_type: request.file_type,
            file_size: request.file_size,
            // Only videos carry a running time
            duration: match request.file_type {
                MediaKind::Video => request.duration,
                MediaKind::Image => None,
            },
        }
    }
}

/// Alt text and caption edit
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct GalleryTextUpdate {
    #[serde(alias = "alt_text")]
    pub alt: String,
    pub caption: String,
}
