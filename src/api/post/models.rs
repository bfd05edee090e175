use serde::Deserialize;
use validator::Validate;

/// Payload for creating or replacing a post
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct PostRequest {
    #[validate(length(min = 1, max = 200, message = "Title is required (max 200 characters)"))]
    pub title: String,
    #[validate(length(min = 1, message = "Summary is required"))]
    pub summary: String,
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    #[serde(alias = "image")]
    pub image_url: Option<String>,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct PostListQuery {
    /// Only return the latest N posts
    #[validate(range(min = 1, message = "Limit must be at least 1"))]
    pub limit: Option<i64>,
}
