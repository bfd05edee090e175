use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::db::models::{Post, PostFields};
use crate::db::ContentStore;

use super::models::PostRequest;

/// URL slug for a post title: lowercase, every run of characters outside
/// `[a-z0-9]` collapsed to one hyphen, no hyphen at either end.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Post management: slug derivation on top of the content store
pub struct PostService {
    store: Arc<dyn ContentStore>,
}

impl PostService {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    /// Newest first; `limit` must be positive when given
    pub async fn list(&self, limit: Option<i64>) -> Result<Vec<Post>, ApiError> {
        if limit.is_some_and(|n| n < 1) {
            return Err(ApiError::BadRequest("Limit must be at least 1".to_string()));
        }
        Ok(self.store.list_posts(limit).await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<Post, ApiError> {
        self.store
            .get_post(id)
            .await?
            .ok_or_else(|| ApiError::not_found("Post", id))
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Post, ApiError> {
        self.store
            .get_post_by_slug(slug)
            .await?
            .ok_or_else(|| ApiError::not_found("Post", slug))
    }

    pub async fn create(&self, request: &PostRequest) -> Result<Post, ApiError> {
        let fields = Self::fields(request)?;
        let post = self.store.create_post(&fields).await?;
        info!("Service: Post created id={} slug={}", post.id, post.slug);
        Ok(post)
    }

    /// Replace a post's fields; the slug follows the new title
    pub async fn update(&self, id: Uuid, request: &PostRequest) -> Result<Post, ApiError> {
        let fields = Self::fields(request)?;
        let post = self
            .store
            .update_post(id, &fields)
            .await?
            .ok_or_else(|| ApiError::not_found("Post", id))?;
        info!("Service: Post updated id={} slug={}", post.id, post.slug);
        Ok(post)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        if !self.store.delete_post(id).await? {
            return Err(ApiError::not_found("Post", id));
        }
        info!("Service: Post deleted id={}", id);
        Ok(())
    }

    fn fields(request: &PostRequest) -> Result<PostFields, ApiError> {
        let slug = slugify(&request.title);
        if slug.is_empty() {
            return Err(ApiError::BadRequest(
                "Title must contain at least one letter or digit".to_string(),
            ));
        }

        Ok(PostFields {
            title: request.title.trim().to_string(),
            summary: request.summary.clone(),
            content: request.content.clone(),
            image_url: request.image_url.clone().filter(|url| !url.trim().is_empty()),
            category: request.category.clone(),
            author: request.author.clone(),
            slug,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_collapses_punctuation_and_trims_hyphens() {
        assert_eq!(slugify("New Product Launch!!"), "new-product-launch");
        assert_eq!(slugify("  --Hello,   World--  "), "hello-world");
        assert_eq!(slugify("Q3 2024: Results & Outlook"), "q3-2024-results-outlook");
    }

    #[test]
    fn slug_drops_non_ascii_letters() {
        assert_eq!(slugify("Café Opening"), "caf-opening");
        assert_eq!(slugify("!!!"), "");
    }
}
