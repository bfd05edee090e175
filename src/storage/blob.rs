use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error};

use super::{UploadError, UploadStore};

/// Hosted blob store reached over its HTTP API.
///
/// Files are PUT to `{api_url}/{pathname}` with a bearer token; the store
/// answers with JSON carrying the public URL of the stored object.
pub struct BlobUploadStore {
    client: Client,
    api_url: String,
    token: String,
}

#[derive(Deserialize)]
struct BlobPutResponse {
    url: String,
}

impl BlobUploadStore {
    pub fn new(api_url: &str, token: &str) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }
}

#[async_trait]
impl UploadStore for BlobUploadStore {
    fn backend_tag(&self) -> &'static str {
        "blob"
    }

    async fn put(
        &self,
        _folder: &str,
        filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, UploadError> {
        // The filename already carries the folder as a prefix
        let endpoint = format!("{}/{}", self.api_url, filename);
        debug!("Uploading {} bytes to blob store as {}", bytes.len(), filename);

        let response = self
            .client
            .put(&endpoint)
            .bearer_auth(&self.token)
            .header(CONTENT_TYPE, content_type)
            .header("x-content-type", content_type)
            .header("x-add-random-suffix", "0")
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Blob store rejected {}: {} {}", filename, status, body);
            return Err(UploadError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let stored: BlobPutResponse = response.json().await?;
        Ok(stored.url)
    }
}
