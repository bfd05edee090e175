use async_trait::async_trait;
use thiserror::Error;

pub mod blob;
pub mod local;

pub use blob::BlobUploadStore;
pub use local::LocalUploadStore;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("failed to write upload: {0}")]
    Io(#[from] std::io::Error),

    #[error("blob store request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("blob store rejected upload with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Destination for uploaded files
#[async_trait]
pub trait UploadStore: Send + Sync {
    fn backend_tag(&self) -> &'static str;

    /// Store `bytes` as `folder/filename` and return the public URL
    async fn put(
        &self,
        folder: &str,
        filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, UploadError>;
}
