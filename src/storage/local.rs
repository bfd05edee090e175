use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use super::{UploadError, UploadStore};

/// Writes uploads below a directory served by the site as static files
pub struct LocalUploadStore {
    root: PathBuf,
    public_prefix: String,
}

impl LocalUploadStore {
    /// `public_prefix` is the URL path under which `root` is served, e.g. `/uploads`
    pub fn new(root: impl Into<PathBuf>, public_prefix: &str) -> Self {
        Self {
            root: root.into(),
            public_prefix: public_prefix.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl UploadStore for LocalUploadStore {
    fn backend_tag(&self) -> &'static str {
        "local"
    }

    async fn put(
        &self,
        folder: &str,
        filename: &str,
        _content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, UploadError> {
        let dir = self.root.join(folder);
        tokio::fs::create_dir_all(&dir).await?;

        let path = dir.join(filename);
        tokio::fs::write(&path, &bytes).await?;
        debug!("Stored {} bytes at {}", bytes.len(), path.display());

        Ok(format!("{}/{}/{}", self.public_prefix, folder, filename))
    }
}
