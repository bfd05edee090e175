use actix_multipart::{Field, Multipart};
use actix_web::{
    HttpResponse, post,
    web::{Data, ServiceConfig},
};
use chrono::Utc;
use futures_util::StreamExt;
use serde::Serialize;
use tracing::{info, warn};

use super::policy;
use crate::api::auth::AdminSession;
use crate::api::error::ApiError;
use crate::storage::UploadStore;

/// Longest accepted value for the `type` form field
const MAX_FOLDER_FIELD_BYTES: usize = 256;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub url: String,
    pub filename: String,
    pub size: usize,
    pub content_type: String,
}

struct IncomingFile {
    name: String,
    content_type: String,
    bytes: Vec<u8>,
}

fn malformed(err: impl std::fmt::Display) -> ApiError {
    ApiError::BadRequest(format!("Malformed multipart body: {}", err))
}

/// Buffer the file part, failing as soon as it crosses its size ceiling
async fn read_file(field: &mut Field) -> Result<IncomingFile, ApiError> {
    let content_type = field
        .content_type()
        .map(|mime| mime.essence_str().to_string())
        .unwrap_or_else(|| "application/octet-stream".to_string());
    let name = field
        .content_disposition()
        .and_then(|cd| cd.get_filename())
        .unwrap_or("upload")
        .to_string();

    let limit = policy::size_limit(&content_type);
    let mut bytes = Vec::new();
    while let Some(chunk) = field.next().await {
        let chunk = chunk.map_err(malformed)?;
        if bytes.len() + chunk.len() > limit {
            warn!("Rejected upload {}: larger than {} bytes", name, limit);
            return Err(ApiError::BadRequest(format!(
                "File too large. Maximum size: {}MB",
                limit / (1024 * 1024)
            )));
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(IncomingFile {
        name,
        content_type,
        bytes,
    })
}

async fn read_text(field: &mut Field) -> Result<String, ApiError> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field.next().await {
        let chunk = chunk.map_err(malformed)?;
        if bytes.len() + chunk.len() > MAX_FOLDER_FIELD_BYTES {
            return Err(ApiError::BadRequest("Upload type is too long".to_string()));
        }
        bytes.extend_from_slice(&chunk);
    }
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Read the form, apply the upload policy, then hand the bytes to the store
async fn store_upload(
    mut payload: Multipart,
    uploads: &dyn UploadStore,
) -> Result<UploadResponse, ApiError> {
    let mut file = None;
    let mut folder = None;

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(malformed)?;
        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some("file") => file = Some(read_file(&mut field).await?),
            Some("type") => folder = Some(read_text(&mut field).await?),
            _ => {
                // Drain parts we do not use
                while let Some(chunk) = field.next().await {
                    chunk.map_err(malformed)?;
                }
            }
        }
    }

    let file = file.ok_or_else(|| ApiError::BadRequest("No file provided".to_string()))?;
    let folder = policy::sanitize_folder(folder.as_deref().unwrap_or(policy::DEFAULT_FOLDER));

    info!(
        "File upload attempt: name={} type={} size={} folder={}",
        file.name,
        file.content_type,
        file.bytes.len(),
        folder
    );

    if folder == policy::CV_FOLDER && !policy::is_allowed_cv(&file.content_type, &file.name) {
        return Err(ApiError::BadRequest(
            "Invalid file type for CV. Please upload PDF, DOC, or DOCX files only.".to_string(),
        ));
    }

    let filename = policy::unique_filename(&folder, &file.name, Utc::now().timestamp_millis());
    let size = file.bytes.len();
    let url = uploads
        .put(&folder, &filename, &file.content_type, file.bytes)
        .await?;

    info!("File uploaded successfully: url={} via {}", url, uploads.backend_tag());
    Ok(UploadResponse {
        success: true,
        url,
        filename,
        size,
        content_type: file.content_type,
    })
}

/// Dashboard uploads (gallery media, notice attachments, post images)
#[post("/upload")]
async fn admin_upload(
    _admin: AdminSession,
    uploads: Data<dyn UploadStore>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let response = store_upload(payload, uploads.get_ref()).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Public uploads made by the application forms (CVs)
#[post("/upload-blob")]
async fn public_upload(
    uploads: Data<dyn UploadStore>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let response = store_upload(payload, uploads.get_ref()).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// `/api/upload-blob`
pub fn public_upload_config(config: &mut ServiceConfig) {
    config.service(public_upload);
}

/// `/api/admin/upload`
pub fn admin_upload_config(config: &mut ServiceConfig) {
    config.service(admin_upload);
}
