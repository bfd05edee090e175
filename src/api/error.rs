use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;
use tracing::{error, warn};

use crate::api::validation::ErrorResponse;
use crate::db::StoreError;
use crate::storage::UploadError;

/// Errors surfaced by request handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("storage failure: {0}")]
    Store(StoreError),

    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("admin session required")]
    Unauthorized,

    #[error("upload failed: {0}")]
    Upload(#[from] UploadError),
}

impl ApiError {
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        ApiError::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict(msg) => ApiError::Conflict(msg),
            other => ApiError::Store(other),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Store(_) | ApiError::Upload(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials | ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::Store(e) => {
                error!("Storage error: {}", e);
                ErrorResponse::message("Failed to process request", "Storage error occurred")
            }
            ApiError::Upload(e) => {
                error!("Upload error: {}", e);
                ErrorResponse::message("Upload failed", "Could not store the file")
            }
            ApiError::NotFound { resource, id } => {
                warn!("{} not found: {}", resource, id);
                ErrorResponse::message("Not found", format!("{} with id {} not found", resource, id))
            }
            ApiError::Conflict(msg) => {
                warn!("Conflict: {}", msg);
                ErrorResponse::message("Conflict", msg.clone())
            }
            ApiError::BadRequest(msg) => {
                warn!("Bad request: {}", msg);
                ErrorResponse::message("Bad request", msg.clone())
            }
            ApiError::InvalidCredentials => {
                ErrorResponse::message("Invalid credentials", "Username or password is incorrect")
            }
            ApiError::Unauthorized => {
                ErrorResponse::message("Unauthorized", "Admin login required")
            }
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
