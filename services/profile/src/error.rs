use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};

use uniport_domain::validate::FieldError;

/// Profile service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum ProfileServiceError {
    #[error("unauthenticated")]
    Unauthenticated,
    #[error("validation failed")]
    ValidationFailed(Vec<FieldError>),
    #[error("no file provided")]
    NoFileProvided,
    #[error("document not found")]
    DocumentNotFound,
    #[error("{0}")]
    AuthRejected(String),
    #[error("failed to save")]
    Persistence(anyhow::Error),
    #[error("failed to upload file")]
    StorageUploadFailed(anyhow::Error),
    #[error("failed to delete file")]
    StorageDeleteFailed(anyhow::Error),
    #[error("failed to record uploaded file")]
    MetadataWriteFailed(anyhow::Error),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ProfileServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::ValidationFailed(_) => "VALIDATION_FAILED",
            Self::NoFileProvided => "NO_FILE_PROVIDED",
            Self::DocumentNotFound => "DOCUMENT_NOT_FOUND",
            Self::AuthRejected(_) => "AUTH_REJECTED",
            Self::Persistence(_) => "PERSISTENCE",
            Self::StorageUploadFailed(_) => "STORAGE_UPLOAD_FAILED",
            Self::StorageDeleteFailed(_) => "STORAGE_DELETE_FAILED",
            Self::MetadataWriteFailed(_) => "METADATA_WRITE_FAILED",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for ProfileServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            // Browser clients land on the login form, not a JSON error.
            Self::Unauthenticated => return Redirect::to("/login").into_response(),
            Self::ValidationFailed(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NoFileProvided | Self::AuthRejected(_) => StatusCode::BAD_REQUEST,
            Self::DocumentNotFound => StatusCode::NOT_FOUND,
            Self::StorageUploadFailed(_) | Self::StorageDeleteFailed(_) => StatusCode::BAD_GATEWAY,
            Self::Persistence(_) | Self::MetadataWriteFailed(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        match &self {
            Self::Persistence(e)
            | Self::StorageUploadFailed(e)
            | Self::StorageDeleteFailed(e)
            | Self::MetadataWriteFailed(e)
            | Self::Internal(e) => {
                // Root causes stay in the server log; clients get kind/message only.
                tracing::error!(error = ?e, kind = self.kind(), "infrastructure error");
            }
            _ => {}
        }
        let mut body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        if let Self::ValidationFailed(ref fields) = self {
            body["fields"] = serde_json::json!(fields);
        }
        (status, axum::Json(body)).into_response()
    }
}
