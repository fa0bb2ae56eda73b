use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use uniport_domain::document::DocumentCategory;
use uniport_domain::validate::FieldError;
use uniport_session::identity::SessionToken;

use crate::domain::types::DocumentRef;
use crate::error::ProfileServiceError;
use crate::state::AppState;
use crate::usecase::document::{
    DeleteDocumentUseCase, ListDocumentsUseCase, UploadDocumentInput, UploadDocumentUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct DocumentResponse {
    pub id: String,
    pub category: DocumentCategory,
    pub file_name: String,
    /// Stored object path; the delete key.
    pub file_path: String,
    pub file_type: String,
    pub file_size: i64,
    pub public_url: String,
    #[serde(serialize_with = "uniport_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<DocumentRef> for DocumentResponse {
    fn from(doc_ref: DocumentRef) -> Self {
        DocumentResponse {
            id: doc_ref.document.id.to_string(),
            category: doc_ref.document.category,
            file_name: doc_ref.document.file_name,
            file_path: doc_ref.document.file_path,
            file_type: doc_ref.document.file_type,
            file_size: doc_ref.document.file_size,
            public_url: doc_ref.public_url,
            created_at: doc_ref.document.created_at,
        }
    }
}

// ── GET /profile/create/docs ─────────────────────────────────────────────────

pub async fn get_documents(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
) -> Result<Json<Vec<DocumentResponse>>, ProfileServiceError> {
    let usecase = ListDocumentsUseCase {
        guard: state.session_guard(),
        documents: state.document_repo(),
        store: state.object_store.clone(),
    };
    let refs = usecase.execute(token.as_deref()).await?;
    Ok(Json(refs.into_iter().map(DocumentResponse::from).collect()))
}

// ── POST /profile/create/docs ────────────────────────────────────────────────

fn malformed_body(_: axum::extract::multipart::MultipartError) -> ProfileServiceError {
    ProfileServiceError::ValidationFailed(vec![FieldError::new("file", "Malformed upload body")])
}

pub async fn upload_document(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<DocumentResponse>), ProfileServiceError> {
    let mut category = String::new();
    let mut declared_size: Option<u64> = None;
    let mut file: Option<(String, String, bytes::Bytes)> = None;

    while let Some(field) = multipart.next_field().await.map_err(malformed_body)? {
        match field.name() {
            Some("category") => category = field.text().await.map_err(malformed_body)?,
            Some("size") => {
                let raw = field.text().await.map_err(malformed_body)?;
                declared_size = Some(raw.parse().map_err(|_| {
                    ProfileServiceError::ValidationFailed(vec![FieldError::new(
                        "size",
                        "Invalid size",
                    )])
                })?);
            }
            Some("file") => {
                let original_name = field
                    .file_name()
                    .unwrap_or("upload.bin")
                    .to_owned();
                let media_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_owned();
                let bytes = field.bytes().await.map_err(malformed_body)?;
                file = Some((original_name, media_type, bytes));
            }
            _ => {}
        }
    }

    let Some((original_name, media_type, bytes)) = file else {
        return Err(ProfileServiceError::NoFileProvided);
    };
    // clients that do not declare a size get it from the payload
    let byte_size = declared_size.unwrap_or(bytes.len() as u64);

    let usecase = UploadDocumentUseCase {
        guard: state.session_guard(),
        documents: state.document_repo(),
        store: state.object_store.clone(),
    };
    let doc_ref = usecase
        .execute(
            token.as_deref(),
            UploadDocumentInput {
                category,
                original_name,
                media_type,
                byte_size,
                bytes,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(DocumentResponse::from(doc_ref))))
}

// ── DELETE /profile/create/docs ──────────────────────────────────────────────

#[derive(Deserialize)]
pub struct DeleteDocumentRequest {
    pub file_path: String,
}

pub async fn delete_document(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
    Json(body): Json<DeleteDocumentRequest>,
) -> Result<StatusCode, ProfileServiceError> {
    let usecase = DeleteDocumentUseCase {
        guard: state.session_guard(),
        documents: state.document_repo(),
        store: state.object_store.clone(),
    };
    usecase.execute(token.as_deref(), &body.file_path).await?;
    Ok(StatusCode::NO_CONTENT)
}
