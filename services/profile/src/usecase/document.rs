use bytes::Bytes;
use chrono::Utc;
use uuid::Uuid;

use uniport_domain::document::{MAX_UPLOAD_BYTES, object_path};
use uniport_domain::validate::{FieldError, validate_document_category};

use crate::domain::repository::{DocumentRepository, ObjectStorePort, SessionGuard};
use crate::domain::types::{Document, DocumentRef};
use crate::error::ProfileServiceError;

// ── UploadDocument ───────────────────────────────────────────────────────────

pub struct UploadDocumentInput {
    /// Raw category value from the form; validated against the closed set.
    pub category: String,
    pub original_name: String,
    pub media_type: String,
    /// Size the client declared for the payload.
    pub byte_size: u64,
    pub bytes: Bytes,
}

pub struct UploadDocumentUseCase<G: SessionGuard, D: DocumentRepository, S: ObjectStorePort> {
    pub guard: G,
    pub documents: D,
    pub store: S,
}

impl<G: SessionGuard, D: DocumentRepository, S: ObjectStorePort> UploadDocumentUseCase<G, D, S> {
    /// Blob write first, then the metadata row. A failed row insert after a
    /// successful blob write leaves an orphaned blob; that window is accepted.
    pub async fn execute(
        &self,
        session: Option<&str>,
        input: UploadDocumentInput,
    ) -> Result<DocumentRef, ProfileServiceError> {
        let identity = self.guard.resolve(session).await?;

        if input.bytes.is_empty() {
            return Err(ProfileServiceError::NoFileProvided);
        }

        let mut fields = Vec::new();
        if input.byte_size as usize != input.bytes.len() {
            fields.push(FieldError::new(
                "file",
                "Declared file size does not match the uploaded data",
            ));
        }
        if input.bytes.len() > MAX_UPLOAD_BYTES {
            fields.push(FieldError::new("file", "File exceeds the 50 MiB limit"));
        }
        let category = match validate_document_category(&input.category) {
            Ok(category) => Some(category),
            Err(mut errs) => {
                fields.append(&mut errs);
                None
            }
        };
        let category = match category {
            Some(category) if fields.is_empty() => category,
            _ => return Err(ProfileServiceError::ValidationFailed(fields)),
        };

        let path = object_path(identity.user_id, &input.original_name, Uuid::now_v7());
        self.store
            .put(&path, input.bytes.clone(), &input.media_type)
            .await?;

        let document = Document {
            id: Uuid::now_v7(),
            user_id: identity.user_id,
            category,
            file_name: input.original_name,
            file_path: path,
            file_type: input.media_type,
            file_size: input.bytes.len() as i64,
            created_at: Utc::now(),
        };
        self.documents.insert(&document).await?;

        let public_url = self.store.public_url(&document.file_path);
        Ok(DocumentRef {
            document,
            public_url,
        })
    }
}

// ── ListDocuments ────────────────────────────────────────────────────────────

pub struct ListDocumentsUseCase<G: SessionGuard, D: DocumentRepository, S: ObjectStorePort> {
    pub guard: G,
    pub documents: D,
    pub store: S,
}

impl<G: SessionGuard, D: DocumentRepository, S: ObjectStorePort> ListDocumentsUseCase<G, D, S> {
    /// Newest first. A display surface degrades to "no documents" on read
    /// failure rather than failing the page.
    pub async fn execute(
        &self,
        session: Option<&str>,
    ) -> Result<Vec<DocumentRef>, ProfileServiceError> {
        let identity = self.guard.resolve(session).await?;
        let documents = match self.documents.list(identity.user_id).await {
            Ok(documents) => documents,
            Err(e) => {
                tracing::warn!(error = %e, "document list degraded to empty");
                Vec::new()
            }
        };
        Ok(documents
            .into_iter()
            .map(|document| {
                let public_url = self.store.public_url(&document.file_path);
                DocumentRef {
                    document,
                    public_url,
                }
            })
            .collect())
    }
}

// ── DeleteDocument ───────────────────────────────────────────────────────────

pub struct DeleteDocumentUseCase<G: SessionGuard, D: DocumentRepository, S: ObjectStorePort> {
    pub guard: G,
    pub documents: D,
    pub store: S,
}

impl<G: SessionGuard, D: DocumentRepository, S: ObjectStorePort> DeleteDocumentUseCase<G, D, S> {
    /// Keyed on the exact stored path. The metadata row goes first, so a
    /// failed blob delete leaves an orphaned blob but never a listed
    /// document; the caller still sees `StorageDeleteFailed` for it.
    pub async fn execute(
        &self,
        session: Option<&str>,
        file_path: &str,
    ) -> Result<(), ProfileServiceError> {
        let identity = self.guard.resolve(session).await?;
        let document = self
            .documents
            .find_by_path(identity.user_id, file_path)
            .await?
            .ok_or(ProfileServiceError::DocumentNotFound)?;

        let deleted = self
            .documents
            .delete_by_path(identity.user_id, file_path)
            .await?;
        if !deleted {
            // row vanished between find and delete
            return Err(ProfileServiceError::DocumentNotFound);
        }
        self.store.delete(&[document.file_path]).await
    }
}
