use bytes::Bytes;
use uuid::Uuid;

use uniport_profile::error::ProfileServiceError;
use uniport_profile::usecase::document::{
    DeleteDocumentUseCase, ListDocumentsUseCase, UploadDocumentInput, UploadDocumentUseCase,
};

use crate::helpers::{MockDocumentRepo, MockObjectStore, guard, token_for};

fn upload_input(name: &str, payload: &[u8]) -> UploadDocumentInput {
    UploadDocumentInput {
        category: "transcript".into(),
        original_name: name.into(),
        media_type: "application/pdf".into(),
        byte_size: payload.len() as u64,
        bytes: Bytes::copy_from_slice(payload),
    }
}

// ── Upload / list ────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_uploaded_document_exactly_once_with_matching_descriptor() {
    let user_id = Uuid::new_v4();
    let token = token_for(user_id);
    let repo = MockDocumentRepo::empty();
    let rows = repo.rows_handle();
    let store = MockObjectStore::working();
    let objects = store.objects_handle();

    let upload = UploadDocumentUseCase {
        guard: guard(),
        documents: repo,
        store,
    };
    let uploaded = upload
        .execute(Some(&token), upload_input("transcript.pdf", b"%PDF-1.7 body"))
        .await
        .unwrap();

    let list = ListDocumentsUseCase {
        guard: guard(),
        documents: MockDocumentRepo { rows },
        store: MockObjectStore {
            objects,
            fail_put: false,
            fail_delete: false,
        },
    };
    let refs = list.execute(Some(&token)).await.unwrap();

    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].document.file_path, uploaded.document.file_path);
    assert_eq!(refs[0].document.file_size, 13);
    assert_eq!(refs[0].document.file_type, "application/pdf");
    assert!(
        refs[0]
            .public_url
            .ends_with(&uploaded.document.file_path)
    );
}

// ── Delete ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_remove_document_from_list_and_store_after_delete() {
    let user_id = Uuid::new_v4();
    let token = token_for(user_id);
    let repo = MockDocumentRepo::empty();
    let rows = repo.rows_handle();
    let store = MockObjectStore::working();
    let objects = store.objects_handle();

    let upload = UploadDocumentUseCase {
        guard: guard(),
        documents: repo,
        store,
    };
    let uploaded = upload
        .execute(Some(&token), upload_input("cv.pdf", b"data"))
        .await
        .unwrap();

    let delete = DeleteDocumentUseCase {
        guard: guard(),
        documents: MockDocumentRepo {
            rows: rows.clone(),
        },
        store: MockObjectStore {
            objects: objects.clone(),
            fail_put: false,
            fail_delete: false,
        },
    };
    delete
        .execute(Some(&token), &uploaded.document.file_path)
        .await
        .unwrap();

    assert!(rows.lock().unwrap().is_empty());
    assert!(objects.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_keep_document_delisted_when_blob_delete_fails() {
    let user_id = Uuid::new_v4();
    let token = token_for(user_id);
    let repo = MockDocumentRepo::empty();
    let rows = repo.rows_handle();

    let upload = UploadDocumentUseCase {
        guard: guard(),
        documents: repo,
        store: MockObjectStore::working(),
    };
    let uploaded = upload
        .execute(Some(&token), upload_input("cv.pdf", b"data"))
        .await
        .unwrap();

    let delete = DeleteDocumentUseCase {
        guard: guard(),
        documents: MockDocumentRepo {
            rows: rows.clone(),
        },
        store: MockObjectStore::failing_delete(),
    };
    let result = delete
        .execute(Some(&token), &uploaded.document.file_path)
        .await;

    assert!(matches!(
        result,
        Err(ProfileServiceError::StorageDeleteFailed(_))
    ));

    // metadata row went first, so the listing stays clean
    let list = ListDocumentsUseCase {
        guard: guard(),
        documents: MockDocumentRepo { rows },
        store: MockObjectStore::working(),
    };
    assert!(list.execute(Some(&token)).await.unwrap().is_empty());
}

// ── Session gating ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_reject_anonymous_upload_without_touching_any_store() {
    let repo = MockDocumentRepo::empty();
    let rows = repo.rows_handle();
    let store = MockObjectStore::working();
    let objects = store.objects_handle();

    let upload = UploadDocumentUseCase {
        guard: guard(),
        documents: repo,
        store,
    };
    let result = upload.execute(None, upload_input("cv.pdf", b"data")).await;

    assert!(matches!(result, Err(ProfileServiceError::Unauthenticated)));
    assert!(rows.lock().unwrap().is_empty());
    assert!(objects.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_reject_anonymous_delete() {
    let delete = DeleteDocumentUseCase {
        guard: guard(),
        documents: MockDocumentRepo::empty(),
        store: MockObjectStore::working(),
    };
    let result = delete.execute(None, "someone/file.pdf").await;

    assert!(matches!(result, Err(ProfileServiceError::Unauthenticated)));
}
