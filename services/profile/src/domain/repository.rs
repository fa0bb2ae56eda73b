#![allow(async_fn_in_trait)]

use bytes::Bytes;
use uuid::Uuid;

use uniport_domain::education::EducationEntry;
use uniport_domain::employment::EmploymentEntry;
use uniport_domain::profile::PersonalInfo;
use uniport_session::identity::Identity;

use crate::domain::types::{Document, Profile, ProviderSession};
use crate::error::ProfileServiceError;

/// Resolves a raw session cookie value to an identity.
///
/// Every use case calls this first and fails fast with `Unauthenticated`;
/// no handler touches a store before the identity is known.
pub trait SessionGuard: Send + Sync {
    async fn resolve(&self, cookie_value: Option<&str>) -> Result<Identity, ProfileServiceError>;
}

/// Repository for the personal-information section.
pub trait ProfileRepository: Send + Sync {
    /// Insert-or-replace keyed on the account id; sets `updated_at` to now.
    async fn upsert(&self, user_id: Uuid, info: &PersonalInfo) -> Result<(), ProfileServiceError>;

    /// `None` means "no data yet", never an error.
    async fn find(&self, user_id: Uuid) -> Result<Option<Profile>, ProfileServiceError>;
}

/// Repository for the academic-information section.
pub trait EducationRepository: Send + Sync {
    /// Replace the account's whole entry set in one transaction.
    async fn replace_all(
        &self,
        user_id: Uuid,
        entries: &[EducationEntry],
    ) -> Result<(), ProfileServiceError>;

    /// Entries in insertion order.
    async fn list(&self, user_id: Uuid) -> Result<Vec<EducationEntry>, ProfileServiceError>;
}

/// Repository for the employment-information section.
pub trait EmploymentRepository: Send + Sync {
    /// Replace the account's whole entry set in one transaction.
    async fn replace_all(
        &self,
        user_id: Uuid,
        entries: &[EmploymentEntry],
    ) -> Result<(), ProfileServiceError>;

    /// Entries ordered by start date, most recent first.
    async fn list(&self, user_id: Uuid) -> Result<Vec<EmploymentEntry>, ProfileServiceError>;
}

/// Repository for document metadata rows.
pub trait DocumentRepository: Send + Sync {
    async fn insert(&self, document: &Document) -> Result<(), ProfileServiceError>;

    /// Newest first.
    async fn list(&self, user_id: Uuid) -> Result<Vec<Document>, ProfileServiceError>;

    async fn find_by_path(
        &self,
        user_id: Uuid,
        file_path: &str,
    ) -> Result<Option<Document>, ProfileServiceError>;

    /// Delete by exact stored path. Returns `true` if a row was deleted.
    async fn delete_by_path(
        &self,
        user_id: Uuid,
        file_path: &str,
    ) -> Result<bool, ProfileServiceError>;
}

/// Port for the blob side of the document store.
pub trait ObjectStorePort: Send + Sync {
    /// Store a blob at `path`. Fails if an object already exists there;
    /// uploads never silently overwrite.
    async fn put(
        &self,
        path: &str,
        bytes: Bytes,
        content_type: &str,
    ) -> Result<(), ProfileServiceError>;

    async fn delete(&self, paths: &[String]) -> Result<(), ProfileServiceError>;

    /// Public download URL for a stored path. Pure string derivation, no
    /// network round trip.
    fn public_url(&self, path: &str) -> String;
}

/// Port for the external identity provider.
pub trait AuthProviderPort: Send + Sync {
    async fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> Result<ProviderSession, ProfileServiceError>;

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> Result<ProviderSession, ProfileServiceError>;

    /// Revoke the provider session. Best effort; the cookie is cleared
    /// whether or not this succeeds.
    async fn sign_out(&self, access_token: &str) -> Result<(), ProfileServiceError>;
}
