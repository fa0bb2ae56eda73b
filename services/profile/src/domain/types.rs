use chrono::{DateTime, Utc};
use uuid::Uuid;

use uniport_domain::document::DocumentCategory;
use uniport_domain::profile::PersonalInfo;

/// Stored profile section, one row per account.
#[derive(Debug, Clone)]
pub struct Profile {
    pub user_id: Uuid,
    pub info: PersonalInfo,
    pub updated_at: DateTime<Utc>,
}

/// Stored document metadata. Each row pairs with exactly one blob at
/// `file_path`.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: Uuid,
    pub user_id: Uuid,
    pub category: DocumentCategory,
    pub file_name: String,
    pub file_path: String,
    pub file_type: String,
    pub file_size: i64,
    pub created_at: DateTime<Utc>,
}

/// A document together with its derived public download URL.
#[derive(Debug, Clone)]
pub struct DocumentRef {
    pub document: Document,
    pub public_url: String,
}

/// Session issued by the identity provider on sign-in/sign-up.
#[derive(Debug, Clone)]
pub struct ProviderSession {
    /// Provider-signed JWT; becomes the session cookie value.
    pub access_token: String,
    /// Lifetime in seconds.
    pub expires_in: u64,
}
