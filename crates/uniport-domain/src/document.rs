//! Document section types and object-path derivation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Hard cap on a single uploaded file (50 MiB).
pub const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Extension used when the original filename has no usable one.
const FALLBACK_EXTENSION: &str = "bin";

/// Category of an uploaded document.
///
/// Wire format: snake_case string, e.g. `recommendation_letter`. A closed
/// set; anything else is rejected at the validation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentCategory {
    Transcript,
    Certificate,
    Resume,
    RecommendationLetter,
    PersonalStatement,
    SupportingDocument,
    Miscellaneous,
}

impl DocumentCategory {
    /// Parse a form value. Returns `None` for unknown values.
    pub fn from_form_value(v: &str) -> Option<Self> {
        match v {
            "transcript" => Some(Self::Transcript),
            "certificate" => Some(Self::Certificate),
            "resume" => Some(Self::Resume),
            "recommendation_letter" => Some(Self::RecommendationLetter),
            "personal_statement" => Some(Self::PersonalStatement),
            "supporting_document" => Some(Self::SupportingDocument),
            "miscellaneous" => Some(Self::Miscellaneous),
            _ => None,
        }
    }

    /// Wire value, as stored in the `documents.category` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Transcript => "transcript",
            Self::Certificate => "certificate",
            Self::Resume => "resume",
            Self::RecommendationLetter => "recommendation_letter",
            Self::PersonalStatement => "personal_statement",
            Self::SupportingDocument => "supporting_document",
            Self::Miscellaneous => "miscellaneous",
        }
    }
}

/// Derive the blob path for an upload: `{user_id}/{suffix}.{ext}`.
///
/// The user id prefixes the path so the store's access rules can scope by
/// folder; the caller-supplied suffix (a fresh v7 UUID in production) keeps
/// repeated uploads of the same filename from colliding. The extension is
/// taken from the original name but only when purely alphanumeric —
/// anything else (including path separators smuggled in via the filename)
/// falls back to `bin`, so hostile names can never escape the user's prefix.
pub fn object_path(user_id: Uuid, original_name: &str, suffix: Uuid) -> String {
    format!("{user_id}/{suffix}.{}", extension_of(original_name))
}

fn extension_of(original_name: &str) -> &str {
    match original_name.rsplit_once('.') {
        Some((stem, ext))
            if !stem.is_empty()
                && !ext.is_empty()
                && ext.len() <= 16
                && ext.bytes().all(|b| b.is_ascii_alphanumeric()) =>
        {
            ext
        }
        _ => FALLBACK_EXTENSION,
    }
}
