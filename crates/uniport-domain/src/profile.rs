//! Personal-information section types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Self-reported gender.
///
/// Wire format: lowercase string (`male` / `female` / `other`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Parse a form value. Returns `None` for unknown values.
    pub fn from_form_value(v: &str) -> Option<Self> {
        match v {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// Wire value, as stored in the `profiles.gender` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

/// Validated personal information, one per account.
///
/// Produced only by [`crate::validate::validate_personal_info`]; fields are
/// trimmed and the date has already parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub gender: Option<Gender>,
    pub date_of_birth: NaiveDate,
    pub birth_country: String,
    pub citizenship: String,
    pub country_of_residence: String,
    pub address_street: String,
    pub city: String,
    pub email: String,
    pub phone: String,
}
