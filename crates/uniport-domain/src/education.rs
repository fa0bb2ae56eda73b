//! Academic-information section types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Level of a completed or ongoing study program.
///
/// Wire format: lowercase string, e.g. `bachelor`, `phd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudyLevel {
    Bachelor,
    Master,
    Phd,
    Associate,
    Diploma,
    Certificate,
    Other,
}

impl StudyLevel {
    /// Parse a form value. Returns `None` for unknown values.
    pub fn from_form_value(v: &str) -> Option<Self> {
        match v {
            "bachelor" => Some(Self::Bachelor),
            "master" => Some(Self::Master),
            "phd" => Some(Self::Phd),
            "associate" => Some(Self::Associate),
            "diploma" => Some(Self::Diploma),
            "certificate" => Some(Self::Certificate),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// Wire value, as stored in the `academic_info.level_of_study` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bachelor => "bachelor",
            Self::Master => "master",
            Self::Phd => "phd",
            Self::Associate => "associate",
            Self::Diploma => "diploma",
            Self::Certificate => "certificate",
            Self::Other => "other",
        }
    }
}

/// One validated education entry.
///
/// Invariant: `end_date > start_date` (enforced at validation).
/// GPA stays a free-form string; grading scales differ too much across
/// countries to validate numerically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub university_name: String,
    pub city: String,
    pub country: String,
    pub level_of_study: StudyLevel,
    pub major: String,
    pub gpa: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub honors: Option<String>,
}
