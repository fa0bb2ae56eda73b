//! Raw form payloads, exactly as submitted.
//!
//! Every field defaults so a sparse or empty body still deserializes; the
//! validation layer decides what is actually missing. Nothing here is
//! normalized — keep these types out of persistence code.

use serde::{Deserialize, Serialize};

/// Personal-information form, pre-validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfoForm {
    pub first_name: String,
    pub last_name: String,
    pub gender: Option<String>,
    pub date_of_birth: String,
    pub birth_country: String,
    pub citizenship: String,
    pub country_of_residence: String,
    pub address_street: String,
    pub city: String,
    pub email: String,
    pub phone: String,
}

/// Academic-information form: the full set of education entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AcademicInfoForm {
    pub education: Vec<EducationEntryForm>,
}

/// One education entry, pre-validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntryForm {
    pub university_name: String,
    pub city: String,
    pub country: String,
    pub level_of_study: String,
    pub major: String,
    pub gpa: String,
    pub start_date: String,
    pub end_date: String,
    pub honors: Option<String>,
}

/// Employment-information form: the full set of experience entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmploymentInfoForm {
    pub experience: Vec<EmploymentEntryForm>,
}

/// One employment entry, pre-validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmploymentEntryForm {
    pub company_name: String,
    pub position_title: String,
    pub city: String,
    pub country: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub currently_working: Option<bool>,
    pub responsibilities: String,
}
