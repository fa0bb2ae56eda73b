//! Form validation.
//!
//! Each section validator takes the raw form and returns either the
//! normalized section value or every field error found (all-errors policy,
//! so a form round-trip surfaces the complete picture at once). Cross-field
//! rules (date ordering, the currently-working conditional) run only for
//! entries whose per-field rules all passed.
//!
//! Field paths in errors are dotted and zero-indexed for list sections,
//! e.g. `education.0.end_date`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::document::DocumentCategory;
use crate::education::{EducationEntry, StudyLevel};
use crate::employment::EmploymentEntry;
use crate::forms::{
    AcademicInfoForm, EducationEntryForm, EmploymentEntryForm, EmploymentInfoForm,
    PersonalInfoForm,
};
use crate::profile::{Gender, PersonalInfo};

/// One field-level validation failure, addressed by dotted path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

// ── Shared helpers ───────────────────────────────────────────────────────────

/// Dates arrive as `YYYY-MM-DD` (HTML date inputs).
fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Trim and require non-empty; records `message` on failure.
fn require(raw: &str, field: &str, message: &str, errors: &mut Vec<FieldError>) -> String {
    let value = raw.trim();
    if value.is_empty() {
        errors.push(FieldError::new(field, message));
    }
    value.to_owned()
}

/// Trim, require non-empty, and parse as a date.
fn require_date(
    raw: &str,
    field: &str,
    required_message: &str,
    errors: &mut Vec<FieldError>,
) -> Option<NaiveDate> {
    let value = raw.trim();
    if value.is_empty() {
        errors.push(FieldError::new(field, required_message));
        return None;
    }
    match parse_date(value) {
        Some(date) => Some(date),
        None => {
            errors.push(FieldError::new(field, "Invalid date"));
            None
        }
    }
}

/// Structural email check: non-empty local part, one `@`, dotted domain,
/// no whitespace. Deliverability is the mail system's problem.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

// ── Personal information ─────────────────────────────────────────────────────

/// Validate the personal-information section.
pub fn validate_personal_info(form: &PersonalInfoForm) -> Result<PersonalInfo, Vec<FieldError>> {
    let mut errors = Vec::new();

    let first_name = require(
        &form.first_name,
        "first_name",
        "First name is required",
        &mut errors,
    );
    let last_name = require(
        &form.last_name,
        "last_name",
        "Last name is required",
        &mut errors,
    );

    let gender = match form.gender.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => match Gender::from_form_value(raw) {
            Some(gender) => Some(gender),
            None => {
                errors.push(FieldError::new("gender", "Invalid gender"));
                None
            }
        },
    };

    // No lower or upper bound on the date itself; a future date of birth is
    // currently accepted.
    let date_of_birth = require_date(
        &form.date_of_birth,
        "date_of_birth",
        "Date of birth is required",
        &mut errors,
    );

    let birth_country = require(
        &form.birth_country,
        "birth_country",
        "Birth country is required",
        &mut errors,
    );
    let citizenship = require(
        &form.citizenship,
        "citizenship",
        "Primary citizenship is required",
        &mut errors,
    );
    let country_of_residence = require(
        &form.country_of_residence,
        "country_of_residence",
        "Country of residence is required",
        &mut errors,
    );
    let address_street = require(
        &form.address_street,
        "address_street",
        "Street address is required",
        &mut errors,
    );
    let city = require(&form.city, "city", "City is required", &mut errors);

    let email = form.email.trim().to_owned();
    if !is_valid_email(&email) {
        errors.push(FieldError::new("email", "Invalid email"));
    }

    let phone = form.phone.trim().to_owned();
    if phone.chars().count() < 5 {
        errors.push(FieldError::new("phone", "Phone number is required"));
    }

    match date_of_birth {
        Some(date_of_birth) if errors.is_empty() => Ok(PersonalInfo {
            first_name,
            last_name,
            gender,
            date_of_birth,
            birth_country,
            citizenship,
            country_of_residence,
            address_street,
            city,
            email,
            phone,
        }),
        _ => Err(errors),
    }
}

// ── Academic information ─────────────────────────────────────────────────────

/// Validate the academic-information section.
///
/// An empty entry list is valid — saving it clears the section.
pub fn validate_academic_info(
    form: &AcademicInfoForm,
) -> Result<Vec<EducationEntry>, Vec<FieldError>> {
    let mut errors = Vec::new();
    let entries: Vec<_> = form
        .education
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| validate_education_entry(index, entry, &mut errors))
        .collect();
    if errors.is_empty() { Ok(entries) } else { Err(errors) }
}

fn validate_education_entry(
    index: usize,
    form: &EducationEntryForm,
    errors: &mut Vec<FieldError>,
) -> Option<EducationEntry> {
    let before = errors.len();
    let path = |name: &str| format!("education.{index}.{name}");

    let university_name = require(
        &form.university_name,
        &path("university_name"),
        "University name is required",
        errors,
    );
    let city = require(&form.city, &path("city"), "City is required", errors);
    let country = require(&form.country, &path("country"), "Country is required", errors);

    let level_raw = form.level_of_study.trim();
    let level_of_study = if level_raw.is_empty() {
        errors.push(FieldError::new(
            path("level_of_study"),
            "Level of study is required",
        ));
        None
    } else {
        match StudyLevel::from_form_value(level_raw) {
            Some(level) => Some(level),
            None => {
                errors.push(FieldError::new(
                    path("level_of_study"),
                    "Invalid level of study",
                ));
                None
            }
        }
    };

    let major = require(
        &form.major,
        &path("major"),
        "Degree name or major is required",
        errors,
    );
    let gpa = require(&form.gpa, &path("gpa"), "GPA is required", errors);
    let start_date = require_date(
        &form.start_date,
        &path("start_date"),
        "Start date required",
        errors,
    );
    let end_date = require_date(
        &form.end_date,
        &path("end_date"),
        "End date required",
        errors,
    );
    let honors = form
        .honors
        .as_deref()
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .map(str::to_owned);

    if errors.len() > before {
        return None;
    }
    let (start_date, end_date) = (start_date?, end_date?);
    if end_date <= start_date {
        errors.push(FieldError::new(
            path("end_date"),
            "End date must be after start date",
        ));
        return None;
    }

    Some(EducationEntry {
        university_name,
        city,
        country,
        level_of_study: level_of_study?,
        major,
        gpa,
        start_date,
        end_date,
        honors,
    })
}

// ── Employment information ───────────────────────────────────────────────────

/// Validate the employment-information section.
///
/// An empty entry list is valid — saving it clears the section.
pub fn validate_employment_info(
    form: &EmploymentInfoForm,
) -> Result<Vec<EmploymentEntry>, Vec<FieldError>> {
    let mut errors = Vec::new();
    let entries: Vec<_> = form
        .experience
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| validate_employment_entry(index, entry, &mut errors))
        .collect();
    if errors.is_empty() { Ok(entries) } else { Err(errors) }
}

fn validate_employment_entry(
    index: usize,
    form: &EmploymentEntryForm,
    errors: &mut Vec<FieldError>,
) -> Option<EmploymentEntry> {
    let before = errors.len();
    let path = |name: &str| format!("experience.{index}.{name}");

    let company_name = require(
        &form.company_name,
        &path("company_name"),
        "Company name is required",
        errors,
    );
    let position_title = require(
        &form.position_title,
        &path("position_title"),
        "Position/Job title is required",
        errors,
    );
    let city = require(&form.city, &path("city"), "City is required", errors);
    let country = require(&form.country, &path("country"), "Country is required", errors);
    let start_date = require_date(
        &form.start_date,
        &path("start_date"),
        "Start date is required",
        errors,
    );
    let responsibilities = require(
        &form.responsibilities,
        &path("responsibilities"),
        "Please describe your responsibilities",
        errors,
    );

    let currently_working = form.currently_working.unwrap_or(false);
    let end_raw = form
        .end_date
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty());

    // A submitted end date is discarded while still employed.
    let end_date = if currently_working {
        None
    } else {
        match end_raw {
            Some(raw) => match parse_date(raw) {
                Some(date) => Some(date),
                None => {
                    errors.push(FieldError::new(path("end_date"), "Invalid date"));
                    None
                }
            },
            None => None,
        }
    };

    if errors.len() > before {
        return None;
    }
    let start_date = start_date?;
    if !currently_working {
        match end_date {
            Some(end) if end > start_date => {}
            _ => {
                errors.push(FieldError::new(
                    path("end_date"),
                    "End date must be after start date",
                ));
                return None;
            }
        }
    }

    Some(EmploymentEntry {
        company_name,
        position_title,
        city,
        country,
        start_date,
        end_date,
        currently_working,
        responsibilities,
    })
}

// ── Documents ────────────────────────────────────────────────────────────────

/// Validate a submitted document category against the closed set.
pub fn validate_document_category(raw: &str) -> Result<DocumentCategory, Vec<FieldError>> {
    DocumentCategory::from_form_value(raw.trim())
        .ok_or_else(|| vec![FieldError::new("category", "Invalid document category")])
}
