//! Employment-information section types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One validated employment entry.
///
/// Invariants, enforced at validation:
/// - `currently_working == true` forces `end_date` to `None`, whatever the
///   form submitted.
/// - otherwise `end_date` is present and strictly after `start_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentEntry {
    pub company_name: String,
    pub position_title: String,
    pub city: String,
    pub country: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub currently_working: bool,
    pub responsibilities: String,
}
