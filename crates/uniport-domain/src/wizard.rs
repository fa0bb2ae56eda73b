//! Wizard step sequencing.
//!
//! Deliberately weak machine: the only gate on any step is "authenticated".
//! Completion is not persisted; a successful save simply advances to the
//! next step's route, and users may jump to any step directly.

use serde::{Deserialize, Serialize};

/// One step of the profile-creation wizard, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Personal,
    Academic,
    Employment,
    Documents,
    Review,
}

impl WizardStep {
    /// Entry point on first visit to the wizard root.
    pub const fn first() -> Self {
        Self::Personal
    }

    /// The step after this one; `None` once the wizard is complete.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Personal => Some(Self::Academic),
            Self::Academic => Some(Self::Employment),
            Self::Employment => Some(Self::Documents),
            Self::Documents => Some(Self::Review),
            Self::Review => None,
        }
    }

    /// URL path segment under `/profile/create/`.
    pub fn segment(self) -> &'static str {
        match self {
            Self::Personal => "personal-info",
            Self::Academic => "academic-info",
            Self::Employment => "employment-info",
            Self::Documents => "docs",
            Self::Review => "review",
        }
    }

    /// Parse a URL path segment back into a step.
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "personal-info" => Some(Self::Personal),
            "academic-info" => Some(Self::Academic),
            "employment-info" => Some(Self::Employment),
            "docs" => Some(Self::Documents),
            "review" => Some(Self::Review),
            _ => None,
        }
    }

    /// Full route for this step.
    pub fn route(self) -> String {
        format!("/profile/create/{}", self.segment())
    }

    /// Route to redirect to after this step's save succeeds.
    ///
    /// Completing review leaves the wizard for the profile page.
    pub fn route_after_save(self) -> String {
        match self.next() {
            Some(next) => next.route(),
            None => "/profile".to_owned(),
        }
    }
}
