use axum::{Json, extract::State};
use serde::Serialize;

use uniport_domain::education::EducationEntry;
use uniport_domain::employment::EmploymentEntry;
use uniport_domain::profile::PersonalInfo;
use uniport_session::identity::SessionToken;

use crate::error::ProfileServiceError;
use crate::handlers::documents::DocumentResponse;
use crate::state::AppState;
use crate::usecase::review::GetReviewUseCase;

// ── GET /profile/create/review ───────────────────────────────────────────────

#[derive(Serialize)]
pub struct ReviewResponse {
    pub personal_info: Option<PersonalInfo>,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<EmploymentEntry>,
    pub documents: Vec<DocumentResponse>,
}

pub async fn get_review(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
) -> Result<Json<ReviewResponse>, ProfileServiceError> {
    let usecase = GetReviewUseCase {
        guard: state.session_guard(),
        profiles: state.profile_repo(),
        education: state.education_repo(),
        employment: state.employment_repo(),
        documents: state.document_repo(),
        store: state.object_store.clone(),
    };
    let data = usecase.execute(token.as_deref()).await?;
    Ok(Json(ReviewResponse {
        personal_info: data.profile.map(|p| p.info),
        education: data.education,
        experience: data.employment,
        documents: data
            .documents
            .into_iter()
            .map(DocumentResponse::from)
            .collect(),
    }))
}
