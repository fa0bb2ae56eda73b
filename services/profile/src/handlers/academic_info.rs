use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Redirect},
};
use serde::Serialize;

use uniport_domain::education::EducationEntry;
use uniport_domain::forms::AcademicInfoForm;
use uniport_domain::wizard::WizardStep;
use uniport_session::identity::SessionToken;

use crate::error::ProfileServiceError;
use crate::state::AppState;
use crate::usecase::academic_info::{GetAcademicInfoUseCase, SaveAcademicInfoUseCase};

// ── GET /profile/create/academic-info ────────────────────────────────────────

#[derive(Serialize)]
pub struct AcademicInfoResponse {
    pub education: Vec<EducationEntry>,
}

pub async fn get_academic_info(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
) -> Result<Json<AcademicInfoResponse>, ProfileServiceError> {
    let usecase = GetAcademicInfoUseCase {
        guard: state.session_guard(),
        education: state.education_repo(),
    };
    let education = usecase.execute(token.as_deref()).await?;
    Ok(Json(AcademicInfoResponse { education }))
}

// ── POST /profile/create/academic-info ───────────────────────────────────────

pub async fn save_academic_info(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
    Json(form): Json<AcademicInfoForm>,
) -> Result<impl IntoResponse, ProfileServiceError> {
    let usecase = SaveAcademicInfoUseCase {
        guard: state.session_guard(),
        education: state.education_repo(),
    };
    usecase.execute(token.as_deref(), form).await?;
    Ok(Redirect::to(&WizardStep::Academic.route_after_save()))
}
