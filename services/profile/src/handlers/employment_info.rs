use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Redirect},
};
use serde::Serialize;

use uniport_domain::employment::EmploymentEntry;
use uniport_domain::forms::EmploymentInfoForm;
use uniport_domain::wizard::WizardStep;
use uniport_session::identity::SessionToken;

use crate::error::ProfileServiceError;
use crate::state::AppState;
use crate::usecase::employment_info::{GetEmploymentInfoUseCase, SaveEmploymentInfoUseCase};

// ── GET /profile/create/employment-info ──────────────────────────────────────

#[derive(Serialize)]
pub struct EmploymentInfoResponse {
    pub experience: Vec<EmploymentEntry>,
}

pub async fn get_employment_info(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
) -> Result<Json<EmploymentInfoResponse>, ProfileServiceError> {
    let usecase = GetEmploymentInfoUseCase {
        guard: state.session_guard(),
        employment: state.employment_repo(),
    };
    let experience = usecase.execute(token.as_deref()).await?;
    Ok(Json(EmploymentInfoResponse { experience }))
}

// ── POST /profile/create/employment-info ─────────────────────────────────────

pub async fn save_employment_info(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
    Json(form): Json<EmploymentInfoForm>,
) -> Result<impl IntoResponse, ProfileServiceError> {
    let usecase = SaveEmploymentInfoUseCase {
        guard: state.session_guard(),
        employment: state.employment_repo(),
    };
    usecase.execute(token.as_deref(), form).await?;
    Ok(Redirect::to(&WizardStep::Employment.route_after_save()))
}
