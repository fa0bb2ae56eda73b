use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Redirect},
};
use serde::Serialize;

use uniport_domain::forms::PersonalInfoForm;
use uniport_domain::profile::PersonalInfo;
use uniport_domain::wizard::WizardStep;
use uniport_session::identity::SessionToken;

use crate::error::ProfileServiceError;
use crate::state::AppState;
use crate::usecase::personal_info::{GetPersonalInfoUseCase, SavePersonalInfoUseCase};

// ── GET /profile/create/personal-info ────────────────────────────────────────

#[derive(Serialize)]
pub struct PersonalInfoResponse {
    /// `null` until the step has been saved once.
    pub personal_info: Option<PersonalInfo>,
}

pub async fn get_personal_info(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
) -> Result<Json<PersonalInfoResponse>, ProfileServiceError> {
    let usecase = GetPersonalInfoUseCase {
        guard: state.session_guard(),
        profiles: state.profile_repo(),
    };
    let profile = usecase.execute(token.as_deref()).await?;
    Ok(Json(PersonalInfoResponse {
        personal_info: profile.map(|p| p.info),
    }))
}

// ── POST /profile/create/personal-info ───────────────────────────────────────

pub async fn save_personal_info(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
    Json(form): Json<PersonalInfoForm>,
) -> Result<impl IntoResponse, ProfileServiceError> {
    let usecase = SavePersonalInfoUseCase {
        guard: state.session_guard(),
        profiles: state.profile_repo(),
    };
    usecase.execute(token.as_deref(), form).await?;
    Ok(Redirect::to(&WizardStep::Personal.route_after_save()))
}
