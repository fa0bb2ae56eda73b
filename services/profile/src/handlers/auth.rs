use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use uniport_session::cookie::{clear_session_cookie, set_session_cookie};
use uniport_session::identity::SessionToken;

use crate::error::ProfileServiceError;
use crate::state::AppState;
use crate::usecase::auth::{CredentialsInput, SignInUseCase, SignOutUseCase, SignUpUseCase};

#[derive(Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

// ── POST /login ──────────────────────────────────────────────────────────────

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<CredentialsRequest>,
) -> Result<impl IntoResponse, ProfileServiceError> {
    let usecase = SignInUseCase {
        provider: state.auth_provider.clone(),
    };
    let session = usecase
        .execute(CredentialsInput {
            email: body.email,
            password: body.password,
        })
        .await?;

    let jar = set_session_cookie(
        jar,
        session.access_token,
        state.cookie_domain.clone(),
        session.expires_in,
    );
    Ok((jar, Redirect::to("/profile")))
}

// ── POST /signup ─────────────────────────────────────────────────────────────

pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<CredentialsRequest>,
) -> Result<impl IntoResponse, ProfileServiceError> {
    let usecase = SignUpUseCase {
        provider: state.auth_provider.clone(),
    };
    let session = usecase
        .execute(CredentialsInput {
            email: body.email,
            password: body.password,
        })
        .await?;

    // fresh accounts land directly on the wizard
    let jar = set_session_cookie(
        jar,
        session.access_token,
        state.cookie_domain.clone(),
        session.expires_in,
    );
    Ok((jar, Redirect::to("/profile/create")))
}

// ── POST /logout ─────────────────────────────────────────────────────────────

pub async fn logout(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
    jar: CookieJar,
) -> impl IntoResponse {
    let usecase = SignOutUseCase {
        provider: state.auth_provider.clone(),
    };
    usecase.execute(token.as_deref()).await;

    let jar = clear_session_cookie(jar, state.cookie_domain.clone());
    (jar, Redirect::to("/login"))
}
