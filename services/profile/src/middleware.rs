use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use uniport_session::cookie::SESSION_COOKIE;
use uniport_session::token::validate_session_token;

use crate::state::AppState;

fn has_valid_session(jar: &CookieJar, secret: &str) -> bool {
    jar.get(SESSION_COOKIE)
        .is_some_and(|c| validate_session_token(c.value(), secret).is_ok())
}

/// Gate on the wizard pages: anonymous visitors go to the login page, with
/// the page they wanted carried in `redirectedFrom`.
pub async fn require_session(
    State(state): State<AppState>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    if !has_valid_session(&jar, &state.jwt_secret) {
        let target = format!("/login?redirectedFrom={}", request.uri().path());
        return Redirect::temporary(&target).into_response();
    }
    next.run(request).await
}

/// Signed-in visitors get bounced off the login and signup pages.
pub async fn redirect_authenticated(
    State(state): State<AppState>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    if has_valid_session(&jar, &state.jwt_secret) {
        return Redirect::temporary("/").into_response();
    }
    next.run(request).await
}
