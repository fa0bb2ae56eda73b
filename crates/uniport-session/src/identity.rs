//! Resolved identity and the raw session-cookie extractor.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum_extra::extract::cookie::CookieJar;
use http::request::Parts;
use uuid::Uuid;

use crate::cookie::SESSION_COOKIE;

/// Authenticated account resolved from a validated session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: Uuid,
    pub email: Option<String>,
    /// Session expiration (seconds since UNIX epoch), from the token's `exp`.
    pub session_exp: u64,
}

/// Raw session-cookie value pulled off the request, not yet validated.
///
/// `None` when the cookie is absent. Extraction never rejects; deciding
/// whether an operation needs a session is the session guard's job, so every
/// operation answers "who is this" the same way.
#[derive(Debug, Clone)]
pub struct SessionToken(pub Option<String>);

impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // In Rust 1.82+ precise capturing, `async fn` captures lifetimes differently,
    // causing E0195. Fix: extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let token = CookieJar::from_headers(&parts.headers)
            .get(SESSION_COOKIE)
            .map(|c| c.value().to_owned());

        async move { Ok(Self(token)) }
    }
}
