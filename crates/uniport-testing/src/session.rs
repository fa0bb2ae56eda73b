//! Session-token minting for tests.
//!
//! In production the identity provider signs session tokens; tests mint
//! their own with a shared test secret so the guard validates them exactly
//! like real ones.

use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use uniport_session::cookie::SESSION_COOKIE;
use uniport_session::token::SessionClaims;

fn unix_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs()
}

fn mint(user_id: Uuid, email: Option<&str>, exp: u64, secret: &str) -> String {
    let claims = SessionClaims {
        sub: user_id.to_string(),
        email: email.map(str::to_string),
        exp,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

/// Mint a session token valid for one hour.
pub fn session_token(user_id: Uuid, secret: &str) -> String {
    mint(user_id, Some("user@example.com"), unix_now() + 3600, secret)
}

/// Mint a session token that expired an hour ago (past validation leeway).
pub fn expired_session_token(user_id: Uuid, secret: &str) -> String {
    mint(user_id, Some("user@example.com"), unix_now() - 3600, secret)
}

/// Format a `Cookie` header value carrying the given session token.
pub fn session_cookie_header(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}")
}
