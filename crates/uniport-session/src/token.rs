//! Session-token validation.

use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::Deserialize;
#[cfg(any(feature = "MINT_FOR_TESTS", test))]
use serde::Serialize;
use uuid::Uuid;

use crate::identity::Identity;

/// Errors returned by [`validate_session_token`].
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("session expired")]
    Expired,
    #[error("malformed session token")]
    Malformed,
}

/// JWT claims carried by the identity provider's access token.
///
/// # Fields
///
/// | Field | JWT claim | Rust type | Meaning |
/// |-------|-----------|-----------|---------|
/// | `sub` | `sub` | UUID string | account ID |
/// | `email` | `email` | optional string | account email, when the provider includes it |
/// | `exp` | `exp` | seconds since epoch | session expiration |
///
/// Providers attach further claims (`aud`, `role`, …); unknown fields are
/// ignored during validation.
///
/// # Feature gate
///
/// [`Deserialize`] is always available — every service validates sessions.
/// [`Serialize`] requires the **`MINT_FOR_TESTS`** cargo feature. Only the
/// test-support crate enables it, because real tokens are issued by the
/// identity provider, never by this workspace.
#[derive(Debug, Deserialize)]
#[cfg_attr(any(feature = "MINT_FOR_TESTS", test), derive(Serialize))]
pub struct SessionClaims {
    /// Account ID (UUID string).
    pub sub: String,
    /// Account email, if the provider put one in the token.
    #[serde(default)]
    pub email: Option<String>,
    /// Expiration timestamp (seconds since UNIX epoch).
    pub exp: u64,
}

// ── Core decode (private) ────────────────────────────────────────────────

/// Decode and validate a session JWT, returning raw claims.
///
/// Validation: HS256, exp checked, required claims: `exp` + `sub`.
/// Default leeway = 60s — tolerates clock skew against the provider.
fn decode_jwt(token: &str, secret: &str) -> Result<SessionClaims, SessionError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => SessionError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature
        | jsonwebtoken::errors::ErrorKind::InvalidEcdsaKey
        | jsonwebtoken::errors::ErrorKind::InvalidRsaKey(_) => SessionError::InvalidSignature,
        _ => SessionError::Malformed,
    })?;

    Ok(data.claims)
}

// ── Public API ───────────────────────────────────────────────────────────

/// Validate a session-cookie value, returning the resolved identity.
///
/// Every wizard operation calls this (through the session guard) before
/// touching any data, so validation happens locally with the provider's
/// shared secret instead of a network round-trip per request.
pub fn validate_session_token(cookie_value: &str, secret: &str) -> Result<Identity, SessionError> {
    let claims = decode_jwt(cookie_value, secret)?;
    let user_id = claims
        .sub
        .parse::<Uuid>()
        .map_err(|_| SessionError::Malformed)?;
    Ok(Identity {
        user_id,
        email: claims.email,
        session_exp: claims.exp,
    })
}
