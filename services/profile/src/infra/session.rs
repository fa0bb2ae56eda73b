use uniport_session::identity::Identity;
use uniport_session::token::validate_session_token;

use crate::domain::repository::SessionGuard;
use crate::error::ProfileServiceError;

/// Session guard validating the cookie's JWT locally with the provider's
/// shared signing secret. No network round trip per request.
#[derive(Clone)]
pub struct JwtSessionGuard {
    secret: String,
}

impl JwtSessionGuard {
    pub fn new(secret: &str) -> Self {
        Self {
            secret: secret.to_owned(),
        }
    }
}

impl SessionGuard for JwtSessionGuard {
    async fn resolve(&self, cookie_value: Option<&str>) -> Result<Identity, ProfileServiceError> {
        let raw = cookie_value.ok_or(ProfileServiceError::Unauthenticated)?;
        // Bad signature, expiry and malformed claims all look the same to the
        // caller; the distinction only matters for the session crate's tests.
        validate_session_token(raw, &self.secret)
            .map_err(|_| ProfileServiceError::Unauthenticated)
    }
}
