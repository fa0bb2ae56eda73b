use uniport_domain::validate::{FieldError, is_valid_email};

use crate::domain::repository::AuthProviderPort;
use crate::domain::types::ProviderSession;
use crate::error::ProfileServiceError;

pub struct CredentialsInput {
    pub email: String,
    pub password: String,
}

fn validate_login(input: &CredentialsInput) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    if !is_valid_email(&input.email) {
        errors.push(FieldError::new("email", "Invalid email"));
    }
    if input.password.is_empty() {
        errors.push(FieldError::new("password", "Password is required"));
    }
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

// The provider enforces its own minimum as well; checking here keeps the
// rejection on the validation surface instead of `AuthRejected`.
fn validate_signup(input: &CredentialsInput) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    if !is_valid_email(&input.email) {
        errors.push(FieldError::new("email", "Invalid email"));
    }
    if input.password.len() < 6 {
        errors.push(FieldError::new(
            "password",
            "Password must be at least 6 characters",
        ));
    }
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

// ── SignIn ───────────────────────────────────────────────────────────────────

pub struct SignInUseCase<A: AuthProviderPort> {
    pub provider: A,
}

impl<A: AuthProviderPort> SignInUseCase<A> {
    pub async fn execute(
        &self,
        input: CredentialsInput,
    ) -> Result<ProviderSession, ProfileServiceError> {
        validate_login(&input).map_err(ProfileServiceError::ValidationFailed)?;
        self.provider.sign_in(&input.email, &input.password).await
    }
}

// ── SignUp ───────────────────────────────────────────────────────────────────

pub struct SignUpUseCase<A: AuthProviderPort> {
    pub provider: A,
}

impl<A: AuthProviderPort> SignUpUseCase<A> {
    pub async fn execute(
        &self,
        input: CredentialsInput,
    ) -> Result<ProviderSession, ProfileServiceError> {
        validate_signup(&input).map_err(ProfileServiceError::ValidationFailed)?;
        self.provider.sign_up(&input.email, &input.password).await
    }
}

// ── SignOut ──────────────────────────────────────────────────────────────────

pub struct SignOutUseCase<A: AuthProviderPort> {
    pub provider: A,
}

impl<A: AuthProviderPort> SignOutUseCase<A> {
    /// Best-effort. The cookie is cleared by the handler no matter what the
    /// provider says, so a failed revocation only gets logged.
    pub async fn execute(&self, access_token: Option<&str>) {
        let Some(access_token) = access_token else {
            return;
        };
        if let Err(e) = self.provider.sign_out(access_token).await {
            tracing::warn!(error = %e, "provider sign-out failed");
        }
    }
}
