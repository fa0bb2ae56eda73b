use uniport_domain::forms::PersonalInfoForm;
use uniport_domain::validate::validate_personal_info;

use crate::domain::repository::{ProfileRepository, SessionGuard};
use crate::domain::types::Profile;
use crate::error::ProfileServiceError;

// ── SavePersonalInfo ─────────────────────────────────────────────────────────

pub struct SavePersonalInfoUseCase<G: SessionGuard, R: ProfileRepository> {
    pub guard: G,
    pub profiles: R,
}

impl<G: SessionGuard, R: ProfileRepository> SavePersonalInfoUseCase<G, R> {
    pub async fn execute(
        &self,
        session: Option<&str>,
        form: PersonalInfoForm,
    ) -> Result<(), ProfileServiceError> {
        let identity = self.guard.resolve(session).await?;
        let info =
            validate_personal_info(&form).map_err(ProfileServiceError::ValidationFailed)?;
        self.profiles.upsert(identity.user_id, &info).await
    }
}

// ── GetPersonalInfo ──────────────────────────────────────────────────────────

pub struct GetPersonalInfoUseCase<G: SessionGuard, R: ProfileRepository> {
    pub guard: G,
    pub profiles: R,
}

impl<G: SessionGuard, R: ProfileRepository> GetPersonalInfoUseCase<G, R> {
    /// `None` means the section has not been filled in yet.
    pub async fn execute(
        &self,
        session: Option<&str>,
    ) -> Result<Option<Profile>, ProfileServiceError> {
        let identity = self.guard.resolve(session).await?;
        self.profiles.find(identity.user_id).await
    }
}
