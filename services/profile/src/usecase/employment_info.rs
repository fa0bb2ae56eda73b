use uniport_domain::employment::EmploymentEntry;
use uniport_domain::forms::EmploymentInfoForm;
use uniport_domain::validate::validate_employment_info;

use crate::domain::repository::{EmploymentRepository, SessionGuard};
use crate::error::ProfileServiceError;

// ── SaveEmploymentInfo ───────────────────────────────────────────────────────

pub struct SaveEmploymentInfoUseCase<G: SessionGuard, R: EmploymentRepository> {
    pub guard: G,
    pub employment: R,
}

impl<G: SessionGuard, R: EmploymentRepository> SaveEmploymentInfoUseCase<G, R> {
    pub async fn execute(
        &self,
        session: Option<&str>,
        form: EmploymentInfoForm,
    ) -> Result<(), ProfileServiceError> {
        let identity = self.guard.resolve(session).await?;
        let entries =
            validate_employment_info(&form).map_err(ProfileServiceError::ValidationFailed)?;
        self.employment
            .replace_all(identity.user_id, &entries)
            .await
    }
}

// ── GetEmploymentInfo ────────────────────────────────────────────────────────

pub struct GetEmploymentInfoUseCase<G: SessionGuard, R: EmploymentRepository> {
    pub guard: G,
    pub employment: R,
}

impl<G: SessionGuard, R: EmploymentRepository> GetEmploymentInfoUseCase<G, R> {
    pub async fn execute(
        &self,
        session: Option<&str>,
    ) -> Result<Vec<EmploymentEntry>, ProfileServiceError> {
        let identity = self.guard.resolve(session).await?;
        self.employment.list(identity.user_id).await
    }
}
