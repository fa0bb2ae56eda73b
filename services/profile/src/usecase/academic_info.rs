use uniport_domain::education::EducationEntry;
use uniport_domain::forms::AcademicInfoForm;
use uniport_domain::validate::validate_academic_info;

use crate::domain::repository::{EducationRepository, SessionGuard};
use crate::error::ProfileServiceError;

// ── SaveAcademicInfo ─────────────────────────────────────────────────────────

pub struct SaveAcademicInfoUseCase<G: SessionGuard, R: EducationRepository> {
    pub guard: G,
    pub education: R,
}

impl<G: SessionGuard, R: EducationRepository> SaveAcademicInfoUseCase<G, R> {
    pub async fn execute(
        &self,
        session: Option<&str>,
        form: AcademicInfoForm,
    ) -> Result<(), ProfileServiceError> {
        let identity = self.guard.resolve(session).await?;
        let entries =
            validate_academic_info(&form).map_err(ProfileServiceError::ValidationFailed)?;
        self.education.replace_all(identity.user_id, &entries).await
    }
}

// ── GetAcademicInfo ──────────────────────────────────────────────────────────

pub struct GetAcademicInfoUseCase<G: SessionGuard, R: EducationRepository> {
    pub guard: G,
    pub education: R,
}

impl<G: SessionGuard, R: EducationRepository> GetAcademicInfoUseCase<G, R> {
    pub async fn execute(
        &self,
        session: Option<&str>,
    ) -> Result<Vec<EducationEntry>, ProfileServiceError> {
        let identity = self.guard.resolve(session).await?;
        self.education.list(identity.user_id).await
    }
}
