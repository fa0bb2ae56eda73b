use uniport_domain::education::EducationEntry;
use uniport_domain::employment::EmploymentEntry;

use crate::domain::repository::{
    DocumentRepository, EducationRepository, EmploymentRepository, ObjectStorePort,
    ProfileRepository, SessionGuard,
};
use crate::domain::types::{DocumentRef, Profile};
use crate::error::ProfileServiceError;

/// Everything the final wizard step shows, in one shape.
pub struct ReviewData {
    pub profile: Option<Profile>,
    pub education: Vec<EducationEntry>,
    pub employment: Vec<EmploymentEntry>,
    pub documents: Vec<DocumentRef>,
}

pub struct GetReviewUseCase<G, P, Ed, Em, D, S>
where
    G: SessionGuard,
    P: ProfileRepository,
    Ed: EducationRepository,
    Em: EmploymentRepository,
    D: DocumentRepository,
    S: ObjectStorePort,
{
    pub guard: G,
    pub profiles: P,
    pub education: Ed,
    pub employment: Em,
    pub documents: D,
    pub store: S,
}

impl<G, P, Ed, Em, D, S> GetReviewUseCase<G, P, Ed, Em, D, S>
where
    G: SessionGuard,
    P: ProfileRepository,
    Ed: EducationRepository,
    Em: EmploymentRepository,
    D: DocumentRepository,
    S: ObjectStorePort,
{
    /// Sections the user skipped come back empty, not as errors. The
    /// document read is lenient for the same reason the list page is.
    pub async fn execute(&self, session: Option<&str>) -> Result<ReviewData, ProfileServiceError> {
        let identity = self.guard.resolve(session).await?;

        let profile = self.profiles.find(identity.user_id).await?;
        let education = self.education.list(identity.user_id).await?;
        let employment = self.employment.list(identity.user_id).await?;
        let documents = match self.documents.list(identity.user_id).await {
            Ok(documents) => documents,
            Err(e) => {
                tracing::warn!(error = %e, "review document read degraded to empty");
                Vec::new()
            }
        };
        let documents = documents
            .into_iter()
            .map(|document| {
                let public_url = self.store.public_url(&document.file_path);
                DocumentRef {
                    document,
                    public_url,
                }
            })
            .collect();

        Ok(ReviewData {
            profile,
            education,
            employment,
            documents,
        })
    }
}
