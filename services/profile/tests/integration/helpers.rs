use std::sync::{Arc, Mutex};

use bytes::Bytes;
use chrono::Utc;
use uuid::Uuid;

use uniport_domain::education::EducationEntry;
use uniport_domain::employment::EmploymentEntry;
use uniport_domain::forms::{EducationEntryForm, EmploymentEntryForm, PersonalInfoForm};
use uniport_domain::profile::PersonalInfo;
use uniport_profile::domain::repository::{
    DocumentRepository, EducationRepository, EmploymentRepository, ObjectStorePort,
    ProfileRepository,
};
use uniport_profile::domain::types::{Document, Profile};
use uniport_profile::error::ProfileServiceError;
use uniport_profile::infra::session::JwtSessionGuard;
use uniport_testing::session::session_token;

pub const TEST_JWT_SECRET: &str = "profile-service-test-secret";

/// Real guard over the test secret, so every flow goes through actual
/// token validation.
pub fn guard() -> JwtSessionGuard {
    JwtSessionGuard::new(TEST_JWT_SECRET)
}

pub fn token_for(user_id: Uuid) -> String {
    session_token(user_id, TEST_JWT_SECRET)
}

// ── MockProfileRepo ──────────────────────────────────────────────────────────

pub struct MockProfileRepo {
    pub rows: Arc<Mutex<Vec<Profile>>>,
}

impl MockProfileRepo {
    pub fn empty() -> Self {
        Self {
            rows: Arc::new(Mutex::new(vec![])),
        }
    }

    /// Returns a shared handle to the row list for post-execution inspection.
    pub fn rows_handle(&self) -> Arc<Mutex<Vec<Profile>>> {
        Arc::clone(&self.rows)
    }
}

impl ProfileRepository for MockProfileRepo {
    async fn upsert(&self, user_id: Uuid, info: &PersonalInfo) -> Result<(), ProfileServiceError> {
        let mut rows = self.rows.lock().unwrap();
        rows.retain(|p| p.user_id != user_id);
        rows.push(Profile {
            user_id,
            info: info.clone(),
            updated_at: Utc::now(),
        });
        Ok(())
    }

    async fn find(&self, user_id: Uuid) -> Result<Option<Profile>, ProfileServiceError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.user_id == user_id)
            .cloned())
    }
}

// ── MockEducationRepo ────────────────────────────────────────────────────────

pub struct MockEducationRepo {
    pub rows: Arc<Mutex<Vec<(Uuid, EducationEntry)>>>,
}

impl MockEducationRepo {
    pub fn empty() -> Self {
        Self {
            rows: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn rows_handle(&self) -> Arc<Mutex<Vec<(Uuid, EducationEntry)>>> {
        Arc::clone(&self.rows)
    }
}

impl EducationRepository for MockEducationRepo {
    async fn replace_all(
        &self,
        user_id: Uuid,
        entries: &[EducationEntry],
    ) -> Result<(), ProfileServiceError> {
        let mut rows = self.rows.lock().unwrap();
        rows.retain(|(owner, _)| *owner != user_id);
        rows.extend(entries.iter().map(|e| (user_id, e.clone())));
        Ok(())
    }

    async fn list(&self, user_id: Uuid) -> Result<Vec<EducationEntry>, ProfileServiceError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|(owner, _)| *owner == user_id)
            .map(|(_, e)| e.clone())
            .collect())
    }
}

// ── MockEmploymentRepo ───────────────────────────────────────────────────────

pub struct MockEmploymentRepo {
    pub rows: Arc<Mutex<Vec<(Uuid, EmploymentEntry)>>>,
}

impl MockEmploymentRepo {
    pub fn empty() -> Self {
        Self {
            rows: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn rows_handle(&self) -> Arc<Mutex<Vec<(Uuid, EmploymentEntry)>>> {
        Arc::clone(&self.rows)
    }
}

impl EmploymentRepository for MockEmploymentRepo {
    async fn replace_all(
        &self,
        user_id: Uuid,
        entries: &[EmploymentEntry],
    ) -> Result<(), ProfileServiceError> {
        let mut rows = self.rows.lock().unwrap();
        rows.retain(|(owner, _)| *owner != user_id);
        rows.extend(entries.iter().map(|e| (user_id, e.clone())));
        Ok(())
    }

    async fn list(&self, user_id: Uuid) -> Result<Vec<EmploymentEntry>, ProfileServiceError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|(owner, _)| *owner == user_id)
            .map(|(_, e)| e.clone())
            .collect())
    }
}

// ── MockDocumentRepo ─────────────────────────────────────────────────────────

pub struct MockDocumentRepo {
    pub rows: Arc<Mutex<Vec<Document>>>,
}

impl MockDocumentRepo {
    pub fn empty() -> Self {
        Self {
            rows: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn rows_handle(&self) -> Arc<Mutex<Vec<Document>>> {
        Arc::clone(&self.rows)
    }
}

impl DocumentRepository for MockDocumentRepo {
    async fn insert(&self, document: &Document) -> Result<(), ProfileServiceError> {
        self.rows.lock().unwrap().push(document.clone());
        Ok(())
    }

    async fn list(&self, user_id: Uuid) -> Result<Vec<Document>, ProfileServiceError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_by_path(
        &self,
        user_id: Uuid,
        file_path: &str,
    ) -> Result<Option<Document>, ProfileServiceError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.user_id == user_id && d.file_path == file_path)
            .cloned())
    }

    async fn delete_by_path(
        &self,
        user_id: Uuid,
        file_path: &str,
    ) -> Result<bool, ProfileServiceError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|d| !(d.user_id == user_id && d.file_path == file_path));
        Ok(rows.len() < before)
    }
}

// ── MockObjectStore ──────────────────────────────────────────────────────────

pub struct MockObjectStore {
    pub objects: Arc<Mutex<Vec<String>>>,
    pub fail_put: bool,
    pub fail_delete: bool,
}

impl MockObjectStore {
    pub fn working() -> Self {
        Self {
            objects: Arc::new(Mutex::new(vec![])),
            fail_put: false,
            fail_delete: false,
        }
    }

    pub fn failing_delete() -> Self {
        Self {
            fail_delete: true,
            ..Self::working()
        }
    }

    pub fn objects_handle(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.objects)
    }
}

impl ObjectStorePort for MockObjectStore {
    async fn put(
        &self,
        path: &str,
        _bytes: Bytes,
        _content_type: &str,
    ) -> Result<(), ProfileServiceError> {
        if self.fail_put {
            return Err(ProfileServiceError::StorageUploadFailed(anyhow::anyhow!(
                "store rejected the object"
            )));
        }
        self.objects.lock().unwrap().push(path.to_owned());
        Ok(())
    }

    async fn delete(&self, paths: &[String]) -> Result<(), ProfileServiceError> {
        if self.fail_delete {
            return Err(ProfileServiceError::StorageDeleteFailed(anyhow::anyhow!(
                "store timed out"
            )));
        }
        self.objects.lock().unwrap().retain(|p| !paths.contains(p));
        Ok(())
    }

    fn public_url(&self, path: &str) -> String {
        format!("https://store.test/object/public/documents/{path}")
    }
}

// ── Form fixtures ────────────────────────────────────────────────────────────

pub fn valid_personal_form() -> PersonalInfoForm {
    PersonalInfoForm {
        first_name: "Mina".into(),
        last_name: "Park".into(),
        gender: Some("female".into()),
        date_of_birth: "1999-04-12".into(),
        birth_country: "South Korea".into(),
        citizenship: "South Korea".into(),
        country_of_residence: "Germany".into(),
        address_street: "Hauptstrasse 12".into(),
        city: "Berlin".into(),
        email: "mina@example.com".into(),
        phone: "+49 151 1234567".into(),
    }
}

pub fn valid_education_entry() -> EducationEntryForm {
    EducationEntryForm {
        university_name: "Seoul National University".into(),
        city: "Seoul".into(),
        country: "South Korea".into(),
        level_of_study: "bachelor".into(),
        major: "Computer Science".into(),
        gpa: "3.8/4.0".into(),
        start_date: "2018-03-01".into(),
        end_date: "2022-02-25".into(),
        honors: Some("cum laude".into()),
    }
}

pub fn valid_employment_entry() -> EmploymentEntryForm {
    EmploymentEntryForm {
        company_name: "Hanbit Labs".into(),
        position_title: "Backend Engineer".into(),
        city: "Seoul".into(),
        country: "South Korea".into(),
        start_date: "2022-04-01".into(),
        end_date: Some("2024-08-31".into()),
        currently_working: Some(false),
        responsibilities: "Built and operated billing services.".into(),
    }
}
